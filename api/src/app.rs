//! Route table
//!
//! `configure` wires every endpoint against an `AppState` whose concrete
//! service types the caller picks, so integration tests can swap in mock
//! collaborators.

use actix_web::web;

use mb_core::repositories::UserRepository;
use mb_core::services::session::SessionStore;
use mb_core::services::verification::{CaptchaGenerator, CodeStore, SmsGateway};

use crate::routes::{health, users};

pub fn configure<U, S, C, G, T>(cfg: &mut web::ServiceConfig)
where
    U: UserRepository + 'static,
    S: SmsGateway + 'static,
    C: CodeStore + 'static,
    G: CaptchaGenerator + 'static,
    T: SessionStore + 'static,
{
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/register/")
                .route(web::get().to(users::register::register_page))
                .route(web::post().to(users::register::register::<U, S, C, G, T>)),
        )
        .route(
            "/imagecode/",
            web::get().to(users::image_code::image_code::<U, S, C, G, T>),
        )
        .route(
            "/smscode/",
            web::get().to(users::sms_code::sms_code::<U, S, C, G, T>),
        )
        .service(
            web::resource("/login/")
                .route(web::get().to(users::login::login_page))
                .route(web::post().to(users::login::login::<U, S, C, G, T>)),
        )
        .route(
            "/logout/",
            web::get().to(users::logout::logout::<U, S, C, G, T>),
        )
        .service(
            web::resource("/forgetpassword/")
                .route(web::get().to(users::forget_password::forget_password_page))
                .route(web::post().to(users::forget_password::forget_password::<U, S, C, G, T>)),
        );
}
