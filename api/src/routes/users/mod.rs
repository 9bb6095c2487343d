//! User-facing auth endpoints

use std::sync::Arc;

use actix_web::cookie::{time::Duration, Cookie};
use actix_web::HttpResponse;

use mb_core::repositories::UserRepository;
use mb_core::services::auth::{AuthOutcome, AuthService};
use mb_core::services::session::{SessionService, SessionStore};
use mb_core::services::verification::{
    CaptchaGenerator, CodeStore, SmsGateway, VerificationService,
};

pub mod forget_password;
pub mod image_code;
pub mod login;
pub mod logout;
pub mod register;
pub mod sms_code;

/// Shared services handed to every handler
pub struct AppState<U, S, C, G, T>
where
    U: UserRepository,
    S: SmsGateway,
    C: CodeStore,
    G: CaptchaGenerator,
    T: SessionStore,
{
    pub auth: Arc<AuthService<U, S, C, G, T>>,
    pub verification: Arc<VerificationService<S, C, G>>,
}

/// Session cookie for a fresh login or registration
///
/// A ticked "remember me" pins the cookie lifetime to the server-side
/// session TTL; otherwise the cookie lives until the browser closes.
pub(crate) fn session_cookie<T: SessionStore>(
    sessions: &SessionService<T>,
    outcome: &AuthOutcome,
) -> Cookie<'static> {
    let mut builder = Cookie::build(
        sessions.cookie_name().to_owned(),
        outcome.session.id.clone(),
    )
    .path("/")
    .http_only(true)
    .secure(sessions.secure_cookies());

    if outcome.remember {
        builder = builder.max_age(Duration::seconds(sessions.max_age_seconds() as i64));
    }

    builder.finish()
}

pub(crate) fn html_page(body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}
