//! GET /logout/

use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};

use mb_core::repositories::UserRepository;
use mb_core::services::session::SessionStore;
use mb_core::services::verification::{CaptchaGenerator, CodeStore, SmsGateway};

use super::AppState;

/// Destroy the current session, drop the cookie, and bounce to the login page
pub async fn logout<U, S, C, G, T>(
    state: web::Data<AppState<U, S, C, G, T>>,
    req: HttpRequest,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsGateway + 'static,
    C: CodeStore + 'static,
    G: CaptchaGenerator + 'static,
    T: SessionStore + 'static,
{
    let cookie_name = state.auth.sessions().cookie_name().to_owned();

    if let Some(cookie) = req.cookie(&cookie_name) {
        if let Err(error) = state.auth.logout(cookie.value()).await {
            // The cookie is dropped either way, so only log
            log::warn!("failed to destroy session: {}", error);
        }
    }

    let mut removal = Cookie::new(cookie_name, "");
    removal.set_path("/");
    removal.make_removal();

    HttpResponse::Found()
        .append_header((header::LOCATION, "/login/"))
        .cookie(removal)
        .finish()
}
