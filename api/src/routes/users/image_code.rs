//! GET /imagecode/?uuid=

use actix_web::{web, HttpResponse};

use mb_core::repositories::UserRepository;
use mb_core::services::session::SessionStore;
use mb_core::services::verification::{CaptchaGenerator, CodeStore, SmsGateway};

use crate::dto::auth::ImageCodeQuery;
use crate::handlers::error::{domain_error_response, missing_param_response};

use super::AppState;

/// Issue an image captcha bound to the client-supplied uuid
///
/// The response body is the raw JPEG; the code text never leaves the
/// server.
pub async fn image_code<U, S, C, G, T>(
    state: web::Data<AppState<U, S, C, G, T>>,
    query: web::Query<ImageCodeQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsGateway + 'static,
    C: CodeStore + 'static,
    G: CaptchaGenerator + 'static,
    T: SessionStore + 'static,
{
    if query.uuid.is_empty() {
        return missing_param_response();
    }

    match state.verification.issue_image_code(&query.uuid).await {
        Ok(jpeg) => HttpResponse::Ok().content_type("image/jpeg").body(jpeg),
        Err(error) => domain_error_response(&error),
    }
}
