//! GET /smscode/?image_code=&uuid=&mobile=

use actix_web::{web, HttpResponse};

use mb_core::errors::AuthError;
use mb_core::repositories::UserRepository;
use mb_core::services::session::SessionStore;
use mb_core::services::verification::{CaptchaGenerator, CodeStore, SmsGateway};
use mb_shared::types::response::CodeResponse;
use mb_shared::utils::validation::{is_valid_phone, mask_phone};

use crate::dto::auth::SmsCodeQuery;
use crate::handlers::error::{domain_error_response, missing_param_response};

use super::AppState;

/// Consume an image captcha and issue an SMS verification code
pub async fn sms_code<U, S, C, G, T>(
    state: web::Data<AppState<U, S, C, G, T>>,
    query: web::Query<SmsCodeQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsGateway + 'static,
    C: CodeStore + 'static,
    G: CaptchaGenerator + 'static,
    T: SessionStore + 'static,
{
    if !query.has_all_fields() {
        return missing_param_response();
    }
    if !is_valid_phone(&query.mobile) {
        return domain_error_response(&AuthError::InvalidPhoneFormat.into());
    }

    log::info!("SMS code requested for {}", mask_phone(&query.mobile));

    match state
        .verification
        .issue_sms_code(&query.uuid, &query.image_code, &query.mobile)
        .await
    {
        Ok(_) => HttpResponse::Ok().json(CodeResponse::ok()),
        Err(error) => domain_error_response(&error),
    }
}
