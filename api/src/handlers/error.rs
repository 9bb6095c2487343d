//! Domain error to HTTP response mapping
//!
//! Error messages reach the client in Chinese (the site's front-end
//! language); the English half of the bilingual display string goes to
//! the log.

use actix_web::{http::StatusCode, HttpResponse};
use validator::ValidationErrors;

use mb_core::errors::{chinese_message, AuthError, DomainError, VerificationError};
use mb_shared::types::response::{CodeResponse, RetCode};

/// Business code for a domain error
pub fn ret_code_for(error: &DomainError) -> RetCode {
    match error {
        DomainError::Verification(e) => match e {
            VerificationError::ImageCodeExpired | VerificationError::ImageCodeMismatch => {
                RetCode::ImageCodeErr
            }
            VerificationError::SmsCodeExpired
            | VerificationError::SmsCodeMismatch
            | VerificationError::SmsServiceFailure => RetCode::SmsCodeErr,
            VerificationError::CaptchaGenerationFailed => RetCode::InternalErr,
        },
        DomainError::Auth(e) => match e {
            AuthError::InvalidPhoneFormat => RetCode::MobileErr,
            AuthError::InvalidPasswordFormat => RetCode::PwdErr,
            AuthError::PasswordConfirmMismatch => RetCode::CpwdErr,
            AuthError::UserAlreadyExists
            | AuthError::UserNotFound
            | AuthError::AuthenticationFailed => RetCode::UserErr,
            AuthError::SessionExpired => RetCode::SessionErr,
        },
        DomainError::Internal { .. } => RetCode::InternalErr,
    }
}

fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Verification(VerificationError::SmsServiceFailure) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        DomainError::Verification(VerificationError::CaptchaGenerationFailed)
        | DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    }
}

/// Map a domain error to its `{code, errmsg}` response
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    let display = error.to_string();
    let status = status_for(error);

    if status.is_server_error() {
        log::error!("request failed: {}", display);
    } else {
        log::warn!("request rejected: {}", display);
    }

    HttpResponse::build(status).json(CodeResponse::new(
        ret_code_for(error),
        chinese_message(&display),
    ))
}

/// 400 response for a request missing required parameters
pub fn missing_param_response() -> HttpResponse {
    HttpResponse::BadRequest().json(CodeResponse::new(RetCode::MissingParamErr, "缺少必传参数"))
}

/// Map DTO validation errors, checking fields in the order the rules run
pub fn field_error_response(errors: &ValidationErrors) -> HttpResponse {
    let fields = errors.field_errors();
    if fields.contains_key("mobile") {
        return domain_error_response(&AuthError::InvalidPhoneFormat.into());
    }
    if fields.contains_key("password") {
        return domain_error_response(&AuthError::InvalidPasswordFormat.into());
    }
    missing_param_response()
}
