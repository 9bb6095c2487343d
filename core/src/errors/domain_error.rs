//! Domain-specific error types for authentication and verification
//!
//! Error display strings are bilingual (`English | 中文`) so the
//! presentation layer can pick the side it needs.

use thiserror::Error;

/// Verification-code errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Image code expired | 图形验证码已过期")]
    ImageCodeExpired,

    #[error("Image code mismatch | 图形验证码错误")]
    ImageCodeMismatch,

    #[error("SMS code expired | 短信验证码已过期")]
    SmsCodeExpired,

    #[error("SMS code mismatch | 短信验证码错误")]
    SmsCodeMismatch,

    #[error("SMS service failure | 短信发送失败")]
    SmsServiceFailure,

    #[error("Captcha generation failed | 图形验证码生成失败")]
    CaptchaGenerationFailed,
}

/// Authentication and registration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid phone format | 手机号格式错误")]
    InvalidPhoneFormat,

    #[error("Invalid password format | 密码格式错误，需要8-20位字母或数字")]
    InvalidPasswordFormat,

    #[error("Password confirmation mismatch | 两次输入的密码不一致")]
    PasswordConfirmMismatch,

    #[error("User already exists | 该手机号已注册")]
    UserAlreadyExists,

    #[error("User not found | 用户不存在")]
    UserNotFound,

    #[error("Authentication failed | 手机号或密码错误")]
    AuthenticationFailed,

    #[error("Session expired | 会话已过期，请重新登录")]
    SessionExpired,
}

/// Top-level domain error
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Infrastructure failure surfaced through a service trait
    #[error("Internal error: {message} | 服务器内部错误")]
    Internal { message: String },
}

impl DomainError {
    /// Wrap a collaborator failure message as an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the domain layer
pub type DomainResult<T> = Result<T, DomainError>;

/// Extract the English half of a bilingual error message
pub fn english_message(message: &str) -> &str {
    message.split(" | ").next().unwrap_or(message)
}

/// Extract the Chinese half of a bilingual error message
pub fn chinese_message(message: &str) -> &str {
    message.split(" | ").nth(1).unwrap_or(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bilingual_messages() {
        let message = VerificationError::ImageCodeExpired.to_string();
        assert!(message.contains("Image code expired"));
        assert!(message.contains("图形验证码已过期"));
    }

    #[test]
    fn test_message_extraction() {
        let message = AuthError::InvalidPhoneFormat.to_string();
        assert_eq!(english_message(&message), "Invalid phone format");
        assert_eq!(chinese_message(&message), "手机号格式错误");
    }

    #[test]
    fn test_transparent_wrapping() {
        let err: DomainError = VerificationError::SmsCodeMismatch.into();
        assert!(err.to_string().contains("SMS code mismatch"));

        let err: DomainError = AuthError::UserAlreadyExists.into();
        assert!(err.to_string().contains("already"));
    }

    #[test]
    fn test_internal_error() {
        let err = DomainError::internal("redis connection refused");
        assert!(err.to_string().contains("redis connection refused"));
    }
}
