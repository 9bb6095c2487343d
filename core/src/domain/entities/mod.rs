//! Domain entities

pub mod session;
pub mod user;
pub mod verification_code;

pub use session::Session;
pub use user::User;
pub use verification_code::{
    image_code_key, sms_code_key, SmsCode, CODE_TTL_SECONDS, SMS_CODE_LENGTH,
};
