//! GET/POST /forgetpassword/

use actix_web::{web, HttpResponse};
use validator::Validate;

use mb_core::repositories::UserRepository;
use mb_core::services::auth::ResetPasswordData;
use mb_core::services::session::SessionStore;
use mb_core::services::verification::{CaptchaGenerator, CodeStore, SmsGateway};
use mb_shared::types::response::CodeResponse;
use mb_shared::utils::validation::mask_phone;

use crate::dto::auth::RegisterForm;
use crate::handlers::error::{domain_error_response, field_error_response, missing_param_response};

use super::{html_page, AppState};

const FORGET_PASSWORD_PAGE: &str = r#"<!DOCTYPE html>
<html lang="zh-CN"><head><meta charset="utf-8"><title>找回密码</title></head>
<body><form method="post" action="/forgetpassword/">
<input name="mobile" placeholder="手机号">
<img id="image_code" alt="图形验证码">
<input name="sms_code" placeholder="短信验证码">
<input name="password" type="password" placeholder="新密码">
<input name="password2" type="password" placeholder="确认新密码">
<button type="submit">重置密码</button>
</form></body></html>
"#;

pub async fn forget_password_page() -> HttpResponse {
    html_page(FORGET_PASSWORD_PAGE)
}

/// Reset a forgotten password; the form carries the same fields as
/// registration
pub async fn forget_password<U, S, C, G, T>(
    state: web::Data<AppState<U, S, C, G, T>>,
    form: web::Form<RegisterForm>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsGateway + 'static,
    C: CodeStore + 'static,
    G: CaptchaGenerator + 'static,
    T: SessionStore + 'static,
{
    if !form.has_all_fields() {
        return missing_param_response();
    }
    if let Err(errors) = form.validate() {
        return field_error_response(&errors);
    }

    log::info!("password reset attempt for {}", mask_phone(&form.mobile));

    let data = ResetPasswordData {
        phone: form.mobile.clone(),
        password: form.password.clone(),
        password_confirm: form.password2.clone(),
        sms_code: form.sms_code.clone(),
    };

    match state.auth.reset_password(data).await {
        Ok(()) => HttpResponse::Ok().json(CodeResponse::ok()),
        Err(error) => domain_error_response(&error),
    }
}
