//! GET/POST /register/

use actix_web::{web, HttpResponse};
use validator::Validate;

use mb_core::repositories::UserRepository;
use mb_core::services::auth::RegisterData;
use mb_core::services::session::SessionStore;
use mb_core::services::verification::{CaptchaGenerator, CodeStore, SmsGateway};
use mb_shared::types::response::CodeResponse;
use mb_shared::utils::validation::mask_phone;

use crate::dto::auth::RegisterForm;
use crate::handlers::error::{domain_error_response, field_error_response, missing_param_response};

use super::{html_page, session_cookie, AppState};

const REGISTER_PAGE: &str = r#"<!DOCTYPE html>
<html lang="zh-CN"><head><meta charset="utf-8"><title>注册</title></head>
<body><form method="post" action="/register/">
<input name="mobile" placeholder="手机号">
<img id="image_code" alt="图形验证码">
<input name="sms_code" placeholder="短信验证码">
<input name="password" type="password" placeholder="密码">
<input name="password2" type="password" placeholder="确认密码">
<button type="submit">注册</button>
</form></body></html>
"#;

pub async fn register_page() -> HttpResponse {
    html_page(REGISTER_PAGE)
}

pub async fn register<U, S, C, G, T>(
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

    log::info!("registration attempt for {}", mask_phone(&form.mobile));

    let data = RegisterData {
        phone: form.mobile.clone(),
        password: form.password.clone(),
        password_confirm: form.password2.clone(),
        sms_code: form.sms_code.clone(),
    };

    match state.auth.register(data).await {
        Ok(outcome) => {
            let cookie = session_cookie(state.auth.sessions(), &outcome);
            HttpResponse::Ok().cookie(cookie).json(CodeResponse::ok())
        }
        Err(error) => domain_error_response(&error),
    }
}
