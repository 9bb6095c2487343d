//! GET/POST /login/

use actix_web::{web, HttpResponse};
use validator::Validate;

use mb_core::repositories::UserRepository;
use mb_core::services::auth::LoginData;
use mb_core::services::session::SessionStore;
use mb_core::services::verification::{CaptchaGenerator, CodeStore, SmsGateway};
use mb_shared::types::response::CodeResponse;
use mb_shared::utils::validation::mask_phone;

use crate::dto::auth::LoginForm;
use crate::handlers::error::{domain_error_response, field_error_response, missing_param_response};

use super::{html_page, session_cookie, AppState};

const LOGIN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="zh-CN"><head><meta charset="utf-8"><title>登录</title></head>
<body><form method="post" action="/login/">
<input name="mobile" placeholder="手机号">
<input name="password" type="password" placeholder="密码">
<label><input name="remember" type="checkbox">记住我</label>
<button type="submit">登录</button>
<a href="/forgetpassword/">忘记密码</a>
</form></body></html>
"#;

pub async fn login_page() -> HttpResponse {
    html_page(LOGIN_PAGE)
}

pub async fn login<U, S, C, G, T>(
    state: web::Data<AppState<U, S, C, G, T>>,
    form: web::Form<LoginForm>,
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

    log::info!("login attempt for {}", mask_phone(&form.mobile));

    let data = LoginData {
        phone: form.mobile.clone(),
        password: form.password.clone(),
        remember: form.is_remember(),
    };

    match state.auth.login(data).await {
        Ok(outcome) => {
            let cookie = session_cookie(state.auth.sessions(), &outcome);
            HttpResponse::Ok().cookie(cookie).json(CodeResponse::ok())
        }
        Err(error) => domain_error_response(&error),
    }
}
