//! Behavioural tests for registration, login, and password reset

use std::sync::{Arc, Mutex};

use mb_shared::config::SessionConfig;

use crate::domain::entities::verification_code::sms_code_key;
use crate::domain::entities::User;
use crate::errors::{AuthError, DomainError, VerificationError};
use crate::services::auth::password::hash_password;
use crate::services::auth::{AuthService, LoginData, RegisterData, ResetPasswordData};
use crate::services::session::SessionService;
use crate::services::verification::tests::mocks::{MockCaptcha, MockCodeStore, MockSmsGateway};
use crate::services::verification::{VerificationConfig, VerificationService};

use super::mocks::{MockSessionStore, MockUserRepository};

type TestAuthService =
    AuthService<MockUserRepository, MockSmsGateway, MockCodeStore, MockCaptcha, MockSessionStore>;

struct Fixture {
    auth: TestAuthService,
    code_store: Arc<MockCodeStore>,
    users: Arc<Mutex<std::collections::HashMap<String, User>>>,
    sessions: Arc<MockSessionStore>,
}

fn build_auth(repo: MockUserRepository) -> Fixture {
    let users = repo.users.clone();
    let code_store = Arc::new(MockCodeStore::new(false));
    let verification = Arc::new(VerificationService::new(
        Arc::new(MockSmsGateway::new(false)),
        code_store.clone(),
        Arc::new(MockCaptcha::new("AB3D")),
        VerificationConfig::default(),
    ));
    let session_store = Arc::new(MockSessionStore::new());
    let sessions = Arc::new(SessionService::new(
        session_store.clone(),
        SessionConfig::default(),
    ));
    Fixture {
        auth: AuthService::new(Arc::new(repo), verification, sessions),
        code_store,
        users,
        sessions: session_store,
    }
}

/// Plant an SMS code in the store as if it had been issued
async fn plant_sms_code(store: &MockCodeStore, phone: &str, code: &str) {
    use crate::services::verification::CodeStore;
    store
        .store_code(&sms_code_key(phone), code, 300)
        .await
        .unwrap();
}

fn register_data(phone: &str) -> RegisterData {
    RegisterData {
        phone: phone.to_string(),
        password: "abcd1234".to_string(),
        password_confirm: "abcd1234".to_string(),
        sms_code: "123456".to_string(),
    }
}

fn assert_auth_err<T: std::fmt::Debug>(result: Result<T, DomainError>, expected: AuthError) {
    match result {
        Err(DomainError::Auth(e)) => assert_eq!(e, expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

#[tokio::test]
async fn register_happy_path_creates_user_and_session() {
    let fx = build_auth(MockUserRepository::new());
    plant_sms_code(&fx.code_store, "13800138000", "123456").await;

    let outcome = fx.auth.register(register_data("13800138000")).await.unwrap();

    assert_eq!(outcome.user.phone, "13800138000");
    assert!(!outcome.remember);
    assert!(fx.users.lock().unwrap().contains_key("13800138000"));
    assert!(fx
        .sessions
        .sessions
        .lock()
        .unwrap()
        .contains_key(&outcome.session.id));
    // Password is stored hashed, never in the clear
    let stored = fx.users.lock().unwrap()["13800138000"].password_hash.clone();
    assert_ne!(stored, "abcd1234");
}

#[tokio::test]
async fn register_rejects_bad_phone_first() {
    let fx = build_auth(MockUserRepository::new());

    let mut data = register_data("12345678901");
    data.password = "short".to_string(); // also invalid, but phone is checked first
    assert_auth_err(fx.auth.register(data).await, AuthError::InvalidPhoneFormat);
}

#[tokio::test]
async fn register_rejects_bad_password() {
    let fx = build_auth(MockUserRepository::new());

    let mut data = register_data("13800138000");
    data.password = "abc1234".to_string(); // 7 chars
    data.password_confirm = "abc1234".to_string();
    assert_auth_err(fx.auth.register(data).await, AuthError::InvalidPasswordFormat);
}

#[tokio::test]
async fn register_rejects_confirm_mismatch() {
    let fx = build_auth(MockUserRepository::new());

    let mut data = register_data("13800138000");
    data.password_confirm = "abcd12345".to_string();
    assert_auth_err(fx.auth.register(data).await, AuthError::PasswordConfirmMismatch);
}

#[tokio::test]
async fn register_rejects_wrong_sms_code() {
    let fx = build_auth(MockUserRepository::new());
    plant_sms_code(&fx.code_store, "13800138000", "654321").await;

    match fx.auth.register(register_data("13800138000")).await {
        Err(DomainError::Verification(VerificationError::SmsCodeMismatch)) => {}
        other => panic!("expected SmsCodeMismatch, got {:?}", other),
    }
}

#[tokio::test]
async fn register_rejects_missing_sms_code() {
    let fx = build_auth(MockUserRepository::new());

    match fx.auth.register(register_data("13800138000")).await {
        Err(DomainError::Verification(VerificationError::SmsCodeExpired)) => {}
        other => panic!("expected SmsCodeExpired, got {:?}", other),
    }
}

#[tokio::test]
async fn register_rejects_duplicate_phone() {
    let existing = User::new("13800138000", hash_password("abcd1234").unwrap());
    let fx = build_auth(MockUserRepository::new().with_user(existing));
    plant_sms_code(&fx.code_store, "13800138000", "123456").await;

    assert_auth_err(
        fx.auth.register(register_data("13800138000")).await,
        AuthError::UserAlreadyExists,
    );
}

#[tokio::test]
async fn login_happy_path() {
    let existing = User::new("13800138000", hash_password("abcd1234").unwrap());
    let fx = build_auth(MockUserRepository::new().with_user(existing));

    let outcome = fx
        .auth
        .login(LoginData {
            phone: "13800138000".to_string(),
            password: "abcd1234".to_string(),
            remember: true,
        })
        .await
        .unwrap();

    assert!(outcome.remember);
    assert!(fx
        .sessions
        .sessions
        .lock()
        .unwrap()
        .contains_key(&outcome.session.id));
}

#[tokio::test]
async fn login_wrong_password_and_unknown_user_look_identical() {
    let existing = User::new("13800138000", hash_password("abcd1234").unwrap());
    let fx = build_auth(MockUserRepository::new().with_user(existing));

    let wrong_password = fx
        .auth
        .login(LoginData {
            phone: "13800138000".to_string(),
            password: "abcd9999".to_string(),
            remember: false,
        })
        .await;
    assert_auth_err(wrong_password, AuthError::AuthenticationFailed);

    let unknown_user = fx
        .auth
        .login(LoginData {
            phone: "13900139000".to_string(),
            password: "abcd1234".to_string(),
            remember: false,
        })
        .await;
    assert_auth_err(unknown_user, AuthError::AuthenticationFailed);
}

#[tokio::test]
async fn logout_removes_session() {
    let existing = User::new("13800138000", hash_password("abcd1234").unwrap());
    let fx = build_auth(MockUserRepository::new().with_user(existing));

    let outcome = fx
        .auth
        .login(LoginData {
            phone: "13800138000".to_string(),
            password: "abcd1234".to_string(),
            remember: false,
        })
        .await
        .unwrap();

    fx.auth.logout(&outcome.session.id).await.unwrap();
    assert!(fx.sessions.sessions.lock().unwrap().is_empty());

    // Logging out an unknown session id is a no-op
    fx.auth.logout("no-such-session").await.unwrap();
}

#[tokio::test]
async fn reset_password_changes_hash() {
    let existing = User::new("13800138000", hash_password("abcd1234").unwrap());
    let old_hash = existing.password_hash.clone();
    let fx = build_auth(MockUserRepository::new().with_user(existing));
    plant_sms_code(&fx.code_store, "13800138000", "123456").await;

    fx.auth
        .reset_password(ResetPasswordData {
            phone: "13800138000".to_string(),
            password: "newpass99".to_string(),
            password_confirm: "newpass99".to_string(),
            sms_code: "123456".to_string(),
        })
        .await
        .unwrap();

    let new_hash = fx.users.lock().unwrap()["13800138000"].password_hash.clone();
    assert_ne!(old_hash, new_hash);

    // Old password no longer works, new one does
    let old_login = fx
        .auth
        .login(LoginData {
            phone: "13800138000".to_string(),
            password: "abcd1234".to_string(),
            remember: false,
        })
        .await;
    assert_auth_err(old_login, AuthError::AuthenticationFailed);

    assert!(fx
        .auth
        .login(LoginData {
            phone: "13800138000".to_string(),
            password: "newpass99".to_string(),
            remember: false,
        })
        .await
        .is_ok());
}

#[tokio::test]
async fn reset_password_requires_existing_user() {
    let fx = build_auth(MockUserRepository::new());
    plant_sms_code(&fx.code_store, "13800138000", "123456").await;

    let result = fx
        .auth
        .reset_password(ResetPasswordData {
            phone: "13800138000".to_string(),
            password: "newpass99".to_string(),
            password_confirm: "newpass99".to_string(),
            sms_code: "123456".to_string(),
        })
        .await;
    assert_auth_err(result, AuthError::UserNotFound);
}
