//! Behavioural tests for the verification flow

use std::sync::Arc;

use crate::domain::entities::verification_code::{image_code_key, sms_code_key};
use crate::errors::{DomainError, VerificationError};
use crate::services::verification::{VerificationConfig, VerificationService};

use super::mocks::{MockCaptcha, MockCodeStore, MockSmsGateway};

type TestService = VerificationService<MockSmsGateway, MockCodeStore, MockCaptcha>;

fn build_service(captcha_text: &str) -> (TestService, Arc<MockSmsGateway>, Arc<MockCodeStore>) {
    let gateway = Arc::new(MockSmsGateway::new(false));
    let store = Arc::new(MockCodeStore::new(false));
    let captcha = Arc::new(MockCaptcha::new(captcha_text));
    let service = VerificationService::new(
        gateway.clone(),
        store.clone(),
        captcha,
        VerificationConfig::default(),
    );
    (service, gateway, store)
}

fn assert_verification_err(result: Result<impl std::fmt::Debug, DomainError>, expected: VerificationError) {
    match result {
        Err(DomainError::Verification(e)) => assert_eq!(e, expected),
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}

#[tokio::test]
async fn issue_image_code_stores_text_and_returns_jpeg() {
    let (service, _, store) = build_service("AB3D");

    let image = service.issue_image_code("token-1").await.unwrap();

    assert_eq!(&image[..2], &[0xFF, 0xD8]);
    assert_eq!(store.get(&image_code_key("token-1")).unwrap(), "AB3D");
}

#[tokio::test]
async fn reissuing_image_code_overwrites_previous() {
    let (service, _, store) = build_service("AB3D");
    service.issue_image_code("token-1").await.unwrap();

    // Same token, new captcha text
    let gateway = Arc::new(MockSmsGateway::new(false));
    let service2 = VerificationService::new(
        gateway,
        store.clone(),
        Arc::new(MockCaptcha::new("XY7Z")),
        VerificationConfig::default(),
    );
    service2.issue_image_code("token-1").await.unwrap();

    assert_eq!(store.get(&image_code_key("token-1")).unwrap(), "XY7Z");
}

#[tokio::test]
async fn issue_sms_code_happy_path() {
    let (service, gateway, store) = build_service("AB3D");
    service.issue_image_code("token-1").await.unwrap();

    let result = service
        .issue_sms_code("token-1", "AB3D", "13800138000")
        .await
        .unwrap();

    assert_eq!(result.expires_in, 300);
    let stored = store.get(&sms_code_key("13800138000")).unwrap();
    assert_eq!(stored.len(), 6);
    assert!(stored.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(gateway.sent_code("13800138000").unwrap(), stored);
}

#[tokio::test]
async fn image_code_comparison_is_case_insensitive() {
    let (service, _, _) = build_service("Ab3d");
    service.issue_image_code("token-1").await.unwrap();

    let result = service.issue_sms_code("token-1", "aB3D", "13800138000").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn missing_image_code_reports_expired() {
    let (service, _, _) = build_service("AB3D");

    let result = service.issue_sms_code("no-such-token", "AB3D", "13800138000").await;
    assert_verification_err(result, VerificationError::ImageCodeExpired);
}

#[tokio::test]
async fn image_code_is_single_use_after_success() {
    let (service, _, store) = build_service("AB3D");
    service.issue_image_code("token-1").await.unwrap();

    service
        .issue_sms_code("token-1", "AB3D", "13800138000")
        .await
        .unwrap();
    assert!(store.get(&image_code_key("token-1")).is_none());

    // Second attempt with the same token fails as expired
    let result = service.issue_sms_code("token-1", "AB3D", "13800138000").await;
    assert_verification_err(result, VerificationError::ImageCodeExpired);
}

#[tokio::test]
async fn failed_comparison_still_consumes_image_code() {
    let (service, _, store) = build_service("AB3D");
    service.issue_image_code("token-1").await.unwrap();

    let result = service.issue_sms_code("token-1", "WRONG", "13800138000").await;
    assert_verification_err(result, VerificationError::ImageCodeMismatch);

    // The stored code was deleted on the failed attempt
    assert!(store.get(&image_code_key("token-1")).is_none());
    let result = service.issue_sms_code("token-1", "AB3D", "13800138000").await;
    assert_verification_err(result, VerificationError::ImageCodeExpired);
}

#[tokio::test]
async fn gateway_failure_surfaces_as_sms_service_failure() {
    let gateway = Arc::new(MockSmsGateway::new(true));
    let store = Arc::new(MockCodeStore::new(false));
    let service = VerificationService::new(
        gateway,
        store,
        Arc::new(MockCaptcha::new("AB3D")),
        VerificationConfig::default(),
    );
    service.issue_image_code("token-1").await.unwrap();

    let result = service.issue_sms_code("token-1", "AB3D", "13800138000").await;
    assert_verification_err(result, VerificationError::SmsServiceFailure);
}

#[tokio::test]
async fn verify_sms_code_exact_match() {
    let (service, _, store) = build_service("AB3D");
    service.issue_image_code("token-1").await.unwrap();
    service
        .issue_sms_code("token-1", "AB3D", "13800138000")
        .await
        .unwrap();

    let code = store.get(&sms_code_key("13800138000")).unwrap();
    assert!(service.verify_sms_code("13800138000", &code).await.is_ok());
}

#[tokio::test]
async fn verify_sms_code_rejects_mismatch() {
    let (service, _, store) = build_service("AB3D");
    service.issue_image_code("token-1").await.unwrap();
    service
        .issue_sms_code("token-1", "AB3D", "13800138000")
        .await
        .unwrap();

    let code = store.get(&sms_code_key("13800138000")).unwrap();
    let wrong = if code == "000000" { "000001" } else { "000000" };
    let result = service.verify_sms_code("13800138000", wrong).await;
    assert_verification_err(result, VerificationError::SmsCodeMismatch);
}

#[tokio::test]
async fn verify_sms_code_absent_reports_expired() {
    let (service, _, _) = build_service("AB3D");

    let result = service.verify_sms_code("13800138000", "123456").await;
    assert_verification_err(result, VerificationError::SmsCodeExpired);
}

#[tokio::test]
async fn sms_code_survives_successful_verification() {
    // SMS codes are left to expire rather than deleted, so a later
    // validation failure in registration can retry the same code.
    let (service, _, store) = build_service("AB3D");
    service.issue_image_code("token-1").await.unwrap();
    service
        .issue_sms_code("token-1", "AB3D", "13800138000")
        .await
        .unwrap();

    let code = store.get(&sms_code_key("13800138000")).unwrap();
    service.verify_sms_code("13800138000", &code).await.unwrap();
    assert!(service.verify_sms_code("13800138000", &code).await.is_ok());
}

#[tokio::test]
async fn store_failure_is_internal_error() {
    let gateway = Arc::new(MockSmsGateway::new(false));
    let store = Arc::new(MockCodeStore::new(true));
    let service = VerificationService::new(
        gateway,
        store,
        Arc::new(MockCaptcha::new("AB3D")),
        VerificationConfig::default(),
    );

    match service.issue_image_code("token-1").await {
        Err(DomainError::Internal { .. }) => {}
        other => panic!("expected internal error, got {:?}", other),
    }
}

#[tokio::test]
async fn captcha_failure_is_generation_error() {
    let gateway = Arc::new(MockSmsGateway::new(false));
    let store = Arc::new(MockCodeStore::new(false));
    let service = VerificationService::new(
        gateway,
        store,
        Arc::new(MockCaptcha::failing()),
        VerificationConfig::default(),
    );

    let result = service.issue_image_code("token-1").await;
    assert_verification_err(result, VerificationError::CaptchaGenerationFailed);
}
