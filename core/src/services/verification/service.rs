//! Main verification service implementation

use std::sync::Arc;

use constant_time_eq::constant_time_eq;
use tracing::{info, warn};

use crate::domain::entities::verification_code::{image_code_key, sms_code_key, SmsCode};
use crate::errors::{DomainError, DomainResult, VerificationError};

use super::config::VerificationConfig;
use super::traits::{CaptchaGenerator, CodeStore, SmsGateway};
use super::types::SmsIssueResult;

/// Verification service for image captchas and SMS codes
///
/// Image codes are bound to a client-supplied uuid and are single-use:
/// the stored text is removed on the first consumption attempt whether or
/// not the comparison succeeds. SMS codes are bound to the phone number
/// and are left to expire after a successful check, so a registration
/// attempt that fails a later validation rule can retry with the same code.
pub struct VerificationService<S, C, G>
where
    S: SmsGateway,
    C: CodeStore,
    G: CaptchaGenerator,
{
    sms_gateway: Arc<S>,
    code_store: Arc<C>,
    captcha: Arc<G>,
    config: VerificationConfig,
}

impl<S, C, G> VerificationService<S, C, G>
where
    S: SmsGateway,
    C: CodeStore,
    G: CaptchaGenerator,
{
    /// Create a new verification service
    pub fn new(
        sms_gateway: Arc<S>,
        code_store: Arc<C>,
        captcha: Arc<G>,
        config: VerificationConfig,
    ) -> Self {
        Self {
            sms_gateway,
            code_store,
            captcha,
            config,
        }
    }

    /// Issue an image captcha bound to the client token
    ///
    /// Generates a captcha, stores its text under `img:<uuid>` with the
    /// configured TTL (replacing any previous code for this token), and
    /// returns the JPEG bytes for the response body.
    pub async fn issue_image_code(&self, uuid: &str) -> DomainResult<Vec<u8>> {
        let (text, image) = self.captcha.generate().map_err(|e| {
            warn!(error = %e, "captcha generation failed");
            DomainError::Verification(VerificationError::CaptchaGenerationFailed)
        })?;

        self.code_store
            .store_code(&image_code_key(uuid), &text, self.config.code_ttl_seconds)
            .await
            .map_err(DomainError::internal)?;

        info!(uuid = uuid, event = "image_code_issued", "issued image captcha");

        Ok(image)
    }

    /// Validate an image code and issue an SMS code on success
    ///
    /// The stored image code is deleted before the comparison, so every
    /// token gets exactly one consumption attempt. Comparison is
    /// case-insensitive. On success a 6-digit code is stored under
    /// `sms:<phone>` and handed to the SMS gateway.
    pub async fn issue_sms_code(
        &self,
        uuid: &str,
        image_code: &str,
        phone: &str,
    ) -> DomainResult<SmsIssueResult> {
        let key = image_code_key(uuid);
        let stored = self
            .code_store
            .get_code(&key)
            .await
            .map_err(DomainError::internal)?
            .ok_or(VerificationError::ImageCodeExpired)?;

        // Single-use: consume the entry no matter how the compare goes.
        if let Err(e) = self.code_store.delete_code(&key).await {
            warn!(uuid = uuid, error = %e, "failed to delete consumed image code");
        }

        if !stored.eq_ignore_ascii_case(image_code) {
            warn!(uuid = uuid, event = "image_code_mismatch", "image captcha mismatch");
            return Err(VerificationError::ImageCodeMismatch.into());
        }

        let sms_code = SmsCode::new(phone);
        self.code_store
            .store_code(
                &sms_code_key(phone),
                &sms_code.code,
                self.config.code_ttl_seconds,
            )
            .await
            .map_err(DomainError::internal)?;

        let message_id = self
            .sms_gateway
            .send_verification_sms(phone, &sms_code.code, self.config.sms_expires_minutes)
            .await
            .map_err(|e| {
                warn!(error = %e, event = "sms_send_failed", "SMS gateway rejected message");
                DomainError::Verification(VerificationError::SmsServiceFailure)
            })?;

        info!(
            event = "sms_code_issued",
            message_id = %message_id,
            "issued SMS verification code"
        );

        Ok(SmsIssueResult {
            message_id,
            expires_in: self.config.code_ttl_seconds,
        })
    }

    /// Check a submitted SMS code against the stored one
    ///
    /// Exact, case-sensitive comparison in constant time. The stored entry
    /// is left in place to run out its TTL.
    pub async fn verify_sms_code(&self, phone: &str, submitted: &str) -> DomainResult<()> {
        let stored = self
            .code_store
            .get_code(&sms_code_key(phone))
            .await
            .map_err(DomainError::internal)?
            .ok_or(VerificationError::SmsCodeExpired)?;

        if stored.len() != submitted.len()
            || !constant_time_eq(stored.as_bytes(), submitted.as_bytes())
        {
            warn!(event = "sms_code_mismatch", "SMS code mismatch");
            return Err(VerificationError::SmsCodeMismatch.into());
        }

        Ok(())
    }
}
