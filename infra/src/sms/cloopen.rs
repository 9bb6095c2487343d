//! Cloopen (容联云) template-SMS client
//!
//! Request signing follows the Cloopen REST convention: the `sig` query
//! parameter is the uppercase MD5 of account sid + auth token + timestamp,
//! and the Authorization header is the base64 of `sid:timestamp`.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use mb_core::services::verification::SmsGateway;
use mb_shared::utils::validation::mask_phone;

use crate::InfrastructureError;

/// Status code Cloopen answers on success
const STATUS_OK: &str = "000000";

/// Cloopen gateway configuration
#[derive(Debug, Clone)]
pub struct CloopenConfig {
    /// Account SID from the Cloopen console
    pub account_sid: String,
    /// Auth token paired with the account SID
    pub auth_token: String,
    /// Application id
    pub app_id: String,
    /// Template id for the verification-code message
    pub template_id: String,
    /// API base URL
    pub base_url: String,
    /// Maximum retry attempts for transient failures
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl CloopenConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let account_sid = std::env::var("CLOOPEN_ACCOUNT_SID")
            .map_err(|_| InfrastructureError::Config("CLOOPEN_ACCOUNT_SID not set".to_string()))?;
        let auth_token = std::env::var("CLOOPEN_AUTH_TOKEN")
            .map_err(|_| InfrastructureError::Config("CLOOPEN_AUTH_TOKEN not set".to_string()))?;
        let app_id = std::env::var("CLOOPEN_APP_ID")
            .map_err(|_| InfrastructureError::Config("CLOOPEN_APP_ID not set".to_string()))?;

        Ok(Self {
            account_sid,
            auth_token,
            app_id,
            template_id: std::env::var("CLOOPEN_TEMPLATE_ID").unwrap_or_else(|_| "1".to_string()),
            base_url: std::env::var("CLOOPEN_BASE_URL")
                .unwrap_or_else(|_| "https://app.cloopen.com:8883".to_string()),
            max_retries: std::env::var("CLOOPEN_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            retry_delay_ms: std::env::var("CLOOPEN_RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            request_timeout_secs: std::env::var("CLOOPEN_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }
}

#[derive(Serialize)]
struct TemplateSmsRequest {
    to: String,
    #[serde(rename = "appId")]
    app_id: String,
    #[serde(rename = "templateId")]
    template_id: String,
    datas: Vec<String>,
}

#[derive(Deserialize)]
struct CloopenResponse {
    #[serde(rename = "statusCode")]
    status_code: String,
    #[serde(rename = "statusMsg")]
    status_msg: Option<String>,
    #[serde(rename = "templateSMS")]
    template_sms: Option<TemplateSms>,
}

#[derive(Deserialize)]
struct TemplateSms {
    #[serde(rename = "smsMessageSid")]
    sms_message_sid: String,
}

/// Cloopen SMS gateway client
pub struct CloopenSmsService {
    client: reqwest::Client,
    config: CloopenConfig,
}

impl CloopenSmsService {
    pub fn new(config: CloopenConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(app_id = %config.app_id, "Cloopen SMS service initialized");

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(CloopenConfig::from_env()?)
    }

    fn request_url(&self, timestamp: &str) -> String {
        let sig = sign(&self.config.account_sid, &self.config.auth_token, timestamp);
        format!(
            "{}/2013-12-26/Accounts/{}/SMS/TemplateSMS?sig={}",
            self.config.base_url, self.config.account_sid, sig
        )
    }

    fn auth_header(&self, timestamp: &str) -> String {
        STANDARD.encode(format!("{}:{}", self.config.account_sid, timestamp))
    }

    async fn send_once(&self, body: &TemplateSmsRequest) -> Result<String, InfrastructureError> {
        let timestamp = Local::now().format("%Y%m%d%H%M%S").to_string();

        let response = self
            .client
            .post(self.request_url(&timestamp))
            .header("Accept", "application/json")
            .header("Content-Type", "application/json;charset=utf-8")
            .header("Authorization", self.auth_header(&timestamp))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_server_error() {
            return Err(InfrastructureError::Sms(format!(
                "gateway answered HTTP {}",
                status
            )));
        }

        let parsed: CloopenResponse = response.json().await?;
        if parsed.status_code != STATUS_OK {
            return Err(InfrastructureError::Sms(format!(
                "gateway status {}: {}",
                parsed.status_code,
                parsed.status_msg.unwrap_or_default()
            )));
        }

        parsed
            .template_sms
            .map(|t| t.sms_message_sid)
            .ok_or_else(|| InfrastructureError::Sms("response missing templateSMS".to_string()))
    }

    async fn send_with_retry(
        &self,
        body: &TemplateSmsRequest,
    ) -> Result<String, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;
            debug!(attempt = attempts, "sending template SMS");

            match self.send_once(body).await {
                Ok(message_id) => return Ok(message_id),
                // Business rejections are final; only transport failures retry
                Err(e @ InfrastructureError::Http(_)) if attempts < self.config.max_retries => {
                    warn!(
                        "SMS send failed (attempt {}/{}): {}. Retrying in {:?}",
                        attempts, self.config.max_retries, e, delay
                    );
                    tokio::time::sleep(delay).await;
                    delay = (delay * 2).min(Duration::from_secs(5));
                }
                Err(e) => {
                    error!("SMS send failed after {} attempts: {}", attempts, e);
                    return Err(e);
                }
            }
        }
    }
}

#[async_trait]
impl SmsGateway for CloopenSmsService {
    async fn send_verification_sms(
        &self,
        phone: &str,
        code: &str,
        expires_minutes: u32,
    ) -> Result<String, String> {
        let body = TemplateSmsRequest {
            to: phone.to_string(),
            app_id: self.config.app_id.clone(),
            template_id: self.config.template_id.clone(),
            datas: vec![code.to_string(), expires_minutes.to_string()],
        };

        let message_id = self
            .send_with_retry(&body)
            .await
            .map_err(|e| e.to_string())?;

        info!(
            phone = %mask_phone(phone),
            message_id = %message_id,
            "verification SMS accepted by gateway"
        );

        Ok(message_id)
    }
}

/// Uppercase MD5 over sid + token + timestamp
pub(crate) fn sign(account_sid: &str, auth_token: &str, timestamp: &str) -> String {
    let digest = md5::compute(format!("{}{}{}", account_sid, auth_token, timestamp));
    format!("{:X}", digest)
}
