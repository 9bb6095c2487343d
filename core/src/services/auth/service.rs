//! Main authentication service implementation

use std::sync::Arc;

use tracing::{info, warn};

use mb_shared::utils::validation::{is_valid_password, is_valid_phone, mask_phone};

use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::session::{SessionService, SessionStore};
use crate::services::verification::{CaptchaGenerator, CodeStore, SmsGateway, VerificationService};

use super::password::{hash_password, verify_password};
use super::types::{AuthOutcome, LoginData, RegisterData, ResetPasswordData};
use crate::domain::entities::User;

/// Authentication service
///
/// Validation rules run in a fixed order and the first failing rule is the
/// error returned: phone format, password format, confirmation equality,
/// SMS code, then the repository checks.
pub struct AuthService<U, S, C, G, T>
where
    U: UserRepository,
    S: SmsGateway,
    C: CodeStore,
    G: CaptchaGenerator,
    T: SessionStore,
{
    users: Arc<U>,
    verification: Arc<VerificationService<S, C, G>>,
    sessions: Arc<SessionService<T>>,
}

impl<U, S, C, G, T> AuthService<U, S, C, G, T>
where
    U: UserRepository,
    S: SmsGateway,
    C: CodeStore,
    G: CaptchaGenerator,
    T: SessionStore,
{
    pub fn new(
        users: Arc<U>,
        verification: Arc<VerificationService<S, C, G>>,
        sessions: Arc<SessionService<T>>,
    ) -> Self {
        Self {
            users,
            verification,
            sessions,
        }
    }

    /// Register a new user and establish a session
    pub async fn register(&self, data: RegisterData) -> DomainResult<AuthOutcome> {
        if !is_valid_phone(&data.phone) {
            return Err(AuthError::InvalidPhoneFormat.into());
        }
        if !is_valid_password(&data.password) {
            return Err(AuthError::InvalidPasswordFormat.into());
        }
        if data.password != data.password_confirm {
            return Err(AuthError::PasswordConfirmMismatch.into());
        }

        self.verification
            .verify_sms_code(&data.phone, &data.sms_code)
            .await?;

        if self.users.exists_by_phone(&data.phone).await? {
            warn!(
                phone = %mask_phone(&data.phone),
                event = "duplicate_registration",
                "registration rejected, phone already taken"
            );
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = hash_password(&data.password)?;
        let user = self.users.create(User::new(&data.phone, password_hash)).await?;
        let session = self.sessions.create(user.id, &user.phone).await?;

        info!(
            phone = %mask_phone(&user.phone),
            user_id = %user.id,
            event = "user_registered",
            "new user registered"
        );

        Ok(AuthOutcome {
            user,
            session,
            remember: false,
        })
    }

    /// Authenticate a user and establish a session
    ///
    /// An unknown phone and a wrong password both answer
    /// `AuthenticationFailed` so the endpoint does not leak which phone
    /// numbers are registered.
    pub async fn login(&self, data: LoginData) -> DomainResult<AuthOutcome> {
        if !is_valid_phone(&data.phone) {
            return Err(AuthError::InvalidPhoneFormat.into());
        }
        if !is_valid_password(&data.password) {
            return Err(AuthError::InvalidPasswordFormat.into());
        }

        let user = self
            .users
            .find_by_phone(&data.phone)
            .await?
            .ok_or(AuthError::AuthenticationFailed)?;

        if !verify_password(&data.password, &user.password_hash)? {
            warn!(
                phone = %mask_phone(&data.phone),
                event = "login_failed",
                "wrong password"
            );
            return Err(AuthError::AuthenticationFailed.into());
        }

        let session = self.sessions.create(user.id, &user.phone).await?;

        info!(
            phone = %mask_phone(&user.phone),
            event = "login_success",
            remember = data.remember,
            "user logged in"
        );

        Ok(AuthOutcome {
            user,
            session,
            remember: data.remember,
        })
    }

    /// Destroy the session behind a session id
    pub async fn logout(&self, session_id: &str) -> DomainResult<()> {
        self.sessions.destroy(session_id).await
    }

    /// Reset a forgotten password after SMS verification
    pub async fn reset_password(&self, data: ResetPasswordData) -> DomainResult<()> {
        if !is_valid_phone(&data.phone) {
            return Err(AuthError::InvalidPhoneFormat.into());
        }
        if !is_valid_password(&data.password) {
            return Err(AuthError::InvalidPasswordFormat.into());
        }
        if data.password != data.password_confirm {
            return Err(AuthError::PasswordConfirmMismatch.into());
        }

        self.verification
            .verify_sms_code(&data.phone, &data.sms_code)
            .await?;

        if !self.users.exists_by_phone(&data.phone).await? {
            return Err(AuthError::UserNotFound.into());
        }

        let password_hash = hash_password(&data.password)?;
        self.users
            .update_password(&data.phone, &password_hash)
            .await?;

        info!(
            phone = %mask_phone(&data.phone),
            event = "password_reset",
            "password reset completed"
        );

        Ok(())
    }

    /// Access to the session service (cookie parameters, lookups)
    pub fn sessions(&self) -> &SessionService<T> {
        &self.sessions
    }
}
