use std::sync::Arc;

use officehours_core::lock::InFlightLock;
use officehours_core::scope::ScopeHandle;
use officehours_core::validation::is_valid_email;
use thiserror::Error;
use tracing::{info, warn};

use super::Outcome;
use crate::api::OfficeHoursApi;
use crate::config::ViewConfig;

pub const RESET_FAILED: &str = "Failed to send password reset email. Please try again.";
pub const VERIFY_FAILED: &str = "Failed to verify the email change. The link may have expired.";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountFormError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("This verification link is incomplete.")]
    IncompleteLink,
}

/// Password reset request and email-change confirmation.
#[derive(Clone)]
pub struct AccountController {
    api: Arc<dyn OfficeHoursApi>,
    view: ViewConfig,
    scope: ScopeHandle,
    lock: InFlightLock,
}

impl AccountController {
    pub fn new(api: Arc<dyn OfficeHoursApi>, view: ViewConfig, scope: ScopeHandle) -> Self {
        Self {
            api,
            view,
            scope,
            lock: InFlightLock::new(),
        }
    }

    pub fn view(&self) -> ViewConfig {
        self.view
    }

    pub async fn request_password_reset(&self, email: &str) -> Outcome<(), AccountFormError> {
        let Some(_guard) = self.lock.try_acquire() else {
            return Outcome::Busy;
        };
        if !is_valid_email(email) {
            return Outcome::Invalid(AccountFormError::InvalidEmail);
        }

        let result = self.api.request_password_reset(email.trim()).await;
        if !self.scope.is_active() {
            return Outcome::Discarded;
        }
        match result {
            Ok(()) => {
                info!("Requested password reset");
                Outcome::Done(())
            }
            Err(err) => {
                warn!("Password reset request failed: {}", err);
                Outcome::Failed(err.user_message(RESET_FAILED))
            }
        }
    }

    /// Confirms an email change from the `uid`/`token` pair in the link.
    pub async fn verify_email_change(
        &self,
        uid: &str,
        token: &str,
        new_email: &str,
    ) -> Outcome<(), AccountFormError> {
        let Some(_guard) = self.lock.try_acquire() else {
            return Outcome::Busy;
        };
        if uid.trim().is_empty() || token.trim().is_empty() {
            return Outcome::Invalid(AccountFormError::IncompleteLink);
        }
        if !is_valid_email(new_email) {
            return Outcome::Invalid(AccountFormError::InvalidEmail);
        }

        let result = self
            .api
            .verify_email_change(uid.trim(), token.trim(), new_email.trim())
            .await;
        if !self.scope.is_active() {
            return Outcome::Discarded;
        }
        match result {
            Ok(()) => {
                info!("Verified email change");
                Outcome::Done(())
            }
            Err(err) => {
                warn!("Email change verification failed: {}", err);
                Outcome::Failed(err.user_message(VERIFY_FAILED))
            }
        }
    }
}
