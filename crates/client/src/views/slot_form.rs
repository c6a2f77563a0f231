use std::sync::Arc;

use officehours_core::lock::InFlightLock;
use officehours_core::models::time_slot::TimeSlotPayload;
use officehours_core::reducers::SlotAction;
use officehours_core::scope::ScopeHandle;
use officehours_core::validation::{SlotForm, SlotFormError};
use tracing::{debug, info, warn};

use super::Outcome;
use crate::api::OfficeHoursApi;
use crate::config::ViewConfig;

pub const SAVE_FAILED: &str = "Failed to save time slot. Please try again.";

/// A slot the server just created or updated.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedSlot {
    pub id: i64,
    pub payload: TimeSlotPayload,
    pub created: bool,
}

impl SavedSlot {
    /// The list transition to apply in the parent view.
    pub fn into_action(self) -> SlotAction {
        if self.created {
            SlotAction::Created {
                id: self.id,
                payload: self.payload,
            }
        } else {
            SlotAction::Updated {
                id: self.id,
                payload: self.payload,
            }
        }
    }
}

/// Submits the create/edit slot form.
#[derive(Clone)]
pub struct SlotFormController {
    api: Arc<dyn OfficeHoursApi>,
    view: ViewConfig,
    scope: ScopeHandle,
    lock: InFlightLock,
}

impl SlotFormController {
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

    /// True while a submit is outstanding; the host disables the button.
    pub fn is_submitting(&self) -> bool {
        self.lock.is_busy()
    }

    /// Validates `form` and sends it, as an update when `editing` holds the
    /// slot id, as a create otherwise.
    pub async fn submit(&self, form: &SlotForm, editing: Option<i64>) -> Outcome<SavedSlot, SlotFormError> {
        let Some(_guard) = self.lock.try_acquire() else {
            debug!("Slot form submit ignored while a request is in flight");
            return Outcome::Busy;
        };

        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(err) => return Outcome::Invalid(err),
        };

        let result = match editing {
            Some(id) => self.api.update_slot(id, &payload).await,
            None => self.api.create_slot(&payload).await,
        };

        if !self.scope.is_active() {
            debug!("Slot form closed before the save settled, dropping response");
            return Outcome::Discarded;
        }

        match result {
            Ok(server_id) => {
                let id = editing.unwrap_or(server_id);
                info!(id, created = editing.is_none(), "Saved time slot");
                Outcome::Done(SavedSlot {
                    id,
                    payload,
                    created: editing.is_none(),
                })
            }
            Err(err) => {
                warn!("Failed to save time slot: {}", err);
                Outcome::Failed(err.user_message(SAVE_FAILED))
            }
        }
    }
}
