use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use officehours_core::access::{AccessMode, AccessToggle};
use officehours_core::lock::InFlightLock;
use officehours_core::models::allowed_student::AllowedStudent;
use officehours_core::models::time_slot::TimeSlot;
use officehours_core::reducers::StudentAction;
use officehours_core::scope::ScopeHandle;
use officehours_core::validation::{FieldErrors, StudentForm};
use tracing::{debug, info, warn};

use super::Outcome;
use crate::api::OfficeHoursApi;
use crate::config::ViewConfig;

pub const LOAD_FAILED: &str = "Failed to load allowed students.";
pub const SAVE_FAILED: &str = "Failed to save student. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete student. Please try again.";
pub const TOGGLE_FAILED: &str = "Failed to update booking access. Please try again.";

/// Allow-list table, its add/edit modal and the access toggle for one slot.
#[derive(Clone)]
pub struct AllowedStudentsController {
    api: Arc<dyn OfficeHoursApi>,
    view: ViewConfig,
    scope: ScopeHandle,
    slot_id: i64,
    form_lock: InFlightLock,
    delete_lock: InFlightLock,
    toggle: Arc<Mutex<AccessToggle>>,
}

impl AllowedStudentsController {
    pub fn new(api: Arc<dyn OfficeHoursApi>, view: ViewConfig, scope: ScopeHandle, slot: &TimeSlot) -> Self {
        Self {
            api,
            view,
            scope,
            slot_id: slot.id,
            form_lock: InFlightLock::new(),
            delete_lock: InFlightLock::new(),
            toggle: Arc::new(Mutex::new(AccessToggle::new(AccessMode::from_restricted(
                slot.require_specific_email,
            )))),
        }
    }

    pub fn slot_id(&self) -> i64 {
        self.slot_id
    }

    pub fn view(&self) -> ViewConfig {
        self.view
    }

    pub fn mode(&self) -> AccessMode {
        self.toggle_state().mode()
    }

    pub fn is_toggling(&self) -> bool {
        self.toggle_state().is_pending()
    }

    /// Adopts the server's flag after the parent refetched the slot.
    pub fn sync(&self, slot: &TimeSlot) {
        self.toggle_state()
            .sync(AccessMode::from_restricted(slot.require_specific_email));
    }

    fn toggle_state(&self) -> MutexGuard<'_, AccessToggle> {
        self.toggle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub async fn load(&self) -> Outcome<StudentAction> {
        let result = self.api.list_allowed_students(self.slot_id).await;
        if !self.scope.is_active() {
            debug!(slot_id = self.slot_id, "Allow-list closed before load settled");
            return Outcome::Discarded;
        }
        match result {
            Ok(students) => Outcome::Done(StudentAction::Loaded(students)),
            Err(err) => {
                warn!("Failed to load allowed students: {}", err);
                Outcome::Failed(err.user_message(LOAD_FAILED))
            }
        }
    }

    /// Creates an entry, then reads the list back to learn its id.
    ///
    /// If the new entry cannot be found by email the whole refetched list is
    /// returned instead.
    pub async fn add(&self, form: &StudentForm) -> Outcome<StudentAction, FieldErrors> {
        let Some(_guard) = self.form_lock.try_acquire() else {
            return Outcome::Busy;
        };
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(errors) => return Outcome::Invalid(errors),
        };

        if let Err(err) = self.api.create_allowed_student(self.slot_id, &payload).await {
            if !self.scope.is_active() {
                return Outcome::Discarded;
            }
            warn!("Failed to add allowed student: {}", err);
            return Outcome::Failed(err.user_message(SAVE_FAILED));
        }
        info!(slot_id = self.slot_id, "Added allowed student");
        if !self.scope.is_active() {
            debug!(slot_id = self.slot_id, "Allow-list closed after add, skipping reload");
            return Outcome::Discarded;
        }

        let students = self.api.list_allowed_students(self.slot_id).await;
        if !self.scope.is_active() {
            return Outcome::Discarded;
        }
        match students {
            Ok(students) => match students.iter().find(|s| s.has_email(&payload.email)) {
                Some(student) => Outcome::Done(StudentAction::Added(student.clone())),
                None => Outcome::Done(StudentAction::Loaded(students)),
            },
            Err(err) => {
                warn!("Added student but failed to reload the list: {}", err);
                Outcome::Failed(err.user_message(LOAD_FAILED))
            }
        }
    }

    pub async fn edit(&self, id: i64, form: &StudentForm) -> Outcome<StudentAction, FieldErrors> {
        let Some(_guard) = self.form_lock.try_acquire() else {
            return Outcome::Busy;
        };
        let payload = match form.validate() {
            Ok(payload) => payload,
            Err(errors) => return Outcome::Invalid(errors),
        };

        let result = self.api.update_allowed_student(id, &payload).await;
        if !self.scope.is_active() {
            return Outcome::Discarded;
        }
        match result {
            Ok(()) => {
                info!(id, "Updated allowed student");
                Outcome::Done(StudentAction::Edited(AllowedStudent {
                    id,
                    first_name: payload.first_name,
                    last_name: payload.last_name,
                    id_number: payload.id_number,
                    email: payload.email,
                    slot_id: self.slot_id,
                }))
            }
            Err(err) => {
                warn!("Failed to update allowed student: {}", err);
                Outcome::Failed(err.user_message(SAVE_FAILED))
            }
        }
    }

    pub async fn remove(&self, id: i64) -> Outcome<StudentAction> {
        let Some(_guard) = self.delete_lock.try_acquire() else {
            return Outcome::Busy;
        };

        let result = self.api.delete_allowed_student(id).await;
        if !self.scope.is_active() {
            return Outcome::Discarded;
        }
        match result {
            Ok(()) => {
                info!(id, "Deleted allowed student");
                Outcome::Done(StudentAction::Removed(id))
            }
            Err(err) => {
                warn!("Failed to delete allowed student: {}", err);
                Outcome::Failed(err.user_message(DELETE_FAILED))
            }
        }
    }

    /// Flips between "all students" and "allowed only".
    ///
    /// Ignored while an earlier toggle is outstanding. On success the host
    /// should apply `SlotAction::AccessChanged` and refetch its slots.
    pub async fn toggle(&self) -> Outcome<AccessMode> {
        let Some(target) = self.toggle_state().request() else {
            debug!(slot_id = self.slot_id, "Access toggle ignored while in flight");
            return Outcome::Busy;
        };

        let result = self
            .api
            .set_restricted(self.slot_id, target.is_restricted())
            .await;
        let mode = self.toggle_state().settle(result.is_ok());

        if !self.scope.is_active() {
            return Outcome::Discarded;
        }
        match result {
            Ok(()) => {
                info!(slot_id = self.slot_id, restricted = mode.is_restricted(), "Changed booking access");
                Outcome::Done(mode)
            }
            Err(err) => {
                warn!("Failed to change booking access: {}", err);
                Outcome::Failed(err.user_message(TOGGLE_FAILED))
            }
        }
    }
}
