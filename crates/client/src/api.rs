use async_trait::async_trait;
use officehours_core::errors::OfficeHoursResult;
use officehours_core::models::allowed_student::{AllowedStudent, AllowedStudentPayload};
use officehours_core::models::booking::Booking;
use officehours_core::models::time_slot::{TimeSlot, TimeSlotPayload};

/// Endpoint paths on the backend.
pub mod paths {
    pub const TIME_SLOTS: &str = "/api/instructor/time-slots/";
    pub const USER_SLOTS: &str = "/api/instructor/get-user-slots";
    pub const BOOKINGS: &str = "/api/instructor/bookings/";
    pub const PASSWORD_RESET: &str = "/api/auth/password-reset/";
    pub const VERIFY_EMAIL_CHANGE: &str = "/api/profile/verify-email-change/";

    pub fn time_slot(id: i64) -> String {
        format!("/api/instructor/time-slots/{}", id)
    }

    pub fn allowed_students(slot_id: i64) -> String {
        format!("/api/instructor/allowed-students/{}/", slot_id)
    }

    pub fn allowed_students_status(slot_id: i64) -> String {
        format!("/api/instructor/allowed-students-status/{}/", slot_id)
    }

    pub fn allowed_student_detail(id: i64) -> String {
        format!("/api/instructor/allowed-students-detail/{}/", id)
    }
}

/// The backend as the views see it. Every call is a single request with
/// no retry.
#[async_trait]
pub trait OfficeHoursApi: Send + Sync {
    /// Returns the id the server assigned.
    async fn create_slot(&self, payload: &TimeSlotPayload) -> OfficeHoursResult<i64>;

    async fn update_slot(&self, id: i64, payload: &TimeSlotPayload) -> OfficeHoursResult<i64>;

    async fn list_slots(&self) -> OfficeHoursResult<Vec<TimeSlot>>;

    async fn list_bookings(&self) -> OfficeHoursResult<Vec<Booking>>;

    async fn list_allowed_students(&self, slot_id: i64) -> OfficeHoursResult<Vec<AllowedStudent>>;

    async fn create_allowed_student(
        &self,
        slot_id: i64,
        payload: &AllowedStudentPayload,
    ) -> OfficeHoursResult<()>;

    async fn update_allowed_student(
        &self,
        id: i64,
        payload: &AllowedStudentPayload,
    ) -> OfficeHoursResult<()>;

    async fn delete_allowed_student(&self, id: i64) -> OfficeHoursResult<()>;

    async fn set_restricted(&self, slot_id: i64, require_specific_email: bool) -> OfficeHoursResult<()>;

    async fn request_password_reset(&self, email: &str) -> OfficeHoursResult<()>;

    async fn verify_email_change(&self, uid: &str, token: &str, new_email: &str) -> OfficeHoursResult<()>;
}
