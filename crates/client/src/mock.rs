use async_trait::async_trait;
use mockall::mock;
use officehours_core::errors::OfficeHoursResult;
use officehours_core::models::allowed_student::{AllowedStudent, AllowedStudentPayload};
use officehours_core::models::booking::Booking;
use officehours_core::models::time_slot::{TimeSlot, TimeSlotPayload};

use crate::api::OfficeHoursApi;

// Mock backend for controller tests
mock! {
    pub Api {}

    #[async_trait]
    impl OfficeHoursApi for Api {
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
}
