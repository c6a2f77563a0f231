#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use officehours_client::api::OfficeHoursApi;
use officehours_core::errors::OfficeHoursResult;
use officehours_core::models::allowed_student::{AllowedStudent, AllowedStudentPayload};
use officehours_core::models::booking::{Booking, BookingStudent, SlotRef};
use officehours_core::models::time_slot::{TimeSlot, TimeSlotPayload};
use officehours_core::models::weekday::Weekday;
use officehours_core::validation::{SlotForm, StudentForm, TimeInput};
use tokio::sync::Notify;

pub fn slot(id: i64, day: Weekday) -> TimeSlot {
    TimeSlot {
        id,
        course_name: "CS 101".to_string(),
        section: " ".to_string(),
        day_of_week: day,
        start_time: "13:00:00".to_string(),
        end_time: "14:30:00".to_string(),
        duration: 15,
        start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 5, 30).unwrap(),
        room: "ENG 204".to_string(),
        require_specific_email: false,
    }
}

pub fn booking(id: i64, slot_id: i64, cancelled: bool) -> Booking {
    Booking {
        id,
        office_hour: SlotRef { id: slot_id },
        student: BookingStudent {
            first_name: "Sam".to_string(),
            last_name: "Lee".to_string(),
            email: "sam@uni.edu".to_string(),
        },
        date: NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
        start_time: "13:15:00".to_string(),
        description: Some(" Recursion question ".to_string()),
        is_cancelled: cancelled,
    }
}

pub fn slot_form() -> SlotForm {
    SlotForm {
        course_name: "CS 101".to_string(),
        section: String::new(),
        day_of_week: "Wed".to_string(),
        start: TimeInput {
            hour: "1".to_string(),
            minute: "00".to_string(),
            meridiem: "PM".to_string(),
        },
        end: TimeInput {
            hour: "2".to_string(),
            minute: "30".to_string(),
            meridiem: "PM".to_string(),
        },
        duration: "15".to_string(),
        start_date: "2025-03-01".to_string(),
        end_date: "2025-05-30".to_string(),
        room: "ENG 204".to_string(),
    }
}

pub fn student_form(email: &str) -> StudentForm {
    StudentForm {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        id_number: "A1234".to_string(),
        email: email.to_string(),
    }
}

pub fn student(id: i64, slot_id: i64, email: &str) -> AllowedStudent {
    AllowedStudent {
        id,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        id_number: "A1234".to_string(),
        email: email.to_string(),
        slot_id,
    }
}

/// Backend whose slot saves and access toggles block until released.
#[derive(Default)]
pub struct GatedApi {
    pub gate: Notify,
    pub calls: AtomicUsize,
}

impl GatedApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn wait(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
    }
}

#[async_trait]
impl OfficeHoursApi for GatedApi {
    async fn create_slot(&self, _payload: &TimeSlotPayload) -> OfficeHoursResult<i64> {
        self.wait().await;
        Ok(99)
    }

    async fn update_slot(&self, id: i64, _payload: &TimeSlotPayload) -> OfficeHoursResult<i64> {
        self.wait().await;
        Ok(id)
    }

    async fn list_slots(&self) -> OfficeHoursResult<Vec<TimeSlot>> {
        self.wait().await;
        Ok(vec![slot(1, Weekday::Mon)])
    }

    async fn list_bookings(&self) -> OfficeHoursResult<Vec<Booking>> {
        Ok(Vec::new())
    }

    async fn list_allowed_students(&self, _slot_id: i64) -> OfficeHoursResult<Vec<AllowedStudent>> {
        Ok(Vec::new())
    }

    async fn create_allowed_student(
        &self,
        _slot_id: i64,
        _payload: &AllowedStudentPayload,
    ) -> OfficeHoursResult<()> {
        Ok(())
    }

    async fn update_allowed_student(
        &self,
        _id: i64,
        _payload: &AllowedStudentPayload,
    ) -> OfficeHoursResult<()> {
        Ok(())
    }

    async fn delete_allowed_student(&self, _id: i64) -> OfficeHoursResult<()> {
        Ok(())
    }

    async fn set_restricted(&self, _slot_id: i64, _require_specific_email: bool) -> OfficeHoursResult<()> {
        self.wait().await;
        Ok(())
    }

    async fn request_password_reset(&self, _email: &str) -> OfficeHoursResult<()> {
        Ok(())
    }

    async fn verify_email_change(&self, _uid: &str, _token: &str, _new_email: &str) -> OfficeHoursResult<()> {
        Ok(())
    }
}
