use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotRef {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A student's reservation against one occurrence of a slot. Read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub office_hour: SlotRef,
    pub student: BookingStudent,
    pub date: NaiveDate,
    pub start_time: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_cancelled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetBookingsResponse {
    #[serde(default)]
    pub bookings: Vec<Booking>,
}
