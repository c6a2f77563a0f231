use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::weekday::Weekday;

/// Section value the backend expects in place of an empty string.
pub const BLANK_SECTION: &str = " ";

/// A recurring weekly office-hour window as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: i64,
    pub course_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub section: String,
    pub day_of_week: Weekday,
    /// 24-hour `HH:MM`; the server may append `:SS`.
    pub start_time: String,
    pub end_time: String,
    pub duration: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub room: String,
    #[serde(default)]
    pub require_specific_email: bool,
}

impl TimeSlot {
    /// Builds the local copy of a slot the server just accepted.
    pub fn from_payload(id: i64, payload: TimeSlotPayload) -> Self {
        Self {
            id,
            course_name: payload.course_name,
            section: payload.section,
            day_of_week: payload.day_of_week,
            start_time: payload.start_time,
            end_time: payload.end_time,
            duration: payload.duration,
            start_date: payload.start_date,
            end_date: payload.end_date,
            room: payload.room,
            require_specific_email: false,
        }
    }

    /// Overwrites the editable fields, keeping id and restriction flag.
    pub fn apply_payload(&mut self, payload: TimeSlotPayload) {
        self.course_name = payload.course_name;
        self.section = payload.section;
        self.day_of_week = payload.day_of_week;
        self.start_time = payload.start_time;
        self.end_time = payload.end_time;
        self.duration = payload.duration;
        self.start_date = payload.start_date;
        self.end_date = payload.end_date;
        self.room = payload.room;
    }

    /// Section as a user typed it, with the blank placeholder removed.
    pub fn display_section(&self) -> &str {
        self.section.trim()
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of both the create and the update request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlotPayload {
    pub course_name: String,
    pub section: String,
    pub day_of_week: Weekday,
    pub start_time: String,
    pub end_time: String,
    pub duration: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub room: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveTimeSlotResponse {
    pub success: bool,
    pub time_slot_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserSlotsResponse {
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAccessRequest {
    pub require_specific_email: bool,
}
