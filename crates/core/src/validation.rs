//! Client-side form checks run before any request is issued.
//!
//! The backend re-validates everything; these checks only keep obviously
//! broken submissions off the wire and give the user a specific message.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::{self, ClockTime12, Meridiem};
use crate::models::allowed_student::{AllowedStudent, AllowedStudentPayload};
use crate::models::time_slot::{BLANK_SECTION, TimeSlot, TimeSlotPayload};
use crate::models::weekday::Weekday;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// Reasons a slot form is rejected, in the order they are checked.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotFormError {
    #[error("Course name is required.")]
    MissingCourseName,

    #[error("Please select a valid day of the week.")]
    InvalidDay,

    #[error("Please provide valid start and end dates.")]
    InvalidDates,

    #[error("Start date must be before end date.")]
    DateOrder,

    #[error("Room is required.")]
    MissingRoom,

    #[error("Duration must be a positive number of minutes.")]
    InvalidDuration,

    #[error("Please provide valid start and end times.")]
    InvalidTimes,

    #[error("Start time must be before end time.")]
    TimeOrder,
}

/// One 12-hour selector group as raw form values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInput {
    pub hour: String,
    pub minute: String,
    pub meridiem: String,
}

impl TimeInput {
    pub fn from_clock(time: ClockTime12) -> Self {
        Self {
            hour: time.hour.to_string(),
            minute: format!("{:02}", time.minute),
            meridiem: time.meridiem.as_str().to_string(),
        }
    }

    /// The 24-hour value, or `None` if any selector holds garbage.
    pub fn to_24(&self) -> Option<String> {
        let hour: u8 = parse_digits(&self.hour)?;
        let minute: u8 = parse_digits(&self.minute)?;
        let meridiem: Meridiem = self.meridiem.parse().ok()?;
        if !(1..=12).contains(&hour) || minute > 59 {
            return None;
        }
        Some(clock::to_24(hour, minute, meridiem))
    }
}

/// Unsigned number typed into a form input; signs and separators are rejected.
fn parse_digits<T: FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Raw values of the slot form, exactly as the inputs hold them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotForm {
    pub course_name: String,
    pub section: String,
    pub day_of_week: String,
    pub start: TimeInput,
    pub end: TimeInput,
    pub duration: String,
    pub start_date: String,
    pub end_date: String,
    pub room: String,
}

impl Default for SlotForm {
    fn default() -> Self {
        Self {
            course_name: String::new(),
            section: String::new(),
            day_of_week: Weekday::Mon.code().to_string(),
            start: TimeInput::from_clock(ClockTime12::new(9, 0, Meridiem::Am)),
            end: TimeInput::from_clock(ClockTime12::new(10, 0, Meridiem::Am)),
            duration: "15".to_string(),
            start_date: String::new(),
            end_date: String::new(),
            room: String::new(),
        }
    }
}

impl SlotForm {
    /// Pre-fills the form for editing an existing slot.
    pub fn from_slot(slot: &TimeSlot) -> Self {
        Self {
            course_name: slot.course_name.clone(),
            section: slot.display_section().to_string(),
            day_of_week: slot.day_of_week.code().to_string(),
            start: TimeInput::from_clock(clock::to_12(&slot.start_time)),
            end: TimeInput::from_clock(clock::to_12(&slot.end_time)),
            duration: slot.duration.to_string(),
            start_date: slot.start_date.format("%Y-%m-%d").to_string(),
            end_date: slot.end_date.format("%Y-%m-%d").to_string(),
            room: slot.room.clone(),
        }
    }

    /// Runs the checks in order and stops at the first failure.
    pub fn validate(&self) -> Result<TimeSlotPayload, SlotFormError> {
        let course_name = self.course_name.trim();
        if course_name.is_empty() {
            return Err(SlotFormError::MissingCourseName);
        }

        let day_of_week: Weekday = self
            .day_of_week
            .trim()
            .parse()
            .map_err(|_| SlotFormError::InvalidDay)?;

        let (start_date, end_date) = match (parse_date(&self.start_date), parse_date(&self.end_date)) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(SlotFormError::InvalidDates),
        };
        if start_date > end_date {
            return Err(SlotFormError::DateOrder);
        }

        let room = self.room.trim();
        if room.is_empty() {
            return Err(SlotFormError::MissingRoom);
        }

        let duration = match parse_digits::<u32>(&self.duration) {
            Some(minutes) if minutes > 0 => minutes,
            _ => return Err(SlotFormError::InvalidDuration),
        };

        let start_time = self.start.to_24();
        let end_time = self.end.to_24();
        let (start_time, end_time) = match (start_time, end_time) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(SlotFormError::InvalidTimes),
        };
        match (clock::minute_of_day(&start_time), clock::minute_of_day(&end_time)) {
            (Some(start), Some(end)) if start < end => {}
            (Some(_), Some(_)) => return Err(SlotFormError::TimeOrder),
            _ => return Err(SlotFormError::InvalidTimes),
        }

        let section = match self.section.trim() {
            "" => BLANK_SECTION.to_string(),
            section => section.to_string(),
        };

        Ok(TimeSlotPayload {
            course_name: course_name.to_string(),
            section,
            day_of_week,
            start_time,
            end_time,
            duration,
            start_date,
            end_date,
            room: room.to_string(),
        })
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StudentField {
    FirstName,
    LastName,
    IdNumber,
    Email,
}

/// Per-field messages for a rejected student form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<StudentField, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: StudentField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: StudentField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = StudentField> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: StudentField, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().copied().collect();
        f.write_str(&messages.join(" "))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentForm {
    pub first_name: String,
    pub last_name: String,
    pub id_number: String,
    pub email: String,
}

impl StudentForm {
    pub fn from_student(student: &AllowedStudent) -> Self {
        Self {
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            id_number: student.id_number.clone(),
            email: student.email.clone(),
        }
    }

    /// Checks every field and reports all failures at once.
    pub fn validate(&self) -> Result<AllowedStudentPayload, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.first_name.trim().is_empty() {
            errors.insert(StudentField::FirstName, "First name is required.");
        }
        if self.last_name.trim().is_empty() {
            errors.insert(StudentField::LastName, "Last name is required.");
        }
        if self.id_number.trim().is_empty() {
            errors.insert(StudentField::IdNumber, "ID number is required.");
        }
        if self.email.trim().is_empty() {
            errors.insert(StudentField::Email, "Email is required.");
        } else if !is_valid_email(&self.email) {
            errors.insert(StudentField::Email, "Please enter a valid email address.");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(AllowedStudentPayload {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            id_number: self.id_number.trim().to_string(),
            email: self.email.trim().to_string(),
        })
    }
}
