//! Conversion between the 12-hour selector values shown in forms and the
//! 24-hour `HH:MM` strings the backend stores.
//!
//! Parsing never fails: a malformed 24-hour string reads as 9:00 AM so an
//! edit form can always be populated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Hour choices offered by the selector.
pub const HOUR_CHOICES: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

/// Minute choices offered by the selector. Existing slots may hold other
/// minutes, which still convert exactly.
pub const MINUTE_CHOICES: [u8; 4] = [0, 15, 30, 45];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meridiem {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Meridiem {
    pub fn as_str(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Meridiem {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AM" => Ok(Meridiem::Am),
            "PM" => Ok(Meridiem::Pm),
            _ => Err(()),
        }
    }
}

/// A wall-clock time as the form selectors hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClockTime12 {
    /// 1..=12
    pub hour: u8,
    pub minute: u8,
    pub meridiem: Meridiem,
}

impl Default for ClockTime12 {
    fn default() -> Self {
        Self {
            hour: 9,
            minute: 0,
            meridiem: Meridiem::Am,
        }
    }
}

impl ClockTime12 {
    pub fn new(hour: u8, minute: u8, meridiem: Meridiem) -> Self {
        Self {
            hour,
            minute,
            meridiem,
        }
    }

    pub fn to_24(self) -> String {
        to_24(self.hour, self.minute, self.meridiem)
    }

    /// Display label such as `9:05 AM`.
    pub fn label(self) -> String {
        format!("{}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}

/// Converts selector values to `HH:MM`.
pub fn to_24(hour12: u8, minute: u8, meridiem: Meridiem) -> String {
    let hour = match meridiem {
        Meridiem::Am if hour12 == 12 => 0,
        Meridiem::Pm if hour12 != 12 => hour12 % 12 + 12,
        _ => hour12,
    };
    format!("{:02}:{:02}", hour, minute)
}

/// Converts `HH:MM` (or `HH:MM:SS`) to selector values, falling back to
/// 9:00 AM when the input does not parse.
pub fn to_12(time24: &str) -> ClockTime12 {
    match parse_24(time24) {
        Some((hour, minute)) => {
            let meridiem = if hour >= 12 { Meridiem::Pm } else { Meridiem::Am };
            let hour12 = match hour % 12 {
                0 => 12,
                h => h,
            };
            ClockTime12::new(hour12, minute, meridiem)
        }
        None => ClockTime12::default(),
    }
}

/// Minutes since midnight, or `None` for a malformed time.
pub fn minute_of_day(time24: &str) -> Option<u32> {
    parse_24(time24).map(|(hour, minute)| u32::from(hour) * 60 + u32::from(minute))
}

/// Display label for a stored 24-hour time.
pub fn label_24(time24: &str) -> String {
    to_12(time24).label()
}

fn parse_24(time24: &str) -> Option<(u8, u8)> {
    let mut parts = time24.trim().split(':');
    let hour = parse_field(parts.next()?)?;
    let minute = parse_field(parts.next()?)?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

fn parse_field(field: &str) -> Option<u8> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
