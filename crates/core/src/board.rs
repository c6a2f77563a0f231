//! Weekly board layout: slots bucketed into seven day columns, bookings
//! grouped per slot for the popup.

use std::collections::HashMap;

use crate::clock;
use crate::models::booking::Booking;
use crate::models::time_slot::TimeSlot;
use crate::models::weekday::Weekday;

#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub day: Weekday,
    pub slots: Vec<TimeSlot>,
}

/// Seven columns, Monday through Sunday.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekBoard {
    columns: Vec<DayColumn>,
}

impl WeekBoard {
    pub fn from_slots(slots: &[TimeSlot]) -> Self {
        let mut columns: Vec<DayColumn> = Weekday::ALL
            .into_iter()
            .map(|day| DayColumn {
                day,
                slots: Vec::new(),
            })
            .collect();

        for slot in slots {
            columns[slot.day_of_week.index()].slots.push(slot.clone());
        }

        for column in &mut columns {
            column.slots.sort_by(|a, b| {
                start_key(a)
                    .cmp(&start_key(b))
                    .then_with(|| a.course_name.cmp(&b.course_name))
            });
        }

        Self { columns }
    }

    pub fn columns(&self) -> &[DayColumn] {
        &self.columns
    }

    pub fn column(&self, day: Weekday) -> &DayColumn {
        &self.columns[day.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|column| column.slots.is_empty())
    }

    pub fn find(&self, slot_id: i64) -> Option<&TimeSlot> {
        self.columns
            .iter()
            .flat_map(|column| column.slots.iter())
            .find(|slot| slot.id == slot_id)
    }
}

// Unparseable times sort last.
fn start_key(slot: &TimeSlot) -> u32 {
    clock::minute_of_day(&slot.start_time).unwrap_or(u32::MAX)
}

/// Non-cancelled bookings keyed by slot id, each list ordered by date then
/// start time.
pub fn bookings_by_slot(bookings: &[Booking]) -> HashMap<i64, Vec<Booking>> {
    let mut grouped: HashMap<i64, Vec<Booking>> = HashMap::new();
    for booking in bookings.iter().filter(|booking| !booking.is_cancelled) {
        grouped
            .entry(booking.office_hour.id)
            .or_default()
            .push(booking.clone());
    }
    for list in grouped.values_mut() {
        list.sort_by(|a, b| {
            a.date.cmp(&b.date).then_with(|| {
                clock::minute_of_day(&a.start_time)
                    .unwrap_or(u32::MAX)
                    .cmp(&clock::minute_of_day(&b.start_time).unwrap_or(u32::MAX))
            })
        });
    }
    grouped
}

/// Which slot's booking popup is showing.
///
/// Hover shows a popup transiently; a click pins it until clicked again.
/// A pinned slot wins over whatever is hovered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopupState {
    hovered: Option<i64>,
    pinned: Option<i64>,
}

impl PopupState {
    pub fn hover(&mut self, slot_id: i64) {
        self.hovered = Some(slot_id);
    }

    pub fn leave(&mut self, slot_id: i64) {
        if self.hovered == Some(slot_id) {
            self.hovered = None;
        }
    }

    pub fn click(&mut self, slot_id: i64) {
        self.pinned = if self.pinned == Some(slot_id) {
            None
        } else {
            Some(slot_id)
        };
    }

    pub fn dismiss(&mut self) {
        self.hovered = None;
        self.pinned = None;
    }

    pub fn visible(&self) -> Option<i64> {
        self.pinned.or(self.hovered)
    }
}
