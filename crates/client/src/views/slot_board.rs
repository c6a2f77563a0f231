use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Arc;

use chrono::NaiveDate;
use officehours_core::board::{WeekBoard, bookings_by_slot};
use officehours_core::clock;
use officehours_core::models::booking::Booking;
use officehours_core::models::time_slot::TimeSlot;
use officehours_core::models::weekday::Weekday;
use officehours_core::scope::ScopeHandle;
use tracing::{debug, warn};

use super::Outcome;
use crate::api::OfficeHoursApi;
use crate::config::{Theme, ViewConfig};

pub const LOAD_FAILED: &str = "Failed to load office hours. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub struct SlotCard {
    pub id: i64,
    pub course_name: String,
    pub section: String,
    pub time_range: String,
    pub room: String,
    pub restricted: bool,
    pub booking_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView {
    pub day: Weekday,
    pub heading: &'static str,
    pub cards: Vec<SlotCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupEntry {
    pub student_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotPopup {
    pub slot_id: i64,
    pub title: String,
    pub entries: Vec<PopupEntry>,
}

/// Everything the host needs to draw the weekly board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub theme: Theme,
    pub columns: Vec<ColumnView>,
    pub slots: Vec<TimeSlot>,
    empty_label: &'static str,
    bookings: HashMap<i64, Vec<Booking>>,
}

impl BoardView {
    pub fn build(view: ViewConfig, slots: &[TimeSlot], bookings: &[Booking]) -> Self {
        let board = WeekBoard::from_slots(slots);
        let bookings = bookings_by_slot(bookings);

        let columns = board
            .columns()
            .iter()
            .map(|column| ColumnView {
                day: column.day,
                heading: view.language.day_heading(column.day),
                cards: column
                    .slots
                    .iter()
                    .map(|slot| SlotCard {
                        id: slot.id,
                        course_name: slot.course_name.clone(),
                        section: slot.display_section().to_string(),
                        time_range: format!(
                            "{} - {}",
                            clock::label_24(&slot.start_time),
                            clock::label_24(&slot.end_time)
                        ),
                        room: slot.room.clone(),
                        restricted: slot.require_specific_email,
                        booking_count: bookings.get(&slot.id).map_or(0, Vec::len),
                    })
                    .collect(),
            })
            .collect();

        Self {
            theme: view.theme,
            columns,
            slots: slots.to_vec(),
            empty_label: view.language.no_slots(),
            bookings,
        }
    }

    pub fn column(&self, day: Weekday) -> &ColumnView {
        &self.columns[day.index()]
    }

    /// Booking popup content for one slot.
    pub fn popup(&self, slot_id: i64) -> Option<SlotPopup> {
        let slot = self.slots.iter().find(|slot| slot.id == slot_id)?;
        let title = match slot.display_section() {
            "" => slot.course_name.clone(),
            section => format!("{} ({})", slot.course_name, section),
        };
        let entries = self
            .bookings
            .get(&slot_id)
            .map(|list| {
                list.iter()
                    .map(|booking| PopupEntry {
                        student_name: format!(
                            "{} {}",
                            booking.student.first_name, booking.student.last_name
                        ),
                        email: booking.student.email.clone(),
                        date: booking.date,
                        time: clock::label_24(&booking.start_time),
                        description: booking
                            .description
                            .as_ref()
                            .map(|text| text.trim().to_string())
                            .filter(|text| !text.is_empty()),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Some(SlotPopup {
            slot_id,
            title,
            entries,
        })
    }

    /// Plain-text rendering, one block per day.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for column in &self.columns {
            let _ = writeln!(out, "{}", column.heading);
            if column.cards.is_empty() {
                let _ = writeln!(out, "  {}", self.empty_label);
            }
            for card in &column.cards {
                let _ = write!(out, "  {}  {}", card.time_range, card.course_name);
                if !card.section.is_empty() {
                    let _ = write!(out, " ({})", card.section);
                }
                let _ = write!(out, "  {}  [{} booked]", card.room, card.booking_count);
                if card.restricted {
                    out.push_str("  *allow-list*");
                }
                out.push('\n');
            }
        }
        out
    }
}

/// Loads slots and bookings for the weekly board.
#[derive(Clone)]
pub struct SlotBoardController {
    api: Arc<dyn OfficeHoursApi>,
    view: ViewConfig,
    scope: ScopeHandle,
}

impl SlotBoardController {
    pub fn new(api: Arc<dyn OfficeHoursApi>, view: ViewConfig, scope: ScopeHandle) -> Self {
        Self { api, view, scope }
    }

    /// Fetches both lists. A bookings failure leaves the popups empty
    /// rather than hiding the board.
    pub async fn refresh(&self) -> Outcome<BoardView> {
        let (slots, bookings) = tokio::join!(self.api.list_slots(), self.api.list_bookings());

        if !self.scope.is_active() {
            debug!("Board closed before refresh settled, dropping response");
            return Outcome::Discarded;
        }

        let slots = match slots {
            Ok(slots) => slots,
            Err(err) => {
                warn!("Failed to load slots: {}", err);
                return Outcome::Failed(err.user_message(LOAD_FAILED));
            }
        };
        let bookings = bookings.unwrap_or_else(|err| {
            warn!("Failed to load bookings: {}", err);
            Vec::new()
        });

        debug!(slots = slots.len(), bookings = bookings.len(), "Board refreshed");
        Outcome::Done(BoardView::build(self.view, &slots, &bookings))
    }
}
