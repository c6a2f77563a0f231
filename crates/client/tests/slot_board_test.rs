mod common;

use std::sync::Arc;

use officehours_client::config::{Language, Theme, ViewConfig};
use officehours_client::mock::MockApi;
use officehours_client::views::Outcome;
use officehours_client::views::slot_board::{BoardView, SlotBoardController};
use officehours_core::errors::{OfficeHoursError, ServerMessage};
use officehours_core::models::weekday::Weekday;
use officehours_core::scope::ViewScope;
use pretty_assertions::assert_eq;

use common::{GatedApi, booking, slot};

#[test]
fn test_wednesday_slot_only_under_wednesday() {
    let view = BoardView::build(ViewConfig::default(), &[slot(5, Weekday::Wed)], &[]);

    for column in &view.columns {
        let expected = usize::from(column.day == Weekday::Wed);
        assert_eq!(column.cards.len(), expected, "{}", column.heading);
    }
    assert_eq!(view.column(Weekday::Wed).heading, "Wednesday");
}

#[test]
fn test_cards_show_twelve_hour_range() {
    let view = BoardView::build(ViewConfig::default(), &[slot(5, Weekday::Mon)], &[]);
    let card = &view.column(Weekday::Mon).cards[0];

    assert_eq!(card.time_range, "1:00 PM - 2:30 PM");
    assert_eq!(card.section, "");
    assert!(!card.restricted);
}

#[test]
fn test_popup_lists_active_bookings() {
    let view = BoardView::build(
        ViewConfig::default(),
        &[slot(5, Weekday::Mon)],
        &[booking(1, 5, false), booking(2, 5, true), booking(3, 6, false)],
    );

    assert_eq!(view.column(Weekday::Mon).cards[0].booking_count, 1);

    let popup = view.popup(5).expect("slot 5 should have a popup");
    assert_eq!(popup.title, "CS 101");
    assert_eq!(popup.entries.len(), 1);
    assert_eq!(popup.entries[0].student_name, "Sam Lee");
    assert_eq!(popup.entries[0].time, "1:15 PM");
    assert_eq!(popup.entries[0].description.as_deref(), Some("Recursion question"));
    assert!(view.popup(404).is_none());
}

#[test]
fn test_language_and_theme_are_carried() {
    let config = ViewConfig {
        theme: Theme::Dark,
        language: Language::Es,
    };
    let view = BoardView::build(config, &[], &[]);

    assert_eq!(view.theme, Theme::Dark);
    assert_eq!(view.column(Weekday::Sat).heading, "Sábado");
    assert!(view.render_text().contains("Sin horario de oficina"));
}

#[test]
fn test_render_text_marks_restricted_slots() {
    let mut restricted = slot(5, Weekday::Fri);
    restricted.require_specific_email = true;
    restricted.section = "B".to_string();
    let text = BoardView::build(ViewConfig::default(), &[restricted], &[booking(1, 5, false)]).render_text();

    assert!(text.contains("Friday\n  1:00 PM - 2:30 PM  CS 101 (B)  ENG 204  [1 booked]  *allow-list*\n"));
    assert!(text.starts_with("Monday\n  No office hours\n"));
}

#[tokio::test]
async fn test_refresh_builds_board() {
    let scope = ViewScope::new();
    let mut api = MockApi::new();
    api.expect_list_slots()
        .times(1)
        .returning(|| Ok(vec![slot(5, Weekday::Thu)]));
    api.expect_list_bookings()
        .times(1)
        .returning(|| Ok(vec![booking(1, 5, false)]));

    let board = SlotBoardController::new(Arc::new(api), ViewConfig::default(), scope.handle());
    let view = board.refresh().await.done().expect("refresh should succeed");

    assert_eq!(view.column(Weekday::Thu).cards.len(), 1);
    assert_eq!(view.popup(5).map(|p| p.entries.len()), Some(1));
}

#[tokio::test]
async fn test_refresh_survives_bookings_failure() {
    let scope = ViewScope::new();
    let mut api = MockApi::new();
    api.expect_list_slots().returning(|| Ok(vec![slot(5, Weekday::Thu)]));
    api.expect_list_bookings()
        .returning(|| Err(OfficeHoursError::Status(500)));

    let board = SlotBoardController::new(Arc::new(api), ViewConfig::default(), scope.handle());
    let view = board.refresh().await.done().expect("refresh should succeed");

    assert_eq!(view.column(Weekday::Thu).cards[0].booking_count, 0);
}

#[tokio::test]
async fn test_refresh_reports_slot_failure() {
    let scope = ViewScope::new();
    let mut api = MockApi::new();
    api.expect_list_slots().returning(|| {
        Err(OfficeHoursError::Server(ServerMessage::Text("Not an instructor.".to_string())))
    });
    api.expect_list_bookings().returning(|| Ok(Vec::new()));

    let board = SlotBoardController::new(Arc::new(api), ViewConfig::default(), scope.handle());
    assert_eq!(board.refresh().await, Outcome::Failed("Not an instructor.".to_string()));
}

#[tokio::test]
async fn test_refresh_after_close_is_discarded() {
    let scope = ViewScope::new();
    let api = GatedApi::new();
    let board = SlotBoardController::new(api.clone(), ViewConfig::default(), scope.handle());

    let (outcome, _) = tokio::join!(board.refresh(), async {
        scope.close();
        api.release();
    });

    assert_eq!(outcome, Outcome::Discarded);
}
