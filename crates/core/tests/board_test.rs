use chrono::NaiveDate;
use officehours_core::board::{PopupState, WeekBoard, bookings_by_slot};
use officehours_core::models::booking::{Booking, BookingStudent, SlotRef};
use officehours_core::models::time_slot::TimeSlot;
use officehours_core::models::weekday::Weekday;
use pretty_assertions::assert_eq;

fn slot(id: i64, day: Weekday, start: &str, course: &str) -> TimeSlot {
    TimeSlot {
        id,
        course_name: course.to_string(),
        section: " ".to_string(),
        day_of_week: day,
        start_time: start.to_string(),
        end_time: "23:00".to_string(),
        duration: 15,
        start_date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 4, 25).unwrap(),
        room: "LIB 3".to_string(),
        require_specific_email: false,
    }
}

fn booking(id: i64, slot_id: i64, date: (i32, u32, u32), start: &str, cancelled: bool) -> Booking {
    Booking {
        id,
        office_hour: SlotRef { id: slot_id },
        student: BookingStudent {
            first_name: "Sam".to_string(),
            last_name: "Lee".to_string(),
            email: "sam@uni.edu".to_string(),
        },
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        start_time: start.to_string(),
        description: None,
        is_cancelled: cancelled,
    }
}

#[test]
fn test_wednesday_slot_lands_only_under_wednesday() {
    let board = WeekBoard::from_slots(&[slot(1, Weekday::Wed, "10:00", "CS 101")]);

    for column in board.columns() {
        if column.day == Weekday::Wed {
            assert_eq!(column.slots.len(), 1);
            assert_eq!(column.slots[0].id, 1);
        } else {
            assert!(column.slots.is_empty(), "{} should be empty", column.day);
        }
    }
}

#[test]
fn test_board_has_seven_columns_in_order() {
    let board = WeekBoard::from_slots(&[]);
    let days: Vec<Weekday> = board.columns().iter().map(|c| c.day).collect();
    assert_eq!(days, Weekday::ALL.to_vec());
    assert!(board.is_empty());
}

#[test]
fn test_columns_sort_by_start_then_course() {
    let board = WeekBoard::from_slots(&[
        slot(1, Weekday::Mon, "14:00:00", "B"),
        slot(2, Weekday::Mon, "09:30", "Z"),
        slot(3, Weekday::Mon, "09:30", "A"),
        slot(4, Weekday::Mon, "garbled", "A"),
    ]);

    let ids: Vec<i64> = board.column(Weekday::Mon).slots.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3, 2, 1, 4]);
    assert_eq!(board.find(2).map(|s| s.course_name.as_str()), Some("Z"));
    assert!(board.find(99).is_none());
}

#[test]
fn test_bookings_grouped_and_cancelled_dropped() {
    let grouped = bookings_by_slot(&[
        booking(1, 10, (2025, 3, 5), "10:30", false),
        booking(2, 10, (2025, 3, 4), "10:45", false),
        booking(3, 10, (2025, 3, 4), "10:00", false),
        booking(4, 10, (2025, 3, 4), "09:00", true),
        booking(5, 11, (2025, 3, 6), "13:00", true),
    ]);

    let ids: Vec<i64> = grouped[&10].iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
    assert!(!grouped.contains_key(&11));
}

#[test]
fn test_popup_pin_beats_hover() {
    let mut popup = PopupState::default();
    assert_eq!(popup.visible(), None);

    popup.hover(1);
    assert_eq!(popup.visible(), Some(1));

    popup.click(2);
    popup.hover(3);
    assert_eq!(popup.visible(), Some(2));

    popup.click(2);
    assert_eq!(popup.visible(), Some(3));

    popup.leave(1);
    assert_eq!(popup.visible(), Some(3));
    popup.leave(3);
    assert_eq!(popup.visible(), None);

    popup.click(4);
    popup.dismiss();
    assert_eq!(popup.visible(), None);
}
