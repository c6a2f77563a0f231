use chrono::NaiveDate;
use officehours_core::models::allowed_student::AllowedStudent;
use officehours_core::models::time_slot::{TimeSlot, TimeSlotPayload};
use officehours_core::models::weekday::Weekday;
use officehours_core::reducers::{SlotAction, StudentAction, reduce_slots, reduce_students};
use pretty_assertions::assert_eq;

fn payload(course: &str, day: Weekday) -> TimeSlotPayload {
    TimeSlotPayload {
        course_name: course.to_string(),
        section: " ".to_string(),
        day_of_week: day,
        start_time: "09:00".to_string(),
        end_time: "10:00".to_string(),
        duration: 15,
        start_date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 4, 25).unwrap(),
        room: "LIB 3".to_string(),
    }
}

fn student(id: i64, email: &str) -> AllowedStudent {
    AllowedStudent {
        id,
        first_name: "Alex".to_string(),
        last_name: "Kim".to_string(),
        id_number: format!("ID{}", id),
        email: email.to_string(),
        slot_id: 1,
    }
}

#[test]
fn test_created_slot_is_appended() {
    let existing = vec![TimeSlot::from_payload(1, payload("CS 101", Weekday::Mon))];
    let next = reduce_slots(
        &existing,
        SlotAction::Created {
            id: 2,
            payload: payload("CS 102", Weekday::Tue),
        },
    );

    assert_eq!(next.len(), 2);
    assert_eq!(next[1].id, 2);
    assert_eq!(next[1].course_name, "CS 102");
    assert_eq!(existing.len(), 1);
}

#[test]
fn test_updated_slot_keeps_restriction() {
    let mut restricted = TimeSlot::from_payload(1, payload("CS 101", Weekday::Mon));
    restricted.require_specific_email = true;
    let other = TimeSlot::from_payload(2, payload("CS 200", Weekday::Fri));

    let next = reduce_slots(
        &[restricted, other.clone()],
        SlotAction::Updated {
            id: 1,
            payload: payload("CS 101 Lab", Weekday::Thu),
        },
    );

    assert_eq!(next[0].course_name, "CS 101 Lab");
    assert_eq!(next[0].day_of_week, Weekday::Thu);
    assert!(next[0].require_specific_email);
    assert_eq!(next[1], other);
}

#[test]
fn test_access_change_touches_one_slot() {
    let slots = vec![
        TimeSlot::from_payload(1, payload("A", Weekday::Mon)),
        TimeSlot::from_payload(2, payload("B", Weekday::Mon)),
    ];
    let next = reduce_slots(&slots, SlotAction::AccessChanged { id: 2, restricted: true });

    assert!(!next[0].require_specific_email);
    assert!(next[1].require_specific_email);
}

#[test]
fn test_loaded_replaces_slots() {
    let slots = vec![TimeSlot::from_payload(1, payload("A", Weekday::Mon))];
    assert!(reduce_slots(&slots, SlotAction::Loaded(Vec::new())).is_empty());
}

#[test]
fn test_student_add_edit_remove() {
    let list = reduce_students(&[], StudentAction::Added(student(1, "a@uni.edu")));
    let list = reduce_students(&list, StudentAction::Added(student(2, "b@uni.edu")));
    assert_eq!(list.len(), 2);

    let mut edited = student(1, "a2@uni.edu");
    edited.first_name = "Alexis".to_string();
    let list = reduce_students(&list, StudentAction::Edited(edited.clone()));
    assert_eq!(list[0], edited);

    let list = reduce_students(&list, StudentAction::Removed(2));
    assert_eq!(list, vec![edited]);
}

#[test]
fn test_student_added_twice_is_not_duplicated() {
    let list = reduce_students(&[student(1, "a@uni.edu")], StudentAction::Added(student(1, "a@uni.edu")));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_removing_unknown_student_is_noop() {
    let list = vec![student(1, "a@uni.edu")];
    assert_eq!(reduce_students(&list, StudentAction::Removed(42)), list);
}
