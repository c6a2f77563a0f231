//! List state transitions applied after a request succeeds.
//!
//! Each reducer takes the current list and what the server confirmed, and
//! returns the new list. Nothing here touches the network.

use crate::models::allowed_student::AllowedStudent;
use crate::models::time_slot::{TimeSlot, TimeSlotPayload};

#[derive(Debug, Clone, PartialEq)]
pub enum SlotAction {
    Loaded(Vec<TimeSlot>),
    Created { id: i64, payload: TimeSlotPayload },
    Updated { id: i64, payload: TimeSlotPayload },
    AccessChanged { id: i64, restricted: bool },
}

pub fn reduce_slots(current: &[TimeSlot], action: SlotAction) -> Vec<TimeSlot> {
    match action {
        SlotAction::Loaded(slots) => slots,
        SlotAction::Created { id, payload } => {
            let mut next: Vec<TimeSlot> = current.iter().filter(|s| s.id != id).cloned().collect();
            next.push(TimeSlot::from_payload(id, payload));
            next
        }
        SlotAction::Updated { id, payload } => current
            .iter()
            .cloned()
            .map(|mut slot| {
                if slot.id == id {
                    slot.apply_payload(payload.clone());
                }
                slot
            })
            .collect(),
        SlotAction::AccessChanged { id, restricted } => current
            .iter()
            .cloned()
            .map(|mut slot| {
                if slot.id == id {
                    slot.require_specific_email = restricted;
                }
                slot
            })
            .collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StudentAction {
    Loaded(Vec<AllowedStudent>),
    Added(AllowedStudent),
    Edited(AllowedStudent),
    Removed(i64),
}

pub fn reduce_students(current: &[AllowedStudent], action: StudentAction) -> Vec<AllowedStudent> {
    match action {
        StudentAction::Loaded(students) => students,
        StudentAction::Added(student) => {
            let mut next: Vec<AllowedStudent> = current
                .iter()
                .filter(|s| s.id != student.id)
                .cloned()
                .collect();
            next.push(student);
            next
        }
        StudentAction::Edited(student) => current
            .iter()
            .map(|s| if s.id == student.id { student.clone() } else { s.clone() })
            .collect(),
        StudentAction::Removed(id) => current.iter().filter(|s| s.id != id).cloned().collect(),
    }
}
