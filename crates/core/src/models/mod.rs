pub mod account;
pub mod allowed_student;
pub mod booking;
pub mod time_slot;
pub mod weekday;
