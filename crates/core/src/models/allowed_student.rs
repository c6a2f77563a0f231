use serde::{Deserialize, Serialize};

/// An allow-list entry scoped to one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowedStudent {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub id_number: String,
    pub email: String,
    #[serde(rename = "time_slot")]
    pub slot_id: i64,
}

impl AllowedStudent {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_email(&self, email: &str) -> bool {
        self.email.trim().eq_ignore_ascii_case(email.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowedStudentPayload {
    pub first_name: String,
    pub last_name: String,
    pub id_number: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAllowedStudentsResponse {
    #[serde(default)]
    pub allowed_students: Vec<AllowedStudent>,
}
