use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyEmailChangeRequest {
    pub uid: String,
    pub token: String,
    pub new_email: String,
}

/// `{ "success": ... }` acknowledgement shared by the mutation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    #[serde(default)]
    pub success: serde_json::Value,
}
