//! reqwest implementation of [`OfficeHoursApi`].

use async_trait::async_trait;
use eyre::WrapErr;
use officehours_core::errors::{OfficeHoursError, OfficeHoursResult, ServerMessage};
use officehours_core::models::account::{
    PasswordResetRequest, SuccessResponse, VerifyEmailChangeRequest,
};
use officehours_core::models::allowed_student::{
    AllowedStudent, AllowedStudentPayload, GetAllowedStudentsResponse,
};
use officehours_core::models::booking::{Booking, GetBookingsResponse};
use officehours_core::models::time_slot::{
    GetUserSlotsResponse, SaveTimeSlotResponse, TimeSlot, TimeSlotPayload, UpdateAccessRequest,
};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::{OfficeHoursApi, paths};
use crate::config::ClientConfig;

/// Turns a raw response into the expected body or a classified error.
///
/// A non-null `error` key is a server failure whatever the status; an
/// `"error": null` alongside a normal body is ignored.
pub fn decode<T: DeserializeOwned>(status: u16, body: &[u8]) -> OfficeHoursResult<T> {
    let ok_status = (200..300).contains(&status);
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(_) if !ok_status => return Err(OfficeHoursError::Status(status)),
        Err(err) => return Err(OfficeHoursError::Internal(Box::new(err))),
    };
    if let Some(error) = value.get("error").filter(|error| !error.is_null()) {
        return Err(OfficeHoursError::Server(ServerMessage::from_value(error.clone())));
    }
    if !ok_status {
        return Err(OfficeHoursError::Status(status));
    }
    serde_json::from_value(value).map_err(|err| OfficeHoursError::Internal(Box::new(err)))
}

/// Like [`decode`] for slot saves, yielding the saved id. `success: false`
/// is a server error even on a 2xx.
pub fn decode_saved(status: u16, body: &[u8]) -> OfficeHoursResult<i64> {
    let saved: SaveTimeSlotResponse = decode(status, body)?;
    if !saved.success {
        return Err(rejected());
    }
    Ok(saved.time_slot_id)
}

/// Like [`decode`] for endpoints that only acknowledge, where a 2xx with an
/// empty body also counts as success.
pub fn decode_ack(status: u16, body: &[u8]) -> OfficeHoursResult<()> {
    if (200..300).contains(&status) && body.iter().all(u8::is_ascii_whitespace) {
        return Ok(());
    }
    let ack: SuccessResponse = decode(status, body)?;
    match ack.success {
        Value::Bool(false) => Err(rejected()),
        _ => Ok(()),
    }
}

fn rejected() -> OfficeHoursError {
    OfficeHoursError::Server(ServerMessage::Detail(Value::Bool(false)))
}

pub struct HttpApi {
    client: Client,
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> eyre::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .wrap_err("Failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("Sending {} {}", method, path);
        let builder = self.client.request(method, self.config.endpoint(path));
        match &self.config.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn exchange(&self, builder: RequestBuilder) -> OfficeHoursResult<(u16, Vec<u8>)> {
        let response = builder.send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport)?;
        if !(200..300).contains(&status) {
            warn!(status, "Backend returned an error status");
        }
        Ok((status, body.to_vec()))
    }

    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> OfficeHoursResult<T> {
        let (status, body) = self.exchange(builder).await?;
        decode(status, &body)
    }

    async fn save(&self, builder: RequestBuilder) -> OfficeHoursResult<i64> {
        let (status, body) = self.exchange(builder).await?;
        decode_saved(status, &body)
    }

    async fn acknowledge(&self, builder: RequestBuilder) -> OfficeHoursResult<()> {
        let (status, body) = self.exchange(builder).await?;
        decode_ack(status, &body)
    }
}

fn transport(err: reqwest::Error) -> OfficeHoursError {
    warn!("Request failed before a response arrived: {}", err);
    OfficeHoursError::Transport(eyre::Report::new(err))
}

#[async_trait]
impl OfficeHoursApi for HttpApi {
    async fn create_slot(&self, payload: &TimeSlotPayload) -> OfficeHoursResult<i64> {
        self.save(self.request(Method::POST, paths::TIME_SLOTS).json(payload))
            .await
    }

    async fn update_slot(&self, id: i64, payload: &TimeSlotPayload) -> OfficeHoursResult<i64> {
        self.save(self.request(Method::PATCH, &paths::time_slot(id)).json(payload))
            .await
    }

    async fn list_slots(&self) -> OfficeHoursResult<Vec<TimeSlot>> {
        let response: GetUserSlotsResponse =
            self.fetch(self.request(Method::GET, paths::USER_SLOTS)).await?;
        Ok(response.slots)
    }

    async fn list_bookings(&self) -> OfficeHoursResult<Vec<Booking>> {
        let response: GetBookingsResponse =
            self.fetch(self.request(Method::GET, paths::BOOKINGS)).await?;
        Ok(response.bookings)
    }

    async fn list_allowed_students(&self, slot_id: i64) -> OfficeHoursResult<Vec<AllowedStudent>> {
        let response: GetAllowedStudentsResponse = self
            .fetch(self.request(Method::GET, &paths::allowed_students(slot_id)))
            .await?;
        Ok(response.allowed_students)
    }

    async fn create_allowed_student(
        &self,
        slot_id: i64,
        payload: &AllowedStudentPayload,
    ) -> OfficeHoursResult<()> {
        self.acknowledge(
            self.request(Method::POST, &paths::allowed_students(slot_id))
                .json(payload),
        )
        .await
    }

    async fn update_allowed_student(
        &self,
        id: i64,
        payload: &AllowedStudentPayload,
    ) -> OfficeHoursResult<()> {
        self.acknowledge(
            self.request(Method::PATCH, &paths::allowed_student_detail(id))
                .json(payload),
        )
        .await
    }

    async fn delete_allowed_student(&self, id: i64) -> OfficeHoursResult<()> {
        self.acknowledge(self.request(Method::DELETE, &paths::allowed_student_detail(id)))
            .await
    }

    async fn set_restricted(&self, slot_id: i64, require_specific_email: bool) -> OfficeHoursResult<()> {
        let body = UpdateAccessRequest {
            require_specific_email,
        };
        self.acknowledge(
            self.request(Method::PATCH, &paths::allowed_students_status(slot_id))
                .json(&body),
        )
        .await
    }

    async fn request_password_reset(&self, email: &str) -> OfficeHoursResult<()> {
        let body = PasswordResetRequest {
            email: email.to_string(),
        };
        self.acknowledge(self.request(Method::POST, paths::PASSWORD_RESET).json(&body))
            .await
    }

    async fn verify_email_change(&self, uid: &str, token: &str, new_email: &str) -> OfficeHoursResult<()> {
        let body = VerifyEmailChangeRequest {
            uid: uid.to_string(),
            token: token.to_string(),
            new_email: new_email.to_string(),
        };
        self.acknowledge(self.request(Method::POST, paths::VERIFY_EMAIL_CHANGE).json(&body))
            .await
    }
}
