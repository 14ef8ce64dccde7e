use chrono::NaiveDate;
use reqwest::Response;
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{ApiError, GENERIC_BACKEND_ERROR};
use crate::model::activity::{DailyActivity, NewDailyActivity};
use crate::model::attendance::AttendanceSubmission;
use crate::model::employee::EmployeeRecord;
use crate::model::user::{LoginRequest, User, UserPayload};

/// `{ "message": ... }` envelope the backend uses for outcomes and errors.
#[derive(Debug, Deserialize)]
struct MessageBody {
    message: Option<String>,
}

/// Typed client for the attendance backend REST API. Cheap to clone; the
/// underlying `reqwest::Client` pools connections.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps a non-2xx response to `ApiError::Backend`, carrying the
    /// server-supplied message when one can be parsed.
    async fn check(resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp
            .json::<MessageBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| GENERIC_BACKEND_ERROR.to_string());
        warn!(status = status.as_u16(), %message, "backend rejected request");
        Err(ApiError::Backend {
            status: status.as_u16(),
            message,
        })
    }

    async fn message_of(resp: Response) -> Option<String> {
        resp.json::<MessageBody>().await.ok().and_then(|b| b.message)
    }

    /// `GET /api/employees/{nip}`.
    #[instrument(skip(self), fields(request_id = %Uuid::new_v4()))]
    pub async fn get_employee(&self, nip: &str) -> Result<EmployeeRecord, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/api/employees/{nip}")))
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        let record = resp.json::<EmployeeRecord>().await?;
        debug!(nip, full_name = %record.full_name, "employee resolved");
        Ok(record)
    }

    /// `GET /api/daily-activities`, optionally scoped to one date.
    #[instrument(skip(self), fields(request_id = %Uuid::new_v4()))]
    pub async fn list_daily_activities(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Vec<DailyActivity>, ApiError> {
        let mut req = self.http.get(self.url("/api/daily-activities"));
        if let Some(date) = date {
            req = req.query(&[("date", date.format("%Y-%m-%d").to_string())]);
        }
        let resp = Self::check(req.send().await?).await?;
        Ok(resp.json().await?)
    }

    /// `POST /api/daily-activities`. Returns the server message, if any.
    #[instrument(skip(self, activity), fields(request_id = %Uuid::new_v4()))]
    pub async fn create_daily_activity(
        &self,
        activity: &NewDailyActivity,
    ) -> Result<Option<String>, ApiError> {
        let resp = self
            .http
            .post(self.url("/api/daily-activities"))
            .json(activity)
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        Ok(Self::message_of(resp).await)
    }

    /// `POST /api/attendance`. Returns the server message, if any.
    #[instrument(skip(self, submission), fields(request_id = %Uuid::new_v4()))]
    pub async fn submit_attendance(
        &self,
        submission: &AttendanceSubmission,
    ) -> Result<Option<String>, ApiError> {
        let resp = self
            .http
            .post(self.url("/api/attendance"))
            .json(submission)
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        Ok(Self::message_of(resp).await)
    }

    /// `GET /api/users`.
    #[instrument(skip(self), fields(request_id = %Uuid::new_v4()))]
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let resp = Self::check(self.http.get(self.url("/api/users")).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// `POST /api/users`.
    #[instrument(skip(self, payload), fields(request_id = %Uuid::new_v4(), username = %payload.username))]
    pub async fn create_user(&self, payload: &UserPayload) -> Result<Option<String>, ApiError> {
        let resp = self
            .http
            .post(self.url("/api/users"))
            .json(payload)
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        Ok(Self::message_of(resp).await)
    }

    /// `PUT /api/users/{id}`.
    #[instrument(skip(self, payload), fields(request_id = %Uuid::new_v4(), username = %payload.username))]
    pub async fn update_user(
        &self,
        id: u64,
        payload: &UserPayload,
    ) -> Result<Option<String>, ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/api/users/{id}")))
            .json(payload)
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        Ok(Self::message_of(resp).await)
    }

    /// `DELETE /api/users/{id}`.
    #[instrument(skip(self), fields(request_id = %Uuid::new_v4()))]
    pub async fn delete_user(&self, id: u64) -> Result<Option<String>, ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/users/{id}")))
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        Ok(Self::message_of(resp).await)
    }

    /// `POST /api/auth/login`. A 401 comes back as `ApiError::Backend`
    /// carrying the backend's own "wrong credentials" message.
    #[instrument(skip(self, credentials), fields(request_id = %Uuid::new_v4(), username = %credentials.username))]
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Option<String>, ApiError> {
        let resp = self
            .http
            .post(self.url("/api/auth/login"))
            .json(credentials)
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        Ok(Self::message_of(resp).await)
    }
}
