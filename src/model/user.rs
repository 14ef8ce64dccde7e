use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Application role as the backend stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum Role {
    Admin,
    Pegawai,
    Tamu,
}

/// User as listed by `GET /api/users`. The backend never returns the
/// password and the client never keeps one around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub role: Role,
}

/// Write payload for user create/update. `password` is required on create
/// and sent on update only when the admin typed a new one.
#[derive(Debug, Clone, Serialize)]
pub struct UserPayload {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
}

/// Body for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
