use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Which form variant produced the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AttendanceType {
    Internal,
    External,
}

/// Wire payload for `POST /api/attendance`. Built transiently from the
/// validated form state on each submit; never stored client-side.
///
/// `activity_type` is the `"{main} - {sub}"` taxonomy string and
/// `activity_name_detail` the free-text activity name. The optional fields
/// are populated per variant: `nip`/`unit_kerja` for internal staff,
/// `instansi`/`jabatan` for external guests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSubmission {
    pub attendance_type: AttendanceType,
    pub full_name: String,
    pub activity_type: String,
    pub activity_name_detail: String,
    /// `YYYY-MM-DD`.
    pub attendance_date: String,
    /// `HH:MM:00`. Seconds are always zeroed.
    pub attendance_time: String,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_kerja: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instansi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jabatan: Option<String>,
}
