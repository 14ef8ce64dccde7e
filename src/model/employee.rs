use serde::{Deserialize, Serialize};

/// Employee master data resolved from a NIP, as served by
/// `GET /api/employees/{nip}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub full_name: String,
    pub unit_kerja: String,
}
