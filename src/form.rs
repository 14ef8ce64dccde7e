//! Attendance form state, updated exclusively through [`reduce`].
//!
//! The whole form is one record plus an action enum, so every transition
//! is explicit and the category invariant (no sub-category without its
//! main category) is enforced in one place.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::model::activity::PrefillParams;
use crate::model::attendance::{AttendanceSubmission, AttendanceType};
use crate::model::category::{CategorySelection, MainCategory};
use crate::model::employee::EmployeeRecord;

/// Fields specific to the internal-employee tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternalFields {
    pub nip: String,
    pub full_name: String,
    pub unit_kerja: String,
    /// Last lookup failure, shown inline next to the NIP input.
    pub nip_error: Option<String>,
}

/// Fields specific to the external-guest tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalFields {
    pub full_name: String,
    pub instansi: String,
    pub jabatan: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub active_tab: AttendanceType,
    pub internal: InternalFields,
    pub external: ExternalFields,
    pub category: CategorySelection,
    pub activity_detail: String,
    pub notes: String,
    /// Date to submit; `None` means "today at submit time".
    pub attendance_date: Option<chrono::NaiveDate>,
    /// Exactly one submission may be outstanding; inputs and the submit
    /// control are disabled while this is set.
    pub submitting: bool,
    pub lookup_in_progress: bool,
    /// Raised after a lookup settles so the UI can refocus the NIP input;
    /// the UI clears it once consumed.
    pub refocus_nip: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            active_tab: AttendanceType::Internal,
            internal: InternalFields::default(),
            external: ExternalFields::default(),
            category: CategorySelection::default(),
            activity_detail: String::new(),
            notes: String::new(),
            attendance_date: None,
            submitting: false,
            lookup_in_progress: false,
            refocus_nip: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum FormAction {
    SelectTab(AttendanceType),

    SetNip(String),
    LookupStarted,
    LookupResolved(EmployeeRecord),
    LookupFailed { message: String },
    /// Lookup finished one way or the other; drops the busy flag and asks
    /// the UI to refocus the NIP input.
    LookupSettled,

    SetInternalName(String),
    SetUnitKerja(String),
    SetExternalName(String),
    SetInstansi(String),
    SetJabatan(String),

    SelectMainCategory(MainCategory),
    SelectSubCategory(String),
    SetActivityDetail(String),
    SetNotes(String),
    SetDate(chrono::NaiveDate),
    ApplyPrefill(PrefillParams),

    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed,
}

/// Applies one action. Infallible: actions that would create an invalid
/// state (a sub-category outside the selected main) are dropped, which
/// mirrors the UI never offering them.
pub fn reduce(state: &mut FormState, action: FormAction) {
    match action {
        FormAction::SelectTab(tab) => state.active_tab = tab,

        FormAction::SetNip(nip) => {
            // Empty identifier clears the derived fields and any error
            // without touching the network. Any lookup still pending for
            // the old value is superseded, so the busy flag drops here;
            // a non-empty edit raises it again via LookupStarted.
            if nip.is_empty() {
                state.internal.full_name.clear();
                state.internal.unit_kerja.clear();
                state.internal.nip_error = None;
                state.lookup_in_progress = false;
            }
            state.internal.nip = nip;
        }
        FormAction::LookupStarted => {
            state.lookup_in_progress = true;
            state.internal.nip_error = None;
        }
        FormAction::LookupResolved(record) => {
            state.internal.full_name = record.full_name;
            state.internal.unit_kerja = record.unit_kerja;
            state.internal.nip_error = None;
        }
        FormAction::LookupFailed { message } => {
            state.internal.full_name.clear();
            state.internal.unit_kerja.clear();
            state.internal.nip_error = Some(message);
        }
        FormAction::LookupSettled => {
            state.lookup_in_progress = false;
            state.refocus_nip = true;
        }

        FormAction::SetInternalName(name) => state.internal.full_name = name,
        FormAction::SetUnitKerja(unit) => state.internal.unit_kerja = unit,
        FormAction::SetExternalName(name) => state.external.full_name = name,
        FormAction::SetInstansi(instansi) => state.external.instansi = instansi,
        FormAction::SetJabatan(jabatan) => state.external.jabatan = jabatan,

        FormAction::SelectMainCategory(main) => state.category.select_main(main),
        FormAction::SelectSubCategory(sub) => {
            let _ = state.category.select_sub(&sub);
        }
        FormAction::SetActivityDetail(detail) => state.activity_detail = detail,
        FormAction::SetNotes(notes) => state.notes = notes,
        FormAction::SetDate(date) => state.attendance_date = Some(date),
        FormAction::ApplyPrefill(prefill) => {
            if let Some(date) = prefill.activity_date {
                state.attendance_date = Some(date);
            }
        }

        FormAction::SubmitStarted => state.submitting = true,
        FormAction::SubmitSucceeded => {
            state.submitting = false;
            state.internal = InternalFields::default();
            state.external = ExternalFields::default();
            state.category.clear();
            state.activity_detail.clear();
            state.notes.clear();
        }
        FormAction::SubmitFailed => state.submitting = false,
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0} wajib diisi.")]
pub struct ValidationError(pub String);

/// Validates the current state and assembles the wire payload, or reports
/// the missing fields. Runs before any network I/O; a failure here means
/// no request is issued at all.
pub fn build_submission(
    state: &FormState,
    now: NaiveDateTime,
) -> Result<AttendanceSubmission, ValidationError> {
    let mut missing: Vec<&str> = Vec::new();

    match state.active_tab {
        AttendanceType::Internal => {
            if state.internal.nip.trim().is_empty() {
                missing.push("NIP");
            }
            if state.internal.full_name.trim().is_empty() {
                missing.push("Nama Lengkap");
            }
            if state.internal.unit_kerja.trim().is_empty() {
                missing.push("Unit Kerja");
            }
        }
        AttendanceType::External => {
            if state.external.full_name.trim().is_empty() {
                missing.push("Nama Lengkap");
            }
            if state.external.instansi.trim().is_empty() {
                missing.push("Asal Instansi");
            }
            if state.external.jabatan.trim().is_empty() {
                missing.push("Jabatan");
            }
        }
    }
    if !state.category.is_complete() {
        missing.push("Kategori Kegiatan");
    }
    if state.activity_detail.trim().is_empty() {
        missing.push("Nama Kegiatan");
    }

    if !missing.is_empty() {
        return Err(ValidationError(missing.join(", ")));
    }

    // Checked complete above.
    let activity_type = state
        .category
        .activity_type()
        .ok_or_else(|| ValidationError("Kategori Kegiatan".to_string()))?;

    let attendance_date = state.attendance_date.unwrap_or_else(|| now.date());

    let (full_name, nip, unit_kerja, instansi, jabatan) = match state.active_tab {
        AttendanceType::Internal => (
            state.internal.full_name.clone(),
            Some(state.internal.nip.clone()),
            Some(state.internal.unit_kerja.clone()),
            None,
            None,
        ),
        AttendanceType::External => (
            state.external.full_name.clone(),
            None,
            None,
            Some(state.external.instansi.clone()),
            Some(state.external.jabatan.clone()),
        ),
    };

    Ok(AttendanceSubmission {
        attendance_type: state.active_tab,
        full_name,
        activity_type,
        activity_name_detail: state.activity_detail.trim().to_string(),
        attendance_date: attendance_date.format("%Y-%m-%d").to_string(),
        attendance_time: now.time().format("%H:%M:00").to_string(),
        notes: state.notes.clone(),
        nip,
        unit_kerja,
        instansi,
        jabatan,
    })
}
