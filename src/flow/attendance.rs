use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tracing::info;

use crate::client::ApiClient;
use crate::flow::lookup::{EmployeeLookup, LookupOutcome};
use crate::form::{FormAction, FormState, build_submission, reduce};
use crate::model::activity::PrefillParams;
use crate::notify::Notifier;

/// Orchestrates the attendance form: one [`FormState`] record, the
/// debounced NIP lookup, and the single-submission guard.
///
/// Event-handler methods are synchronous where possible; the ones that
/// touch the network either return a future for the caller's event loop to
/// drive ([`Self::edit_nip`]) or suspend the calling handler
/// ([`Self::submit`]) while the rest of the UI stays responsive.
pub struct AttendanceForm {
    pub state: FormState,
    client: ApiClient,
    lookup: Arc<EmployeeLookup>,
    notifier: Notifier,
}

impl AttendanceForm {
    pub fn new(client: ApiClient, lookup_debounce: Duration, notifier: Notifier) -> Self {
        let lookup = Arc::new(EmployeeLookup::new(client.clone(), lookup_debounce));
        Self {
            state: FormState::default(),
            client,
            lookup,
            notifier,
        }
    }

    pub fn dispatch(&mut self, action: FormAction) {
        reduce(&mut self.state, action);
    }

    pub fn apply_prefill(&mut self, prefill: &PrefillParams) {
        self.dispatch(FormAction::ApplyPrefill(prefill.clone()));
    }

    /// Handles a NIP edit. State updates immediately; the returned future
    /// is the debounced lookup and must be spawned (or awaited) by the
    /// caller, then fed back through [`Self::apply_lookup`]. Each edit
    /// supersedes the ones still waiting.
    pub fn edit_nip(&mut self, value: &str) -> impl Future<Output = LookupOutcome> + use<> {
        self.dispatch(FormAction::SetNip(value.to_string()));
        if !value.is_empty() {
            self.dispatch(FormAction::LookupStarted);
        }
        let lookup = Arc::clone(&self.lookup);
        let nip = value.to_string();
        async move { lookup.lookup(&nip).await }
    }

    /// Applies a settled lookup. Superseded outcomes are dropped whole, so
    /// a stale response can never overwrite a newer one.
    pub async fn apply_lookup(&mut self, outcome: LookupOutcome) {
        match &outcome {
            LookupOutcome::Superseded | LookupOutcome::Cleared => {}
            LookupOutcome::Found(record) => {
                self.dispatch(FormAction::LookupResolved(record.clone()));
            }
            LookupOutcome::Failed { message, network } => {
                self.dispatch(FormAction::LookupFailed {
                    message: message.clone(),
                });
                if *network {
                    self.notifier.error(
                        "Terjadi Kesalahan",
                        "Gagal mengambil data pegawai. Coba lagi nanti.",
                    );
                } else {
                    self.notifier.error("Data Tidak Ditemukan", message.clone());
                }
            }
        }
        if outcome.was_fetched() {
            // Refocus lands after the field updates above have rendered.
            tokio::task::yield_now().await;
            self.dispatch(FormAction::LookupSettled);
        }
    }

    /// Validates and submits the form. Validation failures emit a
    /// notification and never reach the network. While one submission is
    /// outstanding, further calls are rejected rather than queued.
    /// Returns whether the attendance was recorded.
    pub async fn submit(&mut self) -> bool {
        if self.state.submitting {
            return false;
        }

        let payload = match build_submission(&self.state, Local::now().naive_local()) {
            Ok(payload) => payload,
            Err(err) => {
                self.notifier.error("Validasi Gagal", err.to_string());
                return false;
            }
        };

        self.dispatch(FormAction::SubmitStarted);
        match self.client.submit_attendance(&payload).await {
            Ok(message) => {
                self.dispatch(FormAction::SubmitSucceeded);
                info!(attendance_type = %payload.attendance_type, "attendance recorded");
                self.notifier.success(
                    "Absensi Berhasil!",
                    message.unwrap_or_else(|| {
                        "Terima kasih, absensi Anda telah tercatat.".to_string()
                    }),
                );
                true
            }
            Err(err) => {
                self.dispatch(FormAction::SubmitFailed);
                let title = if err.is_network() {
                    "Kesalahan Jaringan"
                } else {
                    "Absensi Gagal"
                };
                self.notifier.error(title, err.user_message());
                false
            }
        }
    }
}
