use chrono::NaiveDate;
use tracing::info;

use crate::client::ApiClient;
use crate::model::activity::{DailyActivity, FALLBACK_ACTIVITY_NAME};
use crate::notify::Notifier;

/// In-memory, read-only copy of the daily-activity catalog, optionally
/// seeded with a placeholder entry for an activity name arriving through a
/// QR pre-fill link.
#[derive(Default)]
pub struct ActivityCatalog {
    activities: Vec<DailyActivity>,
    pub loading: bool,
    /// The "auto-filled from link" notice fires at most once per catalog.
    announced_prefill: bool,
}

impl ActivityCatalog {
    pub fn activities(&self) -> &[DailyActivity] {
        &self.activities
    }

    /// Dropdown entries: every catalog name plus the constant catch-all.
    pub fn options(&self) -> Vec<String> {
        let mut options: Vec<String> = self
            .activities
            .iter()
            .map(|a| a.activity_name.clone())
            .collect();
        options.push(FALLBACK_ACTIVITY_NAME.to_string());
        options
    }

    /// Fetches the catalog. On failure the previous contents stay as they
    /// were (empty on a first-load failure) and an error notification is
    /// emitted; the operation is not retried.
    pub async fn load(
        &mut self,
        client: &ApiClient,
        date: Option<NaiveDate>,
        prefill_name: Option<&str>,
        notifier: &Notifier,
    ) {
        self.loading = true;
        let result = client.list_daily_activities(date).await;
        self.loading = false;

        let mut fetched = match result {
            Ok(fetched) => fetched,
            Err(err) => {
                let title = if err.is_network() {
                    "Kesalahan Jaringan"
                } else {
                    "Gagal Mengambil Kegiatan"
                };
                notifier.error(title, err.user_message());
                return;
            }
        };

        if let Some(name) = prefill_name {
            if !fetched.iter().any(|a| a.activity_name == name) {
                fetched.push(DailyActivity::synthetic(name));
                if !self.announced_prefill {
                    self.announced_prefill = true;
                    notifier.info(
                        "Kegiatan Terisi Otomatis",
                        format!("Kegiatan \"{name}\" diisi otomatis dari tautan."),
                    );
                }
            }
        } else if fetched.is_empty() {
            notifier.info(
                "Tidak Ada Kegiatan",
                "Belum ada kegiatan terjadwal hari ini.",
            );
        }

        info!(count = fetched.len(), "daily activity catalog loaded");
        self.activities = fetched;
    }
}
