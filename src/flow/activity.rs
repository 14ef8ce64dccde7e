use chrono::NaiveDate;

use crate::client::ApiClient;
use crate::model::activity::NewDailyActivity;
use crate::model::category::{CategorySelection, MainCategory};
use crate::notify::Notifier;

/// Admin form for adding one daily activity to the catalog. Same taxonomy
/// as the attendance form; the catalog stores the flattened
/// `"{main} - {sub} - {detail}"` name.
#[derive(Default)]
pub struct ActivityInputForm {
    pub category: CategorySelection,
    pub activity_detail: String,
    pub activity_date: Option<NaiveDate>,
    pub submitting: bool,
}

impl ActivityInputForm {
    pub fn select_main(&mut self, main: MainCategory) {
        self.category.select_main(main);
    }

    pub fn select_sub(&mut self, sub: &str) -> Result<(), &'static str> {
        self.category.select_sub(sub)
    }

    fn combined_name(&self) -> Option<String> {
        let activity_type = self.category.activity_type()?;
        let detail = self.activity_detail.trim();
        if detail.is_empty() {
            return None;
        }
        Some(format!("{activity_type} - {detail}"))
    }

    /// Validates and posts the activity. On success the form resets for
    /// the next entry; on failure everything stays put.
    pub async fn submit(&mut self, client: &ApiClient, notifier: &Notifier) -> bool {
        if self.submitting {
            return false;
        }

        let (name, date) = match (self.combined_name(), self.activity_date) {
            (Some(name), Some(date)) => (name, date),
            _ => {
                notifier.error(
                    "Validasi Gagal",
                    "Kategori Utama, Sub Kategori Kegiatan, Nama Kegiatan, dan Tanggal wajib diisi.",
                );
                return false;
            }
        };

        let payload = NewDailyActivity {
            activity_name: name.clone(),
            activity_date: date.format("%Y-%m-%d").to_string(),
        };

        self.submitting = true;
        let result = client.create_daily_activity(&payload).await;
        self.submitting = false;

        match result {
            Ok(_) => {
                notifier.success(
                    "Kegiatan Berhasil Ditambahkan!",
                    format!("Kegiatan \"{name}\" telah tersimpan."),
                );
                self.category.clear();
                self.activity_detail.clear();
                self.activity_date = None;
                true
            }
            Err(err) => {
                let title = if err.is_network() {
                    "Kesalahan Jaringan"
                } else {
                    "Gagal Menambahkan Kegiatan"
                };
                notifier.error(title, err.user_message());
                false
            }
        }
    }
}
