use tracing::info;

use crate::client::ApiClient;
use crate::model::user::{User, UserPayload};
use crate::notify::Notifier;

/// User-management page state: the fetched list plus the request/response
/// flows behind the add/edit dialog and the delete buttons.
#[derive(Default)]
pub struct UserAdmin {
    users: Vec<User>,
    pub loading: bool,
    /// Last load failure, shown in place of the table.
    pub load_error: Option<String>,
}

impl UserAdmin {
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub async fn load(&mut self, client: &ApiClient, notifier: &Notifier) {
        self.loading = true;
        self.load_error = None;
        let result = client.list_users().await;
        self.loading = false;

        match result {
            Ok(users) => {
                info!(count = users.len(), "user list loaded");
                self.users = users;
            }
            Err(err) => {
                let title = if err.is_network() {
                    "Kesalahan Jaringan"
                } else {
                    "Error"
                };
                self.load_error = Some(err.user_message());
                notifier.error(title, err.user_message());
            }
        }
    }

    /// Create (no id) or update (id of the user being edited), then
    /// refresh the list from the backend so it reflects what was stored.
    /// Username is always required and a password is required on create;
    /// either miss blocks the save before any request is issued.
    pub async fn save(
        &mut self,
        client: &ApiClient,
        notifier: &Notifier,
        editing: Option<u64>,
        payload: &UserPayload,
    ) -> bool {
        let password_missing = editing.is_none()
            && payload
                .password
                .as_deref()
                .map_or(true, |p| p.trim().is_empty());
        if payload.username.trim().is_empty() || password_missing {
            notifier.error("Validasi Gagal", "Username dan password wajib diisi.");
            return false;
        }

        let result = match editing {
            Some(id) => client.update_user(id, payload).await,
            None => client.create_user(payload).await,
        };

        match result {
            Ok(_) => {
                notifier.success(
                    "Sukses",
                    if editing.is_some() {
                        "Pengguna berhasil diperbarui."
                    } else {
                        "Pengguna baru berhasil ditambahkan."
                    },
                );
                self.load(client, notifier).await;
                true
            }
            Err(err) => {
                notifier.error("Gagal Menyimpan", err.user_message());
                false
            }
        }
    }

    /// Deletes on the backend first; the local row disappears only after
    /// the backend confirmed.
    pub async fn delete(&mut self, client: &ApiClient, notifier: &Notifier, id: u64) -> bool {
        match client.delete_user(id).await {
            Ok(message) => {
                self.users.retain(|user| user.id != id);
                notifier.success(
                    "Pengguna Dihapus",
                    message.unwrap_or_else(|| "Pengguna berhasil dihapus.".to_string()),
                );
                true
            }
            Err(err) => {
                notifier.error("Gagal Menghapus", err.user_message());
                false
            }
        }
    }
}
