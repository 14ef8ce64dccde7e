use tracing::info;

use crate::client::ApiClient;
use crate::model::user::LoginRequest;
use crate::notify::Notifier;

/// Admin login state. The flag only gates client-side navigation; it is
/// not a security boundary — the backend issues no token to enforce.
#[derive(Default)]
pub struct Session {
    authenticated: bool,
    pub authenticating: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    /// Posts the credentials. Success flips the flag; any failure leaves
    /// it unset and surfaces a notification.
    pub async fn login(
        &mut self,
        client: &ApiClient,
        notifier: &Notifier,
        username: &str,
        password: &str,
    ) -> bool {
        if self.authenticating {
            return false;
        }

        self.authenticating = true;
        let result = client
            .login(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await;
        self.authenticating = false;

        match result {
            Ok(message) => {
                self.authenticated = true;
                info!(username, "admin logged in");
                notifier.success(
                    "Login Berhasil",
                    message.unwrap_or_else(|| "Anda berhasil masuk.".to_string()),
                );
                true
            }
            Err(err) => {
                let title = if err.is_network() {
                    "Kesalahan Jaringan"
                } else {
                    "Login Gagal"
                };
                notifier.error(title, err.user_message());
                false
            }
        }
    }
}
