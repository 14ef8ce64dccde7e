use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use moka::future::Cache;
use tracing::debug;

use crate::client::ApiClient;
use crate::model::employee::EmployeeRecord;

/// How a settled lookup should be applied to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Empty identifier: clear name/unit/error, nothing was fetched.
    Cleared,
    Found(EmployeeRecord),
    /// Backend said no, or the backend was unreachable. `network` selects
    /// which notification the caller shows.
    Failed { message: String, network: bool },
    /// A newer edit arrived while this lookup was waiting or in flight;
    /// the result (if any) must not be applied.
    Superseded,
}

/// Debounced NIP resolver.
///
/// Every call takes a fresh generation from an atomic counter. The call
/// sleeps out the debounce window, then bails if a newer generation exists,
/// and checks again after the response arrives — so with rapid edits at
/// most the last one reaches the network, and a response that raced past a
/// newer edit is discarded instead of overwriting its result.
pub struct EmployeeLookup {
    client: ApiClient,
    cache: Cache<String, EmployeeRecord>,
    generation: AtomicU64,
    debounce: Duration,
}

impl EmployeeLookup {
    pub fn new(client: ApiClient, debounce: Duration) -> Self {
        Self {
            client,
            cache: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(Duration::from_secs(3600))
                .build(),
            generation: AtomicU64::new(0),
            debounce,
        }
    }

    fn bump(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Resolves `nip` after the debounce window. Call once per edit; stale
    /// calls settle as [`LookupOutcome::Superseded`] and are no-ops.
    pub async fn lookup(&self, nip: &str) -> LookupOutcome {
        let generation = self.bump();

        if nip.is_empty() {
            // Clearing the field also invalidates any pending lookup.
            return LookupOutcome::Cleared;
        }

        tokio::time::sleep(self.debounce).await;
        if !self.is_current(generation) {
            debug!(nip, generation, "lookup superseded before dispatch");
            return LookupOutcome::Superseded;
        }

        if let Some(record) = self.cache.get(nip).await {
            debug!(nip, "employee resolved from cache");
            return LookupOutcome::Found(record);
        }

        let result = self.client.get_employee(nip).await;
        if !self.is_current(generation) {
            debug!(nip, generation, "stale lookup response discarded");
            return LookupOutcome::Superseded;
        }

        match result {
            Ok(record) => {
                self.cache.insert(nip.to_string(), record.clone()).await;
                LookupOutcome::Found(record)
            }
            Err(err) => LookupOutcome::Failed {
                network: err.is_network(),
                message: err.user_message(),
            },
        }
    }
}

impl LookupOutcome {
    /// True when the lookup actually settled for the current edit, i.e.
    /// the UI should drop its busy state and refocus the NIP input.
    pub fn settled(&self) -> bool {
        !matches!(self, LookupOutcome::Superseded)
    }

    pub fn was_fetched(&self) -> bool {
        matches!(self, LookupOutcome::Found(_) | LookupOutcome::Failed { .. })
    }
}
