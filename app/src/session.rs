use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// The username/token pair that survives a restart of the client. Everything
/// else is refetched from the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredCredentials {
    pub username: String,
    pub token: String,
}

/// Collaborator responsible for persisting credentials between runs. The
/// app layer only ever reads and writes through this seam, so embedders can
/// back it with whatever storage the host environment offers.
pub trait CredentialStore: Send + Sync {
    fn save(&self, credentials: &StoredCredentials);
    fn load(&self) -> Option<StoredCredentials>;
    fn clear(&self);
}

impl<T: CredentialStore + ?Sized> CredentialStore for std::sync::Arc<T> {
    fn save(&self, credentials: &StoredCredentials) {
        (**self).save(credentials);
    }

    fn load(&self) -> Option<StoredCredentials> {
        (**self).load()
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// In-memory credential store. Credentials do not survive the process; fine
/// for tests and for embedders that manage persistence themselves.
#[derive(Default)]
pub struct MemoryCredentialStore {
    slot: Mutex<Option<StoredCredentials>>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn save(&self, credentials: &StoredCredentials) {
        let mut slot = self.slot.lock().expect("credential slot poisoned");
        *slot = Some(credentials.clone());
    }

    fn load(&self) -> Option<StoredCredentials> {
        let slot = self.slot.lock().expect("credential slot poisoned");
        slot.clone()
    }

    fn clear(&self) {
        let mut slot = self.slot.lock().expect("credential slot poisoned");
        *slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_clears() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.load(), None);

        let credentials = StoredCredentials {
            username: "alice".to_string(),
            token: "tok".to_string(),
        };
        store.save(&credentials);
        assert_eq!(store.load(), Some(credentials));

        store.clear();
        assert_eq!(store.load(), None);
    }
}
