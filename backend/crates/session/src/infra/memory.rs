//! In-memory credential store

use std::collections::HashMap;

use crate::domain::credential::{CredentialKey, CredentialStore};

/// `HashMap`-backed credential store
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    values: HashMap<CredentialKey, String>,
}

impl MemoryCredentialStore {
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: CredentialKey) -> Option<String> {
        self.values.get(&key).filter(|v| !v.is_empty()).cloned()
    }

    fn set(&mut self, key: CredentialKey, value: &str) {
        self.values.insert(key, value.to_string());
    }

    fn delete(&mut self, key: CredentialKey) {
        self.values.remove(&key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_delete() {
        let mut store = MemoryCredentialStore::default();
        assert!(store.get(CredentialKey::AccessToken).is_none());

        store.set(CredentialKey::AccessToken, "a");
        store.set(CredentialKey::AccessToken, "b");
        assert_eq!(store.get(CredentialKey::AccessToken).as_deref(), Some("b"));

        store.delete(CredentialKey::AccessToken);
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut store = MemoryCredentialStore::default();
        store.set(CredentialKey::AccessToken, "a");
        store.set(CredentialKey::RefreshToken, "r");

        store.clear();
        assert!(store.is_empty());
    }
}
