use super::roles::Role;
use super::storage::KeyValueStorage;
use crate::shared::config::AppConfig;
use serde::{Deserialize, Serialize};

/// Signed-in user record. Persisted as camelCase JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub territory_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dsr_id: Option<String>,
}

impl Session {
    /// Builds the session for a role from its fixed scope. A blank name
    /// becomes `Demo <ROLE>`.
    pub fn for_role(role: Role, display_name: &str) -> Self {
        let scope = role.scope();
        let name = match display_name.trim() {
            "" => format!("Demo {}", role.as_str()),
            trimmed => trimmed.to_string(),
        };
        Self {
            id: scope.user_id.to_string(),
            name,
            role,
            region_id: scope.region_id.map(str::to_string),
            area_id: scope.area_id.map(str::to_string),
            territory_id: scope.territory_id.map(str::to_string),
            dsr_id: scope.dsr_id.map(str::to_string),
        }
    }

    /// Up to two letters for the avatar badge
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Holds at most one signed-in user and mirrors it into storage
pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
    current: Option<Session>,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            current: None,
        }
    }

    /// Always succeeds. A failed write is logged and the in-memory session is
    /// kept.
    pub fn login(&mut self, role: Role, display_name: &str) -> &Session {
        let session = Session::for_role(role, display_name);
        log::info!("login as {} ({})", session.name, role);
        self.persist(&session);
        self.current.insert(session)
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.current.take() {
            log::info!("logout {}", session.id);
        }
        if let Err(e) = self.storage.remove(AppConfig::SESSION_STORAGE_KEY) {
            log::warn!("failed to clear persisted session: {}", e);
        }
    }

    /// Loads the persisted session. Malformed data counts as no session.
    pub fn restore(&mut self) -> Option<&Session> {
        let raw = self.storage.get(AppConfig::SESSION_STORAGE_KEY);
        self.current = raw.and_then(|json| match serde_json::from_str::<Session>(&json) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("ignoring malformed persisted session: {}", e);
                None
            }
        });
        if let Some(session) = self.current.clone() {
            self.persist(&session);
        }
        self.current.as_ref()
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self, session: &Session) {
        let json = match serde_json::to_string(session) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("failed to serialize session: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(AppConfig::SESSION_STORAGE_KEY, &json) {
            log::warn!("failed to persist session: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::storage::{MemoryStorage, StorageError};

    struct ReadOnlyStorage;

    impl KeyValueStorage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }

        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_login_uses_role_scope() {
        let mut store = SessionStore::new(MemoryStorage::new());
        let session = store.login(Role::Tsm, "Alice").clone();
        assert_eq!(session.id, "TSM1");
        assert_eq!(session.name, "Alice");
        assert_eq!(session.region_id.as_deref(), Some("R1"));
        assert_eq!(session.area_id.as_deref(), Some("A1"));
        assert_eq!(session.territory_id.as_deref(), Some("T1"));
        assert_eq!(session.dsr_id, None);
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_blank_name_gets_demo_name() {
        let mut store = SessionStore::new(MemoryStorage::new());
        assert_eq!(store.login(Role::Asm, "   ").name, "Demo ASM");
    }

    #[test]
    fn test_restore_on_fresh_store() {
        let mut store = SessionStore::new(MemoryStorage::new());
        let original = store.login(Role::Tsm, "Alice").clone();
        let storage = store.into_storage();

        let mut fresh = SessionStore::new(storage);
        assert_eq!(fresh.restore(), Some(&original));
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.login(Role::Dsr, "");
        store.logout();
        store.logout();
        assert!(store.current().is_none());
        let storage = store.into_storage();
        assert_eq!(storage.get(AppConfig::SESSION_STORAGE_KEY), None);
    }

    #[test]
    fn test_malformed_persisted_session_is_absent() {
        let mut storage = MemoryStorage::new();
        storage
            .set(AppConfig::SESSION_STORAGE_KEY, "{not json")
            .unwrap();
        let mut store = SessionStore::new(storage);
        assert!(store.restore().is_none());

        let mut storage = MemoryStorage::new();
        storage
            .set(
                AppConfig::SESSION_STORAGE_KEY,
                r#"{"id":"X1","name":"X","role":"CEO"}"#,
            )
            .unwrap();
        let mut store = SessionStore::new(storage);
        assert!(store.restore().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_survives_storage_failure() {
        let mut store = SessionStore::new(ReadOnlyStorage);
        assert_eq!(store.login(Role::Rsm, "Ravi").id, "RSM1");
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_persisted_json_is_camel_case() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store.login(Role::Dsr, "Rahul Sharma");
        let storage = store.into_storage();
        let json = storage.get(AppConfig::SESSION_STORAGE_KEY).unwrap();
        assert!(json.contains("\"dsrId\":\"DSR1\""));
        assert!(json.contains("\"role\":\"DSR\""));
    }

    #[test]
    fn test_initials() {
        let session = Session::for_role(Role::So, "priya singh");
        assert_eq!(session.initials(), "PS");
        assert_eq!(Session::for_role(Role::So, "").initials(), "DS");
    }
}
