// src/storage.rs

use crate::model::{Role, User};
use std::collections::HashMap;

pub const KEY_TOKEN: &str = "auth_token";
pub const KEY_USER: &str = "user";
pub const KEY_USER_NAME: &str = "user_name";
pub const KEY_USER_ROLE: &str = "user_role";
pub const KEY_USER_ID: &str = "user_id";

const SESSION_KEYS: [&str; 5] = [KEY_TOKEN, KEY_USER, KEY_USER_NAME, KEY_USER_ROLE, KEY_USER_ID];

/// Almacén clave-valor síncrono (localStorage en web, fichero JSON en escritorio).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Persistencia en un fichero JSON; se reescribe entero en cada cambio.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    path: std::path::PathBuf,
    values: HashMap<String, String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn open(path: impl Into<std::path::PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
                log::warn!("Almacén {} corrupto, se ignora: {err}", path.display());
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self { path, values }
    }

    fn flush(&self) {
        let result = serde_json::to_string_pretty(&self.values)
            .map_err(std::io::Error::other)
            .and_then(|json| std::fs::write(&self.path, json));
        if let Err(err) = result {
            log::error!("No se pudo guardar {}: {err}", self.path.display());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.flush();
        }
    }
}

/// `window.localStorage`
#[cfg(target_arch = "wasm32")]
pub struct BrowserStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::error!("localStorage no disponible; la sesión no se guardará");
        }
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set_item(key, value) {
                log::error!("localStorage.setItem({key}) falló: {err:?}");
            }
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(key);
        }
    }
}

/// Almacén por defecto según plataforma
#[cfg(not(target_arch = "wasm32"))]
pub fn platform_store() -> Box<dyn KeyValueStore> {
    let path = std::env::var("EDU_PORTAL_STORE")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "edu_portal_storage.json".to_string());
    Box::new(FileStore::open(path))
}

#[cfg(target_arch = "wasm32")]
pub fn platform_store() -> Box<dyn KeyValueStore> {
    Box::new(BrowserStore::open())
}

/// Vista tipada de las claves de sesión.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub token: String,
    pub user: Option<User>,
    pub user_name: String,
    pub role: Role,
    pub user_id: Option<i64>,
}

impl StoredSession {
    pub fn read(store: &dyn KeyValueStore) -> Option<Self> {
        let token = store.get(KEY_TOKEN).filter(|t| !t.is_empty())?;
        let user = store
            .get(KEY_USER)
            .and_then(|json| serde_json::from_str::<User>(&json).ok());
        let user_name = store
            .get(KEY_USER_NAME)
            .or_else(|| user.as_ref().map(|u| u.full_name.clone()))
            .unwrap_or_default();
        let role = store
            .get(KEY_USER_ROLE)
            .map(|r| Role::parse(&r))
            .unwrap_or_default();
        let user_id = store
            .get(KEY_USER_ID)
            .and_then(|id| id.trim().parse().ok())
            .or_else(|| user.as_ref().map(|u| u.id));

        Some(Self {
            token,
            user,
            user_name,
            role,
            user_id,
        })
    }

    /// Escribe las cinco claves tras un login/registro correcto.
    pub fn persist(store: &mut dyn KeyValueStore, token: &str, user: &User) -> Self {
        let role = user.role.unwrap_or_default();
        store.set(KEY_TOKEN, token);
        match serde_json::to_string(user) {
            Ok(json) => store.set(KEY_USER, &json),
            Err(err) => log::error!("No se pudo serializar el usuario: {err}"),
        }
        store.set(KEY_USER_NAME, &user.full_name);
        store.set(KEY_USER_ROLE, role.as_str());
        store.set(KEY_USER_ID, &user.id.to_string());

        Self {
            token: token.to_string(),
            user: Some(user.clone()),
            user_name: user.full_name.clone(),
            role,
            user_id: Some(user.id),
        }
    }

    pub fn clear(store: &mut dyn KeyValueStore) {
        for key in SESSION_KEYS {
            store.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher() -> User {
        User {
            id: 7,
            email: "marta@example.com".into(),
            full_name: "Marta Gil".into(),
            role: Some(Role::Teacher),
            created_at: None,
        }
    }

    #[test]
    fn persist_then_read_round_trips_session() {
        let mut store = MemoryStore::new();
        let written = StoredSession::persist(&mut store, "tok-1", &teacher());
        let read = StoredSession::read(&store).unwrap();
        assert_eq!(read, written);
        assert_eq!(store.get(KEY_USER_ROLE).as_deref(), Some("teacher"));
        assert_eq!(store.get(KEY_USER_ID).as_deref(), Some("7"));
    }

    #[test]
    fn missing_role_is_stored_as_student() {
        let mut store = MemoryStore::new();
        let mut user = teacher();
        user.role = None;
        StoredSession::persist(&mut store, "tok", &user);
        assert_eq!(StoredSession::read(&store).unwrap().role, Role::Student);
    }

    #[test]
    fn clear_removes_every_session_key() {
        let mut store = MemoryStore::new();
        StoredSession::persist(&mut store, "tok", &teacher());
        store.set("unrelated", "x");
        StoredSession::clear(&mut store);
        for key in SESSION_KEYS {
            assert_eq!(store.get(key), None, "{key}");
        }
        assert_eq!(store.get("unrelated").as_deref(), Some("x"));
        assert!(StoredSession::read(&store).is_none());
    }

    #[test]
    fn read_falls_back_to_user_json_for_name_and_id() {
        let mut store = MemoryStore::new();
        store.set(KEY_TOKEN, "tok");
        store.set(KEY_USER, &serde_json::to_string(&teacher()).unwrap());
        let session = StoredSession::read(&store).unwrap();
        assert_eq!(session.user_name, "Marta Gil");
        assert_eq!(session.user_id, Some(7));
        assert_eq!(session.role, Role::Student);
    }

    #[test]
    fn file_store_survives_reopen() {
        let path = std::env::temp_dir()
            .join(format!("edu_portal_store_{}.json", std::process::id()));
        {
            let mut store = FileStore::open(&path);
            store.set(KEY_TOKEN, "persisted");
        }
        let store = FileStore::open(&path);
        assert_eq!(store.get(KEY_TOKEN).as_deref(), Some("persisted"));
        let _ = std::fs::remove_file(&path);
    }
}
