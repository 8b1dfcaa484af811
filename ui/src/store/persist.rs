//! Local persistence of the store slice that survives restarts.
//!
//! Native builds write `state.json` under the platform config directory;
//! web builds use `window.localStorage`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::theme::Theme;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "reactive-resume.state";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored state is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no storage backend available: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub logged_in: bool,
}

pub fn encode(state: &PersistedState) -> Result<String, StorageError> {
    Ok(serde_json::to_string(state)?)
}

pub fn decode(raw: &str) -> Result<PersistedState, StorageError> {
    Ok(serde_json::from_str(raw)?)
}

/// Load the persisted slice. A missing record is not an error.
pub fn load() -> Result<Option<PersistedState>, StorageError> {
    match read_raw()? {
        Some(raw) => decode(&raw).map(Some),
        None => Ok(None),
    }
}

pub fn save(state: &PersistedState) -> Result<(), StorageError> {
    write_raw(&encode(state)?)
}

#[cfg(not(target_arch = "wasm32"))]
fn state_file() -> Result<std::path::PathBuf, StorageError> {
    directories::ProjectDirs::from("me", "rxresu", "reactive-resume")
        .map(|dirs| dirs.config_dir().join("state.json"))
        .ok_or_else(|| StorageError::Unavailable("no home directory".into()))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_raw() -> Result<Option<String>, StorageError> {
    let path = state_file()?;
    match std::fs::read_to_string(&path) {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_raw(raw: &str) -> Result<(), StorageError> {
    let path = state_file()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, raw)?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| StorageError::Unavailable("localStorage is not accessible".into()))
}

#[cfg(target_arch = "wasm32")]
fn read_raw() -> Result<Option<String>, StorageError> {
    let storage = local_storage()?;
    storage
        .get_item(STORAGE_KEY)
        .map_err(|_| StorageError::Unavailable("localStorage read rejected".into()))
}

#[cfg(target_arch = "wasm32")]
fn write_raw(raw: &str) -> Result<(), StorageError> {
    let storage = local_storage()?;
    storage
        .set_item(STORAGE_KEY, raw)
        .map_err(|_| StorageError::Unavailable("localStorage write rejected".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let state = decode("{}").unwrap();
        assert_eq!(state, PersistedState::default());
        assert_eq!(state.theme, Theme::Light);
        assert!(!state.logged_in);
    }

    #[test]
    fn encoded_form_is_stable() {
        let state = PersistedState {
            theme: Theme::Dark,
            logged_in: true,
        };
        assert_eq!(
            encode(&state).unwrap(),
            r#"{"theme":"dark","logged_in":true}"#
        );
    }

    #[test]
    fn corrupt_record_is_a_json_error() {
        let err = decode("{\"theme\": 42").unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
        assert!(err.to_string().starts_with("stored state is not valid JSON"));
    }
}
