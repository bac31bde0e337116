use std::collections::VecDeque;

use gloo_storage::Storage as GlooStorage;
use pumped_domain as domain;
use pumped_web_app::{Settings, SettingsRepository, log};

#[derive(Clone, Copy)]
pub struct LocalStorage;

const KEY_AUTH_TOKEN: &str = "authToken";
const KEY_SETTINGS: &str = "settings";
const KEY_LOG: &str = "log";

impl domain::SessionRepository for LocalStorage {
    /// The token is stored as plain text by the login view, not as JSON.
    fn read_auth_token(&self) -> Result<String, domain::ReadError> {
        match gloo_storage::LocalStorage::raw().get_item(KEY_AUTH_TOKEN) {
            Ok(Some(token)) if !token.is_empty() => Ok(token),
            Ok(_) => Err(domain::StorageError::NoSession.into()),
            Err(err) => Err(domain::StorageError::Other(format!("{err:?}").into()).into()),
        }
    }
}

impl SettingsRepository for LocalStorage {
    async fn read_settings(&self) -> Result<Settings, String> {
        match gloo_storage::LocalStorage::get(KEY_SETTINGS) {
            Ok(settings) => Ok(settings),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(Settings::default()),
                err => Err(err),
            },
        }
        .map_err(|err| err.to_string())
    }

    async fn write_settings(&self, settings: Settings) -> Result<(), String> {
        gloo_storage::LocalStorage::set(KEY_SETTINGS, settings).map_err(|err| err.to_string())
    }
}

impl log::Repository for LocalStorage {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        match gloo_storage::LocalStorage::get(KEY_LOG) {
            Ok(entries) => Ok(entries),
            Err(err) => match err {
                gloo_storage::errors::StorageError::KeyNotFound(_) => Ok(VecDeque::new()),
                err => Err(err),
            },
        }
        .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        log::prepend(&mut entries, entry);
        gloo_storage::LocalStorage::set(KEY_LOG, entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}
