//! Explicit application context (theme + language).
//!
//! # Responsibility
//! - Initialize the dark-mode flag from preference storage once at startup.
//! - Hold the transient language selection for the current run.
//! - Write the dark-mode flag back whenever it changes.
//!
//! # Invariants
//! - Defaults are `dark_mode = true` and the first picker language.
//! - Load and save failures are logged; the in-memory value is kept.
//! - The language selection is never persisted.

use crate::model::language::LanguageCode;
use crate::prefs::store::{PrefResult, PreferenceError, PreferenceStore};
use log::{info, warn};

/// Storage key for the JSON-encoded dark-mode flag.
pub const DARK_MODE_KEY: &str = "appTheme";

/// Process-wide view configuration passed explicitly to screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppContext {
    pub dark_mode: bool,
    pub language: LanguageCode,
}

impl Default for AppContext {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: LanguageCode::default(),
        }
    }
}

impl AppContext {
    /// Builds the startup context from stored preferences.
    ///
    /// A missing, unreadable or undecodable flag leaves the default in place.
    pub fn load(store: &impl PreferenceStore) -> Self {
        let mut context = Self::default();
        match read_dark_mode(store) {
            Ok(Some(dark_mode)) => {
                context.dark_mode = dark_mode;
                info!("event=prefs_load module=prefs status=ok dark_mode={dark_mode}");
            }
            Ok(None) => info!("event=prefs_load module=prefs status=default"),
            Err(err) => warn!("event=prefs_load module=prefs status=error error={err}"),
        }
        context
    }

    /// Updates the dark-mode flag and saves it when it changed.
    ///
    /// Returns whether the in-memory value changed. The save result is
    /// logged only.
    pub fn set_dark_mode(&mut self, store: &impl PreferenceStore, dark_mode: bool) -> bool {
        if self.dark_mode == dark_mode {
            return false;
        }
        self.dark_mode = dark_mode;
        if let Err(err) = write_dark_mode(store, dark_mode) {
            warn!("event=prefs_save module=prefs status=error key={DARK_MODE_KEY} error={err}");
        }
        true
    }

    /// Switches the language for the rest of the run.
    pub fn set_language(&mut self, language: LanguageCode) {
        self.language = language;
    }
}

/// Reads the stored dark-mode flag.
pub fn read_dark_mode(store: &impl PreferenceStore) -> PrefResult<Option<bool>> {
    let Some(raw) = store.get(DARK_MODE_KEY)? else {
        return Ok(None);
    };
    serde_json::from_str::<bool>(&raw)
        .map(Some)
        .map_err(|_| PreferenceError::InvalidValue {
            key: DARK_MODE_KEY.to_string(),
            value: raw,
        })
}

/// Writes the dark-mode flag as a JSON boolean.
pub fn write_dark_mode(store: &impl PreferenceStore, dark_mode: bool) -> PrefResult<()> {
    let encoded = if dark_mode { "true" } else { "false" };
    store.set(DARK_MODE_KEY, encoded)
}

#[cfg(test)]
mod tests {
    use super::{read_dark_mode, AppContext, DARK_MODE_KEY};
    use crate::db::DbError;
    use crate::model::language::LanguageCode;
    use crate::prefs::store::{
        MemoryPreferenceStore, PrefResult, PreferenceError, PreferenceStore,
    };

    struct UnavailableStore;

    impl PreferenceStore for UnavailableStore {
        fn get(&self, _key: &str) -> PrefResult<Option<String>> {
            Err(PreferenceError::Db(DbError::Sqlite(
                rusqlite::Error::QueryReturnedNoRows,
            )))
        }

        fn set(&self, _key: &str, _value: &str) -> PrefResult<()> {
            Err(PreferenceError::Db(DbError::Sqlite(
                rusqlite::Error::QueryReturnedNoRows,
            )))
        }
    }

    #[test]
    fn defaults_to_dark_mode_and_first_language() {
        let context = AppContext::load(&MemoryPreferenceStore::new());
        assert!(context.dark_mode);
        assert_eq!(context.language, LanguageCode::Ar);
    }

    #[test]
    fn load_reads_stored_flag() {
        let store = MemoryPreferenceStore::new();
        store.set(DARK_MODE_KEY, "false").unwrap();
        assert!(!AppContext::load(&store).dark_mode);
    }

    #[test]
    fn undecodable_flag_keeps_default() {
        let store = MemoryPreferenceStore::new();
        store.set(DARK_MODE_KEY, "maybe").unwrap();
        assert!(read_dark_mode(&store).is_err());
        assert!(AppContext::load(&store).dark_mode);
    }

    #[test]
    fn toggle_writes_back_only_on_change() {
        let store = MemoryPreferenceStore::new();
        let mut context = AppContext::load(&store);

        assert!(!context.set_dark_mode(&store, true));
        assert_eq!(store.get(DARK_MODE_KEY).unwrap(), None);

        assert!(context.set_dark_mode(&store, false));
        assert_eq!(store.get(DARK_MODE_KEY).unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn storage_failures_are_swallowed() {
        let mut context = AppContext::load(&UnavailableStore);
        assert!(context.dark_mode);
        assert!(context.set_dark_mode(&UnavailableStore, false));
        assert!(!context.dark_mode);
    }

    #[test]
    fn language_switch_is_in_memory_only() {
        let store = MemoryPreferenceStore::new();
        let mut context = AppContext::load(&store);
        context.set_language(LanguageCode::Fr);
        assert_eq!(context.language, LanguageCode::Fr);
        assert_eq!(store.get(DARK_MODE_KEY).unwrap(), None);
    }
}
