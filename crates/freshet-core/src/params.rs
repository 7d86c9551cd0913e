//! The [`ParameterTable`] runtime configuration source.
//!
//! Components read their settings from a table of `section/key` entries
//! populated by the host application before block construction. File
//! parsing is out of scope here; whatever loads an input deck writes the
//! resulting entries into a table with [`set`](ParameterTable::set).

use crate::error::ParameterError;
use indexmap::IndexMap;

/// A two-level `section -> key -> value` table of runtime parameters.
///
/// Values are stored as strings and converted by the typed getters, so a
/// present-but-malformed value surfaces as an error at construction time
/// instead of being silently replaced by a default. Backed by [`IndexMap`]
/// so iteration and lookup order are deterministic.
///
/// # Examples
///
/// ```
/// use freshet_core::ParameterTable;
///
/// let mut params = ParameterTable::new();
/// params.set_real("hydro", "iso_sound_speed", 1.0);
/// assert_eq!(params.get_real("hydro", "iso_sound_speed").unwrap(), 1.0);
/// assert_eq!(params.get_real_or("hydro", "dfloor", 1e-10).unwrap(), 1e-10);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ParameterTable {
    sections: IndexMap<String, IndexMap<String, String>>,
}

impl ParameterTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            sections: IndexMap::new(),
        }
    }

    /// Insert or overwrite an entry.
    pub fn set(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
    }

    /// Insert or overwrite a real-valued entry.
    ///
    /// The value is stored via `f64`'s `Display`, which round-trips
    /// exactly through [`get_real`](Self::get_real).
    pub fn set_real(&mut self, section: &str, key: &str, value: f64) {
        self.set(section, key, value.to_string());
    }

    /// Raw string lookup. `None` if the section or key is absent.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)?
            .get(key)
            .map(String::as_str)
    }

    /// Whether an entry exists.
    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    /// Look up a required real value.
    ///
    /// # Errors
    ///
    /// [`ParameterError::Missing`] if the entry is absent,
    /// [`ParameterError::NotReal`] if it does not parse as `f64`.
    pub fn get_real(&self, section: &str, key: &str) -> Result<f64, ParameterError> {
        let raw = self
            .get(section, key)
            .ok_or_else(|| ParameterError::Missing {
                section: section.to_string(),
                key: key.to_string(),
            })?;
        raw.trim()
            .parse::<f64>()
            .map_err(|_| ParameterError::NotReal {
                section: section.to_string(),
                key: key.to_string(),
                value: raw.to_string(),
            })
    }

    /// Look up an optional real value, falling back to `default` when the
    /// entry is absent.
    ///
    /// # Errors
    ///
    /// [`ParameterError::NotReal`] if the entry is present but malformed.
    /// A malformed explicit value is a configuration mistake, not an
    /// invitation to use the default.
    pub fn get_real_or(
        &self,
        section: &str,
        key: &str,
        default: f64,
    ) -> Result<f64, ParameterError> {
        match self.get(section, key) {
            None => Ok(default),
            Some(_) => self.get_real(section, key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn get_missing_returns_none() {
        let params = ParameterTable::new();
        assert_eq!(params.get("hydro", "iso_sound_speed"), None);
        assert!(!params.contains("hydro", "iso_sound_speed"));
    }

    #[test]
    fn set_then_get() {
        let mut params = ParameterTable::new();
        params.set("hydro", "iso_sound_speed", "0.5");
        assert_eq!(params.get("hydro", "iso_sound_speed"), Some("0.5"));
        assert!(params.contains("hydro", "iso_sound_speed"));
    }

    #[test]
    fn overwrite_replaces_value() {
        let mut params = ParameterTable::new();
        params.set_real("hydro", "dfloor", 1e-5);
        params.set_real("hydro", "dfloor", 1e-8);
        assert_eq!(params.get_real("hydro", "dfloor").unwrap(), 1e-8);
    }

    #[test]
    fn sections_are_isolated() {
        let mut params = ParameterTable::new();
        params.set_real("hydro", "dfloor", 1e-5);
        assert!(!params.contains("mesh", "dfloor"));
        assert!(matches!(
            params.get_real("mesh", "dfloor"),
            Err(ParameterError::Missing { .. })
        ));
    }

    #[test]
    fn get_real_missing_is_error() {
        let params = ParameterTable::new();
        match params.get_real("hydro", "iso_sound_speed") {
            Err(ParameterError::Missing { section, key }) => {
                assert_eq!(section, "hydro");
                assert_eq!(key, "iso_sound_speed");
            }
            other => panic!("expected Missing, got {other:?}"),
        }
    }

    #[test]
    fn get_real_malformed_is_error() {
        let mut params = ParameterTable::new();
        params.set("hydro", "iso_sound_speed", "fast");
        assert!(matches!(
            params.get_real("hydro", "iso_sound_speed"),
            Err(ParameterError::NotReal { .. })
        ));
    }

    #[test]
    fn get_real_accepts_surrounding_whitespace() {
        let mut params = ParameterTable::new();
        params.set("hydro", "iso_sound_speed", " 2.5 ");
        assert_eq!(params.get_real("hydro", "iso_sound_speed").unwrap(), 2.5);
    }

    #[test]
    fn get_real_or_uses_default_only_when_absent() {
        let mut params = ParameterTable::new();
        assert_eq!(params.get_real_or("hydro", "dfloor", 1e-10).unwrap(), 1e-10);

        params.set_real("hydro", "dfloor", 1e-4);
        assert_eq!(params.get_real_or("hydro", "dfloor", 1e-10).unwrap(), 1e-4);
    }

    #[test]
    fn get_real_or_rejects_malformed_value() {
        let mut params = ParameterTable::new();
        params.set("hydro", "dfloor", "tiny");
        assert!(matches!(
            params.get_real_or("hydro", "dfloor", 1e-10),
            Err(ParameterError::NotReal { .. })
        ));
    }

    proptest! {
        #[test]
        fn set_real_round_trips_exactly(value in prop::num::f64::NORMAL) {
            let mut params = ParameterTable::new();
            params.set_real("hydro", "value", value);
            prop_assert_eq!(params.get_real("hydro", "value").unwrap(), value);
        }
    }
}
