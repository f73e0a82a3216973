//! Map-backed configuration source.

use std::collections::HashMap;

use dewflow_app::ports::ConfigSource;

/// [`ConfigSource`] backed by a plain string map. Absent keys read as empty,
/// matching the host's flat key/value semantics.
#[derive(Debug, Default)]
pub struct MapConfig {
    entries: HashMap<String, String>,
}

impl MapConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder-style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl ConfigSource for MapConfig {
    fn get(&self, key: &str) -> String {
        self.entries.get(key).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_value_for_present_key() {
        let config = MapConfig::new().with("ZoneName1", "Cellar");
        assert_eq!(config.get("ZoneName1"), "Cellar");
    }

    #[test]
    fn should_return_empty_string_for_absent_key() {
        let config = MapConfig::new();
        assert_eq!(config.get("ZoneName1"), "");
    }

    #[test]
    fn should_collect_from_pairs() {
        let config: MapConfig = [("ZoneName1", "Cellar"), ("DebugTrace", "true")]
            .into_iter()
            .collect();
        assert_eq!(config.get("DebugTrace"), "true");
    }
}
