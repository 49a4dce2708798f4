use std::collections::hash_map;
use std::collections::HashMap;

/// Required keys mapped to their trimmed values.
///
/// Only produced by a successful validation, so every value is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedConfig {
    values: HashMap<String, String>,
}

impl ValidatedConfig {
    pub(crate) fn insert(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Like [`get`](Self::get), for keys the caller knows were validated.
    pub fn require(&self, key: &str) -> anyhow::Result<&str> {
        self.get(key)
            .ok_or_else(|| anyhow::anyhow!("{} was not part of the validated configuration", key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.values
    }
}

impl IntoIterator for ValidatedConfig {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl From<ValidatedConfig> for HashMap<String, String> {
    fn from(config: ValidatedConfig) -> Self {
        config.values
    }
}
