use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read-only lookup into a set of named text variables.
///
/// Returns `None` when the variable is absent. Blank values are returned as-is;
/// deciding what counts as usable is the validator's job.
#[cfg_attr(test, mockall::automock)]
pub trait EnvStore {
    fn var(&self, key: &str) -> Option<String>;
}

impl<T: EnvStore + ?Sized> EnvStore for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

impl<S: BuildHasher> EnvStore for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvStore for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
