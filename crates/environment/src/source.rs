use std::collections::BTreeMap;

use crate::snapshot::format_snapshot;

/// A read-only source of environment variables.
///
/// The process environment is the production source; [`StaticEnv`] lets
/// callers inject a fixed set of variables instead.
pub trait Environment {
    /// Returns the raw value of `key`, if present.
    fn var(&self, key: &str) -> Option<String>;

    /// Returns every `(key, value)` pair, in no particular order.
    fn vars(&self) -> Vec<(String, String)>;

    /// Returns the value of `key`, or `default` when unset or empty.
    ///
    /// An empty value is indistinguishable from an unset one.
    fn var_or(&self, key: &str, default: &str) -> String {
        match self.var(key) {
            Some(value) if !value.is_empty() => value,
            _ => default.to_string(),
        }
    }

    /// Returns all variables as sorted `KEY=VALUE` entries joined by `", "`.
    fn snapshot(&self) -> String {
        format_snapshot(self.vars())
    }
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    fn vars(&self) -> Vec<(String, String)> {
        // vars() panics on non-UTF-8 entries; go through vars_os instead.
        std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }
}

/// A fixed, in-memory set of variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticEnv {
    vars: BTreeMap<String, String>,
}

impl StaticEnv {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a variable.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for StaticEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Environment for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_env_var_or_returns_set_value() {
        let env = StaticEnv::new().with("PORT", "9090");
        assert_eq!(env.var_or("PORT", "8080"), "9090");
    }

    #[test]
    fn static_env_var_or_falls_back_when_missing() {
        let env = StaticEnv::new();
        assert_eq!(env.var_or("UNSET_KEY_X", "fallback"), "fallback");
    }

    #[test]
    fn static_env_var_or_treats_empty_as_unset() {
        let env = StaticEnv::new().with("UNSET_KEY_X", "");
        assert_eq!(env.var("UNSET_KEY_X").as_deref(), Some(""));
        assert_eq!(env.var_or("UNSET_KEY_X", "fallback"), "fallback");
    }

    #[test]
    fn static_env_snapshot_is_sorted() {
        let env: StaticEnv = [("B", "2"), ("A", "1")].into_iter().collect();
        assert_eq!(env.snapshot(), "A=1, B=2");
    }

    #[test]
    fn with_replaces_existing_value() {
        let env = StaticEnv::new().with("KEY", "old").with("KEY", "new");
        assert_eq!(env.var("KEY").as_deref(), Some("new"));
        assert_eq!(env.vars().len(), 1);
    }
}
