//! Process-environment guards for configuration tests.

use std::env;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Variables every digest configuration needs, set to valid values.
pub const REQUIRED_DIGEST_VARS: [(&str, &str); 4] = [
    ("NOTION_API_KEY", "secret"),
    ("NOTION_DATABASE_ID", "db-42"),
    ("EMAIL_SENDER", "digest@example.com"),
    ("EMAIL_RECIPIENTS", "me@example.com"),
];

/// Sets or removes variables for its lifetime and restores them on drop.
///
/// Guards hold a process-wide lock, so tests using them run one at a time.
pub struct EnvVarGuard {
    previous: Vec<(String, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
    /// Applies the required digest variables, then `overrides`. A `None`
    /// override removes the variable.
    pub fn digest(overrides: &[(&str, Option<&str>)]) -> Self {
        let mut changes: Vec<(&str, Option<&str>)> = REQUIRED_DIGEST_VARS
            .iter()
            .map(|(key, value)| (*key, Some(*value)))
            .collect();
        changes.extend_from_slice(overrides);
        Self::apply(&changes)
    }

    /// Applies `changes` in order. A `None` value removes the variable.
    pub fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let mut previous = Vec::with_capacity(changes.len());

        for (key, value) in changes {
            previous.push(((*key).to_owned(), env::var(key).ok()));
            unsafe {
                // SAFETY: ENV_LOCK serializes environment mutations in tests.
                match value {
                    Some(new_value) => env::set_var(key, new_value),
                    None => env::remove_var(key),
                }
            }
        }

        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        // Restore in reverse so repeated keys end at their original value.
        for (key, value) in self.previous.drain(..).rev() {
            unsafe {
                // SAFETY: the guard still holds ENV_LOCK.
                match value {
                    Some(original) => env::set_var(&key, original),
                    None => env::remove_var(&key),
                }
            }
        }
    }
}
