//! Environment variable expansion for configuration strings.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::ConfigError;

static VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}").unwrap());

/// Expand `${VAR}` and `${VAR:-default}` references in a config value.
///
/// `field` names the config field for error reporting (e.g. `site.title`).
///
/// # Errors
///
/// Returns [`ConfigError::EnvVar`] when a referenced variable without a
/// default is unset.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut missing: Option<String> = None;
    let expanded = VAR_RE.replace_all(value, |caps: &Captures| {
        let name = &caps[1];
        match std::env::var(name) {
            Ok(v) => v,
            Err(_) => caps.get(2).map_or_else(
                || {
                    missing.get_or_insert_with(|| name.to_owned());
                    String::new()
                },
                |default| default.as_str().to_owned(),
            ),
        }
    });

    match missing {
        Some(name) => Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{name}}} not set"),
        }),
        None => Ok(expanded.into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_value_unchanged() {
        assert_eq!(expand_env("plain", "f").unwrap(), "plain");
    }

    #[test]
    fn test_set_variable_expanded() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("PAPYR_EXPAND_TEST", "value");
        }
        assert_eq!(
            expand_env("x-${PAPYR_EXPAND_TEST}-y", "f").unwrap(),
            "x-value-y"
        );
        unsafe {
            std::env::remove_var("PAPYR_EXPAND_TEST");
        }
    }

    #[test]
    fn test_unset_variable_with_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("PAPYR_EXPAND_UNSET");
        }
        assert_eq!(
            expand_env("${PAPYR_EXPAND_UNSET:-fallback}", "f").unwrap(),
            "fallback"
        );
    }

    #[test]
    fn test_unset_variable_without_default_is_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("PAPYR_EXPAND_MISSING");
        }
        let err = expand_env("${PAPYR_EXPAND_MISSING}", "site.title").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("PAPYR_EXPAND_MISSING"));
        assert!(err.to_string().contains("site.title"));
    }
}
