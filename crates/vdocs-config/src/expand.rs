//! `${VAR}` expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Strings without `${` are returned unchanged, so a bare `$` (as in
/// `https://host/$path`) is never touched.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of a variable that is referenced but not set.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_set_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("VDOCS_TEST_EXPAND_SET", "docs.example.com");
        }
        let result = expand_env("https://${VDOCS_TEST_EXPAND_SET}", "site.base_url").unwrap();
        assert_eq!(result, "https://docs.example.com");
        unsafe {
            std::env::remove_var("VDOCS_TEST_EXPAND_SET");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("VDOCS_TEST_EXPAND_UNSET");
        }
        let result = expand_env("${VDOCS_TEST_EXPAND_UNSET:-0.0.0.0}", "server.host").unwrap();
        assert_eq!(result, "0.0.0.0");
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("VDOCS_TEST_EXPAND_MISSING");
        }
        let err = expand_env("${VDOCS_TEST_EXPAND_MISSING}", "site.og_image").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let message = err.to_string();
        assert!(message.contains("VDOCS_TEST_EXPAND_MISSING"));
        assert!(message.contains("site.og_image"));
    }

    #[test]
    fn test_literal_and_bare_dollar_unchanged() {
        assert_eq!(expand_env("127.0.0.1", "server.host").unwrap(), "127.0.0.1");
        assert_eq!(
            expand_env("https://example.com/$path", "site.base_url").unwrap(),
            "https://example.com/$path"
        );
    }
}
