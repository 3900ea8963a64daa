//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a config value.
///
/// `field` names the config key being expanded and is used in error
/// messages only.
///
/// # Errors
///
/// Returns [`ConfigError::EnvVar`] if a `${VAR}` reference without a
/// default names an unset variable, or if a reference is unterminated.
pub fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            return Err(ConfigError::EnvVar {
                field: field.to_owned(),
                message: "unterminated ${ reference".to_owned(),
            });
        };
        let reference = &after[..end];

        let expanded = match reference.split_once(":-") {
            Some((name, default)) => {
                std::env::var(name).unwrap_or_else(|_| default.to_owned())
            }
            None => std::env::var(reference).map_err(|_| ConfigError::EnvVar {
                field: field.to_owned(),
                message: format!("${{{reference}}} not set"),
            })?,
        };
        out.push_str(&expanded);
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_string_passes_through() {
        let result = expand_env("no variables here", "test.field").unwrap();
        assert_eq!(result, "no variables here");
    }

    #[test]
    fn test_expand_set_variable() {
        // SAFETY: test-local variable name, no concurrent reader cares
        unsafe { std::env::set_var("IPLANT_EXPAND_TEST", "wiki-bot") };
        let result = expand_env("user-${IPLANT_EXPAND_TEST}", "test.field").unwrap();
        assert_eq!(result, "user-wiki-bot");
    }

    #[test]
    fn test_default_used_when_unset() {
        let result = expand_env("${IPLANT_NOT_SET_ABC:-fallback}", "test.field").unwrap();
        assert_eq!(result, "fallback");
    }

    #[test]
    fn test_unset_without_default_errors() {
        let err = expand_env("${IPLANT_NOT_SET_XYZ}", "confluence.password").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("confluence.password"), "{message}");
        assert!(message.contains("IPLANT_NOT_SET_XYZ"), "{message}");
    }

    #[test]
    fn test_unterminated_reference_errors() {
        let err = expand_env("${OOPS", "test.field").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
    }
}
