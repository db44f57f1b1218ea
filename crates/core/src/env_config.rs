//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    parse_with_default(var, std::env::var(var).ok().as_deref(), default)
}

/// Read a string environment variable, falling back to `default` when unset
/// or empty. Empty values are treated as unset so `VAR= clarify ...` does not
/// silently blank out a base URL.
pub fn env_string_with_default(var: &str, default: &str) -> String {
    string_with_default(std::env::var(var).ok().as_deref(), default)
}

fn parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    raw: Option<&str>,
    default: T,
) -> T {
    match raw {
        Some(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        None => default,
    }
}

fn string_with_default(raw: Option<&str>, default: &str) -> String {
    match raw {
        Some(v) if !v.trim().is_empty() => v.to_owned(),
        _ => default.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_value() {
        let result: u64 = parse_with_default("VAR", Some("42"), 10);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_parse_invalid_value_falls_back() {
        let result: u64 = parse_with_default("VAR", Some("banana"), 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_parse_missing_value_falls_back() {
        let result: u64 = parse_with_default("VAR", None, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_string_empty_falls_back() {
        assert_eq!(string_with_default(Some("   "), "fallback"), "fallback");
        assert_eq!(string_with_default(None, "fallback"), "fallback");
    }

    #[test]
    fn test_string_set_value_wins() {
        assert_eq!(string_with_default(Some("http://example.test"), "fallback"), "http://example.test");
    }
}
