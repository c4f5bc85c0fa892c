use std::env;
use std::str::FromStr;

/// Reads `name` and parses it, falling back to `default` when the variable is
/// unset or malformed.
pub fn parse_var_or<T>(name: &str, default: T) -> T
where
    T: FromStr,
{
    parse_or(name, env::var(name).ok(), default)
}

fn parse_or<T: FromStr>(name: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(value) => match value.trim().parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!(variable = name, value = %value, "invalid value, using default");
                default
            }
        },
    }
}
