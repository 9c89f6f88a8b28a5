//! Environment variable expansion for configuration values.

use crate::ConfigError;

/// Expand `${VAR}` / `${VAR:-default}` references and a leading `~`.
///
/// `${VAR}` errors when the variable is unset; `${VAR:-default}` falls
/// back to `default` instead. `field` names the config field for error
/// messages.
pub(crate) fn expand_value(value: &str, field: &str) -> Result<String, ConfigError> {
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
        let (name, default) = match reference.split_once(":-") {
            Some((name, default)) => (name, Some(default)),
            None => (reference, None),
        };
        match std::env::var(name) {
            Ok(resolved) => out.push_str(&resolved),
            Err(_) => match default {
                Some(default) => out.push_str(default),
                None => {
                    return Err(ConfigError::EnvVar {
                        field: field.to_owned(),
                        message: format!("${{{name}}} not set"),
                    });
                }
            },
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);

    Ok(shellexpand::tilde(&out).into_owned())
}
