use crate::constants::policy::{COMMAND_REJECTED, CONFIRM_DESCRIPTION, CONFIRM_FIELD};
use crate::errors::ToolError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

/// Shell metacharacters that could chain, substitute or redirect commands.
static COMMAND_METACHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[;&|`$><\\]").expect("valid regex"));

/// Fails unless `confirm` is literally `true`.
pub fn ensure_confirmed(tool: &str, args: &Map<String, Value>) -> Result<(), ToolError> {
    match args.get(CONFIRM_FIELD) {
        Some(Value::Bool(true)) => Ok(()),
        _ => Err(ToolError::invalid_params(format!(
            "{} is a destructive operation and requires confirm: true",
            tool
        ))
        .with_hint(CONFIRM_DESCRIPTION)),
    }
}

/// Drops `confirm` so it never reaches the request payload.
pub fn strip_confirmation(args: &mut Map<String, Value>) {
    args.remove(CONFIRM_FIELD);
}

/// Rejects commands carrying shell metacharacters. Accepted commands are
/// forwarded unchanged.
pub fn ensure_command_allowed(command: &str) -> Result<(), ToolError> {
    if COMMAND_METACHARS.is_match(command) {
        return Err(ToolError::invalid_params(COMMAND_REJECTED)
            .with_details(serde_json::json!({ "field": "command" })));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_every_metacharacter() {
        for command in [
            "ls; rm -rf /",
            "a && b",
            "a | b",
            "echo `id`",
            "echo $HOME",
            "cat > out",
            "cat < in",
            "echo a\\b",
        ] {
            let err = ensure_command_allowed(command).expect_err(command);
            assert_eq!(err.message, "Command contains unsupported characters");
        }
    }

    #[test]
    fn plain_commands_pass() {
        assert!(ensure_command_allowed("php artisan migrate --force").is_ok());
        assert!(ensure_command_allowed("ls -la /var/www").is_ok());
    }

    #[test]
    fn confirm_must_be_literally_true() {
        let mut ok = json!({ "uuid": "a", "confirm": true });
        let map = ok.as_object_mut().expect("object");
        assert!(ensure_confirmed("delete_server", map).is_ok());
        strip_confirmation(map);
        assert!(!map.contains_key("confirm"));

        for args in [json!({ "uuid": "a" }), json!({ "uuid": "a", "confirm": false }), json!({ "confirm": "true" })] {
            let err = ensure_confirmed("delete_server", args.as_object().expect("object"))
                .expect_err("must fail");
            assert_eq!(err.kind, crate::errors::ToolErrorKind::InvalidParams);
            assert_eq!(
                err.message,
                "delete_server is a destructive operation and requires confirm: true"
            );
        }
    }
}
