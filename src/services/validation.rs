use crate::errors::ToolError;
use crate::types::Payload;
use serde_json::{Map, Value};

/// Schema-validated tool arguments, with typed accessors and the reshaping
/// helpers managers use to turn them into request payloads.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    map: Map<String, Value>,
}

impl ToolArgs {
    pub fn new(args: Value) -> Result<Self, ToolError> {
        match args {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => Ok(Self { map }),
            _ => Err(ToolError::invalid_params("Tool arguments must be an object")),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    /// Identifiers end up as path segments, so an empty one would address a
    /// different endpoint.
    pub fn ensure_string(&self, key: &str) -> Result<String, ToolError> {
        let text = self.get(key).and_then(|v| v.as_str()).ok_or_else(|| {
            ToolError::invalid_params(format!("{} must be a non-empty string", key))
        })?;
        if text.trim().is_empty() {
            return Err(ToolError::invalid_params(format!(
                "{} must be a non-empty string",
                key
            )));
        }
        Ok(text.to_string())
    }

    /// Raw string value, empty strings included.
    pub fn string(&self, key: &str) -> Result<String, ToolError> {
        self.get(key)
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| ToolError::invalid_params(format!("{} must be a string", key)))
    }

    pub fn optional_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(|v| v.as_str()).map(str::to_string)
    }

    pub fn ensure_id(&self, key: &str) -> Result<u64, ToolError> {
        self.get(key).and_then(|v| v.as_u64()).ok_or_else(|| {
            ToolError::invalid_params(format!("{} must be a non-negative integer", key))
        })
    }

    pub fn optional_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.as_bool())
    }

    pub fn flag(&self, key: &str) -> bool {
        self.optional_bool(key).unwrap_or(false)
    }

    pub fn ensure_object(&self, key: &str) -> Result<Map<String, Value>, ToolError> {
        self.get(key)
            .and_then(|v| v.as_object())
            .cloned()
            .ok_or_else(|| ToolError::invalid_params(format!("{} must be an object", key)))
    }

    pub fn optional_object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.get(key).and_then(|v| v.as_object())
    }

    pub fn ensure_array(&self, key: &str) -> Result<Vec<Value>, ToolError> {
        self.get(key)
            .and_then(|v| v.as_array())
            .cloned()
            .ok_or_else(|| ToolError::invalid_params(format!("{} must be an array", key)))
    }

    /// Moves `from` to `to`, keeping its value. No-op when `from` is absent.
    pub fn rename(mut self, from: &str, to: &str) -> Self {
        if let Some(value) = self.map.remove(from) {
            self.map.insert(to.to_string(), value);
        }
        self
    }

    pub fn without(mut self, keys: &[&str]) -> Self {
        for key in keys {
            self.map.remove(*key);
        }
        self
    }

    pub fn into_payload(self) -> Payload {
        self.map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> ToolArgs {
        ToolArgs::new(value).expect("args")
    }

    #[test]
    fn null_arguments_are_an_empty_object() {
        assert!(args(Value::Null).into_payload().is_empty());
        assert!(ToolArgs::new(json!([1])).is_err());
    }

    #[test]
    fn ensure_string_rejects_empty_identifiers() {
        let a = args(json!({ "uuid": "  ", "name": "web" }));
        assert_eq!(
            a.ensure_string("uuid").expect_err("empty").message,
            "uuid must be a non-empty string"
        );
        assert_eq!(a.ensure_string("name").expect("name"), "web");
        assert!(a.ensure_string("missing").is_err());
    }

    #[test]
    fn ids_must_be_non_negative_integers() {
        let a = args(json!({ "id": 7, "neg": -1, "float": 1.5 }));
        assert_eq!(a.ensure_id("id").expect("id"), 7);
        assert!(a.ensure_id("neg").is_err());
        assert!(a.ensure_id("float").is_err());
    }

    #[test]
    fn rename_only_touches_present_keys() {
        let payload = args(json!({ "uuid": "a", "domains": "https://x.dev", "name": "n" }))
            .without(&["uuid"])
            .rename("domains", "fqdn")
            .into_payload();
        assert_eq!(Value::Object(payload), json!({ "name": "n", "fqdn": "https://x.dev" }));

        let untouched = args(json!({ "name": "n" })).rename("domains", "fqdn").into_payload();
        assert!(!untouched.contains_key("fqdn"));
    }

    #[test]
    fn null_values_read_as_absent() {
        let a = args(json!({ "force": null }));
        assert_eq!(a.optional_bool("force"), None);
        assert!(!a.flag("force"));
    }
}
