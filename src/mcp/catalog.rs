use crate::constants::limits::{SCHEMA_ERRORS_SHOWN, SUGGESTIONS_SHOWN};
use crate::constants::policy::{CONFIRM_DESCRIPTION, CONFIRM_FIELD};
use crate::errors::ToolError;
use crate::mcp::schema::FieldSet;
use crate::utils::suggest::suggest;
use jsonschema::error::{TypeKind, ValidationErrorKind};
use jsonschema::JSONSchema;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Behaviour the executor applies around a tool's handler. Not advertised
/// to clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolPolicy {
    /// Requires `confirm: true`; implies `sanitize_output`.
    pub destructive: bool,
    pub sanitize_output: bool,
    /// Render the result as 2-space indented JSON.
    pub pretty: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolDef {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
    #[serde(skip)]
    pub policy: ToolPolicy,
}

impl ToolDef {
    pub fn new(name: &str, description: &str, fields: FieldSet) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema: fields.into_schema(),
            policy: ToolPolicy::default(),
        }
    }

    /// Marks the tool destructive and adds the required `confirm` argument.
    pub fn destructive(mut self) -> Self {
        self.policy.destructive = true;
        self.policy.sanitize_output = true;
        if let Some(schema) = self.input_schema.as_object_mut() {
            if let Some(Value::Object(props)) = schema.get_mut("properties") {
                props.insert(
                    CONFIRM_FIELD.to_string(),
                    json!({
                        "type": "boolean",
                        "const": true,
                        "description": CONFIRM_DESCRIPTION,
                    }),
                );
            }
            let required = schema
                .entry("required")
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(list) = required {
                if !list.iter().any(|v| v.as_str() == Some(CONFIRM_FIELD)) {
                    list.push(Value::String(CONFIRM_FIELD.to_string()));
                }
            }
        }
        self
    }

    pub fn sanitized(mut self) -> Self {
        self.policy.sanitize_output = true;
        self
    }

    pub fn pretty(mut self) -> Self {
        self.policy.pretty = true;
        self
    }
}

/// Every registered tool, indexed by name, with its compiled input schema.
pub struct ToolCatalog {
    tools: Vec<ToolDef>,
    index: HashMap<String, usize>,
    validators: HashMap<String, JSONSchema>,
}

impl ToolCatalog {
    pub fn new(tools: Vec<ToolDef>) -> Result<Self, ToolError> {
        let mut index = HashMap::new();
        let mut validators = HashMap::new();
        for (position, tool) in tools.iter().enumerate() {
            if index.insert(tool.name.clone(), position).is_some() {
                return Err(ToolError::internal(format!(
                    "Duplicate tool name: {}",
                    tool.name
                )));
            }
            let compiled = JSONSchema::compile(&tool.input_schema).map_err(|err| {
                ToolError::internal(format!("Invalid input schema for {}: {}", tool.name, err))
            })?;
            validators.insert(tool.name.clone(), compiled);
        }
        Ok(Self {
            tools,
            index,
            validators,
        })
    }

    pub fn get(&self, name: &str) -> Option<&ToolDef> {
        self.index.get(name).and_then(|i| self.tools.get(*i))
    }

    pub fn tools(&self) -> &[ToolDef] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.name.clone()).collect()
    }

    pub fn validate_args(&self, tool_name: &str, args: &Value) -> Result<(), ToolError> {
        let Some(schema) = self.validators.get(tool_name) else {
            return Ok(());
        };
        if let Err(errors) = schema.validate(args) {
            return Err(format_schema_errors(tool_name, args, errors));
        }
        Ok(())
    }

    /// Removes every field the tool's schema does not declare, at each
    /// level that lists its properties. Returns what was dropped so the
    /// caller can report it.
    pub fn drop_unknown_fields(&self, tool_name: &str, args: &mut Value) -> Vec<DroppedField> {
        let mut dropped = Vec::new();
        if let Some(tool) = self.get(tool_name) {
            drop_unknown(&tool.input_schema, args, "", &mut dropped);
        }
        dropped
    }
}

/// An argument the tool does not declare, with the closest declared names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedField {
    pub path: String,
    pub did_you_mean: Vec<String>,
}

fn drop_unknown(
    schema: &Value,
    value: &mut Value,
    path: &str,
    dropped: &mut Vec<DroppedField>,
) {
    if let (Some(items), Value::Array(list)) = (schema.get("items"), &mut *value) {
        for (position, item) in list.iter_mut().enumerate() {
            drop_unknown(items, item, &format!("{}/{}", path, position), dropped);
        }
        return;
    }
    let (Some(props), Value::Object(map)) =
        (schema.get("properties").and_then(Value::as_object), value)
    else {
        return;
    };
    let known: Vec<String> = props.keys().cloned().collect();
    for key in map.keys().filter(|key| !props.contains_key(*key)) {
        dropped.push(DroppedField {
            path: format!("{}/{}", path, key),
            did_you_mean: suggest(key, &known, SUGGESTIONS_SHOWN),
        });
    }
    map.retain(|key, _| props.contains_key(key));
    for (key, child) in map.iter_mut() {
        if let Some(child_schema) = props.get(key) {
            drop_unknown(child_schema, child, &format!("{}/{}", path, key), dropped);
        }
    }
}

fn format_schema_errors(
    tool_name: &str,
    args: &Value,
    errors: jsonschema::ErrorIterator,
) -> ToolError {
    let mut rendered = Vec::new();
    let mut did_you_means = Vec::new();

    for err in errors.take(SCHEMA_ERRORS_SHOWN) {
        let instance_path = if err.instance_path.to_string().is_empty() {
            "(root)".to_string()
        } else {
            err.instance_path.to_string()
        };
        match &err.kind {
            ValidationErrorKind::Enum { options } => {
                let allowed: Vec<String> = options
                    .as_array()
                    .map(|arr| {
                        arr.iter()
                            .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
                            .collect()
                    })
                    .unwrap_or_default();
                let shown: Vec<String> = allowed.iter().take(12).cloned().collect();
                let more = if allowed.len() > shown.len() { ", ..." } else { "" };
                rendered.push(format!(
                    "{}: expected one of {}{}",
                    instance_path,
                    shown.join(", "),
                    more
                ));
                let received = value_at(args, &err.instance_path.to_string());
                let suggestions = suggest(received.as_str().unwrap_or(""), &allowed, SUGGESTIONS_SHOWN);
                if !suggestions.is_empty() {
                    did_you_means.push(format!("{}: {}", instance_path, suggestions.join(", ")));
                }
            }
            ValidationErrorKind::Required { property } => {
                let prop = property
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| property.to_string());
                rendered.push(format!("{}: missing required field '{}'", instance_path, prop));
            }
            ValidationErrorKind::Type { kind } => {
                rendered.push(format!("{}: expected {}", instance_path, format_type_kind(kind)));
            }
            ValidationErrorKind::Constant { expected_value } => {
                rendered.push(format!("{}: must be {}", instance_path, expected_value));
            }
            _ => {
                rendered.push(format!("{}: {}", instance_path, err));
            }
        }
    }

    let mut lines = vec![format!("Invalid arguments for {}", tool_name)];
    lines.extend(rendered.iter().map(|line| format!("- {}", line)));
    let error = ToolError::invalid_params(lines.join("\n"));
    if did_you_means.is_empty() {
        error
    } else {
        error.with_hint(format!(
            "Did you mean: {}",
            did_you_means
                .iter()
                .take(SUGGESTIONS_SHOWN)
                .cloned()
                .collect::<Vec<_>>()
                .join(" | ")
        ))
    }
}

fn format_type_kind(kind: &TypeKind) -> String {
    match kind {
        TypeKind::Single(primitive) => primitive.to_string(),
        TypeKind::Multiple(types) => {
            let list: Vec<String> = (*types).into_iter().map(|t| t.to_string()).collect();
            if list.is_empty() {
                "unknown".to_string()
            } else {
                list.join(" | ")
            }
        }
    }
}

fn value_at(root: &Value, instance_path: &str) -> Value {
    let mut current = root;
    for segment in instance_path.split('/').filter(|s| !s.is_empty()) {
        current = match current {
            Value::Object(obj) => obj.get(segment).unwrap_or(&Value::Null),
            Value::Array(arr) => segment
                .parse::<usize>()
                .ok()
                .and_then(|i| arr.get(i))
                .unwrap_or(&Value::Null),
            _ => &Value::Null,
        };
    }
    current.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::schema::{boolean, delete_options_object, one_of, string};

    fn catalog() -> ToolCatalog {
        ToolCatalog::new(vec![
            ToolDef::new(
                "delete_service",
                "Delete a service",
                FieldSet::new()
                    .required("uuid", string(""))
                    .optional("options", delete_options_object()),
            )
            .destructive(),
            ToolDef::new(
                "create_server",
                "Create a new Coolify server",
                FieldSet::new()
                    .required("ip", string(""))
                    .optional("proxy_type", one_of(&["traefik", "caddy", "none"], ""))
                    .optional("is_build_server", boolean("")),
            ),
        ])
        .expect("catalog")
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let tool = ToolDef::new("list_servers", "List all Coolify servers", FieldSet::new());
        let err = ToolCatalog::new(vec![tool.clone(), tool]).err().expect("duplicate");
        assert_eq!(err.message, "Duplicate tool name: list_servers");
    }

    #[test]
    fn destructive_adds_required_confirm() {
        let catalog = catalog();
        let tool = catalog.get("delete_service").expect("tool");
        assert_eq!(tool.input_schema["required"], json!(["uuid", "confirm"]));
        assert_eq!(tool.input_schema["properties"]["confirm"]["const"], json!(true));
        assert!(tool.policy.sanitize_output);
    }

    #[test]
    fn confirm_false_fails_validation() {
        let err = catalog()
            .validate_args("delete_service", &json!({ "uuid": "s1", "confirm": false }))
            .expect_err("must fail");
        assert!(err.message.starts_with("Invalid arguments for delete_service"));
        assert!(err.message.contains("/confirm"));
    }

    #[test]
    fn missing_confirm_is_reported_as_required() {
        let err = catalog()
            .validate_args("delete_service", &json!({ "uuid": "s1" }))
            .expect_err("must fail");
        assert!(err.message.contains("missing required field 'confirm'"));
    }

    #[test]
    fn unknown_fields_are_dropped_with_suggestions() {
        let mut args = json!({ "uuid": "s1", "confirm": true, "option": {} });
        let dropped = catalog().drop_unknown_fields("delete_service", &mut args);
        assert_eq!(args, json!({ "uuid": "s1", "confirm": true }));
        assert_eq!(
            dropped,
            vec![DroppedField {
                path: "/option".to_string(),
                did_you_mean: vec!["options".to_string()],
            }]
        );
    }

    #[test]
    fn nested_unknown_fields_are_dropped() {
        let mut args = json!({
            "uuid": "s1",
            "confirm": true,
            "options": { "delete_volumes": true, "deleteVolumes": true }
        });
        let dropped = catalog().drop_unknown_fields("delete_service", &mut args);
        assert_eq!(args["options"], json!({ "deleteVolumes": true }));
        assert_eq!(dropped.len(), 1);
        assert_eq!(dropped[0].path, "/options/delete_volumes");
    }

    #[test]
    fn declared_fields_are_kept_in_order() {
        let mut args = json!({ "ip": "10.0.0.1", "proxy_type": "caddy", "is_build_server": true });
        let before = args.to_string();
        assert!(catalog()
            .drop_unknown_fields("create_server", &mut args)
            .is_empty());
        assert_eq!(args.to_string(), before);
    }

    #[test]
    fn enum_violations_list_allowed_values() {
        let err = catalog()
            .validate_args("create_server", &json!({ "ip": "10.0.0.1", "proxy_type": "trafik" }))
            .expect_err("must fail");
        assert!(err.message.contains("expected one of traefik, caddy, none"));
        assert!(err.hint.unwrap_or_default().contains("traefik"));
    }

    #[test]
    fn valid_arguments_pass() {
        let catalog = catalog();
        assert!(catalog
            .validate_args("create_server", &json!({ "ip": "10.0.0.1", "is_build_server": true }))
            .is_ok());
        assert!(catalog
            .validate_args(
                "delete_service",
                &json!({ "uuid": "s1", "confirm": true, "options": { "deleteVolumes": true } })
            )
            .is_ok());
    }

    #[test]
    fn policy_is_not_serialized() {
        let rendered = serde_json::to_value(catalog().get("delete_service").expect("tool"))
            .expect("serialize");
        assert!(rendered.get("policy").is_none());
        assert!(rendered.get("inputSchema").is_some());
    }
}
