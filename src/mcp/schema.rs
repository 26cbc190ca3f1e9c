//! Input-schema composition for tool definitions.
//!
//! Tools that share argument groups (env-var fields, database base fields,
//! delete options) build their schemas from the same [`FieldSet`] fragments
//! so the groups cannot drift apart.

use crate::types::{BUILD_PACKS, PROXY_TYPES};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    properties: Map<String, Value>,
    required: Vec<String>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, name: &str, schema: Value) -> Self {
        self.properties.insert(name.to_string(), schema);
        if !self.required.iter().any(|r| r == name) {
            self.required.push(name.to_string());
        }
        self
    }

    pub fn optional(mut self, name: &str, schema: Value) -> Self {
        self.properties.insert(name.to_string(), schema);
        self.required.retain(|r| r != name);
        self
    }

    /// Appends every field of `other`; later definitions win on name clashes.
    pub fn merge(mut self, other: FieldSet) -> Self {
        for (name, schema) in other.properties {
            let is_required = other.required.contains(&name);
            self = if is_required {
                self.required(&name, schema)
            } else {
                self.optional(&name, schema)
            };
        }
        self
    }

    pub fn into_schema(self) -> Value {
        object_schema(self)
    }
}

fn object_schema(fields: FieldSet) -> Value {
    let mut schema = Map::new();
    schema.insert("type".to_string(), json!("object"));
    schema.insert("properties".to_string(), Value::Object(fields.properties));
    if !fields.required.is_empty() {
        schema.insert("required".to_string(), json!(fields.required));
    }
    schema.insert("additionalProperties".to_string(), json!(false));
    Value::Object(schema)
}

fn typed(kind: &str, description: &str) -> Value {
    if description.is_empty() {
        json!({ "type": kind })
    } else {
        json!({ "type": kind, "description": description })
    }
}

pub fn string(description: &str) -> Value {
    typed("string", description)
}

pub fn boolean(description: &str) -> Value {
    typed("boolean", description)
}

pub fn integer(description: &str) -> Value {
    typed("integer", description)
}

pub fn one_of(values: &[&str], description: &str) -> Value {
    let mut schema = typed("string", description);
    if let Some(obj) = schema.as_object_mut() {
        obj.insert("enum".to_string(), json!(values));
    }
    schema
}

/// Free-form object whose keys the remote service validates.
pub fn record(description: &str) -> Value {
    typed("object", description)
}

pub fn object(fields: FieldSet, description: &str) -> Value {
    let mut schema = object_schema(fields);
    if !description.is_empty() {
        if let Some(obj) = schema.as_object_mut() {
            obj.insert("description".to_string(), json!(description));
        }
    }
    schema
}

pub fn array_of(items: Value, description: &str) -> Value {
    let mut schema = typed("array", description);
    if let Some(obj) = schema.as_object_mut() {
        obj.insert("items".to_string(), items);
    }
    schema
}

pub fn build_pack() -> Value {
    one_of(
        BUILD_PACKS,
        "Build pack type: nixpacks, static, dockerfile, or dockercompose",
    )
}

pub fn proxy_type() -> Value {
    one_of(PROXY_TYPES, "Proxy type: traefik, caddy, or none")
}

pub fn uuid(description: &str) -> FieldSet {
    FieldSet::new().required("uuid", string(description))
}

pub fn env_var_fields() -> FieldSet {
    FieldSet::new()
        .required("key", string("The key of the environment variable"))
        .required("value", string("The value of the environment variable"))
        .optional("is_preview", boolean("Use in preview deployments"))
        .optional("is_build_time", boolean("Use at build time"))
        .optional("is_literal", boolean("Literal value (nothing escaped)"))
        .optional("is_multiline", boolean("Multiline value"))
        .optional("is_shown_once", boolean("Show value on UI"))
}

/// Placement fields shared by every resource creation call.
pub fn placement_fields() -> FieldSet {
    FieldSet::new()
        .required("project_uuid", string(""))
        .required("server_uuid", string(""))
        .optional("environment_name", string(""))
        .optional("environment_uuid", string(""))
}

pub fn database_base_fields() -> FieldSet {
    placement_fields()
        .optional("destination_uuid", string(""))
        .optional("name", string(""))
        .optional("description", string(""))
        .optional("image", string(""))
        .optional("is_public", boolean(""))
        .optional("public_port", integer(""))
        .optional("limits_memory", string(""))
        .optional("limits_memory_swap", string(""))
        .optional("limits_memory_swappiness", integer(""))
        .optional("limits_memory_reservation", string(""))
        .optional("limits_cpus", string(""))
        .optional("limits_cpuset", string(""))
        .optional("limits_cpu_shares", integer(""))
        .optional("instant_deploy", boolean(""))
}

/// Flat snake_case cleanup flags, as accepted by `delete_application`.
pub fn delete_option_fields() -> FieldSet {
    FieldSet::new()
        .optional("delete_configurations", boolean(""))
        .optional("delete_volumes", boolean(""))
        .optional("docker_cleanup", boolean(""))
        .optional("delete_connected_networks", boolean(""))
}

/// Nested camelCase cleanup flags, as accepted by `delete_database` and
/// `delete_service`.
pub fn delete_options_object() -> Value {
    object(
        FieldSet::new()
            .optional("deleteConfigurations", boolean(""))
            .optional("deleteVolumes", boolean(""))
            .optional("dockerCleanup", boolean(""))
            .optional("deleteConnectedNetworks", boolean("")),
        "",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_are_listed_once_in_declaration_order() {
        let schema = FieldSet::new()
            .required("uuid", string(""))
            .optional("name", string(""))
            .required("uuid", string("again"))
            .required("key", string(""))
            .into_schema();
        assert_eq!(schema["required"], json!(["uuid", "key"]));
        assert_eq!(schema["additionalProperties"], json!(false));
        assert_eq!(schema["properties"]["uuid"]["description"], json!("again"));
    }

    #[test]
    fn empty_field_sets_have_no_required_list() {
        let schema = FieldSet::new().into_schema();
        assert!(schema.get("required").is_none());
        assert_eq!(schema["properties"], json!({}));
    }

    #[test]
    fn merge_keeps_requiredness_of_the_fragment() {
        let schema = uuid("Application UUID")
            .merge(env_var_fields())
            .into_schema();
        assert_eq!(schema["required"], json!(["uuid", "key", "value"]));
        assert_eq!(schema["properties"]["is_literal"]["type"], json!("boolean"));
    }

    #[test]
    fn optional_overrides_an_earlier_required() {
        let schema = FieldSet::new()
            .required("ports_exposes", string(""))
            .optional("ports_exposes", string(""))
            .into_schema();
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn enums_carry_their_values() {
        assert_eq!(build_pack()["enum"], json!(["nixpacks", "static", "dockerfile", "dockercompose"]));
        assert_eq!(proxy_type()["enum"], json!(["traefik", "caddy", "none"]));
    }
}
