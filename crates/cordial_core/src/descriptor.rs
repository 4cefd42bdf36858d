//! Static endpoint descriptors.
//!
//! One [`EndpointDescriptor`] captures everything the invoker needs to call a
//! single REST endpoint: method, path template, field schema, body encoding,
//! and the expected response shape. The catalog builds these once at startup;
//! they are immutable afterwards.

use reqwest::Method;
use serde_json::{Map, Value, json};

/// How the body-located fields are wired onto the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    /// No request body at all.
    None,
    /// A single JSON object of the present body fields.
    Json,
    /// `application/x-www-form-urlencoded`; nested values JSON-stringified.
    Form,
    /// `multipart/form-data`, one part per present field.
    Multipart,
}

/// Where an argument ends up on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLocation {
    Path,
    Query,
    Body,
}

/// JSON-schema primitive type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
}

impl FieldType {
    pub fn json_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Object => "object",
            FieldType::Array => "array",
        }
    }
}

/// One named argument of an endpoint.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub location: FieldLocation,
    pub ty: FieldType,
    pub required: bool,
}

/// What a 2xx response decodes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseShape {
    /// JSON object or array, returned unchanged.
    Json,
    /// Raw bytes (e.g. the widget PNG); surfaced as base64 at the JSON boundary.
    Binary { accept: &'static str },
    /// 204-style endpoints; success yields `{ status, message }`.
    Empty { message: &'static str },
}

/// Static description of one REST endpoint.
#[derive(Debug, Clone)]
pub struct EndpointDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub method: Method,
    pub path: &'static str,
    pub encoding: BodyEncoding,
    pub response: ResponseShape,
    /// When set, the single body field's value IS the request body (the bulk
    /// endpoints PATCH a raw JSON array rather than a keyed object).
    pub raw_body: bool,
    pub fields: Vec<FieldSpec>,
}

impl EndpointDescriptor {
    pub fn new(
        name: &'static str,
        description: &'static str,
        method: Method,
        path: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            method,
            path,
            encoding: BodyEncoding::None,
            response: ResponseShape::Json,
            raw_body: false,
            fields: Vec::new(),
        }
    }

    /// A `{placeholder}` in the path template. Always required.
    pub fn path_param(mut self, name: &'static str, description: &'static str) -> Self {
        self.fields.push(FieldSpec {
            name,
            description,
            location: FieldLocation::Path,
            ty: FieldType::String,
            required: true,
        });
        self
    }

    pub fn query(mut self, name: &'static str, ty: FieldType, description: &'static str) -> Self {
        self.fields.push(FieldSpec {
            name,
            description,
            location: FieldLocation::Query,
            ty,
            required: false,
        });
        self
    }

    pub fn required_query(
        mut self,
        name: &'static str,
        ty: FieldType,
        description: &'static str,
    ) -> Self {
        self.fields.push(FieldSpec {
            name,
            description,
            location: FieldLocation::Query,
            ty,
            required: true,
        });
        self
    }

    pub fn body(mut self, name: &'static str, ty: FieldType, description: &'static str) -> Self {
        self.push_body(name, ty, description, false);
        self
    }

    pub fn required_body(
        mut self,
        name: &'static str,
        ty: FieldType,
        description: &'static str,
    ) -> Self {
        self.push_body(name, ty, description, true);
        self
    }

    fn push_body(
        &mut self,
        name: &'static str,
        ty: FieldType,
        description: &'static str,
        required: bool,
    ) {
        if self.encoding == BodyEncoding::None {
            self.encoding = BodyEncoding::Json;
        }
        self.fields.push(FieldSpec {
            name,
            description,
            location: FieldLocation::Body,
            ty,
            required,
        });
    }

    /// Mark the (single) body field as the entire JSON body, sent verbatim.
    pub fn as_raw_body(mut self) -> Self {
        self.raw_body = true;
        self
    }

    pub fn form(mut self) -> Self {
        self.encoding = BodyEncoding::Form;
        self
    }

    pub fn multipart(mut self) -> Self {
        self.encoding = BodyEncoding::Multipart;
        self
    }

    /// Declare a 204-style response with the message surfaced on success.
    pub fn on_empty(mut self, message: &'static str) -> Self {
        self.response = ResponseShape::Empty { message };
        self
    }

    /// Declare a raw-bytes response with the given Accept type.
    pub fn binary(mut self, accept: &'static str) -> Self {
        self.response = ResponseShape::Binary { accept };
        self
    }

    /// Placeholder names in the path template, in order of appearance.
    pub fn path_placeholders(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            out.push(&rest[start + 1..start + len]);
            rest = &rest[start + len + 1..];
        }
        out
    }

    pub fn fields_at(&self, location: FieldLocation) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(move |f| f.location == location)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }

    /// JSON schema of the argument object, in the shape tool-invocation
    /// frameworks consume: `{ type, properties, required }`.
    pub fn parameters_schema(&self) -> Value {
        let mut properties = Map::new();
        for field in &self.fields {
            let mut prop = Map::new();
            prop.insert("type".to_string(), json!(field.ty.json_name()));
            if !field.description.is_empty() {
                prop.insert("description".to_string(), json!(field.description));
            }
            properties.insert(field.name.to_string(), Value::Object(prop));
        }
        let required: Vec<&str> = self.required_fields().map(|f| f.name).collect();
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Full machine-readable definition: name, description, parameter schema.
    pub fn definition(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "parameters": self.parameters_schema(),
        })
    }

    /// Internal-coherence check used by the catalog tests.
    ///
    /// Verifies the path template and field specs agree, that field names are
    /// unique, and that bodyless methods carry no body fields.
    pub fn check(&self) -> crate::Result<()> {
        let fail = |details: String| {
            Err(crate::CoreError::InvalidDescriptor {
                tool_name: self.name.to_string(),
                details,
            })
        };

        let placeholders = self.path_placeholders();
        for placeholder in &placeholders {
            let declared = self
                .fields_at(FieldLocation::Path)
                .any(|f| f.name == *placeholder);
            if !declared {
                return fail(format!("path placeholder {{{placeholder}}} has no field spec"));
            }
        }
        for field in self.fields_at(FieldLocation::Path) {
            if !placeholders.contains(&field.name) {
                return fail(format!(
                    "path field '{}' missing from template '{}'",
                    field.name, self.path
                ));
            }
            if !field.required {
                return fail(format!("path field '{}' must be required", field.name));
            }
        }

        let mut seen = std::collections::HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name) {
                return fail(format!("duplicate field '{}'", field.name));
            }
        }

        let has_body = self.fields_at(FieldLocation::Body).next().is_some();
        if has_body && (self.method == Method::GET || self.method == Method::DELETE) {
            return fail(format!("{} endpoint declares body fields", self.method));
        }
        if has_body && self.encoding == BodyEncoding::None {
            return fail("body fields present but encoding is None".to_string());
        }
        if !has_body && !matches!(self.encoding, BodyEncoding::None) {
            return fail("body encoding declared without body fields".to_string());
        }
        if self.raw_body {
            let body_fields = self.fields_at(FieldLocation::Body).count();
            if body_fields != 1 || self.encoding != BodyEncoding::Json {
                return fail("raw body requires exactly one JSON body field".to_string());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ban_descriptor() -> EndpointDescriptor {
        EndpointDescriptor::new(
            "ban_user_from_guild",
            "Ban a user from a Discord guild.",
            Method::PUT,
            "/guilds/{guild_id}/bans/{user_id}",
        )
        .path_param("guild_id", "The ID of the guild from which to ban the user.")
        .path_param("user_id", "The ID of the user to ban.")
        .on_empty("User banned successfully.")
    }

    #[test]
    fn path_placeholders_parse_in_order() {
        let d = ban_descriptor();
        assert_eq!(d.path_placeholders(), vec!["guild_id", "user_id"]);
    }

    #[test]
    fn body_fields_default_to_json_encoding() {
        let d = EndpointDescriptor::new("t", "t", Method::POST, "/x")
            .required_body("name", FieldType::String, "name");
        assert_eq!(d.encoding, BodyEncoding::Json);

        let d = EndpointDescriptor::new("t", "t", Method::GET, "/x");
        assert_eq!(d.encoding, BodyEncoding::None);
    }

    #[test]
    fn form_override_survives_field_pushes() {
        let d = EndpointDescriptor::new("t", "t", Method::POST, "/x")
            .form()
            .required_body("content", FieldType::String, "content");
        assert_eq!(d.encoding, BodyEncoding::Form);
    }

    #[test]
    fn parameters_schema_shape() {
        let d = EndpointDescriptor::new(
            "list_messages",
            "List messages in a Discord channel.",
            Method::GET,
            "/channels/{channel_id}/messages",
        )
        .path_param("channel_id", "The ID of the channel to list messages from.")
        .query("limit", FieldType::Integer, "The maximum number of messages to return.");

        let schema = d.parameters_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["channel_id"]["type"], "string");
        assert_eq!(schema["properties"]["limit"]["type"], "integer");
        assert_eq!(schema["required"], json!(["channel_id"]));
    }

    #[test]
    fn definition_carries_name_and_description() {
        let def = ban_descriptor().definition();
        assert_eq!(def["name"], "ban_user_from_guild");
        assert_eq!(def["description"], "Ban a user from a Discord guild.");
        assert!(def["parameters"]["properties"]["guild_id"].is_object());
    }

    #[test]
    fn check_catches_undeclared_placeholder() {
        let d = EndpointDescriptor::new("t", "t", Method::GET, "/channels/{channel_id}");
        assert!(d.check().is_err());
    }

    #[test]
    fn check_catches_body_on_get() {
        let mut d = EndpointDescriptor::new("t", "t", Method::GET, "/x");
        d.push_body("name", FieldType::String, "name", false);
        assert!(d.check().is_err());
    }

    #[test]
    fn check_accepts_well_formed_descriptor() {
        assert!(ban_descriptor().check().is_ok());
    }
}
