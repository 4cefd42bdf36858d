//! The generic REST invoker.
//!
//! Every catalog endpoint funnels through [`RestInvoker::invoke`]: validate
//! arguments, build the URL, encode the body, attach headers, perform exactly
//! one HTTP request, and decode the response per the descriptor's declared
//! shape. There is no retry, no rate-limit tracking, and no shared state
//! between invocations beyond the HTTP client and the token provider.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde_json::{Map, Value, json};
use tracing::{debug, instrument};
use url::Url;

use crate::descriptor::{BodyEncoding, EndpointDescriptor, FieldLocation, ResponseShape};
use crate::error::{CoreError, Result};
use crate::token::TokenProvider;

/// Public Discord REST API base.
pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Escaped when substituting argument values into path segments. Covers the
/// URL-delimiting characters plus `/` and `%` so a value can never span
/// segments or smuggle an encoding.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%')
    .add(b'\\')
    .add(b'^')
    .add(b'|');

/// Executes endpoint descriptors against the Discord REST API.
///
/// Cheap to clone; clones share the underlying HTTP client and credential
/// provider. Invocations are independent futures with no coordination.
#[derive(Clone)]
pub struct RestInvoker {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn TokenProvider>,
}

impl RestInvoker {
    pub fn new(credentials: Arc<dyn TokenProvider>) -> Self {
        Self {
            http: crate::cordial_reqwest_client(),
            base_url: DEFAULT_API_BASE.to_string(),
            credentials,
        }
    }

    /// Point the invoker at a different API base (mock servers in tests).
    pub fn with_base_url(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        self.base_url = base.trim_end_matches('/').to_string();
        self
    }

    /// Substitute a pre-built HTTP client (custom timeouts, proxies).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    /// Execute one invocation of `descriptor` with the supplied arguments.
    ///
    /// All failures come back as [`CoreError`] values; nothing is retried and
    /// nothing panics past this boundary.
    #[instrument(skip_all, fields(tool = descriptor.name))]
    pub async fn invoke(
        &self,
        descriptor: &EndpointDescriptor,
        arguments: &Map<String, Value>,
    ) -> Result<Value> {
        self.validate(descriptor, arguments)?;

        let url = self.build_url(descriptor, arguments)?;
        debug!(method = %descriptor.method, url = %url, "invoking endpoint");

        let accept = match descriptor.response {
            ResponseShape::Binary { accept } => accept,
            _ => "application/json",
        };
        let mut request = self
            .http
            .request(descriptor.method.clone(), url)
            .header(ACCEPT, accept)
            .header(
                AUTHORIZATION,
                format!("Bot {}", self.credentials.token()?),
            );

        request = attach_body(request, descriptor, arguments)?;

        let response = request
            .send()
            .await
            .map_err(|e| CoreError::transport(descriptor.name, e))?;

        interpret_response(descriptor, response).await
    }

    /// Step 1: every required field must be present and non-null, before any
    /// network access happens.
    fn validate(
        &self,
        descriptor: &EndpointDescriptor,
        arguments: &Map<String, Value>,
    ) -> Result<()> {
        let missing: Vec<_> = descriptor
            .required_fields()
            .filter(|f| arguments.get(f.name).is_none_or(Value::is_null))
            .map(|f| f.name.into())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::missing_arguments(descriptor.name, missing))
        }
    }

    /// Step 2: substitute path placeholders (percent-encoded) and append the
    /// present query fields. `false` and `0` are real values and are sent;
    /// only absent/null optionals are dropped.
    fn build_url(
        &self,
        descriptor: &EndpointDescriptor,
        arguments: &Map<String, Value>,
    ) -> Result<Url> {
        let mut path = String::with_capacity(descriptor.path.len());
        let mut rest = descriptor.path;
        while let Some(start) = rest.find('{') {
            path.push_str(&rest[..start]);
            let len = rest[start..].find('}').ok_or_else(|| {
                CoreError::InvalidDescriptor {
                    tool_name: descriptor.name.to_string(),
                    details: format!("unterminated placeholder in '{}'", descriptor.path),
                }
            })?;
            let key = &rest[start + 1..start + len];
            // Validated above: path params are always required.
            let value = arguments.get(key).cloned().unwrap_or(Value::Null);
            path.push_str(&utf8_percent_encode(&scalar_string(&value), PATH_SEGMENT).to_string());
            rest = &rest[start + len + 1..];
        }
        path.push_str(rest);

        let mut url = Url::parse(&format!("{}{}", self.base_url, path)).map_err(|e| {
            CoreError::InvalidDescriptor {
                tool_name: descriptor.name.to_string(),
                details: format!("constructed URL is invalid: {e}"),
            }
        })?;

        {
            let mut pairs = url.query_pairs_mut();
            for field in descriptor.fields_at(FieldLocation::Query) {
                match arguments.get(field.name) {
                    Some(value) if !value.is_null() => {
                        pairs.append_pair(field.name, &scalar_string(value));
                    }
                    _ => {}
                }
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }

        Ok(url)
    }
}

impl std::fmt::Debug for RestInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestInvoker")
            .field("base_url", &self.base_url)
            .field("credentials", &"<redacted>")
            .finish()
    }
}

/// String form of an argument for paths, query pairs, and form/multipart
/// values. Strings pass through unquoted; nested arrays and objects become a
/// single JSON-stringified value (which is how the upstream expects `embeds`
/// and friends inside urlencoded message bodies).
fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Step 3: encode the present body fields per the descriptor's encoding.
/// Absent or null optionals are omitted, never sent as explicit null.
fn attach_body(
    request: reqwest::RequestBuilder,
    descriptor: &EndpointDescriptor,
    arguments: &Map<String, Value>,
) -> Result<reqwest::RequestBuilder> {
    let present = || {
        descriptor
            .fields_at(FieldLocation::Body)
            .filter_map(|f| match arguments.get(f.name) {
                Some(v) if !v.is_null() => Some((f.name, v)),
                _ => None,
            })
    };

    Ok(match descriptor.encoding {
        BodyEncoding::None => request,
        BodyEncoding::Json if descriptor.raw_body => {
            // Single declared body field, sent verbatim as the whole body.
            let value = present().next().map(|(_, v)| v.clone()).unwrap_or(Value::Null);
            request.json(&value)
        }
        BodyEncoding::Json => {
            let mut body = Map::new();
            for (name, value) in present() {
                body.insert(name.to_string(), value.clone());
            }
            request.json(&body)
        }
        BodyEncoding::Form => {
            let pairs: Vec<(&str, String)> = present()
                .map(|(name, value)| (name, scalar_string(value)))
                .collect();
            let encoded = serde_urlencoded::to_string(&pairs).map_err(|e| {
                CoreError::Serialization {
                    tool_name: descriptor.name.to_string(),
                    encoding: "form-urlencoded".to_string(),
                    details: e.to_string(),
                }
            })?;
            request
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(encoded)
        }
        BodyEncoding::Multipart => {
            let mut form = reqwest::multipart::Form::new();
            for (name, value) in present() {
                form = form.text(name, scalar_string(value));
            }
            request.multipart(form)
        }
    })
}

/// Step 6: decode per declared shape, or surface the remote error payload
/// verbatim on a non-2xx status.
async fn interpret_response(
    descriptor: &EndpointDescriptor,
    response: reqwest::Response,
) -> Result<Value> {
    let status = response.status();

    if !status.is_success() {
        let payload = response.text().await.unwrap_or_default();
        return Err(CoreError::api(descriptor.name, status.as_u16(), payload));
    }

    match &descriptor.response {
        ResponseShape::Empty { message } => Ok(json!({
            "status": status.as_u16(),
            "message": message,
        })),
        ResponseShape::Binary { .. } => {
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = response
                .bytes()
                .await
                .map_err(|e| CoreError::transport(descriptor.name, e))?;
            Ok(json!({
                "content_type": content_type,
                "data": BASE64.encode(&bytes),
            }))
        }
        ResponseShape::Json => {
            let bytes = response
                .bytes()
                .await
                .map_err(|e| CoreError::transport(descriptor.name, e))?;
            if bytes.is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_slice(&bytes)
                .map_err(|e| CoreError::response_parse(descriptor.name, e.to_string(), &bytes))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::FieldType;
    use crate::token::StaticToken;
    use pretty_assertions::assert_eq;
    use reqwest::Method;

    fn invoker() -> RestInvoker {
        RestInvoker::new(Arc::new(StaticToken::new("t"))).with_base_url("https://example.test/api")
    }

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test arguments must be an object"),
        }
    }

    #[test]
    fn path_substitution_is_exact() {
        let d = EndpointDescriptor::new(
            "get_message",
            "Get a message.",
            Method::GET,
            "/channels/{channel_id}/messages/{message_id}",
        )
        .path_param("channel_id", "channel")
        .path_param("message_id", "message");

        let url = invoker()
            .build_url(&d, &args(json!({"channel_id": "1", "message_id": "2"})))
            .unwrap();
        assert_eq!(url.as_str(), "https://example.test/api/channels/1/messages/2");
    }

    #[test]
    fn path_values_are_percent_encoded() {
        let d = EndpointDescriptor::new(
            "delete_my_message_reaction",
            "Remove a reaction.",
            Method::DELETE,
            "/channels/{channel_id}/messages/{message_id}/reactions/{emoji}/@me",
        )
        .path_param("channel_id", "channel")
        .path_param("message_id", "message")
        .path_param("emoji", "emoji");

        let url = invoker()
            .build_url(
                &d,
                &args(json!({"channel_id": "1", "message_id": "2", "emoji": "a/b c"})),
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.test/api/channels/1/messages/2/reactions/a%2Fb%20c/@me"
        );
    }

    #[test]
    fn absent_optional_query_is_omitted() {
        let d = EndpointDescriptor::new(
            "list_messages",
            "List messages.",
            Method::GET,
            "/channels/{channel_id}/messages",
        )
        .path_param("channel_id", "channel")
        .query("limit", FieldType::Integer, "limit")
        .query("before", FieldType::String, "before");

        let url = invoker()
            .build_url(&d, &args(json!({"channel_id": "1"})))
            .unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn false_and_zero_query_values_are_sent() {
        let d = EndpointDescriptor::new(
            "get_guild",
            "Get a guild.",
            Method::GET,
            "/guilds/{guild_id}",
        )
        .path_param("guild_id", "guild")
        .query("with_counts", FieldType::Boolean, "counts")
        .query("limit", FieldType::Integer, "limit");

        let url = invoker()
            .build_url(
                &d,
                &args(json!({"guild_id": "9", "with_counts": false, "limit": 0})),
            )
            .unwrap();
        assert_eq!(url.query(), Some("with_counts=false&limit=0"));
    }

    #[test]
    fn validation_reports_every_missing_field() {
        let d = EndpointDescriptor::new(
            "ban_user_from_guild",
            "Ban a user.",
            Method::PUT,
            "/guilds/{guild_id}/bans/{user_id}",
        )
        .path_param("guild_id", "guild")
        .path_param("user_id", "user");

        let err = invoker().validate(&d, &args(json!({}))).unwrap_err();
        match err {
            CoreError::MissingArguments { missing, .. } => {
                assert_eq!(missing, vec!["guild_id", "user_id"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn null_counts_as_absent_for_required_fields() {
        let d = EndpointDescriptor::new("get_user", "Get a user.", Method::GET, "/users/{user_id}")
            .path_param("user_id", "user");

        assert!(
            invoker()
                .validate(&d, &args(json!({"user_id": null})))
                .is_err()
        );
    }

    #[test]
    fn scalar_string_renders_json_for_nested() {
        assert_eq!(scalar_string(&json!("x")), "x");
        assert_eq!(scalar_string(&json!(false)), "false");
        assert_eq!(scalar_string(&json!(0)), "0");
        assert_eq!(scalar_string(&json!([1, 2])), "[1,2]");
    }
}
