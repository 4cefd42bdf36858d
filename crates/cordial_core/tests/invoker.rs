//! End-to-end invoker behavior against a mock HTTP server.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::{Map, Value, json};
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cordial_core::catalog;
use cordial_core::{CoreError, RestInvoker, StaticToken, ToolRegistry};

const TOKEN: &str = "test_token_12345";

async fn setup() -> (MockServer, ToolRegistry) {
    let server = MockServer::start().await;
    let invoker =
        RestInvoker::new(Arc::new(StaticToken::new(TOKEN))).with_base_url(server.uri());
    (server, catalog::registry(invoker))
}

fn args(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("test arguments must be an object"),
    }
}

#[tokio::test]
async fn success_json_object_passes_through_unchanged() {
    let (server, registry) = setup().await;
    let channel = json!({
        "id": "123",
        "name": "general",
        "type": 0,
        "nsfw": false
    });

    Mock::given(method("GET"))
        .and(path("/channels/123"))
        .and(header("authorization", format!("Bot {TOKEN}").as_str()))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(channel.clone()))
        .mount(&server)
        .await;

    let data = registry
        .execute("get_channel", &args(json!({"channel_id": "123"})))
        .await
        .unwrap();
    assert_eq!(data, channel);
}

#[tokio::test]
async fn success_json_array_passes_through_unchanged() {
    let (server, registry) = setup().await;
    let messages = json!([
        {"id": "1", "content": "hello"},
        {"id": "2", "content": "world"}
    ]);

    Mock::given(method("GET"))
        .and(path("/channels/9/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(messages.clone()))
        .mount(&server)
        .await;

    let data = registry
        .execute("list_messages", &args(json!({"channel_id": "9"})))
        .await
        .unwrap();
    assert_eq!(data, messages);
}

#[tokio::test]
async fn missing_required_field_makes_no_network_call() {
    let (server, registry) = setup().await;

    let err = registry
        .execute("get_message", &args(json!({"channel_id": "1"})))
        .await
        .unwrap_err();
    match err {
        CoreError::MissingArguments { missing, .. } => {
            assert_eq!(missing, vec!["message_id"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty(), "validation failure must not hit the network");
}

#[tokio::test]
async fn remote_error_payload_is_embedded_verbatim() {
    let (server, registry) = setup().await;

    Mock::given(method("GET"))
        .and(path("/channels/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Unknown Channel",
            "code": 10003
        })))
        .mount(&server)
        .await;

    let err = registry
        .execute("get_channel", &args(json!({"channel_id": "404"})))
        .await
        .unwrap_err();
    match &err {
        CoreError::Api { status, .. } => assert_eq!(*status, 404),
        other => panic!("unexpected error: {other:?}"),
    }
    let rendered = err.to_string();
    assert!(rendered.contains("Unknown Channel"));
    assert!(rendered.contains("10003"));
}

#[tokio::test]
async fn path_parameters_substitute_exactly() {
    let (server, registry) = setup().await;

    Mock::given(method("GET"))
        .and(path("/channels/1/messages/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "2"})))
        .expect(1)
        .mount(&server)
        .await;

    registry
        .execute(
            "get_message",
            &args(json!({"channel_id": "1", "message_id": "2"})),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn optional_query_params_are_omitted_when_absent() {
    let (server, registry) = setup().await;

    Mock::given(method("GET"))
        .and(path("/channels/9/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    registry
        .execute("list_messages", &args(json!({"channel_id": "9"})))
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap_or_default();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].url.query(), None);
}

#[tokio::test]
async fn false_and_zero_are_sent_as_query_values() {
    let (server, registry) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users/@me/guilds"))
        .and(query_param("with_counts", "false"))
        .and(query_param("limit", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    registry
        .execute(
            "list_my_guilds",
            &args(json!({"with_counts": false, "limit": 0})),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn repeated_get_invocations_return_equal_data() {
    let (server, registry) = setup().await;
    let guild = json!({"id": "42", "name": "test guild"});

    Mock::given(method("GET"))
        .and(path("/guilds/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(guild.clone()))
        .expect(2)
        .mount(&server)
        .await;

    let arguments = args(json!({"guild_id": "42"}));
    let first = registry.execute("get_guild", &arguments).await.unwrap();
    let second = registry.execute("get_guild", &arguments).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first, guild);
}

#[tokio::test]
async fn ban_end_to_end_hits_put_with_auth_and_reports_success() {
    let (server, registry) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/guilds/100/bans/200"))
        .and(header("authorization", format!("Bot {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let data = registry
        .execute(
            "ban_user_from_guild",
            &args(json!({"guild_id": "100", "user_id": "200"})),
        )
        .await
        .unwrap();
    assert_eq!(data["status"], 204);
    assert_eq!(data["message"], "User banned successfully.");
}

#[tokio::test]
async fn binary_response_round_trips_as_base64() {
    use base64::Engine as _;

    let (server, registry) = setup().await;
    let png: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    Mock::given(method("GET"))
        .and(path("/guilds/7/widget.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(png)
                .insert_header("content-type", "image/png"),
        )
        .mount(&server)
        .await;

    let data = registry
        .execute("get_guild_widget_png", &args(json!({"guild_id": "7"})))
        .await
        .unwrap();
    assert_eq!(data["content_type"], "image/png");
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(data["data"].as_str().unwrap_or_default())
        .unwrap();
    assert_eq!(decoded, png);
}

#[tokio::test]
async fn form_encoded_body_contains_present_fields_only() {
    let (server, registry) = setup().await;

    Mock::given(method("POST"))
        .and(path("/channels/5/messages"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("content=hello+there"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1"})))
        .expect(1)
        .mount(&server)
        .await;

    registry
        .execute(
            "create_message",
            &args(json!({"channel_id": "5", "content": "hello there"})),
        )
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap_or_default();
    let body = String::from_utf8_lossy(&received[0].body).to_string();
    assert!(!body.contains("embeds"), "absent optionals must be omitted: {body}");
    assert!(!body.contains("tts"), "absent optionals must be omitted: {body}");
}

#[tokio::test]
async fn form_encoding_json_stringifies_nested_values() {
    let (server, registry) = setup().await;

    Mock::given(method("POST"))
        .and(path("/channels/5/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1"})))
        .mount(&server)
        .await;

    registry
        .execute(
            "create_message",
            &args(json!({
                "channel_id": "5",
                "content": "hi",
                "embeds": [{"title": "t"}]
            })),
        )
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap_or_default();
    let body = String::from_utf8_lossy(&received[0].body).to_string();
    let decoded: Vec<(String, String)> =
        serde_urlencoded::from_str(&body).expect("valid urlencoded body");
    let embeds = decoded
        .iter()
        .find(|(k, _)| k == "embeds")
        .map(|(_, v)| v.clone())
        .expect("embeds pair present");
    assert_eq!(embeds, r#"[{"title":"t"}]"#);
}

#[tokio::test]
async fn multipart_body_uses_form_data_content_type() {
    let (server, registry) = setup().await;

    Mock::given(method("POST"))
        .and(path("/guilds/3/stickers"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "s1"})))
        .expect(1)
        .mount(&server)
        .await;

    registry
        .execute(
            "create_guild_sticker",
            &args(json!({
                "guild_id": "3",
                "name": "wave",
                "tags": "greeting",
                "file": "data"
            })),
        )
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap_or_default();
    let content_type = received[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("multipart/form-data"),
        "content type was {content_type}"
    );
}

#[tokio::test]
async fn bulk_endpoints_send_the_array_verbatim() {
    let (server, registry) = setup().await;
    let channels = json!([
        {"id": "1", "position": 2},
        {"id": "2", "position": 1}
    ]);

    Mock::given(method("PATCH"))
        .and(path("/guilds/6/channels"))
        .and(body_json(channels.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    registry
        .execute(
            "bulk_update_guild_channels",
            &args(json!({"guild_id": "6", "channels": channels})),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn empty_success_body_with_json_shape_yields_null() {
    let (server, registry) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/channels/8/thread-members/@me"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let data = registry
        .execute("join_thread", &args(json!({"channel_id": "8"})))
        .await
        .unwrap();
    assert_eq!(data, Value::Null);
}

#[tokio::test]
async fn malformed_success_body_is_a_parse_error() {
    let (server, registry) = setup().await;

    Mock::given(method("GET"))
        .and(path("/channels/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = registry
        .execute("get_channel", &args(json!({"channel_id": "1"})))
        .await
        .unwrap_err();
    match err {
        CoreError::ResponseParse { snippet, .. } => assert!(snippet.contains("not json")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn call_surface_flattens_to_uniform_result() {
    let (server, registry) = setup().await;

    Mock::given(method("GET"))
        .and(path("/channels/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Unknown Channel",
            "code": 10003
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/channels/200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "200"})))
        .mount(&server)
        .await;

    let ok = registry
        .call("get_channel", &args(json!({"channel_id": "200"})))
        .await;
    assert!(ok.success);
    assert_eq!(ok.output, Some(json!({"id": "200"})));
    assert!(ok.error.is_none());

    let failed = registry
        .call("get_channel", &args(json!({"channel_id": "404"})))
        .await;
    assert!(!failed.success);
    assert!(failed.output.is_none());
    let error = failed.error.unwrap_or_default();
    assert!(error.contains("Unknown Channel") && error.contains("10003"));

    let validation = registry.call("get_channel", &Map::new()).await;
    assert!(!validation.success);
    assert!(validation.error.unwrap_or_default().contains("get_channel"));
}

#[tokio::test]
async fn token_never_leaks_into_results_or_definitions() {
    let (server, registry) = setup().await;

    Mock::given(method("GET"))
        .and(path("/gateway"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"url": "wss://x"})))
        .mount(&server)
        .await;

    let data = registry.execute("get_gateway", &Map::new()).await.unwrap();
    assert!(!data.to_string().contains(TOKEN));

    for definition in registry.definitions() {
        assert!(!definition.to_string().contains(TOKEN));
    }
}
