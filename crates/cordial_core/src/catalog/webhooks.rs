//! Webhook endpoints (including Slack/GitHub compatibility).

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "create_webhook",
            "Create a new webhook for a Discord channel.",
            Method::POST,
            "/channels/{channel_id}/webhooks",
        )
        .path_param("channel_id", "The ID of the channel where the webhook will be created.")
        .required_body("name", FieldType::String, "The name of the webhook.")
        .body("avatar", FieldType::String, "The avatar of the webhook (optional)."),

        EndpointDescriptor::new(
            "get_webhook",
            "Retrieve a webhook from Discord.",
            Method::GET,
            "/webhooks/{webhook_id}",
        )
        .path_param("webhook_id", "The ID of the webhook to retrieve."),

        EndpointDescriptor::new(
            "get_webhook_by_token",
            "Retrieve a webhook using its ID and token.",
            Method::GET,
            "/webhooks/{webhook_id}/{webhook_token}",
        )
        .path_param("webhook_id", "The ID of the webhook to retrieve.")
        .path_param("webhook_token", "The token associated with the webhook."),

        EndpointDescriptor::new(
            "list_channel_webhooks",
            "List a channel's webhooks in Discord.",
            Method::GET,
            "/channels/{channel_id}/webhooks",
        )
        .path_param("channel_id", "The ID of the channel for which to list webhooks."),

        EndpointDescriptor::new(
            "get_guild_webhooks",
            "Get webhooks for a specific guild in Discord.",
            Method::GET,
            "/guilds/{guild_id}/webhooks",
        )
        .path_param("guild_id", "The ID of the guild to fetch webhooks from."),

        EndpointDescriptor::new(
            "update_webhook",
            "Update a webhook on Discord.",
            Method::PATCH,
            "/webhooks/{webhook_id}",
        )
        .path_param("webhook_id", "The ID of the webhook to update.")
        .body("name", FieldType::String, "The new name for the webhook.")
        .body("avatar", FieldType::String, "The new avatar for the webhook (can be null).")
        .body("channel_id", FieldType::String, "The new channel ID for the webhook (can be null)."),

        EndpointDescriptor::new(
            "update_webhook_by_token",
            "Update a webhook using its token.",
            Method::PATCH,
            "/webhooks/{webhook_id}/{webhook_token}",
        )
        .path_param("webhook_id", "The ID of the webhook to update.")
        .path_param("webhook_token", "The token of the webhook to update.")
        .body("name", FieldType::String, "The new name for the webhook.")
        .body("avatar", FieldType::String, "The new avatar for the webhook (can be null)."),

        EndpointDescriptor::new(
            "delete_webhook",
            "Delete a webhook from Discord.",
            Method::DELETE,
            "/webhooks/{webhook_id}",
        )
        .path_param("webhook_id", "The ID of the webhook to delete.")
        .on_empty("Webhook deleted successfully."),

        EndpointDescriptor::new(
            "delete_webhook_by_token",
            "Delete a webhook using its ID and token.",
            Method::DELETE,
            "/webhooks/{webhook_id}/{webhook_token}",
        )
        .path_param("webhook_id", "The ID of the webhook to delete.")
        .path_param("webhook_token", "The token of the webhook to delete.")
        .on_empty("Webhook deleted successfully."),

        EndpointDescriptor::new(
            "execute_webhook",
            "Execute a webhook on Discord.",
            Method::POST,
            "/webhooks/{webhook_id}/{webhook_token}",
        )
        .path_param("webhook_id", "The ID of the webhook.")
        .path_param("webhook_token", "The token of the webhook.")
        .body("content", FieldType::String, "The content to send in the webhook.")
        .body("embeds", FieldType::Array, "An array of embed objects to include in the webhook.")
        .body("allowed_mentions", FieldType::Object, "Specifies allowed mentions.")
        .body("components", FieldType::Array, "An array of components to include in the webhook.")
        .body("attachments", FieldType::Array, "An array of attachment objects to include in the webhook.")
        .body("tts", FieldType::Boolean, "Whether to send the message as a TTS message.")
        .body("flags", FieldType::Integer, "Additional flags for the message.")
        .body("username", FieldType::String, "The username to display for the webhook.")
        .body("avatar_url", FieldType::String, "The avatar URL to display for the webhook.")
        .body("thread_name", FieldType::String, "The name of the thread to send the message in.")
        .body("applied_tags", FieldType::Array, "An array of tags to apply to the message.")
        .query("wait", FieldType::Boolean, "Whether to wait for the server's response.")
        .query("thread_id", FieldType::String, "The ID of the thread to send the message in.")
        .form(),

        EndpointDescriptor::new(
            "execute_slack_compatible_webhook",
            "Execute a Slack-compatible webhook on Discord.",
            Method::POST,
            "/webhooks/{webhook_id}/{webhook_token}/slack",
        )
        .path_param("webhook_id", "The ID of the webhook.")
        .path_param("webhook_token", "The token of the webhook.")
        .required_body("text", FieldType::String, "The text to send in the webhook.")
        .required_body("username", FieldType::String, "The username to display in the webhook.")
        .body("icon_url", FieldType::String, "The URL of the icon to display in the webhook.")
        .body("attachments", FieldType::Array, "Any attachments to include in the webhook.")
        .query("wait", FieldType::Boolean, "Whether to wait for the message to be sent.")
        .query("thread_id", FieldType::String, "The ID of the thread to send the message in.")
        .form(),

        EndpointDescriptor::new(
            "execute_github_compatible_webhook",
            "Execute a GitHub compatible webhook on Discord.",
            Method::POST,
            "/webhooks/{webhook_id}/{webhook_token}/github",
        )
        .path_param("webhook_id", "The ID of the webhook.")
        .path_param("webhook_token", "The token of the webhook.")
        .required_body("payload", FieldType::Object, "The payload to send to the webhook.")
        .as_raw_body()
        .query("wait", FieldType::Boolean, "Whether to wait for the webhook to finish processing.")
        .query("thread_id", FieldType::String, "The ID of the thread to send the message in."),

        EndpointDescriptor::new(
            "get_webhook_message",
            "Retrieve a previously-sent webhook message from Discord.",
            Method::GET,
            "/webhooks/{webhook_id}/{webhook_token}/messages/{message_id}",
        )
        .path_param("webhook_id", "The ID of the webhook.")
        .path_param("webhook_token", "The token of the webhook.")
        .path_param("message_id", "The ID of the message to retrieve.")
        .query("thread_id", FieldType::String, "The ID of the thread, if applicable."),

        EndpointDescriptor::new(
            "update_webhook_message",
            "Update a previously sent webhook message on Discord.",
            Method::PATCH,
            "/webhooks/{webhook_id}/{webhook_token}/messages/{message_id}",
        )
        .path_param("webhook_id", "The ID of the webhook.")
        .path_param("webhook_token", "The token of the webhook.")
        .path_param("message_id", "The ID of the message to update.")
        .body("content", FieldType::String, "The new content for the message.")
        .body("embeds", FieldType::Array, "An array of embed objects to include in the message.")
        .body("allowed_mentions", FieldType::Array, "An array of allowed mentions.")
        .body("components", FieldType::Array, "An array of components to include in the message.")
        .body("attachments", FieldType::Array, "An array of attachments to include in the message.")
        .body("flags", FieldType::Integer, "Flags for the message.")
        .query("thread_id", FieldType::String, "The ID of the thread to send the message in.")
        .form(),

        EndpointDescriptor::new(
            "delete_webhook_message",
            "Delete a message created by a webhook on Discord.",
            Method::DELETE,
            "/webhooks/{webhook_id}/{webhook_token}/messages/{message_id}",
        )
        .path_param("webhook_id", "The ID of the webhook.")
        .path_param("webhook_token", "The token of the webhook.")
        .path_param("message_id", "The ID of the message to delete.")
        .query("thread_id", FieldType::String, "The ID of the thread the message is in (optional).")
        .on_empty("Message deleted successfully"),

        EndpointDescriptor::new(
            "get_original_webhook_message",
            "Retrieve the initial interaction response from a webhook.",
            Method::GET,
            "/webhooks/{webhook_id}/{webhook_token}/messages/@original",
        )
        .path_param("webhook_id", "The ID of the webhook.")
        .path_param("webhook_token", "The token of the webhook.")
        .query("thread_id", FieldType::String, "The ID of the thread (optional)."),

        EndpointDescriptor::new(
            "update_original_webhook_message",
            "Update the original webhook message on Discord.",
            Method::PATCH,
            "/webhooks/{webhook_id}/{webhook_token}/messages/@original",
        )
        .path_param("webhook_id", "The ID of the webhook.")
        .path_param("webhook_token", "The token of the webhook.")
        .body("content", FieldType::String, "The content of the message.")
        .body("embeds", FieldType::Array, "An array of embed objects.")
        .body("allowed_mentions", FieldType::Array, "An array of allowed mention objects.")
        .body("components", FieldType::Array, "An array of component objects.")
        .body("attachments", FieldType::Array, "An array of attachment objects.")
        .body("flags", FieldType::Integer, "Message flags.")
        .query("thread_id", FieldType::String, "The ID of the thread to send the message in.")
        .form(),

        EndpointDescriptor::new(
            "delete_original_webhook_message",
            "Delete the original interaction response of a webhook message.",
            Method::DELETE,
            "/webhooks/{webhook_id}/{webhook_token}/messages/@original",
        )
        .path_param("webhook_id", "The ID of the webhook.")
        .path_param("webhook_token", "The token of the webhook.")
        .query("thread_id", FieldType::String, "The ID of the thread (optional).")
        .on_empty("Message deleted successfully."),
    ]
}
