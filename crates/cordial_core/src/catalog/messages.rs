//! Message endpoints.

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "create_message",
            "Create a message in a Discord channel.",
            Method::POST,
            "/channels/{channel_id}/messages",
        )
        .path_param("channel_id", "The ID of the channel where the message will be sent.")
        .required_body("content", FieldType::String, "The content of the message.")
        .body("embeds", FieldType::Array, "An array of embed objects to include in the message.")
        .body("allowed_mentions", FieldType::Array, "An array of allowed mentions.")
        .body("sticker_ids", FieldType::Array, "An array of sticker IDs to include in the message.")
        .body("components", FieldType::Array, "An array of components to include in the message.")
        .body("flags", FieldType::Integer, "Message flags.")
        .body("attachments", FieldType::Array, "An array of attachments to include in the message.")
        .body("message_reference", FieldType::String, "A message reference object.")
        .body("nonce", FieldType::String, "A nonce to ensure the message is unique.")
        .body("tts", FieldType::Boolean, "Whether the message is a TTS message.")
        .form(),

        EndpointDescriptor::new(
            "list_messages",
            "List messages in a Discord channel.",
            Method::GET,
            "/channels/{channel_id}/messages",
        )
        .path_param("channel_id", "The ID of the channel to list messages from.")
        .query("around", FieldType::String, "Message ID to get messages around.")
        .query("before", FieldType::String, "Get messages before this message ID.")
        .query("after", FieldType::String, "Get messages after this message ID.")
        .query("limit", FieldType::Integer, "The maximum number of messages to return."),

        EndpointDescriptor::new(
            "get_message",
            "Retrieve a message from a Discord channel.",
            Method::GET,
            "/channels/{channel_id}/messages/{message_id}",
        )
        .path_param("channel_id", "The ID of the channel from which to retrieve the message.")
        .path_param("message_id", "The ID of the message to retrieve."),

        EndpointDescriptor::new(
            "update_message",
            "Update a message in a Discord channel.",
            Method::PATCH,
            "/channels/{channel_id}/messages/{message_id}",
        )
        .path_param("channel_id", "The ID of the channel where the message is located.")
        .path_param("message_id", "The ID of the message to be updated.")
        .body("content", FieldType::String, "The new content of the message.")
        .body("embeds", FieldType::Array, "An array of embed objects to include in the message.")
        .body("flags", FieldType::Integer, "The flags to apply to the message.")
        .body("allowed_mentions", FieldType::Array, "An array of allowed mentions.")
        .body("sticker_ids", FieldType::Array, "An array of sticker IDs to include in the message.")
        .body("components", FieldType::Array, "An array of components to include in the message.")
        .body("attachments", FieldType::Array, "An array of attachments to include in the message.")
        .form(),

        EndpointDescriptor::new(
            "bulk_delete_messages",
            "Bulk delete messages in a Discord channel.",
            Method::POST,
            "/channels/{channel_id}/messages/bulk-delete",
        )
        .path_param("channel_id", "The ID of the channel from which to delete messages.")
        .required_body("messages", FieldType::Array, "An array of message IDs to delete."),

        EndpointDescriptor::new(
            "crosspost_message",
            "Crosspost a message in an announcement channel to all following channels.",
            Method::POST,
            "/channels/{channel_id}/messages/{message_id}/crosspost",
        )
        .path_param("channel_id", "The ID of the channel where the message is located.")
        .path_param("message_id", "The ID of the message to be crossposted."),

        EndpointDescriptor::new(
            "pin_message",
            "Pin a message in a Discord channel.",
            Method::PUT,
            "/channels/{channel_id}/pins/{message_id}",
        )
        .path_param("channel_id", "The ID of the channel where the message is located.")
        .path_param("message_id", "The ID of the message to be pinned.")
        .on_empty("Message pinned successfully"),

        EndpointDescriptor::new(
            "unpin_message",
            "Unpin a message in a Discord channel.",
            Method::DELETE,
            "/channels/{channel_id}/pins/{message_id}",
        )
        .path_param("channel_id", "The ID of the channel where the message is pinned.")
        .path_param("message_id", "The ID of the message to unpin.")
        .on_empty("Message unpinned successfully."),

        EndpointDescriptor::new(
            "list_pinned_messages",
            "List all pinned messages in a channel.",
            Method::GET,
            "/channels/{channel_id}/pins",
        )
        .path_param("channel_id", "The ID of the channel to list pinned messages from."),
    ]
}
