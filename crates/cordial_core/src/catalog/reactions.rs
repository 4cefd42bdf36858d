//! Message reaction endpoints.

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "add_my_message_reaction",
            "Add a reaction on the message for the current user.",
            Method::PUT,
            "/channels/{channel_id}/messages/{message_id}/reactions/{emoji_name}/@me",
        )
        .path_param("channel_id", "The ID of the channel where the message is located.")
        .path_param("message_id", "The ID of the message to react to.")
        .path_param("emoji_name", "The name of the emoji to use for the reaction.")
        .on_empty("Reaction added successfully."),

        EndpointDescriptor::new(
            "delete_my_message_reaction",
            "Delete a reaction on a message for the current user.",
            Method::DELETE,
            "/channels/{channel_id}/messages/{message_id}/reactions/{emoji_name}/@me",
        )
        .path_param("channel_id", "The ID of the channel where the message is located.")
        .path_param("message_id", "The ID of the message from which to delete the reaction.")
        .path_param("emoji_name", "The name of the emoji used for the reaction.")
        .on_empty("Reaction deleted successfully"),

        EndpointDescriptor::new(
            "delete_user_message_reaction",
            "Delete a user's reaction to a message in a Discord channel.",
            Method::DELETE,
            "/channels/{channel_id}/messages/{message_id}/reactions/{emoji_name}/{user_id}",
        )
        .path_param("channel_id", "The ID of the channel where the message is located.")
        .path_param("message_id", "The ID of the message to remove the reaction from.")
        .path_param("emoji_name", "The name of the emoji used for the reaction.")
        .path_param("user_id", "The ID of the user whose reaction is to be removed.")
        .on_empty("Reaction deleted successfully."),

        EndpointDescriptor::new(
            "delete_all_message_reactions",
            "Delete all reactions on a specific message in a Discord channel.",
            Method::DELETE,
            "/channels/{channel_id}/messages/{message_id}/reactions",
        )
        .path_param("channel_id", "The ID of the channel containing the message.")
        .path_param("message_id", "The ID of the message from which to delete reactions.")
        .on_empty("All reactions deleted successfully."),

        EndpointDescriptor::new(
            "delete_all_message_reactions_by_emoji",
            "Delete all reactions on the message for a given emoji.",
            Method::DELETE,
            "/channels/{channel_id}/messages/{message_id}/reactions/{emoji_name}",
        )
        .path_param("channel_id", "The ID of the channel where the message is located.")
        .path_param("message_id", "The ID of the message from which to delete reactions.")
        .path_param("emoji_name", "The name of the emoji for which to delete reactions.")
        .on_empty("Reactions deleted successfully."),

        EndpointDescriptor::new(
            "list_message_reactions_by_emoji",
            "List users who reacted to a message with a given emoji.",
            Method::GET,
            "/channels/{channel_id}/messages/{message_id}/reactions/{emoji_name}",
        )
        .path_param("channel_id", "The ID of the channel containing the message.")
        .path_param("message_id", "The ID of the message to check reactions for.")
        .path_param("emoji_name", "The name of the emoji used for reactions.")
        .query("after", FieldType::String, "The ID of the message after which to return reactions.")
        .query("limit", FieldType::Integer, "The maximum number of reactions to return."),
    ]
}
