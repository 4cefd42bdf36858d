//! Thread endpoints.

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "create_thread",
            "Create a new thread in a Discord channel.",
            Method::POST,
            "/channels/{channel_id}/threads",
        )
        .path_param("channel_id", "The ID of the channel where the thread will be created.")
        .required_body("name", FieldType::String, "The name of the thread.")
        .body("content", FieldType::String, "The content of the thread.")
        .body("embeds", FieldType::Array, "An array of embed objects to include in the thread.")
        .body("allowed_mentions", FieldType::Object, "Allowed mentions for the thread.")
        .body("sticker_ids", FieldType::Array, "An array of sticker IDs to include in the thread.")
        .body("components", FieldType::Array, "An array of components to include in the thread.")
        .body("flags", FieldType::Integer, "Flags for the thread.")
        .body("attachments", FieldType::Array, "An array of attachments to include in the thread.")
        .body("auto_archive_duration", FieldType::Integer, "Duration for auto-archiving the thread.")
        .body("rate_limit_per_user", FieldType::Integer, "Rate limit per user for the thread.")
        .body("applied_tags", FieldType::Array, "An array of tags to apply to the thread.")
        .form(),

        EndpointDescriptor::new(
            "create_thread_from_message",
            "Create a new thread from an existing message in Discord.",
            Method::POST,
            "/channels/{channel_id}/messages/{message_id}/threads",
        )
        .path_param("channel_id", "The ID of the channel where the message is located.")
        .path_param("message_id", "The ID of the message to create a thread from.")
        .required_body("name", FieldType::String, "The name of the thread.")
        .body("auto_archive_duration", FieldType::Integer, "The duration in minutes for auto-archiving the thread.")
        .body("rate_limit_per_user", FieldType::Integer, "The rate limit per user for the thread."),

        EndpointDescriptor::new(
            "join_thread",
            "Add the current user to a Discord thread.",
            Method::PUT,
            "/channels/{channel_id}/thread-members/@me",
        )
        .path_param("channel_id", "The ID of the channel where the thread is located."),

        EndpointDescriptor::new(
            "leave_thread",
            "Remove the current user from the thread.",
            Method::DELETE,
            "/channels/{channel_id}/thread-members/@me",
        )
        .path_param("channel_id", "The ID of the channel from which to leave the thread.")
        .on_empty("Successfully left the thread."),

        EndpointDescriptor::new(
            "add_thread_member",
            "Add a member to a Discord thread.",
            Method::PUT,
            "/channels/{channel_id}/thread-members/{user_id}",
        )
        .path_param("channel_id", "The ID of the channel where the thread is located.")
        .path_param("user_id", "The ID of the user to add to the thread.")
        .on_empty("Member added to thread successfully."),

        EndpointDescriptor::new(
            "delete_thread_member",
            "Remove a member from a thread in Discord.",
            Method::DELETE,
            "/channels/{channel_id}/thread-members/{user_id}",
        )
        .path_param("channel_id", "The ID of the channel.")
        .path_param("user_id", "The ID of the user to remove from the thread.")
        .on_empty("Member successfully removed from the thread."),

        EndpointDescriptor::new(
            "get_thread_member",
            "Retrieve the thread member object for a user, if they are a member of the thread.",
            Method::GET,
            "/channels/{channel_id}/thread-members/{user_id}",
        )
        .path_param("channel_id", "The ID of the channel.")
        .path_param("user_id", "The ID of the user.")
        .query("with_member", FieldType::Boolean, "Whether to include the member object."),

        EndpointDescriptor::new(
            "list_thread_members",
            "List all members of a thread in Discord.",
            Method::GET,
            "/channels/{channel_id}/thread-members",
        )
        .path_param("channel_id", "The ID of the channel where the thread is located.")
        .query("with_member", FieldType::Boolean, "Whether to include member data.")
        .query("limit", FieldType::Integer, "The maximum number of members to return.")
        .query("after", FieldType::String, "The ID of the member after which to return members."),

        EndpointDescriptor::new(
            "list_public_archived_threads",
            "List public archived threads in a Discord channel.",
            Method::GET,
            "/channels/{channel_id}/threads/archived/public",
        )
        .path_param("channel_id", "The ID of the channel to list archived threads from.")
        .query("before", FieldType::String, "Get threads before this timestamp.")
        .query("limit", FieldType::Integer, "The maximum number of threads to return."),

        EndpointDescriptor::new(
            "list_my_private_archived_threads",
            "List the user's joined private archived threads in a specified channel.",
            Method::GET,
            "/channels/{channel_id}/users/@me/threads/archived/private",
        )
        .path_param("channel_id", "The ID of the channel to list archived threads from.")
        .query("before", FieldType::String, "The timestamp to get threads before this time.")
        .query("limit", FieldType::Integer, "The maximum number of threads to return."),
    ]
}
