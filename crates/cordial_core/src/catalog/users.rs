//! User and current-user endpoints.

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "get_my_user",
            "Retrieve details about the current user from Discord.",
            Method::GET,
            "/users/@me",
        ),

        EndpointDescriptor::new(
            "update_my_user",
            "Update account settings for the current user on Discord.",
            Method::PATCH,
            "/users/@me",
        )
        .body("username", FieldType::String, "The new username for the user.")
        .body("avatar", FieldType::String, "The new avatar for the user (base64 encoded)."),

        EndpointDescriptor::new(
            "get_user",
            "Retrieve a user from Discord by user ID.",
            Method::GET,
            "/users/{user_id}",
        )
        .path_param("user_id", "The ID of the user to retrieve."),

        EndpointDescriptor::new(
            "list_my_connections",
            "List all connections for the user on Discord.",
            Method::GET,
            "/users/@me/connections",
        ),

        EndpointDescriptor::new(
            "list_my_guilds",
            "List guilds where the user is a member.",
            Method::GET,
            "/users/@me/guilds",
        )
        .query("before", FieldType::String, "Guilds before this ID.")
        .query("after", FieldType::String, "Guilds after this ID.")
        .query("limit", FieldType::Integer, "The maximum number of guilds to return.")
        .query("with_counts", FieldType::Boolean, "Whether to include approximate member counts."),

        EndpointDescriptor::new(
            "leave_guild",
            "Leave a guild on behalf of the current user.",
            Method::DELETE,
            "/users/@me/guilds/{guild_id}",
        )
        .path_param("guild_id", "The ID of the guild to leave.")
        .on_empty("Successfully left the guild."),
    ]
}
