//! Guild ban endpoints.

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "ban_user_from_guild",
            "Ban a user from a Discord guild.",
            Method::PUT,
            "/guilds/{guild_id}/bans/{user_id}",
        )
        .path_param("guild_id", "The ID of the guild from which to ban the user.")
        .path_param("user_id", "The ID of the user to ban.")
        .on_empty("User banned successfully."),

        EndpointDescriptor::new(
            "unban_user_from_guild",
            "Unban a user from a Discord guild.",
            Method::DELETE,
            "/guilds/{guild_id}/bans/{user_id}",
        )
        .path_param("guild_id", "The ID of the guild from which to unban the user.")
        .path_param("user_id", "The ID of the user to unban.")
        .on_empty("User unbanned successfully."),

        EndpointDescriptor::new(
            "get_guild_ban",
            "Retrieve ban details for a user in a Discord guild.",
            Method::GET,
            "/guilds/{guild_id}/bans/{user_id}",
        )
        .path_param("guild_id", "The ID of the guild.")
        .path_param("user_id", "The ID of the user to retrieve ban details for."),

        EndpointDescriptor::new(
            "list_guild_bans",
            "List user bans for a guild on Discord.",
            Method::GET,
            "/guilds/{guild_id}/bans",
        )
        .path_param("guild_id", "The ID of the guild to list bans from.")
        .query("limit", FieldType::Integer, "The maximum number of bans to return.")
        .query("before", FieldType::String, "Get bans before this user ID.")
        .query("after", FieldType::String, "Get bans after this user ID."),
    ]
}
