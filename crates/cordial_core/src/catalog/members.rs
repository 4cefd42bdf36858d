//! Guild member endpoints.

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "add_guild_member",
            "Add a user to a guild in Discord.",
            Method::PUT,
            "/guilds/{guild_id}/members/{user_id}",
        )
        .path_param("guild_id", "The ID of the guild.")
        .path_param("user_id", "The ID of the user to add.")
        .required_body("access_token", FieldType::String, "The access token for the user.")
        .body("nick", FieldType::String, "The nickname for the user in the guild.")
        .body("roles", FieldType::Array, "The roles to assign to the user.")
        .body("mute", FieldType::Boolean, "Whether the user is muted.")
        .body("deaf", FieldType::Boolean, "Whether the user is deafened.")
        .body("flags", FieldType::Integer, "The flags for the user."),

        EndpointDescriptor::new(
            "get_guild_member",
            "Retrieve the guild member object for a user in the specified guild.",
            Method::GET,
            "/guilds/{guild_id}/members/{user_id}",
        )
        .path_param("guild_id", "The ID of the guild.")
        .path_param("user_id", "The ID of the user."),

        EndpointDescriptor::new(
            "list_guild_members",
            "List members of a guild in Discord.",
            Method::GET,
            "/guilds/{guild_id}/members",
        )
        .path_param("guild_id", "The ID of the guild (server) to list members from.")
        .query("limit", FieldType::Integer, "The maximum number of members to return.")
        .query("after", FieldType::Integer, "The ID of the member after which to return members."),

        EndpointDescriptor::new(
            "search_guild_members",
            "Search for guild members in Discord.",
            Method::GET,
            "/guilds/{guild_id}/members/search",
        )
        .path_param("guild_id", "The ID of the guild to search members in.")
        .required_query("query", FieldType::String, "The query string to search for members by username or nickname.")
        .required_query("limit", FieldType::Integer, "The maximum number of members to return."),

        EndpointDescriptor::new(
            "update_guild_member",
            "Update member properties for a user in a guild.",
            Method::PATCH,
            "/guilds/{guild_id}/members/{user_id}",
        )
        .path_param("guild_id", "The ID of the guild.")
        .path_param("user_id", "The ID of the user to update.")
        .body("memberData", FieldType::Object, "")
        .as_raw_body(),

        EndpointDescriptor::new(
            "delete_guild_member",
            "Remove a member from a guild in Discord.",
            Method::DELETE,
            "/guilds/{guild_id}/members/{user_id}",
        )
        .path_param("guild_id", "The ID of the guild from which to remove the member.")
        .path_param("user_id", "The ID of the user to remove from the guild.")
        .on_empty("Member deleted successfully."),

        EndpointDescriptor::new(
            "get_my_guild_member",
            "Retrieve the guild member object for the user.",
            Method::GET,
            "/users/@me/guilds/{guild_id}/member",
        )
        .path_param("guild_id", "The ID of the guild to retrieve the member from."),

        EndpointDescriptor::new(
            "update_my_guild_member",
            "Update the current member in the guild.",
            Method::PATCH,
            "/guilds/{guild_id}/members/@me",
        )
        .path_param("guild_id", "The ID of the guild.")
        .body("nick", FieldType::String, "The new nickname for the member. Pass null to reset the nickname."),

        EndpointDescriptor::new(
            "add_guild_member_role",
            "Add a role to a guild member in Discord.",
            Method::PUT,
            "/guilds/{guild_id}/members/{user_id}/roles/{role_id}",
        )
        .path_param("guild_id", "The ID of the guild.")
        .path_param("user_id", "The ID of the user to whom the role will be added.")
        .path_param("role_id", "The ID of the role to be added.")
        .on_empty("Role added successfully."),

        EndpointDescriptor::new(
            "delete_guild_member_role",
            "Delete a role from a guild member in Discord.",
            Method::DELETE,
            "/guilds/{guild_id}/members/{user_id}/roles/{role_id}",
        )
        .path_param("guild_id", "The ID of the guild (server).")
        .path_param("user_id", "The ID of the user (member).")
        .path_param("role_id", "The ID of the role to be removed.")
        .on_empty("Role deleted successfully"),
    ]
}
