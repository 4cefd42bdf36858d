//! Guild role endpoints.

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "create_guild_role",
            "Create a new role in a Discord guild.",
            Method::POST,
            "/guilds/{guild_id}/roles",
        )
        .path_param("guild_id", "The ID of the guild where the role will be created.")
        .required_body("name", FieldType::String, "The name of the role.")
        .body("color", FieldType::String, "The color of the role in hexadecimal format.")
        .body("hoist", FieldType::Boolean, "Whether the role should be displayed separately in the sidebar.")
        .body("permissions", FieldType::String, "The permissions for the role.")
        .body("description", FieldType::String, "The description of the role."),

        EndpointDescriptor::new(
            "list_guild_roles",
            "List roles in a Discord guild.",
            Method::GET,
            "/guilds/{guild_id}/roles",
        )
        .path_param("guild_id", "The ID of the guild to list roles from."),

        EndpointDescriptor::new(
            "update_guild_role",
            "Update a role in a Discord guild.",
            Method::PATCH,
            "/guilds/{guild_id}/roles/{role_id}",
        )
        .path_param("guild_id", "The ID of the guild where the role exists.")
        .path_param("role_id", "The ID of the role to update.")
        .required_body("roleData", FieldType::Object, "")
        .as_raw_body(),

        EndpointDescriptor::new(
            "delete_guild_role",
            "Delete a role in a guild on Discord.",
            Method::DELETE,
            "/guilds/{guild_id}/roles/{role_id}",
        )
        .path_param("guild_id", "The ID of the guild (server) where the role exists.")
        .path_param("role_id", "The ID of the role to be deleted.")
        .on_empty("Role deleted successfully."),

        EndpointDescriptor::new(
            "bulk_update_guild_roles",
            "Bulk update the positions of roles in a Discord guild.",
            Method::PATCH,
            "/guilds/{guild_id}/roles",
        )
        .path_param("guild_id", "The ID of the guild where roles will be updated.")
        .required_body("roles", FieldType::Array, "An array of role objects to update.")
        .as_raw_body(),
    ]
}
