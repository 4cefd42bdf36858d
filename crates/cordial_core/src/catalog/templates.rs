//! Guild template endpoints.

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "create_guild_template",
            "Create a guild template for a guild on Discord.",
            Method::POST,
            "/guilds/{guild_id}/templates",
        )
        .path_param("guild_id", "The ID of the guild where the template will be created.")
        .required_body("name", FieldType::String, "The name of the template.")
        .body("description", FieldType::String, "The description of the template."),

        EndpointDescriptor::new(
            "get_guild_template",
            "Retrieve a guild template from Discord.",
            Method::GET,
            "/guilds/templates/{code}",
        )
        .path_param("code", "The code of the guild template to retrieve."),

        EndpointDescriptor::new(
            "list_guild_templates",
            "List guild templates for a specific guild on Discord.",
            Method::GET,
            "/guilds/{guild_id}/templates",
        )
        .path_param("guild_id", "The ID of the guild for which to list templates."),

        EndpointDescriptor::new(
            "update_guild_template",
            "Update the metadata for a guild template on Discord.",
            Method::PATCH,
            "/guilds/{guild_id}/templates/{code}",
        )
        .path_param("guild_id", "The ID of the guild.")
        .path_param("code", "The code of the template.")
        .required_body("name", FieldType::String, "The new name for the template.")
        .body("description", FieldType::String, "The new description for the template."),

        EndpointDescriptor::new(
            "delete_guild_template",
            "Delete a guild template from Discord.",
            Method::DELETE,
            "/guilds/{guild_id}/templates/{code}",
        )
        .path_param("guild_id", "The ID of the guild from which the template will be deleted.")
        .path_param("code", "The code of the template to be deleted."),

        EndpointDescriptor::new(
            "sync_guild_template",
            "Sync a template to the guild's current state.",
            Method::PUT,
            "/guilds/{guild_id}/templates/{code}",
        )
        .path_param("guild_id", "The ID of the guild.")
        .path_param("code", "The template code."),

        EndpointDescriptor::new(
            "create_guild_from_template",
            "Create a new guild based on a guild template.",
            Method::POST,
            "/guilds/templates/{code}",
        )
        .path_param("code", "The template code to create the guild from.")
        .required_body("name", FieldType::String, "The name of the new guild.")
        .body("icon", FieldType::String, "The icon for the new guild (optional)."),
    ]
}
