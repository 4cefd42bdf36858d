//! Application command endpoints (global and guild-scoped).

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "create_application_command",
            "Create a global command for the Discord application.",
            Method::POST,
            "/applications/{application_id}/commands",
        )
        .path_param("application_id", "The ID of the application for which to create the command.")
        .required_body("name", FieldType::String, "The name of the command.")
        .required_body("description", FieldType::String, "The description of the command.")
        .body("options", FieldType::Array, "The options for the command."),

        EndpointDescriptor::new(
            "bulk_set_application_commands",
            "Bulk set application commands for a Discord application.",
            Method::PUT,
            "/applications/{application_id}/commands",
        )
        .path_param("application_id", "The ID of the application for which commands are being set.")
        .required_body("commands", FieldType::Array, "")
        .as_raw_body(),

        EndpointDescriptor::new(
            "list_application_commands",
            "List all global application commands for a Discord app.",
            Method::GET,
            "/applications/{application_id}/commands",
        )
        .path_param("application_id", "The ID of the application whose commands are to be listed.")
        .query("with_localizations", FieldType::Boolean, "Whether to include localizations in the response."),

        EndpointDescriptor::new(
            "get_application_command",
            "Retrieve a global command for the app.",
            Method::GET,
            "/applications/{application_id}/commands/{command_id}",
        )
        .path_param("application_id", "The ID of the application.")
        .path_param("command_id", "The ID of the command to retrieve."),

        EndpointDescriptor::new(
            "update_application_command",
            "Update a global command for the app.",
            Method::PATCH,
            "/applications/{application_id}/commands/{command_id}",
        )
        .path_param("application_id", "The ID of the application.")
        .path_param("command_id", "The ID of the command to update.")
        .required_body("name", FieldType::String, "The name of the command.")
        .required_body("description", FieldType::String, "The description of the command.")
        .required_body("options", FieldType::Array, "The options for the command.")
        .body("default_member_permissions", FieldType::String, "The default member permissions for the command.")
        .body("dm_permission", FieldType::Boolean, "Whether the command can be used in DMs."),

        EndpointDescriptor::new(
            "delete_application_command",
            "Delete a global command for the app.",
            Method::DELETE,
            "/applications/{application_id}/commands/{command_id}",
        )
        .path_param("application_id", "The ID of the application.")
        .path_param("command_id", "The ID of the command to delete.")
        .on_empty("Command deleted successfully."),

        EndpointDescriptor::new(
            "create_guild_application_command",
            "Create a new guild command for the app.",
            Method::POST,
            "/applications/{application_id}/guilds/{guild_id}/commands",
        )
        .path_param("application_id", "The ID of the application.")
        .path_param("guild_id", "The ID of the guild.")
        .required_body("name", FieldType::String, "The name of the command.")
        .required_body("description", FieldType::String, "The description of the command.")
        .body("options", FieldType::Array, "The options for the command."),

        EndpointDescriptor::new(
            "list_guild_application_commands",
            "Retrieve a list of all guild commands for the app.",
            Method::GET,
            "/applications/{application_id}/guilds/{guild_id}/commands",
        )
        .path_param("application_id", "The ID of the application.")
        .path_param("guild_id", "The ID of the guild.")
        .query("with_localizations", FieldType::Boolean, "Whether to include localizations."),

        EndpointDescriptor::new(
            "get_guild_application_command",
            "Retrieve a guild application command for the app.",
            Method::GET,
            "/applications/{application_id}/guilds/{guild_id}/commands/{command_id}",
        )
        .path_param("application_id", "The ID of the application.")
        .path_param("guild_id", "The ID of the guild.")
        .path_param("command_id", "The ID of the command."),

        EndpointDescriptor::new(
            "update_guild_application_command",
            "Update a guild application command in Discord.",
            Method::PATCH,
            "/applications/{application_id}/guilds/{guild_id}/commands/{command_id}",
        )
        .path_param("application_id", "The ID of the application.")
        .path_param("guild_id", "The ID of the guild.")
        .path_param("command_id", "The ID of the command to update.")
        .required_body("commandData", FieldType::Object, "")
        .as_raw_body(),

        EndpointDescriptor::new(
            "delete_guild_application_command",
            "Delete a guild application command on Discord.",
            Method::DELETE,
            "/applications/{application_id}/guilds/{guild_id}/commands/{command_id}",
        )
        .path_param("application_id", "The ID of the application.")
        .path_param("guild_id", "The ID of the guild.")
        .path_param("command_id", "The ID of the command to delete.")
        .on_empty("Command deleted successfully"),

        EndpointDescriptor::new(
            "bulk_set_guild_application_commands",
            "Bulk set guild application commands on Discord.",
            Method::PUT,
            "/applications/{application_id}/guilds/{guild_id}/commands",
        )
        .path_param("application_id", "The ID of the application.")
        .path_param("guild_id", "The ID of the guild.")
        .required_body("commands", FieldType::Array, "")
        .as_raw_body(),

        EndpointDescriptor::new(
            "get_guild_application_command_permissions",
            "Retrieve the command permissions for a command in the guild.",
            Method::GET,
            "/applications/{application_id}/guilds/{guild_id}/commands/{command_id}/permissions",
        )
        .path_param("application_id", "The ID of the application.")
        .path_param("guild_id", "The ID of the guild.")
        .path_param("command_id", "The ID of the command."),

        EndpointDescriptor::new(
            "list_guild_application_command_permissions",
            "List the command permission objects for all of the app's commands in the guild.",
            Method::GET,
            "/applications/{application_id}/guilds/{guild_id}/commands/permissions",
        )
        .path_param("application_id", "The ID of the application.")
        .path_param("guild_id", "The ID of the guild."),

        EndpointDescriptor::new(
            "set_guild_application_command_permissions",
            "Set permissions for a command in a guild.",
            Method::PUT,
            "/applications/{application_id}/guilds/{guild_id}/commands/{command_id}/permissions",
        )
        .path_param("application_id", "The ID of the application.")
        .path_param("guild_id", "The ID of the guild.")
        .path_param("command_id", "The ID of the command.")
        .required_body("permissions", FieldType::Array, "An array of permission objects."),
    ]
}
