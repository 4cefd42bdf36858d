//! Guild emoji endpoints.

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "create_guild_emoji",
            "Create a new emoji in a Discord guild.",
            Method::POST,
            "/guilds/{guild_id}/emojis",
        )
        .path_param("guild_id", "The ID of the guild where the emoji will be created.")
        .required_body("name", FieldType::String, "The name of the emoji.")
        .required_body("image", FieldType::String, "The image data for the emoji (base64 encoded).")
        .body("roles", FieldType::Array, "An array of role IDs that can use the emoji."),

        EndpointDescriptor::new(
            "list_guild_emojis",
            "List emojis in a Discord guild.",
            Method::GET,
            "/guilds/{guild_id}/emojis",
        )
        .path_param("guild_id", "The ID of the guild to list emojis from."),

        EndpointDescriptor::new(
            "get_guild_emoji",
            "Retrieve an emoji from a guild on Discord.",
            Method::GET,
            "/guilds/{guild_id}/emojis/{emoji_id}",
        )
        .path_param("guild_id", "The ID of the guild.")
        .path_param("emoji_id", "The ID of the emoji."),

        EndpointDescriptor::new(
            "update_guild_emoji",
            "Update an emoji's metadata in a guild.",
            Method::PATCH,
            "/guilds/{guild_id}/emojis/{emoji_id}",
        )
        .path_param("guild_id", "The ID of the guild where the emoji is located.")
        .path_param("emoji_id", "The ID of the emoji to update.")
        .required_body("name", FieldType::String, "The new name for the emoji.")
        .body("roles", FieldType::Array, "An array of role IDs that can use the emoji."),

        EndpointDescriptor::new(
            "delete_guild_emoji",
            "Delete an emoji from a guild in Discord.",
            Method::DELETE,
            "/guilds/{guild_id}/emojis/{emoji_id}",
        )
        .path_param("guild_id", "The ID of the guild from which to delete the emoji.")
        .path_param("emoji_id", "The ID of the emoji to delete.")
        .on_empty("Emoji deleted successfully."),
    ]
}
