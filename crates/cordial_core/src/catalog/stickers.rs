//! Sticker endpoints.

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "create_guild_sticker",
            "Create a sticker in a guild.",
            Method::POST,
            "/guilds/{guild_id}/stickers",
        )
        .path_param("guild_id", "The ID of the guild where the sticker will be created.")
        .required_body("name", FieldType::String, "The name of the sticker.")
        .required_body("tags", FieldType::String, "The tags associated with the sticker.")
        .required_body("file", FieldType::String, "The file data for the sticker.")
        .body("description", FieldType::String, "An optional description for the sticker.")
        .multipart(),

        EndpointDescriptor::new(
            "list_guild_stickers",
            "List stickers in a Discord guild.",
            Method::GET,
            "/guilds/{guild_id}/stickers",
        )
        .path_param("guild_id", "The ID of the guild to list stickers from."),

        EndpointDescriptor::new(
            "get_guild_sticker",
            "Retrieve a sticker in a guild.",
            Method::GET,
            "/guilds/{guild_id}/stickers/{sticker_id}",
        )
        .path_param("guild_id", "The ID of the guild.")
        .path_param("sticker_id", "The ID of the sticker."),

        EndpointDescriptor::new(
            "update_guild_sticker",
            "Update a sticker's metadata in a guild.",
            Method::PATCH,
            "/guilds/{guild_id}/stickers/{sticker_id}",
        )
        .path_param("guild_id", "The ID of the guild where the sticker is located.")
        .path_param("sticker_id", "The ID of the sticker to update.")
        .required_body("name", FieldType::String, "The new name for the sticker.")
        .required_body("tags", FieldType::String, "The new tags for the sticker.")
        .body("description", FieldType::String, "The new description for the sticker."),

        EndpointDescriptor::new(
            "delete_guild_sticker",
            "Delete a sticker in a guild on Discord.",
            Method::DELETE,
            "/guilds/{guild_id}/stickers/{sticker_id}",
        )
        .path_param("guild_id", "The ID of the guild where the sticker is located.")
        .path_param("sticker_id", "The ID of the sticker to delete.")
        .on_empty("Sticker deleted successfully."),

        EndpointDescriptor::new(
            "get_sticker",
            "Retrieve a sticker from Discord.",
            Method::GET,
            "/stickers/{sticker_id}",
        )
        .path_param("sticker_id", "The ID of the sticker to retrieve."),
    ]
}
