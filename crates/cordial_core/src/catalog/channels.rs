//! Channel, permission-overwrite, and DM endpoints.

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "get_channel",
            "Retrieve a channel from Discord.",
            Method::GET,
            "/channels/{channel_id}",
        )
        .path_param("channel_id", "The ID of the channel to retrieve."),

        EndpointDescriptor::new(
            "update_channel",
            "Update settings for a Discord channel.",
            Method::PATCH,
            "/channels/{channel_id}",
        )
        .path_param("channel_id", "The ID of the channel to update.")
        .body("name", FieldType::String, "The new name for the channel.")
        .body("icon", FieldType::String, "The new icon for the channel."),

        EndpointDescriptor::new(
            "delete_channel",
            "Delete a channel in Discord.",
            Method::DELETE,
            "/channels/{channel_id}",
        )
        .path_param("channel_id", "The ID of the channel to delete.")
        .on_empty("Channel deleted successfully."),

        EndpointDescriptor::new(
            "set_channel_permission_overwrite",
            "Set permission overwrite for a user or role in a channel.",
            Method::PUT,
            "/channels/{channel_id}/permissions/{overwrite_id}",
        )
        .path_param("channel_id", "The ID of the channel where the permission overwrite is to be set.")
        .path_param("overwrite_id", "The ID of the permission overwrite to modify.")
        .body("type", FieldType::String, "The type of overwrite (e.g., role or member).")
        .body("allow", FieldType::Integer, "The permissions to allow.")
        .body("deny", FieldType::Integer, "The permissions to deny."),

        EndpointDescriptor::new(
            "delete_channel_permission_overwrite",
            "Delete a permission overwrite for a user or role in a channel.",
            Method::DELETE,
            "/channels/{channel_id}/permissions/{overwrite_id}",
        )
        .path_param("channel_id", "The ID of the channel from which to delete the permission overwrite.")
        .path_param("overwrite_id", "The ID of the permission overwrite to delete.")
        .on_empty("Permission overwrite deleted successfully."),

        EndpointDescriptor::new(
            "follow_channel",
            "Follow an announcement channel in Discord.",
            Method::POST,
            "/channels/{channel_id}/followers",
        )
        .path_param("channel_id", "The ID of the channel to follow.")
        .required_body("webhook_channel_id", FieldType::String, "The ID of the webhook channel to send messages to."),

        EndpointDescriptor::new(
            "trigger_typing_indicator",
            "Trigger a typing indicator in a Discord channel.",
            Method::POST,
            "/channels/{channel_id}/typing",
        )
        .path_param("channel_id", "The ID of the channel where the typing indicator will be triggered.")
        .on_empty("Typing indicator triggered successfully."),

        EndpointDescriptor::new(
            "create_dm",
            "Create a direct message channel with a user on Discord.",
            Method::POST,
            "/users/@me/channels",
        )
        .required_body("recipient_id", FieldType::String, "The ID of the recipient user.")
        .required_body("access_tokens", FieldType::Array, "An array of access tokens for the recipient.")
        .body("nicks", FieldType::Array, "Optional array of nicknames for the recipients."),

        EndpointDescriptor::new(
            "add_group_dm_user",
            "Add a user to a group DM on Discord.",
            Method::PUT,
            "/channels/{channel_id}/recipients/{user_id}",
        )
        .path_param("channel_id", "The ID of the channel.")
        .path_param("user_id", "The ID of the user to add."),

        EndpointDescriptor::new(
            "delete_group_dm_user",
            "Remove a user from a group DM on Discord.",
            Method::DELETE,
            "/channels/{channel_id}/recipients/{user_id}",
        )
        .path_param("channel_id", "The ID of the channel (group DM).")
        .path_param("user_id", "The ID of the user to remove.")
        .on_empty("User removed from the group DM."),

        EndpointDescriptor::new(
            "list_guild_channels",
            "List channels in a guild on Discord.",
            Method::GET,
            "/guilds/{guild_id}/channels",
        )
        .path_param("guild_id", "The ID of the guild (server) to list channels from."),

        EndpointDescriptor::new(
            "create_guild_channel",
            "Create a channel in a Discord guild.",
            Method::POST,
            "/guilds/{guild_id}/channels",
        )
        .path_param("guild_id", "The ID of the guild where the channel will be created.")
        .required_body("name", FieldType::String, "The name of the channel.")
        .body("type", FieldType::Integer, "The type of the channel (e.g., text, voice).")
        .body("position", FieldType::Integer, "The position of the channel in the list.")
        .body("topic", FieldType::String, "The topic of the channel (for text channels).")
        .body("bitrate", FieldType::Integer, "The bitrate of the channel (for voice channels).")
        .body("user_limit", FieldType::Integer, "The user limit for the channel (for voice channels).")
        .body("nsfw", FieldType::Boolean, "Whether the channel is marked as NSFW.")
        .body("rate_limit_per_user", FieldType::Integer, "The rate limit per user for the channel.")
        .body("parent_id", FieldType::String, "The ID of the parent category (if applicable).")
        .body("permission_overwrites", FieldType::Array, "Permission overwrites for the channel.")
        .body("rtc_region", FieldType::String, "The RTC region for the channel (for voice channels).")
        .body("video_quality_mode", FieldType::String, "The video quality mode for the channel (for voice channels).")
        .body("available_tags", FieldType::Array, "Available tags for the channel."),

        EndpointDescriptor::new(
            "bulk_update_guild_channels",
            "Bulk update the positions of channels in a Discord guild.",
            Method::PATCH,
            "/guilds/{guild_id}/channels",
        )
        .path_param("guild_id", "The ID of the guild (server) where the channels are located.")
        .required_body("channels", FieldType::Array, "An array of channel objects to update.")
        .as_raw_body(),
    ]
}
