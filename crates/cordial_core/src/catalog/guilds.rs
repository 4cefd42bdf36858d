//! Guild endpoints (settings, widgets, onboarding, moderation).

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "create_guild",
            "Create a new guild on Discord.",
            Method::POST,
            "/guilds",
        )
        .required_body("name", FieldType::String, "The name of the guild.")
        .body("description", FieldType::String, "The description of the guild.")
        .body("region", FieldType::String, "The region of the guild.")
        .body("icon", FieldType::String, "The icon of the guild.")
        .body("verification_level", FieldType::Integer, "The verification level of the guild.")
        .body("default_message_notifications", FieldType::Integer, "The default message notifications level.")
        .body("explicit_content_filter", FieldType::Integer, "The explicit content filter level.")
        .body("preferred_locale", FieldType::String, "The preferred locale of the guild.")
        .body("afk_timeout", FieldType::Integer, "The AFK timeout in seconds.")
        .body("roles", FieldType::Array, "The roles to be created in the guild.")
        .body("afk_channel_id", FieldType::String, "The ID of the AFK channel.")
        .body("system_channel_id", FieldType::String, "The ID of the system channel.")
        .body("system_channel_flags", FieldType::Integer, "The system channel flags."),

        EndpointDescriptor::new(
            "get_guild",
            "Retrieve a guild from Discord.",
            Method::GET,
            "/guilds/{guild_id}",
        )
        .path_param("guild_id", "The ID of the guild to retrieve.")
        .query("with_counts", FieldType::Boolean, "Whether to include approximate member and presence counts."),

        EndpointDescriptor::new(
            "update_guild",
            "Update settings for a Discord guild.",
            Method::PATCH,
            "/guilds/{guild_id}",
        )
        .path_param("guild_id", "The ID of the guild to update.")
        .body("name", FieldType::String, "The new name of the guild.")
        .body("description", FieldType::String, "The new description of the guild.")
        .body("region", FieldType::String, "The new region of the guild.")
        .body("icon", FieldType::String, "The new icon of the guild.")
        .body("verification_level", FieldType::Integer, "The new verification level of the guild.")
        .body("default_message_notifications", FieldType::Integer, "The new default message notifications level.")
        .body("explicit_content_filter", FieldType::Integer, "The new explicit content filter level.")
        .body("preferred_locale", FieldType::String, "The new preferred locale of the guild.")
        .body("afk_timeout", FieldType::Integer, "The new AFK timeout in seconds.")
        .body("afk_channel_id", FieldType::String, "The ID of the new AFK channel.")
        .body("system_channel_id", FieldType::String, "The ID of the new system channel.")
        .required_body("owner_id", FieldType::String, "The ID of the owner of the guild.")
        .body("splash", FieldType::String, "The new splash image of the guild.")
        .body("banner", FieldType::String, "The new banner image of the guild.")
        .body("system_channel_flags", FieldType::Integer, "The new system channel flags.")
        .body("features", FieldType::Array, "The new features of the guild.")
        .body("discovery_splash", FieldType::String, "The new discovery splash image of the guild.")
        .body("home_header", FieldType::String, "The new home header of the guild.")
        .body("rules_channel_id", FieldType::String, "The ID of the new rules channel.")
        .body("safety_alerts_channel_id", FieldType::String, "The ID of the new safety alerts channel.")
        .body("public_updates_channel_id", FieldType::String, "The ID of the new public updates channel.")
        .body("premium_progress_bar_enabled", FieldType::Boolean, "Whether the premium progress bar is enabled."),

        EndpointDescriptor::new(
            "delete_guild",
            "Permanently delete a guild on Discord.",
            Method::DELETE,
            "/guilds/{guild_id}",
        )
        .path_param("guild_id", "The ID of the guild to delete.")
        .on_empty("Guild deleted successfully."),

        EndpointDescriptor::new(
            "get_guild_preview",
            "Retrieve a preview object for a guild from Discord.",
            Method::GET,
            "/guilds/{guild_id}/preview",
        )
        .path_param("guild_id", "The ID of the guild to retrieve the preview for."),

        EndpointDescriptor::new(
            "get_guild_vanity_url",
            "Retrieve the vanity URL for a specified guild.",
            Method::GET,
            "/guilds/{guild_id}/vanity-url",
        )
        .path_param("guild_id", "The ID of the guild to retrieve the vanity URL for."),

        EndpointDescriptor::new(
            "get_guild_welcome_screen",
            "Retrieve the welcome screen for a guild.",
            Method::GET,
            "/guilds/{guild_id}/welcome-screen",
        )
        .path_param("guild_id", "The ID of the guild to retrieve the welcome screen for."),

        EndpointDescriptor::new(
            "update_guild_welcome_screen",
            "Update the welcome screen properties and channels for a guild.",
            Method::PATCH,
            "/guilds/{guild_id}/welcome-screen",
        )
        .path_param("guild_id", "The ID of the guild to update.")
        .body("description", FieldType::String, "The description of the welcome screen.")
        .required_body("welcome_channels", FieldType::Array, "An array of welcome channels.")
        .body("enabled", FieldType::Boolean, "Whether the welcome screen is enabled."),

        EndpointDescriptor::new(
            "get_guild_new_member_welcome",
            "Retrieve the new member welcome message for a guild.",
            Method::GET,
            "/guilds/{guild_id}/new-member-welcome",
        )
        .path_param("guild_id", "The ID of the guild to retrieve the welcome message for."),

        EndpointDescriptor::new(
            "get_guilds_onboarding",
            "Retrieve the onboarding configuration for a Discord guild.",
            Method::GET,
            "/guilds/{guild_id}/onboarding",
        )
        .path_param("guild_id", "The ID of the guild to retrieve onboarding configuration for."),

        EndpointDescriptor::new(
            "put_guilds_onboarding",
            "Update the onboarding configuration for a Discord guild.",
            Method::PUT,
            "/guilds/{guild_id}/onboarding",
        )
        .path_param("guild_id", "The ID of the guild to update onboarding for.")
        .body("enabled", FieldType::Boolean, "Whether onboarding is enabled.")
        .body("default_channel_ids", FieldType::Array, "The default channel IDs for onboarding.")
        .body("mode", FieldType::String, "The mode of onboarding."),

        EndpointDescriptor::new(
            "get_guild_widget",
            "Retrieve the widget for a guild.",
            Method::GET,
            "/guilds/{guild_id}/widget.json",
        )
        .path_param("guild_id", "The ID of the guild to retrieve the widget for."),

        EndpointDescriptor::new(
            "get_guild_widget_png",
            "Retrieve a PNG image widget for a Discord guild.",
            Method::GET,
            "/guilds/{guild_id}/widget.png",
        )
        .path_param("guild_id", "The ID of the guild to retrieve the widget for.")
        .query("style", FieldType::String, "The style of the widget (optional).")
        .binary("image/png"),

        EndpointDescriptor::new(
            "get_guild_widget_settings",
            "Retrieve the widget settings for a guild.",
            Method::GET,
            "/guilds/{guild_id}/widget",
        )
        .path_param("guild_id", "The ID of the guild for which to retrieve widget settings."),

        EndpointDescriptor::new(
            "update_guild_widget_settings",
            "Update the widget settings for a guild on Discord.",
            Method::PATCH,
            "/guilds/{guild_id}/widget",
        )
        .path_param("guild_id", "The ID of the guild to update the widget settings for.")
        .body("channel_id", FieldType::String, "The ID of the channel to set as the widget channel.")
        .body("enabled", FieldType::Boolean, "Whether the widget is enabled or not."),

        EndpointDescriptor::new(
            "list_guild_voice_regions",
            "List voice regions for a guild on Discord.",
            Method::GET,
            "/guilds/{guild_id}/regions",
        )
        .path_param("guild_id", "The ID of the guild for which to list voice regions."),

        EndpointDescriptor::new(
            "list_guild_integrations",
            "List integrations in a Discord guild.",
            Method::GET,
            "/guilds/{guild_id}/integrations",
        )
        .path_param("guild_id", "The ID of the guild to list integrations for."),

        EndpointDescriptor::new(
            "delete_guild_integration",
            "Delete a guild integration from Discord.",
            Method::DELETE,
            "/guilds/{guild_id}/integrations/{integration_id}",
        )
        .path_param("guild_id", "The ID of the guild from which to delete the integration.")
        .path_param("integration_id", "The ID of the integration to delete.")
        .on_empty("Integration deleted successfully."),

        EndpointDescriptor::new(
            "set_guild_mfa_level",
            "Set the MFA level for a Discord guild.",
            Method::POST,
            "/guilds/{guild_id}/mfa",
        )
        .path_param("guild_id", "The ID of the guild to set the MFA level for.")
        .required_body("level", FieldType::Object, ""),

        EndpointDescriptor::new(
            "preview_prune_guild",
            "Preview the number of members that would be removed from a guild if it was pruned.",
            Method::GET,
            "/guilds/{guild_id}/prune",
        )
        .path_param("guild_id", "The ID of the guild to preview the prune for."),

        EndpointDescriptor::new(
            "prune_guild",
            "Start a prune operation on a Discord guild.",
            Method::POST,
            "/guilds/{guild_id}/prune",
        )
        .path_param("guild_id", "The ID of the guild to prune."),

        EndpointDescriptor::new(
            "list_guild_audit_log_entries",
            "List audit log entries for a Discord guild.",
            Method::GET,
            "/guilds/{guild_id}/audit-logs",
        )
        .path_param("guild_id", "The ID of the guild to retrieve audit logs for.")
        .query("user_id", FieldType::String, "The ID of the user to filter the audit logs by.")
        .query("action_type", FieldType::Integer, "The action type to filter the audit logs by.")
        .query("before", FieldType::String, "Get entries before this timestamp.")
        .query("after", FieldType::String, "Get entries after this timestamp.")
        .query("limit", FieldType::Integer, "The maximum number of entries to return."),
    ]
}
