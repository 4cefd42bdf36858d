//! Invite endpoints.

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "create_channel_invite",
            "Create an invite for a Discord channel.",
            Method::POST,
            "/channels/{channel_id}/invites",
        )
        .path_param("channel_id", "The ID of the channel to create an invite for.")
        .body("max_age", FieldType::Integer, "The maximum age of the invite in seconds."),

        EndpointDescriptor::new(
            "list_channel_invites",
            "List invites for a specific channel on Discord.",
            Method::GET,
            "/channels/{channel_id}/invites",
        )
        .path_param("channel_id", "The ID of the channel for which to list invites."),

        EndpointDescriptor::new(
            "list_guild_invites",
            "List invites in a specified Discord guild.",
            Method::GET,
            "/guilds/{guild_id}/invites",
        )
        .path_param("guild_id", "The ID of the guild to list invites from."),

        EndpointDescriptor::new(
            "invite_resolve",
            "Resolve a Discord invite.",
            Method::GET,
            "/invites/{code}",
        )
        .path_param("code", "The invite code to resolve.")
        .query("with_counts", FieldType::Boolean, "Whether to include invite usage counts.")
        .query("guild_scheduled_event_id", FieldType::String, "The ID of a scheduled event to associate with the invite."),

        EndpointDescriptor::new(
            "invite_revoke",
            "Revoke an invite on Discord.",
            Method::DELETE,
            "/invites/{code}",
        )
        .path_param("code", "The invite code to revoke."),
    ]
}
