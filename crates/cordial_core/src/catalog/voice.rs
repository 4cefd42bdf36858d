//! Voice region and voice state endpoints.

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "list_voice_regions",
            "List voice regions available in Discord.",
            Method::GET,
            "/voice/regions",
        ),

        EndpointDescriptor::new(
            "update_voice_state",
            "Update a user's voice state in a Discord guild.",
            Method::PATCH,
            "/guilds/{guild_id}/voice-states/{user_id}",
        )
        .path_param("guild_id", "The ID of the guild.")
        .path_param("user_id", "The ID of the user whose voice state is being updated.")
        .body("suppress", FieldType::Boolean, "Whether the user is suppressed (muted) in the voice channel.")
        .body("channel_id", FieldType::String, "The ID of the channel to which the user should be moved."),

        EndpointDescriptor::new(
            "update_self_voice_state",
            "Update the current user's voice state in Discord.",
            Method::PATCH,
            "/guilds/{guild_id}/voice-states/@me",
        )
        .path_param("guild_id", "The ID of the guild where the voice state is to be updated.")
        .body("request_to_speak_timestamp", FieldType::String, "The timestamp when the user requests to speak.")
        .body("suppress", FieldType::Boolean, "Whether to suppress the user's audio.")
        .body("channel_id", FieldType::String, "The ID of the channel to which the user is connected.")
        .on_empty("Voice state updated successfully."),
    ]
}
