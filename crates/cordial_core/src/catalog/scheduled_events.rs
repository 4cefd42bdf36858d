//! Guild scheduled event endpoints.

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "create_guild_scheduled_event",
            "Create a scheduled event in a Discord guild.",
            Method::POST,
            "/guilds/{guild_id}/scheduled-events",
        )
        .path_param("guild_id", "The ID of the guild where the event will be created.")
        .required_body("name", FieldType::String, "The name of the scheduled event.")
        .required_body("scheduled_start_time", FieldType::String, "The start time of the scheduled event in ISO 8601 format.")
        .body("description", FieldType::String, "A description of the scheduled event.")
        .body("image", FieldType::String, "An image associated with the scheduled event.")
        .body("scheduled_end_time", FieldType::String, "The end time of the scheduled event in ISO 8601 format.")
        .body("channel_id", FieldType::String, "The ID of the channel where the event will be held.")
        .required_body("location", FieldType::String, "The location of the event."),

        EndpointDescriptor::new(
            "get_guild_scheduled_event",
            "Retrieve a scheduled event in the guild.",
            Method::GET,
            "/guilds/{guild_id}/scheduled-events/{guild_scheduled_event_id}",
        )
        .path_param("guild_id", "The ID of the guild.")
        .path_param("guild_scheduled_event_id", "The ID of the scheduled event.")
        .query("with_user_count", FieldType::Boolean, "Whether to include the user count in the response."),

        EndpointDescriptor::new(
            "update_guild_scheduled_event",
            "Update a scheduled event in a Discord guild.",
            Method::PATCH,
            "/guilds/{guild_id}/scheduled-events/{guild_scheduled_event_id}",
        )
        .path_param("guild_id", "The ID of the guild where the event is scheduled.")
        .path_param("guild_scheduled_event_id", "The ID of the scheduled event to update.")
        .required_body("eventData", FieldType::Object, "")
        .as_raw_body(),

        EndpointDescriptor::new(
            "delete_guild_scheduled_event",
            "Delete a scheduled event in the guild.",
            Method::DELETE,
            "/guilds/{guild_id}/scheduled-events/{guild_scheduled_event_id}",
        )
        .path_param("guild_id", "The ID of the guild where the event is scheduled.")
        .path_param("guild_scheduled_event_id", "The ID of the scheduled event to delete.")
        .on_empty("Scheduled event deleted successfully."),

        EndpointDescriptor::new(
            "list_guild_scheduled_events",
            "List scheduled events in a Discord guild.",
            Method::GET,
            "/guilds/{guild_id}/scheduled-events",
        )
        .path_param("guild_id", "The ID of the guild to list scheduled events for.")
        .query("with_user_count", FieldType::Boolean, "Whether to include user count in the response."),

        EndpointDescriptor::new(
            "list_guild_scheduled_event_users",
            "List users subscribed to a guild scheduled event.",
            Method::GET,
            "/guilds/{guild_id}/scheduled-events/{guild_scheduled_event_id}/users",
        )
        .path_param("guild_id", "The ID of the guild.")
        .path_param("guild_scheduled_event_id", "The ID of the scheduled event.")
        .query("with_member", FieldType::Boolean, "Whether to include member data.")
        .query("limit", FieldType::Integer, "The maximum number of users to return.")
        .query("before", FieldType::String, "Get users before this user ID.")
        .query("after", FieldType::String, "Get users after this user ID."),
    ]
}
