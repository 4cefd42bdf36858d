//! Stage instance endpoints.

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "create_stage_instance",
            "Create a stage instance associated with the stage channel.",
            Method::POST,
            "/stage-instances",
        )
        .required_body("topic", FieldType::String, "The topic of the stage instance.")
        .required_body("channel_id", FieldType::String, "The ID of the channel associated with the stage instance.")
        .body("privacy_level", FieldType::Number, "The privacy level of the stage instance (1 for PUBLIC).")
        .body("guild_scheduled_event_id", FieldType::String, "The ID of the scheduled event associated with the stage instance.")
        .body("send_start_notification", FieldType::Boolean, "Whether to send a notification when the stage instance starts."),

        EndpointDescriptor::new(
            "get_stage_instance",
            "Get the instance associated with a stage channel.",
            Method::GET,
            "/stage-instances/{channel_id}",
        )
        .path_param("channel_id", "The ID of the channel for which to get the stage instance."),

        EndpointDescriptor::new(
            "update_stage_instance",
            "Update properties of an existing stage instance on Discord.",
            Method::PATCH,
            "/stage-instances/{channel_id}",
        )
        .path_param("channel_id", "The ID of the channel where the stage instance is located.")
        .required_body("topic", FieldType::String, "The new topic for the stage instance.")
        .required_body("privacy_level", FieldType::Object, ""),

        EndpointDescriptor::new(
            "delete_stage_instance",
            "Delete a stage instance on Discord.",
            Method::DELETE,
            "/stage-instances/{channel_id}",
        )
        .path_param("channel_id", "The ID of the channel where the stage instance is located.")
        .on_empty("Stage instance deleted successfully."),
    ]
}
