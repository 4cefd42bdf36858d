//! Application and OAuth2 application endpoints.

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "get_application",
            "Retrieve details about a Discord application.",
            Method::GET,
            "/applications/{application_id}",
        )
        .path_param("application_id", "The ID of the application to retrieve."),

        EndpointDescriptor::new(
            "get_my_application",
            "Retrieve the application associated with the requesting bot user.",
            Method::GET,
            "/applications/@me",
        ),

        EndpointDescriptor::new(
            "update_my_application",
            "Update the app associated with the requesting bot user.",
            Method::PATCH,
            "/applications/@me",
        )
        .body("description", FieldType::String, "The new description for the application.")
        .body("icon", FieldType::String, "The new icon for the application.")
        .body("cover_image", FieldType::String, "The new cover image for the application.")
        .body("team_id", FieldType::String, "The team ID associated with the application.")
        .body("flags", FieldType::Integer, "The flags for the application.")
        .body("interactions_endpoint_url", FieldType::String, "The interactions endpoint URL.")
        .body("max_participants", FieldType::Integer, "The maximum number of participants.")
        .body("type", FieldType::String, "The type of the application.")
        .body("tags", FieldType::Array, "The tags associated with the application.")
        .body("custom_install_url", FieldType::String, "The custom install URL for the application.")
        .body("install_params", FieldType::String, "The install parameters.")
        .body("role_connections_verification_url", FieldType::String, "The role connections verification URL."),

        EndpointDescriptor::new(
            "update_application",
            "Update a Discord application.",
            Method::PATCH,
            "/applications/{application_id}",
        )
        .path_param("application_id", "The ID of the application to update.")
        .body("data", FieldType::Object, "")
        .as_raw_body(),

        EndpointDescriptor::new(
            "get_my_oauth2_application",
            "Retrieve the OAuth2 application associated with the requesting bot user.",
            Method::GET,
            "/oauth2/applications/@me",
        ),

        EndpointDescriptor::new(
            "get_my_oauth2_authorization",
            "Retrieve details about the current OAuth2 authorization from Discord.",
            Method::GET,
            "/oauth2/@me",
        ),

        EndpointDescriptor::new(
            "get_application_role_connections_metadata",
            "Get application role connections metadata from Discord.",
            Method::GET,
            "/applications/{application_id}/role-connections/metadata",
        )
        .path_param("application_id", "The ID of the application to retrieve role connections metadata for."),

        EndpointDescriptor::new(
            "update_application_role_connections_metadata",
            "Update application role connections metadata for the app.",
            Method::PUT,
            "/applications/{application_id}/role-connections/metadata",
        )
        .path_param("application_id", "The ID of the application to update.")
        .required_body("metadata", FieldType::Array, "The metadata to update for the role connections.")
        .as_raw_body(),

        EndpointDescriptor::new(
            "get_application_user_role_connection",
            "Retrieve an app's role connection metadata for the user.",
            Method::GET,
            "/users/@me/applications/{application_id}/role-connection",
        )
        .path_param("application_id", "The ID of the application to retrieve role connection metadata for."),

        EndpointDescriptor::new(
            "update_application_user_role_connection",
            "Update an app's role connection metadata for the user.",
            Method::PUT,
            "/users/@me/applications/{application_id}/role-connection",
        )
        .path_param("application_id", "The ID of the application to update.")
        .body("platform_name", FieldType::String, "The name of the platform (optional).")
        .body("platform_username", FieldType::String, "The username on the platform (optional).")
        .body("metadata", FieldType::Object, "Metadata object containing additional information."),
    ]
}
