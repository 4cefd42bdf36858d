//! Interaction response endpoints.

use reqwest::Method;

use crate::descriptor::{EndpointDescriptor, FieldType};

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "create_interaction_response",
            "Create a response to an interaction from the Discord Gateway.",
            Method::POST,
            "/interactions/{interaction_id}/{interaction_token}/callback",
        )
        .path_param("interaction_id", "The ID of the interaction.")
        .path_param("interaction_token", "The token of the interaction.")
        .required_body("type", FieldType::Number, "The type of the response.")
        .body("choices", FieldType::Array, "The choices for the response.")
        .form()
        .on_empty("Response created successfully."),
    ]
}
