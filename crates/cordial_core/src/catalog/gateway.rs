//! Gateway information endpoints.

use reqwest::Method;

use crate::descriptor::EndpointDescriptor;

pub(super) fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "get_gateway",
            "Retrieve a valid `wss` URL that can be used when establishing a Gateway connection.",
            Method::GET,
            "/gateway",
        ),

        EndpointDescriptor::new(
            "get_bot_gateway",
            "Retrieve gateway connection information for the requesting bot user.",
            Method::GET,
            "/gateway/bot",
        ),
    ]
}
