//! Cordial Core - Discord REST endpoints as agent tools
//!
//! This crate collapses a flat catalog of single-endpoint REST wrappers into
//! one data-driven component: a static [`catalog`] of endpoint descriptors
//! and the generic [`invoker::RestInvoker`] that executes them. A
//! [`registry::ToolRegistry`] exposes the catalog to tool-invocation
//! frameworks as `{ name, description, parameters }` schemas.

pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod invoker;
pub mod registry;
pub mod token;

pub use config::CordialConfig;
pub use descriptor::{
    BodyEncoding, EndpointDescriptor, FieldLocation, FieldSpec, FieldType, ResponseShape,
};
pub use error::{ConfigError, CoreError, Result};
pub use invoker::{DEFAULT_API_BASE, RestInvoker};
pub use registry::{ToolRegistry, ToolResult};
pub use token::{EnvToken, StaticToken, TokenProvider};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        CordialConfig, CoreError, EndpointDescriptor, FieldType, Result, RestInvoker,
        StaticToken, TokenProvider, ToolRegistry, ToolResult,
    };
}

pub fn cordial_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("cordial/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(10))
        .connect_timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap() // panics for the same reasons Client::new() would: https://docs.rs/reqwest/latest/reqwest/struct.Client.html#panics
}
