//! Typed request and response bodies of the Schematics REST API
//!
//! Every field is optional: the service omits what it does not know and
//! requests carry only what the caller configured.

/// Declare a wire model whose fields are all `Option`, skipped when `None`.
macro_rules! model {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }
    };
}

mod action;
mod agent;
mod common;
mod inventory;
mod job;
mod resource_query;
mod workspace;

pub use action::*;
pub use agent::*;
pub use common::*;
pub use inventory::*;
pub use job::*;
pub use resource_query::*;
pub use workspace::*;

/// Free-form JSON object the service passes through untyped
pub type RawMap = serde_json::Map<String, serde_json::Value>;
