//! Helpers for identifiers and lookup keys

use schematics_core::resource::Resource;

/// Region prefix of a server-assigned id, e.g. `us-south` for
/// `us-south.workspace.demo.1a2b3c4d`. Ids without a dot carry no region.
pub fn region_from_identifier(identifier: &str) -> Option<&str> {
    identifier
        .split_once('.')
        .map(|(region, _)| region)
        .filter(|r| !r.is_empty())
}

/// Region requested by a create call or data source lookup
pub fn configured_location(resource: &Resource) -> Option<&str> {
    resource.get_str("location")
}
