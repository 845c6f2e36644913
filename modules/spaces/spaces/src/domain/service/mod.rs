//! Domain service layer.
//!
//! - `provisioning` - space creation, empty or from a map template
//! - `spaces` - reads, deletion and element placement on existing spaces
//! - `catalog` - element/avatar listings and the admin catalog path
//! - `users` - per-user avatar metadata
//!
//! ## Security
//!
//! Every space operation goes through the `AuthZ` PEP
//! ([`PolicyEnforcer`]). Point mutations prefetch the space and send its
//! `creator_id` as the `owner_id` resource property; the PDP decides on
//! ownership. Listing compiles the PDP constraint into an
//! [`AccessScope`](metaverse_security::AccessScope) that the repository
//! applies in SQL. Role requirements of the admin catalog path are enforced
//! by the gateway before the service is reached.

use std::sync::Arc;

use authz_resolver_sdk::AuthZResolverClient;
use authz_resolver_sdk::pep::PolicyEnforcer;

use crate::config::SpacesConfig;
use crate::domain::repos::{
    AvatarCatalog, CatalogAdmin, ElementCatalog, SpacesRepository, TemplateStore,
    UserMetadataRepository,
};

mod catalog;
mod provisioning;
mod spaces;
mod users;

pub use catalog::CatalogService;
pub use provisioning::ProvisioningService;
pub use spaces::SpacesService;
pub use users::UsersService;

pub(crate) mod resources {
    use authz_resolver_sdk::pep::ResourceType;
    use metaverse_security::properties;

    pub const SPACE: ResourceType = ResourceType {
        name: "spaces.space",
        supported_properties: &[properties::OWNER_ID, properties::RESOURCE_ID],
    };

    pub const SPACE_ELEMENT: ResourceType = ResourceType {
        name: "spaces.space_element",
        supported_properties: &[properties::OWNER_ID, properties::RESOURCE_ID],
    };

    pub const USER: ResourceType = ResourceType {
        name: "spaces.user",
        supported_properties: &[properties::OWNER_ID, properties::RESOURCE_ID],
    };
}

pub(crate) mod actions {
    pub const GET: &str = "get";
    pub const LIST: &str = "list";
    pub const CREATE: &str = "create";
    pub const DELETE: &str = "delete";
    pub const ADD_ELEMENT: &str = "add_element";
    pub const DELETE_ELEMENT: &str = "delete_element";
    pub const UPDATE_METADATA: &str = "update_metadata";
    pub const GET_CURRENT: &str = "get_current";
}

/// Storage ports handed to [`AppServices::new`].
pub struct Ports {
    pub spaces: Arc<dyn SpacesRepository>,
    pub templates: Arc<dyn TemplateStore>,
    pub elements: Arc<dyn ElementCatalog>,
    pub avatars: Arc<dyn AvatarCatalog>,
    pub catalog_admin: Arc<dyn CatalogAdmin>,
    pub users: Arc<dyn UserMetadataRepository>,
}

/// Aggregates the domain services of the module.
pub struct AppServices {
    pub provisioning: ProvisioningService,
    pub spaces: SpacesService,
    pub catalog: CatalogService,
    pub users: UsersService,
}

impl AppServices {
    #[must_use]
    pub fn new(ports: Ports, authz: Arc<dyn AuthZResolverClient>, config: SpacesConfig) -> Self {
        let enforcer = PolicyEnforcer::new(authz);

        Self {
            provisioning: ProvisioningService::new(
                Arc::clone(&ports.spaces),
                Arc::clone(&ports.templates),
                enforcer.clone(),
                config.clone(),
            ),
            spaces: SpacesService::new(
                Arc::clone(&ports.spaces),
                Arc::clone(&ports.elements),
                enforcer.clone(),
            ),
            users: UsersService::new(ports.users, Arc::clone(&ports.avatars), enforcer),
            catalog: CatalogService::new(
                ports.elements,
                ports.avatars,
                ports.catalog_admin,
                config,
            ),
        }
    }
}

/// Catalog names (avatars, maps): non-blank and length-capped.
pub(crate) fn validate_name(
    field: &str,
    name: &str,
    max_len: usize,
) -> Result<(), crate::domain::error::DomainError> {
    if name.trim().is_empty() {
        return Err(crate::domain::error::DomainError::validation(
            field,
            "must not be empty",
        ));
    }
    validate_name_length(field, name, max_len)
}

/// Length cap only; space names may be empty.
pub(crate) fn validate_name_length(
    field: &str,
    name: &str,
    max_len: usize,
) -> Result<(), crate::domain::error::DomainError> {
    if name.chars().count() > max_len {
        return Err(crate::domain::error::DomainError::validation(
            field,
            format!("must be at most {max_len} characters"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests_provisioning;

#[cfg(test)]
mod tests_ownership;

#[cfg(test)]
mod tests_catalog;

#[cfg(test)]
mod tests_users;
