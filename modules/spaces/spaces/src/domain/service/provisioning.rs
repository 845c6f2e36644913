use std::sync::Arc;

use authz_resolver_sdk::pep::{AccessRequest, PolicyEnforcer};
use metaverse_security::SecurityContext;
use spaces_sdk::{Dimensions, NewSpace, Space, SpaceElement};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{actions, resources, validate_name_length};
use crate::config::SpacesConfig;
use crate::domain::error::DomainError;
use crate::domain::repos::{SpacesRepository, TemplateStore};

/// Creates spaces, either empty or cloned from a map template.
pub struct ProvisioningService {
    repo: Arc<dyn SpacesRepository>,
    templates: Arc<dyn TemplateStore>,
    enforcer: PolicyEnforcer,
    config: SpacesConfig,
}

impl ProvisioningService {
    #[must_use]
    pub fn new(
        repo: Arc<dyn SpacesRepository>,
        templates: Arc<dyn TemplateStore>,
        enforcer: PolicyEnforcer,
        config: SpacesConfig,
    ) -> Self {
        Self {
            repo,
            templates,
            enforcer,
            config,
        }
    }

    /// Create a space owned by the caller.
    ///
    /// With a `map_id` the space inherits the template's canvas and one
    /// element per template entry; the caller's dimensions are validated but
    /// otherwise ignored.
    ///
    /// # Errors
    ///
    /// `Validation` for an overlong name or bad dimensions, `Forbidden` for anonymous
    /// callers, `NotFound` for an unknown map, `Storage` when the unit of
    /// work fails (nothing is persisted in that case).
    #[instrument(
        skip(self, ctx, new_space),
        fields(subject_id = %ctx.subject_id(), name = %new_space.name, map_id = ?new_space.map_id)
    )]
    pub async fn create_space(
        &self,
        ctx: &SecurityContext,
        new_space: NewSpace,
    ) -> Result<Uuid, DomainError> {
        info!("Creating space");

        validate_name_length("name", &new_space.name, self.config.max_name_length)?;
        let dimensions: Dimensions = new_space
            .dimensions
            .parse()
            .map_err(|e: spaces_sdk::DimensionsParseError| {
                DomainError::validation("dimensions", e.to_string())
            })?;

        self.enforcer
            .check_access_with(
                ctx,
                &resources::SPACE,
                actions::CREATE,
                None,
                &AccessRequest::new(),
            )
            .await?;

        let space_id = Uuid::now_v7();

        let (width, height, elements) = match new_space.map_id {
            None => (dimensions.width, dimensions.height, Vec::new()),
            Some(map_id) => {
                let map = self
                    .templates
                    .get_map(map_id)
                    .await?
                    .ok_or_else(|| DomainError::map_not_found(map_id))?;

                let elements: Vec<SpaceElement> = map
                    .default_elements
                    .iter()
                    .map(|entry| SpaceElement {
                        id: Uuid::now_v7(),
                        space_id,
                        element_id: entry.element_id,
                        x: entry.x,
                        y: entry.y,
                    })
                    .collect();
                (map.width, map.height, elements)
            }
        };

        let space = Space {
            id: space_id,
            name: new_space.name,
            thumbnail: None,
            width,
            height,
            creator_id: ctx.subject_id(),
        };

        let element_count = elements.len();
        let id = self.repo.create_space_and_elements(space, elements).await?;

        info!(space_id = %id, width, height, elements = element_count, "Space created");
        Ok(id)
    }
}
