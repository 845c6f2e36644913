use std::sync::Arc;

use authz_resolver_sdk::pep::{AccessRequest, PolicyEnforcer, ResourceType};
use metaverse_security::{SecurityContext, properties};
use spaces_sdk::{NewSpaceElement, Space, SpaceDetail, SpaceElement};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::{actions, resources};
use crate::domain::error::DomainError;
use crate::domain::placement::validate_placement;
use crate::domain::repos::{ElementCatalog, SpacesRepository};

/// Reads, deletion and element placement on existing spaces.
pub struct SpacesService {
    repo: Arc<dyn SpacesRepository>,
    elements: Arc<dyn ElementCatalog>,
    enforcer: PolicyEnforcer,
}

impl SpacesService {
    #[must_use]
    pub fn new(
        repo: Arc<dyn SpacesRepository>,
        elements: Arc<dyn ElementCatalog>,
        enforcer: PolicyEnforcer,
    ) -> Self {
        Self {
            repo,
            elements,
            enforcer,
        }
    }

    /// Space detail with its placed elements.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown space, `Internal` when the PDP is unreachable.
    #[instrument(skip(self, ctx), fields(space_id = %id))]
    pub async fn get_space(
        &self,
        ctx: &SecurityContext,
        id: Uuid,
    ) -> Result<SpaceDetail, DomainError> {
        debug!("Getting space detail");

        self.enforcer
            .check_access_with(
                ctx,
                &resources::SPACE,
                actions::GET,
                Some(id),
                &AccessRequest::new(),
            )
            .await?;

        let detail = self
            .repo
            .get_detail(id)
            .await?
            .ok_or_else(|| DomainError::space_not_found(id))?;

        debug!(elements = detail.elements.len(), "Space detail loaded");
        Ok(detail)
    }

    /// Spaces created by the caller. The PDP scope can only narrow this.
    ///
    /// # Errors
    ///
    /// `Forbidden` for anonymous callers, `Storage` on database failure.
    #[instrument(skip(self, ctx), fields(subject_id = %ctx.subject_id()))]
    pub async fn list_spaces(&self, ctx: &SecurityContext) -> Result<Vec<Space>, DomainError> {
        debug!("Listing spaces");

        let scope = self
            .enforcer
            .access_scope(ctx, &resources::SPACE, actions::LIST, None)
            .await?;

        let spaces = self.repo.list(ctx.subject_id(), &scope).await?;
        debug!(count = spaces.len(), "Listed spaces");
        Ok(spaces)
    }

    /// Delete a space and every element placed in it.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown space, `Forbidden` unless the caller created it.
    #[instrument(skip(self, ctx), fields(space_id = %id, subject_id = %ctx.subject_id()))]
    pub async fn delete_space(&self, ctx: &SecurityContext, id: Uuid) -> Result<(), DomainError> {
        info!("Deleting space");

        let space = self
            .repo
            .get_by_id_with_owner(id)
            .await?
            .ok_or_else(|| DomainError::space_not_found(id))?;

        self.check_owner(ctx, &resources::SPACE, actions::DELETE, id, space.creator_id)
            .await?;

        // A concurrent delete may win between the read and the write.
        if !self.repo.delete_space_cascade(id).await? {
            return Err(DomainError::space_not_found(id));
        }

        info!("Space deleted");
        Ok(())
    }

    /// Place a catalog element in a space owned by the caller.
    ///
    /// Checks run in order: space exists, caller owns it, element exists,
    /// coordinates fit the canvas.
    ///
    /// # Errors
    ///
    /// `NotFound`, `Forbidden` or `OutOfBounds`, following the order above.
    #[instrument(
        skip(self, ctx, new_element),
        fields(space_id = %new_element.space_id, element_id = %new_element.element_id)
    )]
    pub async fn add_element(
        &self,
        ctx: &SecurityContext,
        new_element: NewSpaceElement,
    ) -> Result<Uuid, DomainError> {
        info!(x = new_element.x, y = new_element.y, "Adding element to space");

        let space = self
            .repo
            .get_by_id_with_owner(new_element.space_id)
            .await?
            .ok_or_else(|| DomainError::space_not_found(new_element.space_id))?;

        self.check_owner(
            ctx,
            &resources::SPACE,
            actions::ADD_ELEMENT,
            space.id,
            space.creator_id,
        )
        .await?;

        self.elements
            .get_element(new_element.element_id)
            .await?
            .ok_or_else(|| DomainError::element_not_found(new_element.element_id))?;

        validate_placement(&space, new_element.x, new_element.y)?;

        let placed = SpaceElement {
            id: Uuid::now_v7(),
            space_id: space.id,
            element_id: new_element.element_id,
            x: new_element.x,
            y: new_element.y,
        };
        let placed_id = placed.id;
        self.repo.add_element(placed).await?;

        info!(space_element_id = %placed_id, "Element added to space");
        Ok(placed_id)
    }

    /// Remove a placed element.
    ///
    /// A missing element and an element in somebody else's space are both
    /// reported as `Forbidden`.
    ///
    /// # Errors
    ///
    /// `Forbidden` as described, `Storage` on database failure.
    #[instrument(skip(self, ctx), fields(space_element_id = %id, subject_id = %ctx.subject_id()))]
    pub async fn delete_element(&self, ctx: &SecurityContext, id: Uuid) -> Result<(), DomainError> {
        info!("Deleting space element");

        let Some((element, owner_id)) = self.repo.find_element_with_space_owner(id).await? else {
            debug!("Space element not found");
            return Err(DomainError::Forbidden);
        };

        self.check_owner(
            ctx,
            &resources::SPACE_ELEMENT,
            actions::DELETE_ELEMENT,
            element.id,
            owner_id,
        )
        .await?;

        if !self.repo.delete_element(id).await? {
            debug!("Space element vanished before delete");
            return Err(DomainError::Forbidden);
        }

        info!(space_id = %element.space_id, "Element deleted");
        Ok(())
    }

    async fn check_owner(
        &self,
        ctx: &SecurityContext,
        resource: &ResourceType,
        action: &str,
        resource_id: Uuid,
        owner_id: Uuid,
    ) -> Result<(), DomainError> {
        self.enforcer
            .check_access_with(
                ctx,
                resource,
                action,
                Some(resource_id),
                &AccessRequest::new().resource_property(properties::OWNER_ID, owner_id.to_string()),
            )
            .await?;
        Ok(())
    }
}
