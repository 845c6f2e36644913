use std::sync::Arc;

use metaverse_security::SecurityContext;
use spaces_sdk::{Avatar, Dimensions, Element, ElementPatch, MapTemplate, NewAvatar, NewElement, NewMap};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::validate_name;
use crate::config::SpacesConfig;
use crate::domain::error::DomainError;
use crate::domain::placement::validate_within;
use crate::domain::repos::{AvatarCatalog, CatalogAdmin, ElementCatalog};

/// Element and avatar listings plus the admin write path for the catalog.
pub struct CatalogService {
    elements: Arc<dyn ElementCatalog>,
    avatars: Arc<dyn AvatarCatalog>,
    admin: Arc<dyn CatalogAdmin>,
    config: SpacesConfig,
}

impl CatalogService {
    #[must_use]
    pub fn new(
        elements: Arc<dyn ElementCatalog>,
        avatars: Arc<dyn AvatarCatalog>,
        admin: Arc<dyn CatalogAdmin>,
        config: SpacesConfig,
    ) -> Self {
        Self {
            elements,
            avatars,
            admin,
            config,
        }
    }

    /// # Errors
    ///
    /// `Storage` on database failure.
    #[instrument(skip(self))]
    pub async fn list_elements(&self) -> Result<Vec<Element>, DomainError> {
        let elements = self.elements.list_elements().await?;
        debug!(count = elements.len(), "Listed elements");
        Ok(elements)
    }

    /// # Errors
    ///
    /// `Storage` on database failure.
    #[instrument(skip(self))]
    pub async fn list_avatars(&self) -> Result<Vec<Avatar>, DomainError> {
        let avatars = self.avatars.list_avatars().await?;
        debug!(count = avatars.len(), "Listed avatars");
        Ok(avatars)
    }

    /// # Errors
    ///
    /// `Validation` for a blank image URL or a non-positive size.
    #[instrument(skip(self, ctx, new_element), fields(admin_id = %ctx.subject_id()))]
    pub async fn create_element(
        &self,
        ctx: &SecurityContext,
        new_element: NewElement,
    ) -> Result<Uuid, DomainError> {
        validate_url("imageUrl", &new_element.image_url)?;
        if new_element.width <= 0 || new_element.height <= 0 {
            return Err(DomainError::validation(
                "dimensions",
                "width and height must be positive",
            ));
        }

        let element = Element {
            id: Uuid::now_v7(),
            image_url: new_element.image_url,
            width: new_element.width,
            height: new_element.height,
            is_static: new_element.is_static,
        };
        let id = element.id;
        self.admin.create_element(element).await?;

        info!(element_id = %id, "Element created");
        Ok(id)
    }

    /// Replace the image of a catalog element.
    ///
    /// # Errors
    ///
    /// `Validation` for a blank URL, `NotFound` for an unknown element.
    #[instrument(skip(self, ctx, patch), fields(admin_id = %ctx.subject_id(), element_id = %id))]
    pub async fn update_element(
        &self,
        ctx: &SecurityContext,
        id: Uuid,
        patch: ElementPatch,
    ) -> Result<(), DomainError> {
        validate_url("imageUrl", &patch.image_url)?;

        if !self.admin.update_element_image(id, patch.image_url).await? {
            return Err(DomainError::element_not_found(id));
        }

        info!("Element image updated");
        Ok(())
    }

    /// # Errors
    ///
    /// `Validation` for a bad name or a blank image URL.
    #[instrument(skip(self, ctx, new_avatar), fields(admin_id = %ctx.subject_id()))]
    pub async fn create_avatar(
        &self,
        ctx: &SecurityContext,
        new_avatar: NewAvatar,
    ) -> Result<Uuid, DomainError> {
        validate_name("name", &new_avatar.name, self.config.max_name_length)?;
        validate_url("imageUrl", &new_avatar.image_url)?;

        let avatar = Avatar {
            id: Uuid::now_v7(),
            name: new_avatar.name,
            image_url: new_avatar.image_url,
        };
        let id = avatar.id;
        self.admin.create_avatar(avatar).await?;

        info!(avatar_id = %id, "Avatar created");
        Ok(id)
    }

    /// Create a map template. Every default element must exist in the
    /// catalog and sit inside the map's canvas.
    ///
    /// # Errors
    ///
    /// `Validation`, `NotFound` for a missing element, `OutOfBounds` for an
    /// entry outside the canvas.
    #[instrument(skip(self, ctx, new_map), fields(admin_id = %ctx.subject_id(), name = %new_map.name))]
    pub async fn create_map(
        &self,
        ctx: &SecurityContext,
        new_map: NewMap,
    ) -> Result<Uuid, DomainError> {
        validate_name("name", &new_map.name, self.config.max_name_length)?;
        validate_url("thumbnail", &new_map.thumbnail)?;
        let dimensions: Dimensions = new_map
            .dimensions
            .parse()
            .map_err(|e: spaces_sdk::DimensionsParseError| {
                DomainError::validation("dimensions", e.to_string())
            })?;

        for entry in &new_map.default_elements {
            self.elements
                .get_element(entry.element_id)
                .await?
                .ok_or_else(|| DomainError::element_not_found(entry.element_id))?;
            validate_within(dimensions.width, dimensions.height, entry.x, entry.y)?;
        }

        let map = MapTemplate {
            id: Uuid::now_v7(),
            name: new_map.name,
            thumbnail: new_map.thumbnail,
            width: dimensions.width,
            height: dimensions.height,
            default_elements: new_map.default_elements,
        };
        let id = map.id;
        let count = map.default_elements.len();
        self.admin.create_map(map).await?;

        info!(map_id = %id, elements = count, "Map created");
        Ok(id)
    }
}

fn validate_url(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, "must not be empty"));
    }
    Ok(())
}
