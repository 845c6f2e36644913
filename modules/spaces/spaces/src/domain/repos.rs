//! Storage ports.
//!
//! Repositories own their connection handle and open units of work
//! themselves; services never see a transaction.

use async_trait::async_trait;
use metaverse_security::AccessScope;
use spaces_sdk::{Avatar, Element, MapTemplate, Space, SpaceDetail, SpaceElement, UserAvatar};
use uuid::Uuid;

use crate::domain::error::DomainError;

#[async_trait]
pub trait SpacesRepository: Send + Sync {
    async fn get_by_id_with_owner(&self, space_id: Uuid) -> Result<Option<Space>, DomainError>;

    /// Insert the space and every element as one unit of work.
    async fn create_space_and_elements(
        &self,
        space: Space,
        elements: Vec<SpaceElement>,
    ) -> Result<Uuid, DomainError>;

    /// Delete the space and all of its elements as one unit of work.
    /// Returns `false` when the space did not exist.
    async fn delete_space_cascade(&self, space_id: Uuid) -> Result<bool, DomainError>;

    async fn add_element(&self, element: SpaceElement) -> Result<(), DomainError>;

    async fn delete_element(&self, space_element_id: Uuid) -> Result<bool, DomainError>;

    /// Placed element plus the `creator_id` of its space, in one query.
    async fn find_element_with_space_owner(
        &self,
        space_element_id: Uuid,
    ) -> Result<Option<(SpaceElement, Uuid)>, DomainError>;

    /// Spaces created by `creator_id`, further narrowed by `scope`.
    async fn list(
        &self,
        creator_id: Uuid,
        scope: &AccessScope,
    ) -> Result<Vec<Space>, DomainError>;

    async fn get_detail(&self, space_id: Uuid) -> Result<Option<SpaceDetail>, DomainError>;
}

/// Read-only map template lookup.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Template with its default elements in template order.
    async fn get_map(&self, map_id: Uuid) -> Result<Option<MapTemplate>, DomainError>;
}

/// Read-only element catalog.
#[async_trait]
pub trait ElementCatalog: Send + Sync {
    async fn get_element(&self, element_id: Uuid) -> Result<Option<Element>, DomainError>;

    async fn list_elements(&self) -> Result<Vec<Element>, DomainError>;
}

#[async_trait]
pub trait AvatarCatalog: Send + Sync {
    async fn get_avatar(&self, avatar_id: Uuid) -> Result<Option<Avatar>, DomainError>;

    async fn list_avatars(&self) -> Result<Vec<Avatar>, DomainError>;
}

/// Per-user metadata keyed by subject id.
#[async_trait]
pub trait UserMetadataRepository: Send + Sync {
    /// Insert or replace the user's avatar choice.
    async fn set_avatar(&self, user_id: Uuid, avatar_id: Uuid) -> Result<(), DomainError>;

    /// `None` when the user has no metadata row.
    async fn get_avatar(&self, user_id: Uuid) -> Result<Option<UserAvatar>, DomainError>;

    /// Rows for the known users among `user_ids`, ordered by user id.
    async fn bulk_avatars(&self, user_ids: &[Uuid]) -> Result<Vec<UserAvatar>, DomainError>;
}

/// Write side of the catalog, reachable only through admin routes.
#[async_trait]
pub trait CatalogAdmin: Send + Sync {
    async fn create_element(&self, element: Element) -> Result<(), DomainError>;

    /// Returns `false` when the element does not exist.
    async fn update_element_image(
        &self,
        element_id: Uuid,
        image_url: String,
    ) -> Result<bool, DomainError>;

    async fn create_avatar(&self, avatar: Avatar) -> Result<(), DomainError>;

    /// Insert the map and its default elements as one unit of work.
    async fn create_map(&self, map: MapTemplate) -> Result<(), DomainError>;
}
