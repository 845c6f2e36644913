use async_trait::async_trait;
use metaverse_security::SecurityContext;
use uuid::Uuid;

use crate::errors::SpacesError;
use crate::models::{
    Avatar, CurrentUser, Element, NewSpace, NewSpaceElement, Space, SpaceDetail, UserAvatar,
};

/// In-process client for the spaces module.
///
/// Every call carries the caller's [`SecurityContext`]; ownership is enforced
/// exactly as on the HTTP surface.
#[async_trait]
pub trait SpacesClientV1: Send + Sync {
    /// Create a space, empty or cloned from a map template. Returns its id.
    async fn create_space(
        &self,
        ctx: &SecurityContext,
        new_space: NewSpace,
    ) -> Result<Uuid, SpacesError>;

    /// Full space detail with placed elements. Not owner-gated.
    async fn get_space(&self, ctx: &SecurityContext, id: Uuid) -> Result<SpaceDetail, SpacesError>;

    /// Spaces created by the caller.
    async fn list_spaces(&self, ctx: &SecurityContext) -> Result<Vec<Space>, SpacesError>;

    /// Delete a space and all of its elements.
    async fn delete_space(&self, ctx: &SecurityContext, id: Uuid) -> Result<(), SpacesError>;

    /// Place a catalog element in a space. Returns the placed element id.
    async fn add_element(
        &self,
        ctx: &SecurityContext,
        new_element: NewSpaceElement,
    ) -> Result<Uuid, SpacesError>;

    /// Remove a placed element.
    async fn delete_element(&self, ctx: &SecurityContext, id: Uuid) -> Result<(), SpacesError>;

    async fn list_elements(&self, ctx: &SecurityContext) -> Result<Vec<Element>, SpacesError>;

    async fn list_avatars(&self, ctx: &SecurityContext) -> Result<Vec<Avatar>, SpacesError>;

    /// Choose the caller's avatar.
    async fn update_avatar(
        &self,
        ctx: &SecurityContext,
        avatar_id: Uuid,
    ) -> Result<(), SpacesError>;

    /// The caller's identity and chosen avatar.
    async fn current_user(&self, ctx: &SecurityContext) -> Result<CurrentUser, SpacesError>;

    /// Avatar choices of the given users; users without metadata are skipped.
    async fn user_avatars(
        &self,
        ctx: &SecurityContext,
        user_ids: Vec<Uuid>,
    ) -> Result<Vec<UserAvatar>, SpacesError>;
}
