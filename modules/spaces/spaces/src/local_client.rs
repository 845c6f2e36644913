use std::sync::Arc;

use async_trait::async_trait;
use metaverse_security::SecurityContext;
use spaces_sdk::{
    Avatar, CurrentUser, Element, NewSpace, NewSpaceElement, Space, SpaceDetail, SpacesClientV1,
    SpacesError, UserAvatar,
};
use uuid::Uuid;

use crate::domain::service::AppServices;

/// In-process [`SpacesClientV1`] backed by the module's domain services.
pub struct SpacesLocalClient {
    services: Arc<AppServices>,
}

impl SpacesLocalClient {
    #[must_use]
    pub fn new(services: Arc<AppServices>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl SpacesClientV1 for SpacesLocalClient {
    async fn create_space(
        &self,
        ctx: &SecurityContext,
        new_space: NewSpace,
    ) -> Result<Uuid, SpacesError> {
        self.services
            .provisioning
            .create_space(ctx, new_space)
            .await
            .map_err(Into::into)
    }

    async fn get_space(&self, ctx: &SecurityContext, id: Uuid) -> Result<SpaceDetail, SpacesError> {
        self.services
            .spaces
            .get_space(ctx, id)
            .await
            .map_err(Into::into)
    }

    async fn list_spaces(&self, ctx: &SecurityContext) -> Result<Vec<Space>, SpacesError> {
        self.services
            .spaces
            .list_spaces(ctx)
            .await
            .map_err(Into::into)
    }

    async fn delete_space(&self, ctx: &SecurityContext, id: Uuid) -> Result<(), SpacesError> {
        self.services
            .spaces
            .delete_space(ctx, id)
            .await
            .map_err(Into::into)
    }

    async fn add_element(
        &self,
        ctx: &SecurityContext,
        new_element: NewSpaceElement,
    ) -> Result<Uuid, SpacesError> {
        self.services
            .spaces
            .add_element(ctx, new_element)
            .await
            .map_err(Into::into)
    }

    async fn delete_element(&self, ctx: &SecurityContext, id: Uuid) -> Result<(), SpacesError> {
        self.services
            .spaces
            .delete_element(ctx, id)
            .await
            .map_err(Into::into)
    }

    async fn list_elements(&self, _ctx: &SecurityContext) -> Result<Vec<Element>, SpacesError> {
        self.services
            .catalog
            .list_elements()
            .await
            .map_err(Into::into)
    }

    async fn list_avatars(&self, _ctx: &SecurityContext) -> Result<Vec<Avatar>, SpacesError> {
        self.services
            .catalog
            .list_avatars()
            .await
            .map_err(Into::into)
    }

    async fn update_avatar(
        &self,
        ctx: &SecurityContext,
        avatar_id: Uuid,
    ) -> Result<(), SpacesError> {
        self.services
            .users
            .update_avatar(ctx, avatar_id)
            .await
            .map_err(Into::into)
    }

    async fn current_user(&self, ctx: &SecurityContext) -> Result<CurrentUser, SpacesError> {
        self.services
            .users
            .current_user(ctx)
            .await
            .map_err(Into::into)
    }

    async fn user_avatars(
        &self,
        _ctx: &SecurityContext,
        user_ids: Vec<Uuid>,
    ) -> Result<Vec<UserAvatar>, SpacesError> {
        self.services
            .users
            .user_avatars(&user_ids)
            .await
            .map_err(Into::into)
    }
}
