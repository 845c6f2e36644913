use std::sync::Arc;

use authz_resolver_sdk::pep::{AccessRequest, PolicyEnforcer};
use metaverse_security::{SecurityContext, properties};
use spaces_sdk::{CurrentUser, UserAvatar};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::{actions, resources};
use crate::domain::error::DomainError;
use crate::domain::repos::{AvatarCatalog, UserMetadataRepository};

/// User metadata: the avatar a user picked from the catalog.
///
/// Rows are created lazily on the first avatar choice; the identity provider
/// stays the source of truth for who exists.
pub struct UsersService {
    users: Arc<dyn UserMetadataRepository>,
    avatars: Arc<dyn AvatarCatalog>,
    enforcer: PolicyEnforcer,
}

impl UsersService {
    #[must_use]
    pub fn new(
        users: Arc<dyn UserMetadataRepository>,
        avatars: Arc<dyn AvatarCatalog>,
        enforcer: PolicyEnforcer,
    ) -> Self {
        Self {
            users,
            avatars,
            enforcer,
        }
    }

    /// Set the caller's avatar.
    ///
    /// # Errors
    ///
    /// `Forbidden` for anonymous callers, `Validation` when the avatar is not
    /// in the catalog.
    #[instrument(skip(self, ctx), fields(subject_id = %ctx.subject_id(), avatar_id = %avatar_id))]
    pub async fn update_avatar(
        &self,
        ctx: &SecurityContext,
        avatar_id: Uuid,
    ) -> Result<(), DomainError> {
        info!("Updating user metadata");

        self.check_self(ctx, actions::UPDATE_METADATA).await?;

        if self.avatars.get_avatar(avatar_id).await?.is_none() {
            return Err(DomainError::validation("avatarId", "unknown avatar"));
        }

        self.users.set_avatar(ctx.subject_id(), avatar_id).await?;
        info!("Metadata updated");
        Ok(())
    }

    /// The caller's identity with the image of their avatar, if any.
    ///
    /// # Errors
    ///
    /// `Forbidden` for anonymous callers.
    #[instrument(skip(self, ctx), fields(subject_id = %ctx.subject_id()))]
    pub async fn current_user(&self, ctx: &SecurityContext) -> Result<CurrentUser, DomainError> {
        debug!("Getting current user");

        self.check_self(ctx, actions::GET_CURRENT).await?;

        let avatar_image_url = self
            .users
            .get_avatar(ctx.subject_id())
            .await?
            .and_then(|m| m.image_url);

        Ok(CurrentUser {
            id: ctx.subject_id(),
            role: ctx.role(),
            avatar_image_url,
        })
    }

    /// Avatar choices of `user_ids`. Public; unknown users are skipped.
    ///
    /// # Errors
    ///
    /// `Storage` on database failure.
    #[instrument(skip(self, user_ids), fields(requested = user_ids.len()))]
    pub async fn user_avatars(&self, user_ids: &[Uuid]) -> Result<Vec<UserAvatar>, DomainError> {
        let found = self.users.bulk_avatars(user_ids).await?;
        debug!(count = found.len(), "Loaded user metadata");
        Ok(found)
    }

    // A user's metadata is owned by that user.
    async fn check_self(&self, ctx: &SecurityContext, action: &str) -> Result<(), DomainError> {
        self.enforcer
            .check_access_with(
                ctx,
                &resources::USER,
                action,
                Some(ctx.subject_id()),
                &AccessRequest::new()
                    .resource_property(properties::OWNER_ID, ctx.subject_id().to_string()),
            )
            .await?;
        Ok(())
    }
}
