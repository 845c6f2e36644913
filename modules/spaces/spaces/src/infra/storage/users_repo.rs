use async_trait::async_trait;
use metaverse_db::Db;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use spaces_sdk::UserAvatar;
use uuid::Uuid;

use super::entity::{avatar, user};
use crate::domain::error::DomainError;
use crate::domain::repos::UserMetadataRepository;

/// `SeaORM` implementation of [`UserMetadataRepository`].
#[derive(Clone)]
pub struct OrmUsersRepository {
    db: Db,
}

impl OrmUsersRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

fn user_avatar(row: user::Model, chosen: Option<avatar::Model>) -> UserAvatar {
    UserAvatar {
        user_id: row.id,
        image_url: chosen.map(|a| a.image_url),
    }
}

#[async_trait]
impl UserMetadataRepository for OrmUsersRepository {
    async fn set_avatar(&self, user_id: Uuid, avatar_id: Uuid) -> Result<(), DomainError> {
        let am = user::ActiveModel {
            id: Set(user_id),
            avatar_id: Set(Some(avatar_id)),
        };
        user::Entity::insert(am)
            .on_conflict(
                OnConflict::column(user::Column::Id)
                    .update_column(user::Column::AvatarId)
                    .to_owned(),
            )
            .exec_without_returning(self.db.conn())
            .await?;
        Ok(())
    }

    async fn get_avatar(&self, user_id: Uuid) -> Result<Option<UserAvatar>, DomainError> {
        let found = user::Entity::find_by_id(user_id)
            .find_also_related(avatar::Entity)
            .one(self.db.conn())
            .await?;
        Ok(found.map(|(row, chosen)| user_avatar(row, chosen)))
    }

    async fn bulk_avatars(&self, user_ids: &[Uuid]) -> Result<Vec<UserAvatar>, DomainError> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = user::Entity::find()
            .filter(user::Column::Id.is_in(user_ids.iter().copied()))
            .find_also_related(avatar::Entity)
            .order_by_asc(user::Column::Id)
            .all(self.db.conn())
            .await?;
        Ok(rows
            .into_iter()
            .map(|(row, chosen)| user_avatar(row, chosen))
            .collect())
    }
}
