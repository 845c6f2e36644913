use async_trait::async_trait;
use metaverse_db::Db;
use metaverse_db::secure::build_scope_condition;
use metaverse_security::AccessScope;
use sea_orm::{ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder};
use spaces_sdk::{PlacedElement, Space, SpaceDetail, SpaceElement};
use tracing::warn;
use uuid::Uuid;

use super::entity::{element, space, space_element};
use super::mapper::{space_active, space_element_active};
use crate::domain::error::DomainError;
use crate::domain::repos::SpacesRepository;

/// `SeaORM` implementation of [`SpacesRepository`].
#[derive(Clone)]
pub struct OrmSpacesRepository {
    db: Db,
}

impl OrmSpacesRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SpacesRepository for OrmSpacesRepository {
    async fn get_by_id_with_owner(&self, space_id: Uuid) -> Result<Option<Space>, DomainError> {
        let found = space::Entity::find_by_id(space_id)
            .one(self.db.conn())
            .await?;
        Ok(found.map(Into::into))
    }

    async fn create_space_and_elements(
        &self,
        space: Space,
        elements: Vec<SpaceElement>,
    ) -> Result<Uuid, DomainError> {
        let id = space.id;
        self.db
            .with_transaction(move |txn| {
                Box::pin(async move {
                    space::Entity::insert(space_active(space))
                        .exec_without_returning(txn)
                        .await?;

                    if !elements.is_empty() {
                        space_element::Entity::insert_many(
                            elements.into_iter().map(space_element_active),
                        )
                        .exec_without_returning(txn)
                        .await?;
                    }
                    Ok::<_, DomainError>(())
                })
            })
            .await?;
        Ok(id)
    }

    async fn delete_space_cascade(&self, space_id: Uuid) -> Result<bool, DomainError> {
        self.db
            .with_transaction(move |txn| {
                Box::pin(async move {
                    space_element::Entity::delete_many()
                        .filter(space_element::Column::SpaceId.eq(space_id))
                        .exec(txn)
                        .await?;

                    let res = space::Entity::delete_by_id(space_id).exec(txn).await?;
                    Ok::<_, DomainError>(res.rows_affected > 0)
                })
            })
            .await
    }

    async fn add_element(&self, element: SpaceElement) -> Result<(), DomainError> {
        space_element::Entity::insert(space_element_active(element))
            .exec_without_returning(self.db.conn())
            .await?;
        Ok(())
    }

    async fn delete_element(&self, space_element_id: Uuid) -> Result<bool, DomainError> {
        let res = space_element::Entity::delete_by_id(space_element_id)
            .exec(self.db.conn())
            .await?;
        Ok(res.rows_affected > 0)
    }

    async fn find_element_with_space_owner(
        &self,
        space_element_id: Uuid,
    ) -> Result<Option<(SpaceElement, Uuid)>, DomainError> {
        let found = space_element::Entity::find_by_id(space_element_id)
            .find_also_related(space::Entity)
            .one(self.db.conn())
            .await?;

        Ok(match found {
            Some((placed, Some(owner_space))) => Some((placed.into(), owner_space.creator_id)),
            Some((placed, None)) => {
                warn!(space_element_id = %placed.id, "space element without space");
                None
            }
            None => None,
        })
    }

    async fn list(
        &self,
        creator_id: Uuid,
        scope: &AccessScope,
    ) -> Result<Vec<Space>, DomainError> {
        let rows = space::Entity::find()
            .filter(space::Column::CreatorId.eq(creator_id))
            .filter(build_scope_condition::<space::Entity>(scope))
            .order_by_asc(space::Column::Id)
            .all(self.db.conn())
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_detail(&self, space_id: Uuid) -> Result<Option<SpaceDetail>, DomainError> {
        let conn = self.db.conn();
        let Some(found) = space::Entity::find_by_id(space_id).one(conn).await? else {
            return Ok(None);
        };

        let placed = found
            .find_related(space_element::Entity)
            .find_also_related(element::Entity)
            .order_by_asc(space_element::Column::Id)
            .all(conn)
            .await?;

        let elements = placed
            .into_iter()
            .filter_map(|(se, el)| match el {
                Some(el) => Some(PlacedElement {
                    id: se.id,
                    x: se.x,
                    y: se.y,
                    element: el.into(),
                }),
                None => {
                    warn!(space_element_id = %se.id, "placed element references missing catalog entry");
                    None
                }
            })
            .collect();

        Ok(Some(SpaceDetail {
            space: found.into(),
            elements,
        }))
    }
}
