use async_trait::async_trait;
use metaverse_db::Db;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use spaces_sdk::{Avatar, Element, MapTemplate};
use uuid::Uuid;

use super::entity::{avatar, element, map, map_element};
use crate::domain::error::DomainError;
use crate::domain::repos::{AvatarCatalog, CatalogAdmin, ElementCatalog, TemplateStore};

/// `SeaORM` implementation of the catalog ports: elements, avatars and map
/// templates.
#[derive(Clone)]
pub struct OrmCatalogRepository {
    db: Db,
}

impl OrmCatalogRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TemplateStore for OrmCatalogRepository {
    async fn get_map(&self, map_id: Uuid) -> Result<Option<MapTemplate>, DomainError> {
        let conn = self.db.conn();
        let Some(found) = map::Entity::find_by_id(map_id).one(conn).await? else {
            return Ok(None);
        };

        let entries = map_element::Entity::find()
            .filter(map_element::Column::MapId.eq(map_id))
            .order_by_asc(map_element::Column::Position)
            .all(conn)
            .await?;

        Ok(Some(MapTemplate {
            id: found.id,
            name: found.name,
            thumbnail: found.thumbnail,
            width: found.width,
            height: found.height,
            default_elements: entries.into_iter().map(Into::into).collect(),
        }))
    }
}

#[async_trait]
impl ElementCatalog for OrmCatalogRepository {
    async fn get_element(&self, element_id: Uuid) -> Result<Option<Element>, DomainError> {
        let found = element::Entity::find_by_id(element_id)
            .one(self.db.conn())
            .await?;
        Ok(found.map(Into::into))
    }

    async fn list_elements(&self) -> Result<Vec<Element>, DomainError> {
        let rows = element::Entity::find()
            .order_by_asc(element::Column::Id)
            .all(self.db.conn())
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl AvatarCatalog for OrmCatalogRepository {
    async fn get_avatar(&self, avatar_id: Uuid) -> Result<Option<Avatar>, DomainError> {
        let found = avatar::Entity::find_by_id(avatar_id)
            .one(self.db.conn())
            .await?;
        Ok(found.map(Into::into))
    }

    async fn list_avatars(&self) -> Result<Vec<Avatar>, DomainError> {
        let rows = avatar::Entity::find()
            .order_by_asc(avatar::Column::Id)
            .all(self.db.conn())
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CatalogAdmin for OrmCatalogRepository {
    async fn create_element(&self, element: Element) -> Result<(), DomainError> {
        let am = element::ActiveModel {
            id: Set(element.id),
            image_url: Set(element.image_url),
            width: Set(element.width),
            height: Set(element.height),
            is_static: Set(element.is_static),
        };
        element::Entity::insert(am)
            .exec_without_returning(self.db.conn())
            .await?;
        Ok(())
    }

    async fn update_element_image(
        &self,
        element_id: Uuid,
        image_url: String,
    ) -> Result<bool, DomainError> {
        let res = element::Entity::update_many()
            .col_expr(element::Column::ImageUrl, Expr::value(image_url))
            .filter(element::Column::Id.eq(element_id))
            .exec(self.db.conn())
            .await?;
        Ok(res.rows_affected > 0)
    }

    async fn create_avatar(&self, avatar: Avatar) -> Result<(), DomainError> {
        let am = avatar::ActiveModel {
            id: Set(avatar.id),
            name: Set(avatar.name),
            image_url: Set(avatar.image_url),
        };
        avatar::Entity::insert(am)
            .exec_without_returning(self.db.conn())
            .await?;
        Ok(())
    }

    async fn create_map(&self, map: MapTemplate) -> Result<(), DomainError> {
        self.db
            .with_transaction(move |txn| {
                Box::pin(async move {
                    let map_id = map.id;
                    let header = map::ActiveModel {
                        id: Set(map_id),
                        name: Set(map.name),
                        thumbnail: Set(map.thumbnail),
                        width: Set(map.width),
                        height: Set(map.height),
                    };
                    map::Entity::insert(header)
                        .exec_without_returning(txn)
                        .await?;

                    if !map.default_elements.is_empty() {
                        let entries = map.default_elements.into_iter().zip(0_i32..).map(
                            |(entry, position)| map_element::ActiveModel {
                                id: Set(Uuid::now_v7()),
                                map_id: Set(map_id),
                                element_id: Set(entry.element_id),
                                x: Set(entry.x),
                                y: Set(entry.y),
                                position: Set(position),
                            },
                        );
                        map_element::Entity::insert_many(entries)
                            .exec_without_returning(txn)
                            .await?;
                    }
                    Ok::<_, DomainError>(())
                })
            })
            .await
    }
}
