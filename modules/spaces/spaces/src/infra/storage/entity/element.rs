use sea_orm::entity::prelude::*;

/// Catalog element. Shared by every space and map; no owner.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "elements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub image_url: String,
    pub width: i32,
    pub height: i32,
    pub is_static: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::space_element::Entity")]
    SpaceElement,
    #[sea_orm(has_many = "super::map_element::Entity")]
    MapElement,
}

impl Related<super::space_element::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpaceElement.def()
    }
}

impl Related<super::map_element::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MapElement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
