use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "maps")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub thumbnail: String,
    pub width: i32,
    pub height: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::map_element::Entity")]
    MapElement,
}

impl Related<super::map_element::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MapElement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
