use metaverse_db::secure::ScopableEntity;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "spaces")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub thumbnail: Option<String>,
    pub width: i32,
    pub height: i32,
    pub creator_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::space_element::Entity")]
    SpaceElement,
}

impl Related<super::space_element::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SpaceElement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Spaces are user-owned; `owner_id` resolves to the creator.
impl ScopableEntity for Entity {
    fn owner_col() -> Option<Self::Column> {
        Some(Column::CreatorId)
    }

    fn id_col() -> Self::Column {
        Column::Id
    }
}
