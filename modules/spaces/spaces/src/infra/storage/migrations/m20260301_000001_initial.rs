use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Elements::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Elements::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Elements::ImageUrl).string().not_null())
                    .col(ColumnDef::new(Elements::Width).integer().not_null())
                    .col(ColumnDef::new(Elements::Height).integer().not_null())
                    .col(
                        ColumnDef::new(Elements::IsStatic)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Avatars::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Avatars::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Avatars::Name).string().not_null())
                    .col(ColumnDef::new(Avatars::ImageUrl).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Spaces::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Spaces::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Spaces::Name).string().not_null())
                    .col(ColumnDef::new(Spaces::Thumbnail).string().null())
                    .col(ColumnDef::new(Spaces::Width).integer().not_null())
                    .col(ColumnDef::new(Spaces::Height).integer().not_null())
                    .col(ColumnDef::new(Spaces::CreatorId).uuid().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_spaces_creator_id")
                    .table(Spaces::Table)
                    .col(Spaces::CreatorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SpaceElements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SpaceElements::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SpaceElements::SpaceId).uuid().not_null())
                    .col(ColumnDef::new(SpaceElements::ElementId).uuid().not_null())
                    .col(ColumnDef::new(SpaceElements::X).integer().not_null())
                    .col(ColumnDef::new(SpaceElements::Y).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_space_elements_space")
                            .from(SpaceElements::Table, SpaceElements::SpaceId)
                            .to(Spaces::Table, Spaces::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_space_elements_element")
                            .from(SpaceElements::Table, SpaceElements::ElementId)
                            .to(Elements::Table, Elements::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_space_elements_space_id")
                    .table(SpaceElements::Table)
                    .col(SpaceElements::SpaceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Maps::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Maps::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Maps::Name).string().not_null())
                    .col(ColumnDef::new(Maps::Thumbnail).string().not_null())
                    .col(ColumnDef::new(Maps::Width).integer().not_null())
                    .col(ColumnDef::new(Maps::Height).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MapElements::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MapElements::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(MapElements::MapId).uuid().not_null())
                    .col(ColumnDef::new(MapElements::ElementId).uuid().not_null())
                    .col(ColumnDef::new(MapElements::X).integer().not_null())
                    .col(ColumnDef::new(MapElements::Y).integer().not_null())
                    .col(ColumnDef::new(MapElements::Position).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_map_elements_map")
                            .from(MapElements::Table, MapElements::MapId)
                            .to(Maps::Table, Maps::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_map_elements_element")
                            .from(MapElements::Table, MapElements::ElementId)
                            .to(Elements::Table, Elements::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_map_elements_map_id")
                    .table(MapElements::Table)
                    .col(MapElements::MapId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MapElements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Maps::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SpaceElements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Spaces::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Avatars::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Elements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Spaces {
    Table,
    Id,
    Name,
    Thumbnail,
    Width,
    Height,
    CreatorId,
}

#[derive(DeriveIden)]
enum SpaceElements {
    Table,
    Id,
    SpaceId,
    ElementId,
    X,
    Y,
}

#[derive(DeriveIden)]
enum Elements {
    Table,
    Id,
    ImageUrl,
    Width,
    Height,
    IsStatic,
}

#[derive(DeriveIden)]
enum Maps {
    Table,
    Id,
    Name,
    Thumbnail,
    Width,
    Height,
}

#[derive(DeriveIden)]
enum MapElements {
    Table,
    Id,
    MapId,
    ElementId,
    X,
    Y,
    Position,
}

#[derive(DeriveIden)]
enum Avatars {
    Table,
    Id,
    Name,
    ImageUrl,
}
