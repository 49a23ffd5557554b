use sea_orm_migration::{prelude::*, schema::*};

static IDX_SHIP_PROD_DATE: &str = "idx_ship_prod_date";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ship::Table)
                    .if_not_exists()
                    .col(pk_auto(Ship::Id))
                    .col(string(Ship::Name))
                    .col(string(Ship::Planet))
                    .col(string(Ship::ShipType))
                    .col(timestamp(Ship::ProdDate))
                    .col(double(Ship::Speed))
                    .col(integer(Ship::CrewSize))
                    .col(boolean(Ship::IsUsed))
                    .col(double(Ship::Rating))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SHIP_PROD_DATE)
                    .table(Ship::Table)
                    .col(Ship::ProdDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_SHIP_PROD_DATE).table(Ship::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Ship::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ship {
    Table,
    Id,
    Name,
    Planet,
    ShipType,
    ProdDate,
    Speed,
    CrewSize,
    IsUsed,
    Rating,
}
