//! Create `customer` table.
//! Point lookups and full scans only, so the primary key is the sole index.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customer::Table)
                    .if_not_exists()
                    .col(string_len(Customer::CustomerId, 64).primary_key())
                    .col(string(Customer::Name).not_null())
                    .col(string(Customer::Email).not_null())
                    .col(string(Customer::Phone).not_null())
                    .col(string(Customer::Address).not_null())
                    .col(date(Customer::RegistrationDate).not_null())
                    .col(timestamp_with_time_zone(Customer::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Customer::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Customer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Customer {
    Table,
    CustomerId,
    Name,
    Email,
    Phone,
    Address,
    RegistrationDate,
    CreatedAt,
    UpdatedAt,
}
