use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(ItemRequest::Id))
                    .col(integer(ItemRequest::RequesterId))
                    .col(text(ItemRequest::Description))
                    .col(timestamp(ItemRequest::Created))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_item_request_requester_id")
                            .from(ItemRequest::Table, ItemRequest::RequesterId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ItemRequest {
    Table,
    Id,
    RequesterId,
    Description,
    Created,
}
