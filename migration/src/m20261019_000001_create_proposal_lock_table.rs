use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProposalLock::Table)
                    .if_not_exists()
                    .col(string(ProposalLock::LockKey).primary_key())
                    .col(string(ProposalLock::Token))
                    .col(timestamp_with_time_zone(ProposalLock::ExpiresAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_proposal_lock_expires_at")
                    .table(ProposalLock::Table)
                    .col(ProposalLock::ExpiresAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProposalLock::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProposalLock {
    Table,
    LockKey,
    Token,
    ExpiresAt,
}
