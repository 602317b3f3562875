use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create careers table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Careers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Careers::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Careers::Role).string_len(150).not_null())
                    .col(
                        ColumnDef::new(Careers::Designation)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Careers::RequiredSkills)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Careers::NextSkills)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Careers::Resources)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Careers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Careers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Full scans are returned in insertion order
        manager
            .create_index(
                Index::create()
                    .name("idx_careers_created_at")
                    .table(Careers::Table)
                    .col(Careers::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_careers_created_at")
                    .table(Careers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Careers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Careers {
    Table,
    Id,
    Role,
    Designation,
    RequiredSkills,
    NextSkills,
    Resources,
    CreatedAt,
    UpdatedAt,
}
