use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // projects
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Projects::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(ColumnDef::new(Projects::ImageUrl).text())
                    .col(
                        ColumnDef::new(Projects::Tags)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Projects::Link).text())
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // experiences
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Experiences::Position)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::Organization)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experiences::StartDate).date().not_null())
                    .col(ColumnDef::new(Experiences::EndDate).date())
                    .col(
                        ColumnDef::new(Experiences::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Experiences::ExperienceType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // skills
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Skills::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Skills::Category).string_len(100).not_null())
                    .col(ColumnDef::new(Skills::Level).small_integer().not_null())
                    .col(
                        ColumnDef::new(Skills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // certificates
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Certificates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certificates::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Certificates::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Certificates::Issuer)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Certificates::Date).date().not_null())
                    .col(
                        ColumnDef::new(Certificates::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Certificates::ImageUrl).text())
                    .col(
                        ColumnDef::new(Certificates::CertificateType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Certificates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Checks and indexes
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE experiences
                ADD CONSTRAINT chk_experiences_type
                CHECK (experience_type IN ('work', 'education', 'volunteer'));

                ALTER TABLE skills
                ADD CONSTRAINT chk_skills_level
                CHECK (level BETWEEN 1 AND 100);

                ALTER TABLE certificates
                ADD CONSTRAINT chk_certificates_type
                CHECK (certificate_type IN ('event', 'course'));

                CREATE INDEX idx_projects_created_at ON projects (created_at DESC);
                CREATE INDEX idx_experiences_start_date ON experiences (start_date DESC);
                CREATE INDEX idx_certificates_date ON certificates (date DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Certificates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    ImageUrl,
    Tags,
    Link,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Position,
    Organization,
    StartDate,
    EndDate,
    Description,
    ExperienceType,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Name,
    Category,
    Level,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Certificates {
    Table,
    Id,
    Title,
    Issuer,
    Date,
    Description,
    ImageUrl,
    CertificateType,
    CreatedAt,
}
