use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // achievements
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Achievements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Achievements::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Achievements::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Achievements::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Achievements::Date).date().not_null())
                    .col(ColumnDef::new(Achievements::ImageUrl).text())
                    .col(
                        ColumnDef::new(Achievements::IsApproved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Achievements::AwardedBy).string_len(200))
                    .col(
                        ColumnDef::new(Achievements::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // testimonials
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Testimonials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Testimonials::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Testimonials::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Testimonials::Position).string_len(100))
                    .col(ColumnDef::new(Testimonials::Company).string_len(100))
                    .col(ColumnDef::new(Testimonials::Content).text().not_null())
                    .col(ColumnDef::new(Testimonials::Rating).small_integer().not_null())
                    .col(ColumnDef::new(Testimonials::ImageUrl).text())
                    .col(
                        ColumnDef::new(Testimonials::IsApproved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Testimonials::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // social_links
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(SocialLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SocialLinks::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(SocialLinks::Platform).string_len(50).not_null())
                    .col(ColumnDef::new(SocialLinks::Url).text().not_null())
                    .col(ColumnDef::new(SocialLinks::Icon).string_len(50))
                    .col(ColumnDef::new(SocialLinks::Label).string_len(100))
                    .col(
                        ColumnDef::new(SocialLinks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // about_sections (single row in practice)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(AboutSections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AboutSections::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(AboutSections::Title).string_len(200).not_null())
                    .col(ColumnDef::new(AboutSections::Content).text().not_null())
                    .col(ColumnDef::new(AboutSections::Tagline).string_len(255))
                    .col(ColumnDef::new(AboutSections::FooterBio).text())
                    .col(
                        ColumnDef::new(AboutSections::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE testimonials
                ADD CONSTRAINT chk_testimonials_rating
                CHECK (rating BETWEEN 1 AND 5);

                CREATE INDEX idx_testimonials_approved
                ON testimonials (created_at DESC)
                WHERE is_approved = true;

                CREATE INDEX idx_achievements_approved
                ON achievements (date DESC)
                WHERE is_approved = true;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AboutSections::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SocialLinks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Testimonials::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Achievements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Achievements {
    Table,
    Id,
    Title,
    Description,
    Date,
    ImageUrl,
    IsApproved,
    AwardedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Testimonials {
    Table,
    Id,
    Name,
    Position,
    Company,
    Content,
    Rating,
    ImageUrl,
    IsApproved,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SocialLinks {
    Table,
    Id,
    Platform,
    Url,
    Icon,
    Label,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AboutSections {
    Table,
    Id,
    Title,
    Content,
    Tagline,
    FooterBio,
    UpdatedAt,
}
