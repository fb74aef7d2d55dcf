//! Initial schema: users, states, restaurants, reviews, tags, comments, and
//! the follow graph.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(States::Table)
                    .col(pk_uuid(States::Id))
                    .col(string_uniq(States::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .col(pk_uuid(Users::Id))
                    .col(string_uniq(Users::Email))
                    .col(string(Users::PasswordHash))
                    .col(string(Users::FirstName))
                    .col(string(Users::LastName))
                    .col(text_null(Users::AboutMe))
                    .col(string_null(Users::ProfilePic))
                    .col(string_null(Users::City))
                    .col(uuid_null(Users::StateId))
                    .col(boolean(Users::IsAdmin))
                    .col(timestamp_with_time_zone(Users::CreatedAt))
                    .col(timestamp_with_time_zone(Users::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_state")
                            .from(Users::Table, Users::StateId)
                            .to(States::Table, States::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Restaurants::Table)
                    .col(pk_uuid(Restaurants::Id))
                    .col(string(Restaurants::Name))
                    .col(string(Restaurants::City))
                    .col(uuid_null(Restaurants::StateId))
                    .col(string_null(Restaurants::Street1))
                    .col(string_null(Restaurants::Street2))
                    .col(string_null(Restaurants::Zipcode))
                    .col(string_null(Restaurants::Phone))
                    .col(string_null(Restaurants::Website))
                    .col(string_null(Restaurants::Cuisine))
                    .col(string_null(Restaurants::Cost))
                    .col(text_null(Restaurants::About))
                    .col(integer(Restaurants::Rating))
                    .col(string_null(Restaurants::ProfilePic))
                    .col(uuid_null(Restaurants::OwnerId))
                    .col(timestamp_with_time_zone(Restaurants::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurants_state")
                            .from(Restaurants::Table, Restaurants::StateId)
                            .to(States::Table, States::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurants_owner")
                            .from(Restaurants::Table, Restaurants::OwnerId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // find-or-create dedupes restaurants on the (name, city) pair
        manager
            .create_index(
                Index::create()
                    .name("idx_restaurants_name_city")
                    .table(Restaurants::Table)
                    .col(Restaurants::Name)
                    .col(Restaurants::City)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .col(pk_uuid(Posts::Id))
                    .col(uuid(Posts::AuthorId))
                    .col(string(Posts::Title))
                    .col(text(Posts::Content))
                    .col(integer(Posts::Rating))
                    .col(integer(Posts::LikeCount))
                    .col(string_null(Posts::Pic))
                    .col(uuid_null(Posts::RestaurantId))
                    .col(timestamp_with_time_zone(Posts::PostedAt))
                    .col(timestamp_with_time_zone(Posts::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_author")
                            .from(Posts::Table, Posts::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_restaurant")
                            .from(Posts::Table, Posts::RestaurantId)
                            .to(Restaurants::Table, Restaurants::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_posts_posted_at")
                    .table(Posts::Table)
                    .col(Posts::PostedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Tags::Table)
                    .col(pk_uuid(Tags::Id))
                    .col(string_uniq(Tags::Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PostTags::Table)
                    .col(uuid(PostTags::PostId))
                    .col(uuid(PostTags::TagId))
                    .primary_key(
                        Index::create()
                            .col(PostTags::PostId)
                            .col(PostTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_tags_post")
                            .from(PostTags::Table, PostTags::PostId)
                            .to(Posts::Table, Posts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_tags_tag")
                            .from(PostTags::Table, PostTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .col(pk_uuid(Comments::Id))
                    .col(uuid(Comments::PostId))
                    .col(uuid_null(Comments::AuthorId))
                    .col(string_null(Comments::GuestName))
                    .col(text(Comments::Content))
                    .col(timestamp_with_time_zone(Comments::PostedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_post")
                            .from(Comments::Table, Comments::PostId)
                            .to(Posts::Table, Posts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_author")
                            .from(Comments::Table, Comments::AuthorId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FollowEdges::Table)
                    .col(pk_uuid(FollowEdges::Id))
                    .col(uuid(FollowEdges::FollowerId))
                    // Self-loops are rejected at the column level so no code
                    // path can insert one.
                    .col(
                        ColumnDef::new(FollowEdges::FolloweeId)
                            .uuid()
                            .not_null()
                            .check(
                                Expr::col(FollowEdges::FolloweeId)
                                    .ne(Expr::col(FollowEdges::FollowerId)),
                            ),
                    )
                    .col(timestamp_with_time_zone(FollowEdges::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follow_edges_follower")
                            .from(FollowEdges::Table, FollowEdges::FollowerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_follow_edges_followee")
                            .from(FollowEdges::Table, FollowEdges::FolloweeId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One edge per ordered pair; INSERT .. ON CONFLICT targets this index.
        manager
            .create_index(
                Index::create()
                    .name("idx_follow_edges_pair")
                    .table(FollowEdges::Table)
                    .col(FollowEdges::FollowerId)
                    .col(FollowEdges::FolloweeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_follow_edges_followee")
                    .table(FollowEdges::Table)
                    .col(FollowEdges::FolloweeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FollowEdges::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PostTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Restaurants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(States::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum States {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    AboutMe,
    ProfilePic,
    City,
    StateId,
    IsAdmin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Restaurants {
    Table,
    Id,
    Name,
    City,
    StateId,
    Street1,
    Street2,
    Zipcode,
    Phone,
    Website,
    Cuisine,
    Cost,
    About,
    Rating,
    ProfilePic,
    OwnerId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    AuthorId,
    Title,
    Content,
    Rating,
    LikeCount,
    Pic,
    RestaurantId,
    PostedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tags {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum PostTags {
    Table,
    PostId,
    TagId,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    PostId,
    AuthorId,
    GuestName,
    Content,
    PostedAt,
}

#[derive(DeriveIden)]
enum FollowEdges {
    Table,
    Id,
    FollowerId,
    FolloweeId,
    CreatedAt,
}
