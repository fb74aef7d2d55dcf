//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use uuid::Uuid;

use tastebook_core::domain::{Comment, Post, Restaurant, State, Tag, TagCount, User};
use tastebook_core::error::RepoError;
use tastebook_core::ports::{
    CommentRepository, PostRepository, RestaurantRepository, StateRepository, TagRepository,
    UserRepository,
};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::post_tag::{self, Entity as PostTagEntity};
use super::entity::restaurant::{self, Entity as RestaurantEntity};
use super::entity::state::{self, Entity as StateEntity};
use super::entity::tag::{self, Entity as TagEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// PostgreSQL restaurant repository.
pub type PostgresRestaurantRepository = PostgresBaseRepository<RestaurantEntity>;

/// PostgreSQL tag repository.
pub type PostgresTagRepository = PostgresBaseRepository<TagEntity>;

/// PostgreSQL state repository.
pub type PostgresStateRepository = PostgresBaseRepository<StateEntity>;

fn query_err(e: DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        let masked = if let Some(at_pos) = email.find('@') {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = if local.len() > 1 {
                format!("{}***", &local[..1])
            } else {
                "***".to_string()
            };
            format!("{}{}", masked_local, domain)
        } else {
            "***".to_string()
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::AuthorId.eq(author_id))
            .order_by_desc(post::Column::PostedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_restaurant(&self, restaurant_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::RestaurantId.eq(restaurant_id))
            .order_by_desc(post::Column::PostedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn recent(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::PostedAt)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn top_rated(&self, limit: u64) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::Rating)
            .order_by_desc(post::Column::PostedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_tagged_with(&self, tag: &str) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .join(JoinType::InnerJoin, post_tag::Relation::Post.def().rev())
            .join(JoinType::InnerJoin, post_tag::Relation::Tag.def())
            .filter(tag::Column::Name.eq(tag))
            .order_by_desc(post::Column::PostedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn tags_for(&self, post_id: Uuid) -> Result<Vec<Tag>, RepoError> {
        let result = TagEntity::find()
            .join(JoinType::InnerJoin, post_tag::Relation::Tag.def().rev())
            .filter(post_tag::Column::PostId.eq(post_id))
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn tag_with(&self, post_id: Uuid, name: &str) -> Result<Tag, RepoError> {
        let tag = find_or_create_tag(&self.db, name).await?;

        let link = post_tag::ActiveModel {
            post_id: sea_orm::Set(post_id),
            tag_id: sea_orm::Set(tag.id),
        };
        let result = PostTagEntity::insert(link)
            .on_conflict(
                OnConflict::columns([post_tag::Column::PostId, post_tag::Column::TagId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&self.db)
            .await;

        match result {
            // Tagging twice with the same name is a no-op.
            Ok(_) | Err(DbErr::RecordNotInserted) => Ok(tag),
            Err(e) => Err(query_err(e)),
        }
    }

    async fn increment_likes(&self, post_id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::update_many()
            .col_expr(
                post::Column::LikeCount,
                Expr::col(post::Column::LikeCount).add(1),
            )
            .filter(post::Column::Id.eq(post_id))
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::PostedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_author(&self, author_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::AuthorId.eq(author_id))
            .order_by_desc(comment::Column::PostedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl RestaurantRepository for PostgresRestaurantRepository {
    async fn find_or_create(&self, name: &str, city: &str) -> Result<Restaurant, RepoError> {
        let existing = RestaurantEntity::find()
            .filter(restaurant::Column::Name.eq(name))
            .filter(restaurant::Column::City.eq(city))
            .one(&self.db)
            .await
            .map_err(query_err)?;
        if let Some(model) = existing {
            return Ok(model.into());
        }

        let fresh = Restaurant::new(name.to_string(), city.to_string());
        let inserted = RestaurantEntity::insert(restaurant::ActiveModel::from(fresh))
            .on_conflict(
                OnConflict::columns([restaurant::Column::Name, restaurant::Column::City])
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&self.db)
            .await;

        match inserted {
            Ok(_) | Err(DbErr::RecordNotInserted) => {
                // Re-read so a concurrent creator's row wins consistently.
                let model = RestaurantEntity::find()
                    .filter(restaurant::Column::Name.eq(name))
                    .filter(restaurant::Column::City.eq(city))
                    .one(&self.db)
                    .await
                    .map_err(query_err)?
                    .ok_or(RepoError::NotFound)?;
                Ok(model.into())
            }
            Err(e) => Err(query_err(e)),
        }
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Restaurant>, RepoError> {
        let result = RestaurantEntity::find()
            .filter(restaurant::Column::Name.contains(name))
            .order_by_asc(restaurant::Column::Name)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn search_by_city(&self, city: &str) -> Result<Vec<Restaurant>, RepoError> {
        let result = RestaurantEntity::find()
            .filter(restaurant::Column::City.contains(city))
            .order_by_asc(restaurant::Column::Name)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn names_with_prefix(&self, prefix: &str) -> Result<Vec<String>, RepoError> {
        let result = RestaurantEntity::find()
            .select_only()
            .column(restaurant::Column::Name)
            .filter(restaurant::Column::Name.starts_with(prefix))
            .order_by_asc(restaurant::Column::Name)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result)
    }

    async fn cities(&self) -> Result<Vec<String>, RepoError> {
        let result = RestaurantEntity::find()
            .select_only()
            .column(restaurant::Column::City)
            .distinct()
            .order_by_asc(restaurant::Column::City)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result)
    }

    async fn cities_with_reviews(&self) -> Result<Vec<String>, RepoError> {
        let result = RestaurantEntity::find()
            .select_only()
            .column(restaurant::Column::City)
            .distinct()
            .join(JoinType::InnerJoin, restaurant::Relation::Posts.def())
            .order_by_asc(restaurant::Column::City)
            .into_tuple::<String>()
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result)
    }
}

async fn find_or_create_tag(db: &sea_orm::DbConn, name: &str) -> Result<Tag, RepoError> {
    let existing = TagEntity::find()
        .filter(tag::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(query_err)?;
    if let Some(model) = existing {
        return Ok(model.into());
    }

    let fresh = Tag::new(name.to_string());
    let inserted = TagEntity::insert(tag::ActiveModel::from(fresh))
        .on_conflict(
            OnConflict::column(tag::Column::Name)
                .do_nothing()
                .to_owned(),
        )
        .exec(db)
        .await;

    match inserted {
        Ok(_) | Err(DbErr::RecordNotInserted) => {
            let model = TagEntity::find()
                .filter(tag::Column::Name.eq(name))
                .one(db)
                .await
                .map_err(query_err)?
                .ok_or(RepoError::NotFound)?;
            Ok(model.into())
        }
        Err(e) => Err(query_err(e)),
    }
}

#[async_trait]
impl TagRepository for PostgresTagRepository {
    async fn cloud(&self) -> Result<Vec<TagCount>, RepoError> {
        let rows = TagEntity::find()
            .select_only()
            .column(tag::Column::Name)
            .column_as(post_tag::Column::PostId.count(), "count")
            .join(JoinType::InnerJoin, post_tag::Relation::Tag.def().rev())
            .group_by(tag::Column::Name)
            .order_by_asc(tag::Column::Name)
            .into_tuple::<(String, i64)>()
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows
            .into_iter()
            .map(|(name, count)| TagCount { name, count })
            .collect())
    }
}

#[async_trait]
impl StateRepository for PostgresStateRepository {
    async fn find_or_create(&self, name: &str) -> Result<State, RepoError> {
        let existing = StateEntity::find()
            .filter(state::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(query_err)?;
        if let Some(model) = existing {
            return Ok(model.into());
        }

        let fresh = State::new(name.to_string());
        let inserted = StateEntity::insert(state::ActiveModel::from(fresh))
            .on_conflict(
                OnConflict::column(state::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&self.db)
            .await;

        match inserted {
            Ok(_) | Err(DbErr::RecordNotInserted) => {
                let model = StateEntity::find()
                    .filter(state::Column::Name.eq(name))
                    .one(&self.db)
                    .await
                    .map_err(query_err)?
                    .ok_or(RepoError::NotFound)?;
                Ok(model.into())
            }
            Err(e) => Err(query_err(e)),
        }
    }

    async fn list(&self) -> Result<Vec<State>, RepoError> {
        let result = StateEntity::find()
            .order_by_asc(state::Column::Name)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
