#[cfg(test)]
mod tests {
    use crate::database::entity::{comment, post, state, user};
    use crate::database::graph::PostgresFollowGraph;
    use crate::database::postgres_repo::{
        PostgresCommentRepository, PostgresPostRepository, PostgresStateRepository,
        PostgresUserRepository,
    };
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use tastebook_core::domain::{Comment, Post, State, User};
    use tastebook_core::error::GraphError;
    use tastebook_core::ports::{
        BaseRepository, CommentRepository, FollowGraph, StateRepository, UserRepository,
    };
    use uuid::Uuid;

    fn user_model(email: &str, first_name: &str) -> user::Model {
        let now = Utc::now();
        user::Model {
            id: Uuid::new_v4(),
            email: email.to_owned(),
            password_hash: "hash".to_owned(),
            first_name: first_name.to_owned(),
            last_name: "Test".to_owned(),
            about_me: None,
            profile_pic: None,
            city: None,
            state_id: None,
            is_admin: false,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = Uuid::new_v4();
        let author_id = Uuid::new_v4();
        let now = Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post::Model {
                id: post_id,
                author_id,
                title: "Best ramen in town".to_owned(),
                content: "Content".to_owned(),
                rating: 4,
                like_count: 0,
                pic: None,
                restaurant_id: None,
                posted_at: now.into(),
                updated_at: now.into(),
            }]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        assert!(result.is_some());
        let post = result.unwrap();
        assert_eq!(post.title, "Best ramen in town");
        assert_eq!(post.id, post_id);
    }

    #[tokio::test]
    async fn test_find_user_by_email() {
        let model = user_model("ada@example.com", "Ada");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let found: Option<User> = repo.find_by_email("ada@example.com").await.unwrap();
        assert_eq!(found.unwrap().first_name, "Ada");
    }

    #[tokio::test]
    async fn test_comments_listed_for_post() {
        let post_id = Uuid::new_v4();
        let now = Utc::now();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                comment::Model {
                    id: Uuid::new_v4(),
                    post_id,
                    author_id: None,
                    guest_name: Some("anon".to_owned()),
                    content: "first".to_owned(),
                    posted_at: now.into(),
                },
                comment::Model {
                    id: Uuid::new_v4(),
                    post_id,
                    author_id: Some(Uuid::new_v4()),
                    guest_name: None,
                    content: "second".to_owned(),
                    posted_at: now.into(),
                },
            ]])
            .into_connection();

        let repo = PostgresCommentRepository::new(db);

        let comments: Vec<Comment> = repo.find_by_post(post_id).await.unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].guest_name.as_deref(), Some("anon"));
        assert!(comments[1].author_id.is_some());
    }

    #[tokio::test]
    async fn test_states_listed_for_profile_form() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                state::Model {
                    id: Uuid::new_v4(),
                    name: "California".to_owned(),
                },
                state::Model {
                    id: Uuid::new_v4(),
                    name: "New York".to_owned(),
                },
            ]])
            .into_connection();

        let repo = PostgresStateRepository::new(db);

        let states: Vec<State> = repo.list().await.unwrap();
        assert_eq!(states.len(), 2);
        assert_eq!(states[0].name, "California");
    }

    #[tokio::test]
    async fn test_exists_checks_the_exact_ordered_pair() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<crate::database::entity::follow_edge::Model>::new()])
            .into_connection();

        let graph = PostgresFollowGraph::new(db);

        let found = graph.exists(Uuid::new_v4(), Uuid::new_v4()).await.unwrap();
        assert!(!found);
    }

    #[tokio::test]
    async fn test_delete_edge_not_found_when_nothing_removed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let graph = PostgresFollowGraph::new(db);

        let result = graph.delete_edge(Uuid::new_v4(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(GraphError::NotFound)));
    }

    #[tokio::test]
    async fn test_self_loop_rejected_before_touching_the_database() {
        // No expectations registered: a query would panic the mock.
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let graph = PostgresFollowGraph::new(db);

        let me = Uuid::new_v4();
        let result = graph.create_edge(me, me).await;
        assert!(matches!(result, Err(GraphError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_list_followers_maps_joined_users() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                user_model("ada@example.com", "Ada"),
                user_model("bob@example.com", "Bob"),
            ]])
            .into_connection();

        let graph = PostgresFollowGraph::new(db);

        let followers = graph.list_followers(Uuid::new_v4(), None).await.unwrap();
        assert_eq!(followers.len(), 2);
        assert_eq!(followers[0].first_name, "Ada");
    }
}
