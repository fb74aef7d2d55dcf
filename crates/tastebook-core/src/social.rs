//! Social service - authorization policy on top of the follow graph.
//!
//! Every operation takes the acting identity as an explicit parameter; there
//! is no ambient "current user". Mutations fail closed: a missing or
//! unauthorized identity yields a denial, never an error. Only storage faults
//! propagate as `Err`.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::User;
use crate::error::{GraphError, RepoError};
use crate::ports::{FollowGraph, UserRepository};

/// The already-resolved acting identity, threaded in by the request layer.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub user_id: Uuid,
    pub is_admin: bool,
}

impl Actor {
    /// An actor may act as `follower` when they are that user, or when they
    /// hold admin privilege (admins may manage edges on behalf of any user).
    fn may_act_as(&self, follower_id: Uuid) -> bool {
        self.user_id == follower_id || self.is_admin
    }
}

/// Why a follow or unfollow was denied. Collapsed to a falsy response at the
/// boundary, but kept distinct here so callers and tests can assert on cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// No acting identity present.
    Unauthenticated,
    /// Actor is neither the follower party nor an admin.
    Unauthorized,
    /// follower == followee.
    SelfFollow,
    /// A referenced user id does not resolve.
    UnknownUser,
    /// Edge already present on follow.
    AlreadyFollowing,
    /// Edge absent on unfollow.
    NotFollowing,
}

/// Outcome of a follow or unfollow request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowOutcome {
    Done {
        followee_name: String,
    },
    Denied {
        reason: DenialReason,
        followee_name: Option<String>,
    },
}

impl FollowOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, FollowOutcome::Done { .. })
    }

    fn denied(reason: DenialReason, followee: Option<&User>) -> Self {
        FollowOutcome::Denied {
            reason,
            followee_name: followee.map(|u| u.display_name().to_string()),
        }
    }
}

/// Request-level follow/unfollow/listing operations over the follow graph.
#[derive(Clone)]
pub struct SocialService {
    graph: Arc<dyn FollowGraph>,
    users: Arc<dyn UserRepository>,
}

impl SocialService {
    pub fn new(graph: Arc<dyn FollowGraph>, users: Arc<dyn UserRepository>) -> Self {
        Self { graph, users }
    }

    /// Make `follower_id` follow `followee_id` on behalf of `actor`.
    pub async fn follow(
        &self,
        actor: Option<&Actor>,
        follower_id: Uuid,
        followee_id: Uuid,
    ) -> Result<FollowOutcome, RepoError> {
        let followee = self.users.find_by_id(followee_id).await?;

        let Some(actor) = actor else {
            return Ok(FollowOutcome::denied(
                DenialReason::Unauthenticated,
                followee.as_ref(),
            ));
        };
        if !actor.may_act_as(follower_id) {
            return Ok(FollowOutcome::denied(
                DenialReason::Unauthorized,
                followee.as_ref(),
            ));
        }
        if follower_id == followee_id {
            return Ok(FollowOutcome::denied(
                DenialReason::SelfFollow,
                followee.as_ref(),
            ));
        }
        let Some(followee) = followee else {
            return Ok(FollowOutcome::denied(DenialReason::UnknownUser, None));
        };

        match self.graph.create_edge(follower_id, followee_id).await {
            Ok(_) => Ok(FollowOutcome::Done {
                followee_name: followee.display_name().to_string(),
            }),
            Err(GraphError::Conflict) => Ok(FollowOutcome::denied(
                DenialReason::AlreadyFollowing,
                Some(&followee),
            )),
            // Self-loops are rejected above, so an invalid argument from the
            // store means an endpoint vanished between the lookup and the
            // insert.
            Err(GraphError::InvalidArgument(_)) | Err(GraphError::NotFound) => Ok(FollowOutcome::denied(
                DenialReason::UnknownUser,
                Some(&followee),
            )),
            Err(GraphError::Storage(e)) => Err(e),
        }
    }

    /// Make `follower_id` stop following `followee_id` on behalf of `actor`.
    pub async fn unfollow(
        &self,
        actor: Option<&Actor>,
        follower_id: Uuid,
        followee_id: Uuid,
    ) -> Result<FollowOutcome, RepoError> {
        let followee = self.users.find_by_id(followee_id).await?;

        let Some(actor) = actor else {
            return Ok(FollowOutcome::denied(
                DenialReason::Unauthenticated,
                followee.as_ref(),
            ));
        };
        if !actor.may_act_as(follower_id) {
            return Ok(FollowOutcome::denied(
                DenialReason::Unauthorized,
                followee.as_ref(),
            ));
        }
        let Some(followee) = followee else {
            return Ok(FollowOutcome::denied(DenialReason::UnknownUser, None));
        };

        match self.graph.delete_edge(follower_id, followee_id).await {
            Ok(()) => Ok(FollowOutcome::Done {
                followee_name: followee.display_name().to_string(),
            }),
            Err(GraphError::NotFound) => Ok(FollowOutcome::denied(
                DenialReason::NotFollowing,
                Some(&followee),
            )),
            Err(GraphError::Conflict) | Err(GraphError::InvalidArgument(_)) => Ok(
                FollowOutcome::denied(DenialReason::UnknownUser, Some(&followee)),
            ),
            Err(GraphError::Storage(e)) => Err(e),
        }
    }

    /// Whether `follower_id` currently follows `followee_id`. Public,
    /// read-only; follower lists are visible on profile pages.
    pub async fn is_following(
        &self,
        follower_id: Uuid,
        followee_id: Uuid,
    ) -> Result<bool, RepoError> {
        self.graph.exists(follower_id, followee_id).await
    }

    /// Everyone `user_id` follows. Public, read-only.
    pub async fn following(
        &self,
        user_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<User>, RepoError> {
        self.graph.list_following(user_id, limit).await
    }

    /// Everyone following `user_id`. Public, read-only.
    pub async fn followers(
        &self,
        user_id: Uuid,
        limit: Option<u64>,
    ) -> Result<Vec<User>, RepoError> {
        self.graph.list_followers(user_id, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FollowEdge;
    use crate::error::GraphError;
    use crate::ports::BaseRepository;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory follow graph mirroring the store's invariants.
    #[derive(Default)]
    struct MemoryGraph {
        users: Mutex<Vec<Uuid>>,
        edges: Mutex<Vec<FollowEdge>>,
        directory: Mutex<HashMap<Uuid, User>>,
    }

    impl MemoryGraph {
        fn user_exists(&self, id: Uuid) -> bool {
            self.users.lock().unwrap().contains(&id)
        }

        fn edge_count(&self) -> usize {
            self.edges.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl FollowGraph for MemoryGraph {
        async fn create_edge(
            &self,
            follower_id: Uuid,
            followee_id: Uuid,
        ) -> Result<Uuid, GraphError> {
            if follower_id == followee_id {
                return Err(GraphError::InvalidArgument("self-loop".into()));
            }
            if !self.user_exists(follower_id) || !self.user_exists(followee_id) {
                return Err(GraphError::InvalidArgument("missing endpoint".into()));
            }
            let mut edges = self.edges.lock().unwrap();
            if edges
                .iter()
                .any(|e| e.follower_id == follower_id && e.followee_id == followee_id)
            {
                return Err(GraphError::Conflict);
            }
            let edge = FollowEdge::new(follower_id, followee_id);
            let id = edge.id;
            edges.push(edge);
            Ok(id)
        }

        async fn delete_edge(
            &self,
            follower_id: Uuid,
            followee_id: Uuid,
        ) -> Result<(), GraphError> {
            let mut edges = self.edges.lock().unwrap();
            let before = edges.len();
            edges.retain(|e| !(e.follower_id == follower_id && e.followee_id == followee_id));
            if edges.len() == before {
                return Err(GraphError::NotFound);
            }
            Ok(())
        }

        async fn exists(&self, follower_id: Uuid, followee_id: Uuid) -> Result<bool, RepoError> {
            Ok(self
                .edges
                .lock()
                .unwrap()
                .iter()
                .any(|e| e.follower_id == follower_id && e.followee_id == followee_id))
        }

        async fn list_following(
            &self,
            user_id: Uuid,
            limit: Option<u64>,
        ) -> Result<Vec<User>, RepoError> {
            let directory = self.directory.lock().unwrap();
            let mut out: Vec<User> = self
                .edges
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.follower_id == user_id)
                .filter_map(|e| directory.get(&e.followee_id).cloned())
                .collect();
            if let Some(limit) = limit {
                out.truncate(limit as usize);
            }
            Ok(out)
        }

        async fn list_followers(
            &self,
            user_id: Uuid,
            limit: Option<u64>,
        ) -> Result<Vec<User>, RepoError> {
            let directory = self.directory.lock().unwrap();
            let mut out: Vec<User> = self
                .edges
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.followee_id == user_id)
                .filter_map(|e| directory.get(&e.follower_id).cloned())
                .collect();
            if let Some(limit) = limit {
                out.truncate(limit as usize);
            }
            Ok(out)
        }
    }

    #[async_trait]
    impl BaseRepository<User, Uuid> for MemoryGraph {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
            Ok(self.directory.lock().unwrap().get(&id).cloned())
        }

        async fn save(&self, user: User) -> Result<User, RepoError> {
            self.users.lock().unwrap().push(user.id);
            self.directory.lock().unwrap().insert(user.id, user.clone());
            Ok(user)
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
            self.users.lock().unwrap().retain(|u| *u != id);
            self.directory.lock().unwrap().remove(&id);
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for MemoryGraph {
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
            Ok(self
                .directory
                .lock()
                .unwrap()
                .values()
                .find(|u| u.email == email)
                .cloned())
        }
    }

    struct Fixture {
        service: SocialService,
        graph: Arc<MemoryGraph>,
        alice: User,
        bob: User,
    }

    async fn fixture() -> Fixture {
        let graph = Arc::new(MemoryGraph::default());
        let alice = graph
            .save(User::new(
                "alice@example.com".into(),
                "hash".into(),
                "Alice".into(),
                "Anders".into(),
            ))
            .await
            .unwrap();
        let bob = graph
            .save(User::new(
                "bob@example.com".into(),
                "hash".into(),
                "Bob".into(),
                "Birch".into(),
            ))
            .await
            .unwrap();
        let service = SocialService::new(graph.clone(), graph.clone());
        Fixture {
            service,
            graph,
            alice,
            bob,
        }
    }

    fn acting_as(user: &User) -> Actor {
        Actor {
            user_id: user.id,
            is_admin: user.is_admin,
        }
    }

    #[tokio::test]
    async fn follow_creates_edge_and_reports_name() {
        let fx = fixture().await;
        let actor = acting_as(&fx.alice);

        let outcome = fx
            .service
            .follow(Some(&actor), fx.alice.id, fx.bob.id)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            FollowOutcome::Done {
                followee_name: "Bob".into()
            }
        );
        assert!(fx.service.is_following(fx.alice.id, fx.bob.id).await.unwrap());

        let following = fx.service.following(fx.alice.id, None).await.unwrap();
        assert_eq!(following.len(), 1);
        assert_eq!(following[0].id, fx.bob.id);

        let followers = fx.service.followers(fx.bob.id, None).await.unwrap();
        assert_eq!(followers.len(), 1);
        assert_eq!(followers[0].id, fx.alice.id);
    }

    #[tokio::test]
    async fn follow_is_directed() {
        let fx = fixture().await;
        let actor = acting_as(&fx.alice);
        fx.service
            .follow(Some(&actor), fx.alice.id, fx.bob.id)
            .await
            .unwrap();

        // Bob does not follow Alice back automatically.
        assert!(!fx.service.is_following(fx.bob.id, fx.alice.id).await.unwrap());
        assert!(fx.service.following(fx.bob.id, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unauthenticated_follow_is_denied() {
        let fx = fixture().await;

        let outcome = fx
            .service
            .follow(None, fx.alice.id, fx.bob.id)
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            FollowOutcome::Denied {
                reason: DenialReason::Unauthenticated,
                ..
            }
        ));
        assert_eq!(fx.graph.edge_count(), 0);
    }

    #[tokio::test]
    async fn follow_on_behalf_of_another_user_is_denied() {
        let fx = fixture().await;
        let carol = fx
            .graph
            .save(User::new(
                "carol@example.com".into(),
                "hash".into(),
                "Carol".into(),
                "Cole".into(),
            ))
            .await
            .unwrap();

        // Carol tries to make Alice follow Bob.
        let outcome = fx
            .service
            .follow(Some(&acting_as(&carol)), fx.alice.id, fx.bob.id)
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            FollowOutcome::Denied {
                reason: DenialReason::Unauthorized,
                ..
            }
        ));
        assert_eq!(fx.graph.edge_count(), 0);
    }

    #[tokio::test]
    async fn admin_may_follow_on_behalf_of_any_user() {
        let fx = fixture().await;
        let mut admin = User::new(
            "root@example.com".into(),
            "hash".into(),
            "Root".into(),
            "Admin".into(),
        );
        admin.is_admin = true;
        let admin = fx.graph.save(admin).await.unwrap();

        let outcome = fx
            .service
            .follow(Some(&acting_as(&admin)), fx.alice.id, fx.bob.id)
            .await
            .unwrap();

        assert!(outcome.succeeded());
        assert!(fx.service.is_following(fx.alice.id, fx.bob.id).await.unwrap());
    }

    #[tokio::test]
    async fn self_follow_is_denied_even_for_admins() {
        let fx = fixture().await;
        let mut admin = User::new(
            "root@example.com".into(),
            "hash".into(),
            "Root".into(),
            "Admin".into(),
        );
        admin.is_admin = true;
        let admin = fx.graph.save(admin).await.unwrap();

        for user in [&fx.alice, &admin] {
            let outcome = fx
                .service
                .follow(Some(&acting_as(user)), user.id, user.id)
                .await
                .unwrap();
            assert!(matches!(
                outcome,
                FollowOutcome::Denied {
                    reason: DenialReason::SelfFollow,
                    ..
                }
            ));
        }
        assert_eq!(fx.graph.edge_count(), 0);
    }

    #[tokio::test]
    async fn duplicate_follow_is_a_noop_conflict() {
        let fx = fixture().await;
        let actor = acting_as(&fx.alice);

        let first = fx
            .service
            .follow(Some(&actor), fx.alice.id, fx.bob.id)
            .await
            .unwrap();
        let second = fx
            .service
            .follow(Some(&actor), fx.alice.id, fx.bob.id)
            .await
            .unwrap();

        assert!(first.succeeded());
        assert!(matches!(
            second,
            FollowOutcome::Denied {
                reason: DenialReason::AlreadyFollowing,
                ..
            }
        ));
        assert_eq!(fx.graph.edge_count(), 1);
    }

    #[tokio::test]
    async fn follow_unknown_user_is_denied() {
        let fx = fixture().await;
        let actor = acting_as(&fx.alice);

        let outcome = fx
            .service
            .follow(Some(&actor), fx.alice.id, Uuid::new_v4())
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            FollowOutcome::Denied {
                reason: DenialReason::UnknownUser,
                followee_name: None,
            }
        ));
        assert_eq!(fx.graph.edge_count(), 0);
    }

    #[tokio::test]
    async fn unfollow_without_edge_is_denied_and_changes_nothing() {
        let fx = fixture().await;
        let actor = acting_as(&fx.alice);

        let outcome = fx
            .service
            .unfollow(Some(&actor), fx.alice.id, fx.bob.id)
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            FollowOutcome::Denied {
                reason: DenialReason::NotFollowing,
                ..
            }
        ));
        assert_eq!(fx.graph.edge_count(), 0);
    }

    #[tokio::test]
    async fn follow_then_unfollow_round_trips() {
        let fx = fixture().await;
        let actor = acting_as(&fx.alice);

        fx.service
            .follow(Some(&actor), fx.alice.id, fx.bob.id)
            .await
            .unwrap();
        let outcome = fx
            .service
            .unfollow(Some(&actor), fx.alice.id, fx.bob.id)
            .await
            .unwrap();

        assert!(outcome.succeeded());
        assert!(!fx.service.is_following(fx.alice.id, fx.bob.id).await.unwrap());
        assert_eq!(fx.graph.edge_count(), 0);

        // The second unfollow surfaces the absence, it does not silently pass.
        let again = fx
            .service
            .unfollow(Some(&actor), fx.alice.id, fx.bob.id)
            .await
            .unwrap();
        assert!(!again.succeeded());
    }

    #[tokio::test]
    async fn listings_honor_the_limit() {
        let fx = fixture().await;
        let actor = acting_as(&fx.alice);
        for i in 0..5 {
            let user = fx
                .graph
                .save(User::new(
                    format!("user{i}@example.com"),
                    "hash".into(),
                    format!("User{i}"),
                    "Test".into(),
                ))
                .await
                .unwrap();
            fx.service
                .follow(Some(&actor), fx.alice.id, user.id)
                .await
                .unwrap();
        }

        assert_eq!(fx.service.following(fx.alice.id, Some(3)).await.unwrap().len(), 3);
        assert_eq!(fx.service.following(fx.alice.id, None).await.unwrap().len(), 5);
    }
}
