use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use glacier_core::{User, UserId, UserRepository, UserRepositoryError};

#[derive(Default)]
struct Users {
    rows: HashMap<UserId, User>,
    last_id: i64,
}

/// In-memory user repository, ids start at 1 and are never reused.
#[derive(Default, Clone)]
pub struct HashMapUserRepository {
    users: Arc<RwLock<Users>>,
}

impl HashMapUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserRepository for HashMapUserRepository {
    async fn save(&self, user: &User) -> Result<UserId, UserRepositoryError> {
        if let Some(id) = user.id() {
            return Err(UserRepositoryError::AlreadyPersisted(id));
        }

        let mut users = self.users.write().await;
        users.last_id += 1;
        let id = UserId::new(users.last_id);
        users.rows.insert(id, user.clone().with_id(id));
        Ok(id)
    }

    async fn find_by_id(&self, id: UserId) -> Result<User, UserRepositoryError> {
        let users = self.users.read().await;
        users
            .rows
            .get(&id)
            .cloned()
            .ok_or(UserRepositoryError::UserNotFound)
    }
}
