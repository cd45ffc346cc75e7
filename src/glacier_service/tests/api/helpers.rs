use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use glacier_adapters::{config::test, persistence::HashMapUserRepository};
use glacier_core::{User, UserId, UserRepository, UserRepositoryError};
use glacier_service::GlacierService;
use serde::Serialize;
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service with an in-memory repository
    pub async fn new() -> Self {
        Self::with_repository(HashMapUserRepository::new()).await
    }

    pub async fn with_repository<R>(user_repository: R) -> Self
    where
        R: UserRepository + Clone + 'static,
    {
        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let service = GlacierService::new(user_repository);
        tokio::spawn(service.run_standalone(listener));

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn get_health_check(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/health_check", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_users<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.http_client
            .post(format!("{}/users", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_users_raw(&self, body: &'static str, content_type: &str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/users", &self.address))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_user(&self, id: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/users/{}", &self.address, id))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Repository whose storage is always unreachable
#[derive(Clone, Default)]
pub struct FailingUserRepository {
    pub save_calls: Arc<AtomicUsize>,
}

pub const FAILING_STORAGE_CAUSE: &str = "connection to db-primary.internal:5432 refused";

#[async_trait::async_trait]
impl UserRepository for FailingUserRepository {
    async fn save(&self, _user: &User) -> Result<UserId, UserRepositoryError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        Err(UserRepositoryError::UnexpectedError(
            FAILING_STORAGE_CAUSE.to_string(),
        ))
    }

    async fn find_by_id(&self, _id: UserId) -> Result<User, UserRepositoryError> {
        Err(UserRepositoryError::UnexpectedError(
            FAILING_STORAGE_CAUSE.to_string(),
        ))
    }
}
