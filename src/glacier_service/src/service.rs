use std::any::Any;

use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use glacier_adapters::http::routes::{UserApiError, create_user, find_user, health_check};
use glacier_core::UserRepository;
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// HTTP service exposing the user routes over a single repository
pub struct GlacierService {
    router: Router,
}

impl GlacierService {
    /// Create a new GlacierService backed by the given repository
    ///
    /// # Arguments
    /// * `user_repository` - Storage for user records (must be Clone)
    ///
    /// # Note on Architecture
    /// Repositories implement Clone cheaply (a pool handle or an internal Arc),
    /// so every request gets its own handle without locking.
    pub fn new<R>(user_repository: R) -> Self
    where
        R: UserRepository + Clone + 'static,
    {
        let router = Router::new()
            .route("/health_check", get(health_check))
            .route("/users", post(create_user::<R>))
            .route("/users/{id}", get(find_user::<R>))
            .with_state(user_repository);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    fn with_panic_recovery(mut self) -> Self {
        self.router = self.router.layer(CatchPanicLayer::custom(handle_panic));
        self
    }

    /// Convert the GlacierService into a router that can be mounted on another router
    pub fn as_nested_router(self) -> Router {
        self.with_panic_recovery().with_trace_layer().router
    }

    /// Run the service as a standalone server on an already bound listener
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.as_nested_router();

        tracing::info!("Glacier service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());

    UserApiError::UnexpectedError(format!("handler panicked: {message}")).into_response()
}
