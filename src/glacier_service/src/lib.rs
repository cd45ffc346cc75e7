pub mod helpers;
pub mod service;
pub mod telemetry;

pub use helpers::{build_postgres_user_repository, get_postgres_pool};
pub use service::GlacierService;
pub use telemetry::init_tracing;
