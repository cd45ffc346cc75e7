//! # Glacier - User Records Service Library
//!
//! This is a facade crate that re-exports all public APIs from the service components.
//! Use this crate to get access to the whole layered service in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `User`, `Email`, `UserId`, `ValidationError`
//! - **Repository port**: `UserRepository`
//! - **Use cases**: `CreateUserUseCase`, `FindUserUseCase`
//! - **Adapters**: `PostgresUserRepository`, `HashMapUserRepository`, axum routes, settings
//! - **Service**: `GlacierService` - router assembly and standalone server

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use glacier_core::*;
}

// Re-export most commonly used core types at the root level
pub use glacier_core::{Email, User, UserId, ValidationError};

// ============================================================================
// Repository Trait (Port)
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use glacier_core::{UserRepository, UserRepositoryError};
}

pub use glacier_core::{UserRepository, UserRepositoryError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use glacier_application::*;
}

pub use glacier_application::{
    CreateUserError, CreateUserUseCase, FindUserError, FindUserUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use glacier_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use glacier_adapters::persistence::*;
    }

    /// Configuration
    pub mod config {
        pub use glacier_adapters::config::*;
    }
}

pub use glacier_adapters::persistence::{HashMapUserRepository, PostgresUserRepository};

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

pub use glacier_service::{
    GlacierService, build_postgres_user_repository, get_postgres_pool, init_tracing,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with the database URL
pub use secrecy::{ExposeSecret, Secret};

pub use http;
