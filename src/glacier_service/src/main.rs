use color_eyre::eyre::Result;
use glacier_adapters::{
    config::{GlacierSettings, StorageBackend},
    persistence::HashMapUserRepository,
};
use glacier_service::{GlacierService, build_postgres_user_repository, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Load configuration
    let settings = GlacierSettings::load()?;
    init_tracing(&settings.log)?;

    let listener = TcpListener::bind(settings.application.address()).await?;
    tracing::info!(backend = ?settings.storage.backend, "Starting glacier service...");

    match settings.storage.backend {
        StorageBackend::Postgres => {
            let user_repository = build_postgres_user_repository(&settings.postgres).await?;
            GlacierService::new(user_repository)
                .run_standalone(listener)
                .await?;
        }
        StorageBackend::InMemory => {
            GlacierService::new(HashMapUserRepository::new())
                .run_standalone(listener)
                .await?;
        }
    }

    Ok(())
}
