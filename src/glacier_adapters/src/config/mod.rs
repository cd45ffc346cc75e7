pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    ApplicationSettings, GlacierSettings, LogSettings, PostgresSettings, StorageBackend,
    StorageSettings,
};
