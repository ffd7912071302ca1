//! Core logic for the PageKit contact table and slide carousel widgets.
//! Presentation layers own rendering; this crate owns state and rules.

pub mod carousel;
pub mod config;
pub mod logging;
pub mod messages;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;
pub mod validation;

pub use carousel::controller::{
    CarouselController, CarouselError, CarouselEvent, CarouselResult, NavKey,
};
pub use carousel::scheduler::{Scheduler, ThreadScheduler, TimerId, VirtualScheduler};
pub use config::{CarouselConfig, ConfigError, ContactsConfig, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::contact::{seed_contacts, Contact, ContactField, ContactForm, ContactId};
pub use model::slide::{EmptySlideSet, Slide, SlideSet};
pub use repo::contact_repo::{ContactStore, StoreError, StoreResult, DEFAULT_STORAGE_KEY};
pub use service::contact_service::{ContactService, SaveStatus, SubmitError};
pub use storage::{
    latest_schema_version, open_sqlite, open_sqlite_in_memory, KeyValueStore, MemoryStore,
    SqliteKeyValueStore, StorageError, StorageResult,
};
pub use validation::form::{validate, FieldError, FieldErrorKind, ValidationResult};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
