pub mod config;
pub mod extraction;
pub mod lexicon;
pub mod models;
pub mod store;

// Re-export commonly used types for convenience.
pub use config::AppConfig;
pub use extraction::Extractor;
pub use models::{Profile, ProfileView, Restriction, RestrictionKind, RestrictionSource};
pub use store::{JsonSnapshotAdapter, MemoryAdapter, ProfileStore, StorageAdapter, StoreState};
