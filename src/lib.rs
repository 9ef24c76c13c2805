pub mod accounts;
pub mod config;
pub mod context;
pub mod create;
pub mod env_schema;
pub mod json_merge;
pub mod materialize;
pub mod paths;
pub mod preflight;
pub mod progress;
pub mod templates;
pub mod toolchain;
pub mod validation;

// Re-export commonly used types
pub use context::{CreationContext, CreationParams};
pub use create::{CreationResult, CreationStatus};
pub use toolchain::Toolchain;
