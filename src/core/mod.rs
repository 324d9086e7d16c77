// Public modules
pub mod error;
pub mod normalize;
pub mod rename;

// Re-export common types for convenience
pub use error::{Error, Result};
pub use normalize::normalize;
pub use rename::{process_path, Outcome};
