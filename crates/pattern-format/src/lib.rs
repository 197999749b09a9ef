pub mod document;
pub mod errors;
pub mod load;
pub mod metadata;
pub mod save;

pub use document::PatternDocument;
pub use errors::{LoadError, SaveError};
pub use load::load_pattern;
pub use metadata::PatternMetadata;
pub use save::{save_pattern, FORMAT_ID, FORMAT_VERSION};
