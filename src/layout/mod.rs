mod errors;
mod models;
mod templates;
mod validate;

pub use errors::ValidationError;
pub use models::{DimensionKind, EncodedLayout, ValidatedLayout};
pub use templates::{LevelTemplate, TEMPLATES, template};
pub use validate::{validate_layout, validate_layout_str};
