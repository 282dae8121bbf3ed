mod errors;
mod models;
mod persist;
mod repository;
mod session;

pub use errors::StoreError;
pub use models::{MapDetail, MapRecord, MapSummary, NewMap, Score};
pub use repository::{InMemoryMapStore, MapRepository};
pub use session::{Role, Session, User};
