//! Build schema and structural validation.
//!
//! - `shape`: the declarative schema, rendered for the remote service
//! - `validator`: checks a raw document against the schema and decodes a `Build`
//! - `advisory`: non-blocking checks for conventions the service is asked to follow
//! - `published`: the standard JSON Schema of the `Build` record for API consumers

pub mod advisory;
pub mod published;
pub mod shape;
pub mod validator;

pub use advisory::{Advisory, advisories};
pub use published::build_json_schema;
pub use shape::{Field, Shape, build_shape};
pub use validator::validate;
