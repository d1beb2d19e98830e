pub mod error;
pub mod models;

pub use error::PersonError;
pub use models::{IdGenerator, Person, PersonId};
