pub mod handler;

pub use crate::domain::model::ImportBundle;
pub use crate::domain::ports::{DomainRepositoryImporter, ImportHandler};
pub use crate::utils::error::Result;
