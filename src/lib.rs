pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::FileDomainRepository;
pub use config::{CliConfig, Command};
pub use core::handler::SchemaImportHandler;
pub use domain::model::{
    ImportBundle, ImportBundleBuilder, DEFAULT_CHARSET, DOMAIN_ID_PROPERTY, MONDRIAN_MIME_TYPE,
};
pub use domain::ports::{DomainRepositoryImporter, ImportHandler};
pub use utils::error::{ImportError, Result};
