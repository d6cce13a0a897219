use crate::domain::model::ImportBundle;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Read;

/// Storage side of the metadata domain repository. Implementations own the
/// stream once handed over and are responsible for draining it.
#[async_trait]
pub trait DomainRepositoryImporter: Send + Sync {
    async fn store_domain(
        &self,
        input: Box<dyn Read + Send>,
        domain_id: &str,
        overwrite: bool,
    ) -> Result<()>;

    async fn remove_domain(&self, domain_id: &str) -> Result<()>;
}

/// Interface a handler exposes to the import dispatch layer: which MIME types
/// it accepts and how to consume a bundle.
#[async_trait]
pub trait ImportHandler: Send + Sync {
    fn mime_types(&self) -> &[&str];

    async fn import_file(&self, bundle: ImportBundle) -> Result<()>;
}
