use crate::domain::ports::DomainRepositoryImporter;
use crate::utils::error::{ImportError, Result};
use crate::utils::validation::validate_domain_id;
use async_trait::async_trait;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

const DOMAIN_FILE_EXTENSION: &str = "mondrian.xml";

/// Filesystem-backed domain repository: one `<domain-id>.mondrian.xml` file
/// per domain under the base directory.
#[derive(Debug, Clone)]
pub struct FileDomainRepository {
    base_path: String,
}

impl FileDomainRepository {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn domain_path(&self, domain_id: &str) -> PathBuf {
        Path::new(&self.base_path).join(format!("{}.{}", domain_id, DOMAIN_FILE_EXTENSION))
    }

    fn check_domain_id(domain_id: &str) -> Result<()> {
        if domain_id.is_empty() {
            return Err(ImportError::EmptyDomainId);
        }
        validate_domain_id("domain_id", domain_id)
    }
}

#[async_trait]
impl DomainRepositoryImporter for FileDomainRepository {
    async fn store_domain(
        &self,
        mut input: Box<dyn Read + Send>,
        domain_id: &str,
        overwrite: bool,
    ) -> Result<()> {
        Self::check_domain_id(domain_id)?;

        let path = self.domain_path(domain_id);
        if path.exists() && !overwrite {
            return Err(ImportError::DomainAlreadyExists {
                domain_id: domain_id.to_string(),
            });
        }

        let mut contents = Vec::new();
        input.read_to_end(&mut contents)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, &contents).map_err(|e| ImportError::DomainStorage {
            domain_id: domain_id.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(domain = %domain_id, bytes = contents.len(), "stored domain file");
        Ok(())
    }

    async fn remove_domain(&self, domain_id: &str) -> Result<()> {
        Self::check_domain_id(domain_id)?;

        let path = self.domain_path(domain_id);
        if !path.exists() {
            return Err(ImportError::DomainNotFound {
                domain_id: domain_id.to_string(),
            });
        }

        fs::remove_file(&path)?;
        tracing::debug!(domain = %domain_id, "removed domain file");
        Ok(())
    }
}
