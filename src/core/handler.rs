use crate::core::{DomainRepositoryImporter, ImportBundle, ImportHandler, Result};
use crate::domain::model::{DEFAULT_CHARSET, DOMAIN_ID_PROPERTY, MONDRIAN_MIME_TYPE};
use crate::utils::error::ImportError;
use async_trait::async_trait;
use std::io::Read;

/// Accepts uploaded Mondrian schema documents, wraps them into an
/// [`ImportBundle`], and delegates storage and removal to the injected
/// repository importer. Holds no state of its own beyond that collaborator.
pub struct SchemaImportHandler<I: DomainRepositoryImporter> {
    importer: I,
}

impl<I: DomainRepositoryImporter> SchemaImportHandler<I> {
    pub fn new(importer: I) -> Self {
        Self { importer }
    }

    /// Packages the schema stream under the Mondrian MIME type and stores it
    /// in the repository under `domain_id`.
    pub async fn import_schema(
        &self,
        input: impl Read + Send + 'static,
        domain_id: &str,
        overwrite: bool,
    ) -> Result<()> {
        tracing::debug!(domain_id, overwrite, "importing mondrian schema");
        let bundle = self.build_bundle(input, domain_id, MONDRIAN_MIME_TYPE, overwrite);
        self.import_file_with_overwrite(bundle, overwrite).await
    }

    /// Pure construction helper: no side effects beyond the debug trace.
    pub fn build_bundle(
        &self,
        input: impl Read + Send + 'static,
        domain_id: &str,
        mime_type: &str,
        overwrite: bool,
    ) -> ImportBundle {
        tracing::debug!(domain_id, mime_type, "building import bundle");
        ImportBundle::builder(input)
            .charset(DEFAULT_CHARSET)
            .hidden(false)
            .mime(mime_type)
            .with_property(DOMAIN_ID_PROPERTY, domain_id)
            .overwrite(overwrite)
            .build()
    }

    /// Stores the bundle with overwriting disabled.
    pub async fn import_file(&self, bundle: ImportBundle) -> Result<()> {
        self.import_file_with_overwrite(bundle, false).await
    }

    pub async fn import_file_with_overwrite(
        &self,
        bundle: ImportBundle,
        overwrite: bool,
    ) -> Result<()> {
        tracing::debug!(name = bundle.name().unwrap_or("<unnamed>"), overwrite, "import start");

        let domain_id = bundle
            .domain_id()
            .ok_or(ImportError::MissingDomainId)?
            .to_string();

        tracing::debug!(domain = %domain_id, "storing as metadata domain");
        self.importer
            .store_domain(bundle.into_input(), &domain_id, overwrite)
            .await
    }

    /// Removes the named domain from the repository.
    pub async fn remove_domain(&self, domain_id: &str) -> Result<()> {
        if domain_id.is_empty() {
            return Err(ImportError::EmptyDomainId);
        }
        tracing::debug!(domain = %domain_id, "removing metadata domain");
        self.importer.remove_domain(domain_id).await
    }
}

#[async_trait]
impl<I: DomainRepositoryImporter> ImportHandler for SchemaImportHandler<I> {
    fn mime_types(&self) -> &[&str] {
        &[MONDRIAN_MIME_TYPE]
    }

    async fn import_file(&self, bundle: ImportBundle) -> Result<()> {
        SchemaImportHandler::import_file(self, bundle).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Cursor;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Debug, PartialEq)]
    struct StoreCall {
        domain_id: String,
        contents: Vec<u8>,
        overwrite: bool,
    }

    #[derive(Clone, Default)]
    struct MockImporter {
        domains: Arc<Mutex<HashMap<String, Vec<u8>>>>,
        store_calls: Arc<Mutex<Vec<StoreCall>>>,
        remove_calls: Arc<Mutex<Vec<String>>>,
        fail_with_conflict: bool,
    }

    impl MockImporter {
        fn new() -> Self {
            Self::default()
        }

        fn failing_with_conflict() -> Self {
            Self {
                fail_with_conflict: true,
                ..Self::default()
            }
        }

        async fn stored(&self, domain_id: &str) -> Option<Vec<u8>> {
            let domains = self.domains.lock().await;
            domains.get(domain_id).cloned()
        }

        async fn store_calls(&self) -> Vec<StoreCall> {
            self.store_calls.lock().await.clone()
        }

        async fn remove_calls(&self) -> Vec<String> {
            self.remove_calls.lock().await.clone()
        }
    }

    #[async_trait]
    impl DomainRepositoryImporter for MockImporter {
        async fn store_domain(
            &self,
            mut input: Box<dyn Read + Send>,
            domain_id: &str,
            overwrite: bool,
        ) -> Result<()> {
            if self.fail_with_conflict {
                return Err(ImportError::DomainAlreadyExists {
                    domain_id: domain_id.to_string(),
                });
            }

            let mut contents = Vec::new();
            input.read_to_end(&mut contents)?;

            let mut calls = self.store_calls.lock().await;
            calls.push(StoreCall {
                domain_id: domain_id.to_string(),
                contents: contents.clone(),
                overwrite,
            });

            let mut domains = self.domains.lock().await;
            domains.insert(domain_id.to_string(), contents);
            Ok(())
        }

        async fn remove_domain(&self, domain_id: &str) -> Result<()> {
            let mut calls = self.remove_calls.lock().await;
            calls.push(domain_id.to_string());
            Ok(())
        }
    }

    const SCHEMA: &[u8] = b"<Schema name=\"SteelWheels\"/>";

    #[tokio::test]
    async fn import_schema_stores_bytes_under_domain_id() {
        let importer = MockImporter::new();
        let handler = SchemaImportHandler::new(importer.clone());

        handler
            .import_schema(Cursor::new(SCHEMA.to_vec()), "SteelWheels", false)
            .await
            .unwrap();

        assert_eq!(importer.stored("SteelWheels").await, Some(SCHEMA.to_vec()));
        let calls = importer.store_calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].domain_id, "SteelWheels");
        assert!(!calls[0].overwrite);
    }

    #[tokio::test]
    async fn import_schema_forwards_overwrite_flag() {
        let importer = MockImporter::new();
        let handler = SchemaImportHandler::new(importer.clone());

        handler
            .import_schema(Cursor::new(SCHEMA.to_vec()), "SteelWheels", true)
            .await
            .unwrap();

        let calls = importer.store_calls().await;
        assert!(calls[0].overwrite);
    }

    #[tokio::test]
    async fn build_bundle_tags_mime_type_and_domain_id() {
        let handler = SchemaImportHandler::new(MockImporter::new());

        let bundle = handler.build_bundle(
            Cursor::new(SCHEMA.to_vec()),
            "SteelWheels",
            MONDRIAN_MIME_TYPE,
            true,
        );

        assert_eq!(bundle.mime_type(), MONDRIAN_MIME_TYPE);
        assert_eq!(bundle.domain_id(), Some("SteelWheels"));
        assert_eq!(bundle.charset(), DEFAULT_CHARSET);
        assert!(!bundle.is_hidden());
        assert!(bundle.overwrite());
    }

    #[tokio::test]
    async fn import_file_without_domain_id_fails_and_skips_importer() {
        let importer = MockImporter::new();
        let handler = SchemaImportHandler::new(importer.clone());

        for overwrite in [false, true] {
            let bundle = ImportBundle::builder(Cursor::new(SCHEMA.to_vec()))
                .mime(MONDRIAN_MIME_TYPE)
                .build();

            let err = handler
                .import_file_with_overwrite(bundle, overwrite)
                .await
                .unwrap_err();
            assert!(matches!(err, ImportError::MissingDomainId));
        }

        assert!(importer.store_calls().await.is_empty());
    }

    #[tokio::test]
    async fn import_file_defaults_to_no_overwrite() {
        let importer = MockImporter::new();
        let handler = SchemaImportHandler::new(importer.clone());

        let bundle = handler.build_bundle(
            Cursor::new(SCHEMA.to_vec()),
            "SteelWheels",
            MONDRIAN_MIME_TYPE,
            // bundle-level flag is not consulted by the store path
            true,
        );
        handler.import_file(bundle).await.unwrap();

        let calls = importer.store_calls().await;
        assert_eq!(calls.len(), 1);
        assert!(!calls[0].overwrite);
    }

    #[tokio::test]
    async fn remove_domain_rejects_empty_id() {
        let importer = MockImporter::new();
        let handler = SchemaImportHandler::new(importer.clone());

        let err = handler.remove_domain("").await.unwrap_err();
        assert!(matches!(err, ImportError::EmptyDomainId));
        assert!(importer.remove_calls().await.is_empty());
    }

    #[tokio::test]
    async fn remove_domain_forwards_id_verbatim() {
        let importer = MockImporter::new();
        let handler = SchemaImportHandler::new(importer.clone());

        handler.remove_domain("SteelWheels").await.unwrap();

        assert_eq!(importer.remove_calls().await, vec!["SteelWheels".to_string()]);
    }

    #[tokio::test]
    async fn importer_conflict_propagates_unchanged() {
        let handler = SchemaImportHandler::new(MockImporter::failing_with_conflict());

        let err = handler
            .import_schema(Cursor::new(SCHEMA.to_vec()), "SteelWheels", false)
            .await
            .unwrap_err();

        match err {
            ImportError::DomainAlreadyExists { domain_id } => {
                assert_eq!(domain_id, "SteelWheels");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn handler_reports_mondrian_mime_type() {
        let handler = SchemaImportHandler::new(MockImporter::new());
        assert_eq!(ImportHandler::mime_types(&handler), &[MONDRIAN_MIME_TYPE]);
    }
}
