use std::collections::HashMap;
use std::io::Read;

/// MIME type assigned to uploaded Mondrian schema documents.
pub const MONDRIAN_MIME_TYPE: &str = "application/vnd.pentaho.mondrian+xml";

/// Bundle property naming the target metadata domain.
pub const DOMAIN_ID_PROPERTY: &str = "domain-id";

pub const DEFAULT_CHARSET: &str = "UTF-8";

/// A single upload packaged for import: the raw document stream plus the
/// metadata the repository needs to file it. Built once, consumed once by the
/// importer via [`ImportBundle::into_input`].
pub struct ImportBundle {
    name: Option<String>,
    input: Box<dyn Read + Send>,
    charset: String,
    mime_type: String,
    properties: HashMap<String, String>,
    hidden: bool,
    overwrite: bool,
}

impl ImportBundle {
    pub fn builder(input: impl Read + Send + 'static) -> ImportBundleBuilder {
        ImportBundleBuilder {
            name: None,
            input: Box::new(input),
            charset: DEFAULT_CHARSET.to_string(),
            mime_type: String::new(),
            properties: HashMap::new(),
            hidden: false,
            overwrite: false,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Typed accessor for the one property every store operation requires.
    pub fn domain_id(&self) -> Option<&str> {
        self.property(DOMAIN_ID_PROPERTY)
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Hands the document stream to the caller. The bundle is consumed; the
    /// stream can only be read once.
    pub fn into_input(self) -> Box<dyn Read + Send> {
        self.input
    }
}

impl std::fmt::Debug for ImportBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImportBundle")
            .field("name", &self.name)
            .field("charset", &self.charset)
            .field("mime_type", &self.mime_type)
            .field("properties", &self.properties)
            .field("hidden", &self.hidden)
            .field("overwrite", &self.overwrite)
            .finish_non_exhaustive()
    }
}

pub struct ImportBundleBuilder {
    name: Option<String>,
    input: Box<dyn Read + Send>,
    charset: String,
    mime_type: String,
    properties: HashMap<String, String>,
    hidden: bool,
    overwrite: bool,
}

impl ImportBundleBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = charset.into();
        self
    }

    pub fn mime(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn build(self) -> ImportBundle {
        ImportBundle {
            name: self.name,
            input: self.input,
            charset: self.charset,
            mime_type: self.mime_type,
            properties: self.properties,
            hidden: self.hidden,
            overwrite: self.overwrite,
        }
    }
}
