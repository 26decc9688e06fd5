// SPDX-License-Identifier: MIT OR Apache-2.0

//! Config loader orchestration.
//!
//! The loader parses every primary document, filters entries by the active
//! environment/domain, and resolves them into a base config map. An
//! optional local-override document is resolved into its own map and then
//! merged over the base so overrides always win. Any failure while
//! processing a document aborts the whole load, wrapped with that
//! source's identifier.

use crate::domain::{ConfigError, ConfigMap, ConfigView, Result};
use crate::ports::{ConfigParser, DocumentSource};

use crate::adapters::{FileSource, StringSource};

use std::path::Path;

/// Resolves layered configuration documents into a [`ConfigView`].
///
/// # Examples
///
/// ```
/// use scopecfg::service::Loader;
///
/// # fn main() -> scopecfg::domain::Result<()> {
/// let cfg = Loader::builder()
///     .environment("test")
///     .with_string("base", "\"test.service_one.config_one\": value_one")
///     .build()?
///     .load()?;
///
/// assert_eq!(
///     cfg.value("service_one.config_one").unwrap().as_str(),
///     Some("value_one")
/// );
/// # Ok(())
/// # }
/// ```
pub struct Loader {
    environment: String,
    domain: Option<String>,
    use_domain: bool,
    parser: Box<dyn ConfigParser>,
    sources: Vec<Box<dyn DocumentSource>>,
    local_override: Option<Box<dyn DocumentSource>>,
}

impl Loader {
    /// Creates a new loader builder.
    pub fn builder() -> LoaderBuilder {
        LoaderBuilder::new()
    }

    /// The active domain target: the configured domain when domain mode is
    /// enabled, otherwise none.
    fn target_domain(&self) -> Option<&str> {
        if self.use_domain {
            self.domain.as_deref()
        } else {
            None
        }
    }

    /// Loads and resolves all configured documents.
    ///
    /// Primary sources are processed in lexicographic name order so that
    /// same-key/same-specificity collisions across sources resolve
    /// deterministically. An absent document (primary or override) is
    /// skipped; any other failure aborts the load.
    pub fn load(&self) -> Result<ConfigView> {
        let domain = self.target_domain();

        let mut ordered: Vec<&dyn DocumentSource> =
            self.sources.iter().map(|s| s.as_ref()).collect();
        ordered.sort_by(|a, b| a.name().cmp(b.name()));

        let mut base = ConfigMap::new();
        for source in ordered {
            match self.read_document(source)? {
                Some(content) => {
                    self.resolve_into(&mut base, &content, false, domain)
                        .map_err(|e| ConfigError::in_source(source.name(), e))?;
                    tracing::debug!(source = source.name(), "resolved primary source");
                }
                None => {
                    tracing::debug!(source = source.name(), "document absent, skipping");
                }
            }
        }

        if let Some(source) = &self.local_override {
            match self.read_document(source.as_ref())? {
                Some(content) => {
                    let mut overrides = ConfigMap::new();
                    self.resolve_into(&mut overrides, &content, true, domain)
                        .map_err(|e| ConfigError::in_source(source.name(), e))?;
                    base.merge(&overrides)
                        .map_err(|e| ConfigError::in_source(source.name(), e))?;
                    tracing::debug!(
                        source = source.name(),
                        entries = overrides.len(),
                        "applied local overrides"
                    );
                }
                // The override document is optional.
                None => {
                    tracing::debug!(source = source.name(), "no local overrides present");
                }
            }
        }

        Ok(ConfigView::new(base))
    }

    fn read_document(&self, source: &dyn DocumentSource) -> Result<Option<String>> {
        source
            .read()
            .map_err(|e| ConfigError::in_source(source.name(), e))
    }

    fn resolve_into(
        &self,
        map: &mut ConfigMap,
        content: &str,
        overwrite: bool,
        domain: Option<&str>,
    ) -> Result<()> {
        for entry in self.parser.parse(content)? {
            if entry.applicable(&self.environment, domain) {
                map.add(entry, overwrite)?;
            } else {
                tracing::trace!(key = %entry.full_key(), "entry not applicable, filtered");
            }
        }
        Ok(())
    }
}

/// Builder for constructing a [`Loader`].
///
/// # Examples
///
/// ```
/// use scopecfg::service::LoaderBuilder;
///
/// # fn main() -> scopecfg::domain::Result<()> {
/// let loader = LoaderBuilder::new()
///     .environment("prod")
///     .domain("hk")
///     .use_domain(true)
///     .with_string("base", "\"prod.hk.service_one\": value_one")
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct LoaderBuilder {
    environment: Option<String>,
    domain: Option<String>,
    use_domain: bool,
    parser: Option<Box<dyn ConfigParser>>,
    sources: Vec<Box<dyn DocumentSource>>,
    local_override: Option<Box<dyn DocumentSource>>,
}

impl LoaderBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            environment: None,
            domain: None,
            use_domain: false,
            parser: None,
            sources: Vec::new(),
            local_override: None,
        }
    }

    /// Sets the active environment. Required.
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Sets the active domain. Only consulted when domain mode is enabled.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Enables or disables domain mode for the whole resolution session.
    pub fn use_domain(mut self, use_domain: bool) -> Self {
        self.use_domain = use_domain;
        self
    }

    /// Sets a custom parser. Without this, the builder falls back to the
    /// YAML parser when the `yaml` feature is enabled.
    pub fn with_parser(mut self, parser: Box<dyn ConfigParser>) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Adds a primary document source.
    pub fn with_source(mut self, source: Box<dyn DocumentSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Adds a primary file source.
    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.with_source(Box::new(FileSource::new(path)))
    }

    /// Adds a primary in-memory source.
    pub fn with_string(self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.with_source(Box::new(StringSource::new(name, content)))
    }

    /// Sets the optional local-override source. Its entries always win
    /// over primary-source entries at the same key.
    pub fn with_override(mut self, source: Box<dyn DocumentSource>) -> Self {
        self.local_override = Some(source);
        self
    }

    /// Sets a file as the local-override source. A missing file means "no
    /// overrides" rather than an error.
    pub fn with_override_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.with_override(Box::new(FileSource::new(path)))
    }

    /// Builds the loader. Fails with [`ConfigError::MissingEnvironment`]
    /// unless a non-empty environment has been set.
    pub fn build(self) -> Result<Loader> {
        let environment = match self.environment {
            Some(env) if !env.is_empty() => env,
            _ => return Err(ConfigError::MissingEnvironment),
        };
        let parser = match self.parser {
            Some(parser) => parser,
            None => default_parser(self.use_domain)?,
        };
        Ok(Loader {
            environment,
            domain: self.domain,
            use_domain: self.use_domain,
            parser,
            sources: self.sources,
            local_override: self.local_override,
        })
    }
}

impl Default for LoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "yaml")]
fn default_parser(use_domain: bool) -> Result<Box<dyn ConfigParser>> {
    use crate::adapters::YamlParser;
    Ok(Box::new(YamlParser::new(use_domain)))
}

#[cfg(not(feature = "yaml"))]
fn default_parser(_use_domain: bool) -> Result<Box<dyn ConfigParser>> {
    Err(ConfigError::MissingParser)
}
