//! Resource service implementation.
//!
//! The ResourceService resolves a requested address to its registered entry,
//! normalizes the query string, performs the upstream call and wraps the body.
//! Every failure propagates to the caller.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceTemplate};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};
use url::Url;

use super::error::ResourceError;
use super::query::QueryParams;
use super::registry::{ResourceEntry, get_all_resources};
use crate::core::error::{Error, Result};
use crate::domains::fdc::{FdcClient, envelope};

/// Service for listing and reading resources.
pub struct ResourceService {
    /// Client shared by every resource read.
    client: Arc<FdcClient>,

    /// Registry of available resources.
    /// Key: resource address without query string, Value: entry
    resources: HashMap<String, ResourceEntry>,

    /// Registration order, for stable listings.
    order: Vec<String>,
}

impl ResourceService {
    /// Create a new ResourceService, registering every resource once.
    ///
    /// Fails when two resources share a name or an address.
    pub fn new(client: Arc<FdcClient>) -> Result<Self> {
        info!("Initializing ResourceService");

        let mut service = Self {
            client,
            resources: HashMap::new(),
            order: Vec::new(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry)?;
        }

        Ok(service)
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) -> Result<()> {
        let uri = entry.resource.raw.uri.clone();

        if self.resources.contains_key(&uri) {
            return Err(Error::registration(format!("resource address {}", uri)));
        }
        if self.resources.values().any(|e| e.name == entry.name) {
            return Err(Error::registration(format!("resource name {}", entry.name)));
        }

        info!("Registering resource: {} ({})", entry.name, uri);
        self.order.push(uri.clone());
        self.resources.insert(uri, entry);
        Ok(())
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.entries().map(|entry| entry.resource.clone()).collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.entries().map(|entry| entry.template.clone()).collect()
    }

    fn entries(&self) -> impl Iterator<Item = &ResourceEntry> {
        self.order.iter().filter_map(|uri| self.resources.get(uri))
    }

    /// Find the entry for `uri` and decode its query string.
    fn resolve(&self, uri: &str) -> std::result::Result<(&ResourceEntry, QueryParams), ResourceError> {
        let parsed = Url::parse(uri).map_err(|e| ResourceError::invalid_uri(format!("{}: {}", uri, e)))?;

        let address = format!(
            "{}://{}{}",
            parsed.scheme(),
            parsed.host_str().unwrap_or_default(),
            parsed.path().trim_end_matches('/')
        );

        let entry = self
            .resources
            .get(&address)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        Ok((entry, QueryParams::parse(parsed.query())?))
    }

    /// Read a resource by URI.
    ///
    /// Validation happens before the upstream call; a request that fails
    /// validation never reaches the upstream API.
    pub async fn read_resource(&self, uri: &str) -> std::result::Result<ReadResourceResult, ResourceError> {
        let (entry, params) = self.resolve(uri)?;

        let request = (entry.normalize)(&params).inspect_err(|e| {
            warn!(resource = entry.name, "Rejected resource request: {}", e);
        })?;

        info!(resource = entry.name, path = %request.path(), "Fetching resource");
        let body = self.client.get(&request).await?;

        let mime_type = entry.resource.raw.mime_type.as_deref();
        envelope::resource_result(uri, mime_type, &body)
            .map_err(|e| ResourceError::internal(e.to_string()))
    }
}
