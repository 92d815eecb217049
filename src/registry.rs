use reqwest::Url;
use thiserror::Error;

use crate::config::Args;

// One upstream route - fixed at startup
#[derive(Debug, Clone)]
pub struct ServiceRoute {
    pub name: &'static str,
    pub base_url: String,
}

// Configured base address did not parse as a URL
#[derive(Debug, Error)]
#[error("invalid base URL for service '{service}': {message}")]
pub struct InvalidRoute {
    pub service: &'static str,
    pub message: String,
}

/// Returned when a request names a service the gateway does not know.
/// Carries the known names so the caller can build the client-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveError {
    pub service: String,
    pub available: Vec<&'static str>,
}

/// Static service-name -> base-URL table. Built once from configuration,
/// read-only for the rest of the process lifetime.
pub struct ServiceRegistry {
    routes: Vec<ServiceRoute>,
}

impl ServiceRegistry {
    pub fn from_args(args: &Args) -> Result<Self, InvalidRoute> {
        let configured = [
            ("sensor-ingestion", args.sensor_ingestion_url.clone()),
            ("data-processor", args.data_processor_url.clone()),
            ("device-registry", args.device_registry_url.clone()),
            ("alert-manager", args.alert_manager_url.clone()),
        ];

        let mut routes = Vec::with_capacity(configured.len());
        for (name, base_url) in configured {
            Url::parse(&base_url).map_err(|e| InvalidRoute {
                service: name,
                message: e.to_string(),
            })?;
            routes.push(ServiceRoute { name, base_url });
        }

        Ok(Self { routes })
    }

    /// Exact, case-sensitive lookup of a logical service name.
    pub fn resolve(&self, service: &str) -> Result<&str, ResolveError> {
        self.routes
            .iter()
            .find(|r| r.name == service)
            .map(|r| r.base_url.as_str())
            .ok_or_else(|| ResolveError {
                service: service.to_string(),
                available: self.names(),
            })
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.routes.iter().map(|r| r.name).collect()
    }

    // Declaration order, for the /status services map
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.routes.iter().map(|r| (r.name, r.base_url.as_str()))
    }
}
