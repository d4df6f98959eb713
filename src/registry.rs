//! Endpoint registry: the fixed table of valid (path, method) pairs.
//!
//! There are exactly four endpoints: a listing at `/` and one ingestion
//! path per tool. Matching is exact-string equality on both path and method;
//! there are no wildcard or parameterized paths. The table is built once at
//! startup and never mutated.

use http::Method;
use tracing::{debug, info, warn};

use crate::report::Tool;

/// Semantic identifier of a registered endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointId {
    /// `GET /`, the aggregate listing of every stored report.
    ListReports,
    /// `POST /<tool>`, the ingestion endpoint for one tool.
    Ingest(Tool),
}

/// One endpoint definition: path, required method, identifier.
#[derive(Debug, Clone)]
pub struct EndpointDef {
    pub path: &'static str,
    pub method: Method,
    pub id: EndpointId,
}

/// Outcome of resolving an incoming (path, method) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointResolution {
    /// Path and method both match a known endpoint.
    Matched(EndpointId),
    /// No endpoint definition has this path.
    UnknownPath,
    /// A definition exists for this path but requires a different method.
    MethodMismatch,
}

/// Immutable endpoint table, built once and passed by ownership into the
/// dispatcher.
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    endpoints: Vec<EndpointDef>,
}

impl EndpointRegistry {
    /// Build the fixed four-endpoint table.
    #[must_use]
    pub fn new() -> Self {
        let endpoints = vec![
            EndpointDef {
                path: "/",
                method: Method::GET,
                id: EndpointId::ListReports,
            },
            EndpointDef {
                path: "/exiftool",
                method: Method::POST,
                id: EndpointId::Ingest(Tool::Exiftool),
            },
            EndpointDef {
                path: "/mmb",
                method: Method::POST,
                id: EndpointId::Ingest(Tool::Mmb),
            },
            EndpointDef {
                path: "/wireshark",
                method: Method::POST,
                id: EndpointId::Ingest(Tool::Wireshark),
            },
        ];

        let summary: Vec<String> = endpoints
            .iter()
            .map(|e| format!("{} {}", e.method, e.path))
            .collect();
        info!(
            endpoint_count = endpoints.len(),
            endpoints = ?summary,
            "Endpoint table loaded"
        );

        Self { endpoints }
    }

    /// Resolve an incoming request against the table.
    ///
    /// The method arrives as the raw token the transport parsed; comparison
    /// is exact-string equality, so an unrecognized method on a known path
    /// resolves to [`EndpointResolution::MethodMismatch`].
    #[must_use]
    pub fn resolve(&self, method: &str, path: &str) -> EndpointResolution {
        debug!(method = %method, path = %path, "Endpoint match attempt");

        let Some(def) = self.endpoints.iter().find(|e| e.path == path) else {
            warn!(method = %method, path = %path, "No endpoint matched");
            return EndpointResolution::UnknownPath;
        };

        if def.method.as_str() != method {
            warn!(
                method = %method,
                path = %path,
                required_method = %def.method,
                "Endpoint matched with wrong method"
            );
            return EndpointResolution::MethodMismatch;
        }

        debug!(method = %method, path = %path, endpoint = ?def.id, "Endpoint matched");
        EndpointResolution::Matched(def.id)
    }

    /// All registered definitions, in table order.
    #[must_use]
    pub fn endpoints(&self) -> &[EndpointDef] {
        &self.endpoints
    }
}

impl Default for EndpointRegistry {
    fn default() -> Self {
        Self::new()
    }
}
