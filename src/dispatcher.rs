//! Request dispatcher: one stateless transition per request.
//!
//! Resolves (method, path) against the endpoint registry, looks up the
//! handler bound to the matched endpoint, and shapes the response. Routing
//! failures surface as status codes. Store failures during ingestion are
//! logged and swallowed: the caller still sees 200 with an empty body, so
//! the response never indicates whether the submission was persisted.

use std::collections::HashMap;

use tracing::{error, info, warn};

use crate::registry::{EndpointId, EndpointRegistry, EndpointResolution};
use crate::report::{encode_bundle, ObservationReport, Tool};
use crate::store::ReportStore;

// status codes used by the dispatcher
const STATUS_OK: u16 = 200;
const STATUS_NOT_FOUND: u16 = 404;
const STATUS_METHOD_NOT_ALLOWED: u16 = 405;
const STATUS_INTERNAL_ERROR: u16 = 500;

/// Response data handed back to the transport: a status code and a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub status: u16,
    pub body: String,
}

impl HandlerResponse {
    #[must_use]
    pub fn ok(body: String) -> Self {
        Self {
            status: STATUS_OK,
            body,
        }
    }

    #[must_use]
    pub fn ok_empty() -> Self {
        Self::ok(String::new())
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self {
            status: STATUS_NOT_FOUND,
            body: String::new(),
        }
    }

    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self {
            status: STATUS_METHOD_NOT_ALLOWED,
            body: String::new(),
        }
    }

    #[must_use]
    pub fn internal_error() -> Self {
        Self {
            status: STATUS_INTERNAL_ERROR,
            body: String::new(),
        }
    }
}

/// Handler semantics that can be bound to an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundHandler {
    /// Enumerate the store and answer with a bundle document.
    List,
    /// Persist the request body as an observation from the given tool.
    Ingest(Tool),
}

/// Dispatcher that routes requests through the registry to bound handlers.
///
/// Owns the registry, the store, and the handler bindings; all three are
/// immutable once serving starts, so the dispatcher is freely shareable
/// across transport coroutines.
pub struct Dispatcher {
    registry: EndpointRegistry,
    store: ReportStore,
    handlers: HashMap<EndpointId, BoundHandler>,
}

impl Dispatcher {
    /// Create a dispatcher with no handlers bound.
    #[must_use]
    pub fn new(registry: EndpointRegistry, store: ReportStore) -> Self {
        Self {
            registry,
            store,
            handlers: HashMap::new(),
        }
    }

    /// Bind a handler to an endpoint identifier.
    ///
    /// Rebinding an endpoint replaces the previous handler.
    pub fn bind(&mut self, id: EndpointId, handler: BoundHandler) {
        if let Some(previous) = self.handlers.insert(id, handler) {
            warn!(endpoint = ?id, previous = ?previous, "Replaced existing handler binding");
        }
        info!(
            endpoint = ?id,
            total_handlers = self.handlers.len(),
            "Handler bound"
        );
    }

    /// Bind the standard handler for every endpoint in the registry.
    pub fn bind_defaults(&mut self) {
        let ids: Vec<EndpointId> = self.registry.endpoints().iter().map(|e| e.id).collect();
        for id in ids {
            let handler = match id {
                EndpointId::ListReports => BoundHandler::List,
                EndpointId::Ingest(tool) => BoundHandler::Ingest(tool),
            };
            self.bind(id, handler);
        }
    }

    /// Process one request: resolve, select the handler, build the response.
    ///
    /// Stateless across requests; every outcome, including every failure,
    /// maps to a definite status code for the transport to write.
    #[must_use]
    pub fn dispatch(&self, method: &str, path: &str, body: &str) -> HandlerResponse {
        match self.registry.resolve(method, path) {
            EndpointResolution::UnknownPath => HandlerResponse::not_found(),
            EndpointResolution::MethodMismatch => HandlerResponse::method_not_allowed(),
            EndpointResolution::Matched(id) => match self.handlers.get(&id) {
                Some(BoundHandler::List) => self.handle_list(),
                Some(BoundHandler::Ingest(tool)) => self.handle_ingest(*tool, body),
                None => {
                    // unreachable with bind_defaults, but the binding map
                    // makes the gap observable rather than a panic
                    error!(endpoint = ?id, "No handler bound for matched endpoint");
                    HandlerResponse::internal_error()
                }
            },
        }
    }

    fn handle_list(&self) -> HandlerResponse {
        let reports = self.store.list_all();
        let report_count = reports.len();
        match encode_bundle(reports) {
            Ok(document) => {
                info!(report_count, "Listing served");
                HandlerResponse::ok(document)
            }
            Err(e) => {
                // the dispatcher never surfaces a listing failure as an
                // error status; an empty bundle is the degraded answer
                error!(error = %e, "Bundle encoding failed, serving empty bundle");
                HandlerResponse::ok("{\"reports\":[]}".to_string())
            }
        }
    }

    fn handle_ingest(&self, tool: Tool, body: &str) -> HandlerResponse {
        let report = ObservationReport::ingested(body.to_string(), tool);
        match self.store.persist(&report) {
            Ok(path) => {
                info!(tool = ?tool, path = %path.display(), "Observation ingested");
            }
            Err(e) => {
                error!(tool = ?tool, error = %e, "Persist failed, response still ok");
            }
        }
        HandlerResponse::ok_empty()
    }
}
