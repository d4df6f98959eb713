//! # custodia
//!
//! A minimal chain-of-custody evidence intake service. External forensic
//! tools (exiftool, MMB, wireshark) POST raw observation payloads over HTTP;
//! custodia tags each with a fixed provenance triple and an acceptance
//! timestamp, persists it as one JSON document in a flat store directory,
//! and serves an aggregated listing of everything stored at `GET /`.
//!
//! ## Architecture
//!
//! - **[`registry`]** - immutable table of the four valid (path, method)
//!   endpoints and exact-match resolution
//! - **[`report`]** - the `ObservationReport` entity, its provenance enums,
//!   and the JSON document codec
//! - **[`store`]** - file-backed durable store: ULID-named documents,
//!   atomic writes, skip-and-log enumeration
//! - **[`dispatcher`]** - per-request state machine mapping resolution
//!   outcomes and handler results to status codes
//! - **[`server`]** - `may_minihttp` transport: request parsing, response
//!   writing, server lifecycle
//! - **[`cli`]** / **[`runtime_config`]** - bootstrap, argument parsing,
//!   coroutine stack sizing
//!
//! ## Contract notes
//!
//! Ingestion always answers `200` with an empty body, even when the write
//! failed; persistence failures are logged, not surfaced. Listing never
//! fails: undecodable files are skipped and an unreadable store yields an
//! empty bundle. Every response closes its connection.
//!
//! ## Runtime
//!
//! custodia runs on the `may` coroutine runtime, not tokio. Handlers block;
//! all file I/O is synchronous. Stack size is configurable via
//! `CUSTODIA_STACK_SIZE`.

pub mod cli;
pub mod dispatcher;
pub mod ids;
pub mod registry;
pub mod report;
pub mod runtime_config;
pub mod server;
pub mod store;

pub use dispatcher::{BoundHandler, Dispatcher, HandlerResponse};
pub use ids::ReportId;
pub use registry::{EndpointId, EndpointRegistry, EndpointResolution};
pub use report::{DataStream, DataType, ObservationReport, ReportBundle, Tool};
pub use store::{ReportStore, StoreError};
