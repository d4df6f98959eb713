//! Observation report entity and its document codec.
//!
//! A report is one ingested artifact: the opaque payload a forensic tool
//! submitted, plus the provenance triple the accepting endpoint hard-wires
//! and the timestamp the service stamped at acceptance. Reports are
//! serialized as JSON documents, one document per persisted file, and a
//! listing response wraps them in a [`ReportBundle`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ingestion channel the observation data came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataStream {
    Storage,
    Network,
}

/// Semantic class of the observation payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    Metadata,
    Communication,
}

/// The forensic tool that produced the observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tool {
    Exiftool,
    Mmb,
    Wireshark,
}

impl Tool {
    /// Ingestion channel fixed for this tool's endpoint.
    #[must_use]
    pub fn data_stream(self) -> DataStream {
        match self {
            Tool::Exiftool | Tool::Mmb => DataStream::Storage,
            Tool::Wireshark => DataStream::Network,
        }
    }

    /// Payload class fixed for this tool's endpoint.
    #[must_use]
    pub fn data_type(self) -> DataType {
        match self {
            Tool::Exiftool | Tool::Mmb => DataType::Metadata,
            Tool::Wireshark => DataType::Communication,
        }
    }
}

/// One ingested observation with provenance metadata.
///
/// Created exactly once at ingestion time and immutable thereafter. Every
/// field except `observation_data` is derived from which endpoint accepted
/// the request; the payload itself is caller-supplied, never parsed, and may
/// be empty but never absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationReport {
    /// Opaque text payload exactly as received from the submitting tool.
    pub observation_data: String,
    /// When the service accepted the report; set by the core, never the caller.
    pub storage_timestamp: DateTime<Utc>,
    pub data_stream: DataStream,
    pub data_type: DataType,
    pub tool: Tool,
}

impl ObservationReport {
    /// Build a report for a payload accepted on `tool`'s ingestion endpoint,
    /// stamped with the current wall-clock time.
    #[must_use]
    pub fn ingested(observation_data: String, tool: Tool) -> Self {
        Self {
            observation_data,
            storage_timestamp: Utc::now(),
            data_stream: tool.data_stream(),
            data_type: tool.data_type(),
            tool,
        }
    }
}

/// Ephemeral ordered aggregation of reports, built fresh per listing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportBundle {
    pub reports: Vec<ObservationReport>,
}

/// A stored document could not be turned back into a report.
#[derive(Debug, Error)]
#[error("malformed report document: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Serialize a single report as a JSON document.
///
/// Field order is deterministic (struct declaration order); the same encoding
/// is used for persisted files and for the elements of a listing bundle.
pub fn encode_report(report: &ObservationReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Inverse of [`encode_report`]; round-trips every field with no precision
/// loss, including the timestamp.
pub fn decode_report(document: &str) -> Result<ObservationReport, DecodeError> {
    Ok(serde_json::from_str(document)?)
}

/// Wrap an ordered sequence of reports as a single listing document.
/// Bundle order is exactly the order the store returned them.
pub fn encode_bundle(reports: Vec<ObservationReport>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ReportBundle { reports })
}
