/* Copyright (c) 2026 Olle Mårtensson. This Source Code Form is subject to the terms of the Eclipse Public License, v. 2.0. */
use thiserror::Error;

/// Result alias used across the crate.
pub type AgentMetaResult<T> = Result<T, AgentMetaError>;

/// Error variants surfaced at the fallible boundaries of the crate.
///
/// The decoders never return these; they log and fall back to partial
/// records instead.
#[derive(Debug, Error)]
pub enum AgentMetaError {
    #[error("document is not valid JSON: {0}")]
    MalformedDocument(#[from] serde_json::Error),
    #[error("document top level is {0}, expected object")]
    NotAnObject(&'static str),
    #[error("context is missing key {0}")]
    MissingContextKey(&'static str),
    #[error("context key {key} has an invalid value: {reason}")]
    InvalidContextValue { key: &'static str, reason: String },
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
