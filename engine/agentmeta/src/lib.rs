/* Copyright (c) 2026 Olle Mårtensson. This Source Code Form is subject to the terms of the Eclipse Public License, v. 2.0. */
//! agentmeta: normalization of off-chain agent documents.
//!
//! Agent registration metadata and feedback attachments arrive as loosely
//! specified JSON from content-addressed storage. This crate turns them into
//! strongly typed records without ever failing: malformed input degrades to
//! a partially populated record and a log line.
//!
//! # Examples
//! ```
//! use agentmeta::{decode_registration, RegistrationFile};
//!
//! let mut record = RegistrationFile::new("84532:17");
//! decode_registration(
//!     &mut record,
//!     br#"{"services":[{"name":"a2a","endpoint":"https://x/a2a","version":"1.0"}]}"#,
//! );
//! assert_eq!(record.a2a_endpoint.as_deref(), Some("https://x/a2a"));
//! assert_eq!(
//!     record.endpoints_raw_json.as_deref(),
//!     Some(r#"[{"name":"a2a","endpoint":"https://x/a2a","version":"1.0"}]"#)
//! );
//! ```

mod error;

pub mod access;
pub mod chains;
pub mod endpoints;
pub mod feedback;
pub mod record;
pub mod registration;
pub mod store;

pub use access::{FieldAccess, JsonObject};
pub use chains::{chain_name, contract_addresses, Address, ContractAddresses};
pub use endpoints::endpoints_raw_json;
pub use error::{AgentMetaError, AgentMetaResult};
pub use feedback::{decode_feedback_file, FeedbackContext};
pub use record::{FeedbackFile, RegistrationFile};
pub use registration::{decode_registration, EndpointKind};
pub use store::{EntityStore, InMemoryStore};

/// Decode a feedback file and persist it exactly once.
///
/// Returns the composite id the record was saved under.
pub fn ingest_feedback_file<S: EntityStore + ?Sized>(
    store: &mut S,
    cid: &str,
    ctx: &FeedbackContext,
    content: &[u8],
) -> String {
    let file = decode_feedback_file(cid, ctx, content);
    let id = file.id().to_owned();
    store.save_feedback_file(file);
    id
}

/// Decode a registration document over the stored record for `id` (or a
/// fresh one) and save the result.
pub fn ingest_registration<S: EntityStore + ?Sized>(
    store: &mut S,
    id: &str,
    content: &[u8],
) -> RegistrationFile {
    let mut record = store
        .load_registration(id)
        .unwrap_or_else(|| RegistrationFile::new(id));
    decode_registration(&mut record, content);
    store.save_registration(record.clone());
    record
}
