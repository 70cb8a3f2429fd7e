/* Copyright (c) 2026 Olle Mårtensson. This Source Code Form is subject to the terms of the Eclipse Public License, v. 2.0. */
//! Decoder for agent registration documents.
//!
//! Accepts both the current key names and their legacy aliases:
//!
//! | field            | key              | legacy alias      |
//! |------------------|------------------|-------------------|
//! | payment support  | `x402Support`    | `x402support`     |
//! | trust frameworks | `supportedTrusts`| `supportedTrust`  |
//! | endpoint list    | `services`       | `endpoints`       |
//!
//! The alias is read only when the current key is missing or `null`.

use tracing::{debug, error};

use crate::access::{parse_object, string_list, FieldAccess, JsonObject};
use crate::endpoints::endpoints_raw_json;
use crate::record::RegistrationFile;

/// Endpoint entry names the decoder understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointKind {
    Mcp,
    A2a,
    Web,
    Oasf,
    Email,
    Ens,
    Did,
}

impl EndpointKind {
    /// Match an entry name case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "mcp" => Some(EndpointKind::Mcp),
            "a2a" => Some(EndpointKind::A2a),
            "web" => Some(EndpointKind::Web),
            "oasf" => Some(EndpointKind::Oasf),
            "email" => Some(EndpointKind::Email),
            "ens" => Some(EndpointKind::Ens),
            "did" => Some(EndpointKind::Did),
            _ => None,
        }
    }
}

/// Populate `record` from a registration document.
///
/// Never fails. Malformed documents are logged and leave the record as it
/// was; fields whose value has the wrong kind are skipped. Endpoint entries
/// are applied in array order, so the last entry of a given name wins.
pub fn decode_registration(record: &mut RegistrationFile, content: &[u8]) {
    let obj = match parse_object(content) {
        Ok(obj) => obj,
        Err(err) => {
            error!(id = %record.id, %err, "failed to parse registration document");
            return;
        }
    };

    if let Some(name) = obj.string("name") {
        record.name = Some(name.to_owned());
    }
    if let Some(description) = obj.string("description") {
        record.description = Some(description.to_owned());
    }
    if let Some(image) = obj.string("image") {
        record.image = Some(image.to_owned());
    }
    if let Some(active) = obj.boolean("active") {
        record.active = Some(active);
    }

    let x402 = obj.present_or_legacy("x402Support", "x402support");
    if let Some(support) = x402.and_then(|v| v.as_bool()) {
        record.x402_support = Some(support);
    }

    let trusts = obj.present_or_legacy("supportedTrusts", "supportedTrust");
    if let Some(trusts) = trusts.and_then(string_list) {
        record.supported_trusts = trusts;
    }

    let endpoints = obj.present_or_legacy("services", "endpoints");
    if let Some(endpoints) = endpoints.and_then(|v| v.as_array()) {
        record.endpoints_raw_json = Some(endpoints_raw_json(endpoints));
        for entry in endpoints.iter().filter_map(|v| v.as_object()) {
            apply_endpoint(record, entry);
        }
    }
}

fn apply_endpoint(record: &mut RegistrationFile, entry: &JsonObject) {
    let Some(name) = entry.string("name") else {
        return;
    };
    let Some(kind) = EndpointKind::parse(name) else {
        debug!(id = %record.id, name, "skipping unrecognized endpoint entry");
        return;
    };

    let endpoint = entry.non_empty_string("endpoint").map(str::to_owned);
    let version = entry.non_empty_string("version").map(str::to_owned);

    match kind {
        EndpointKind::Mcp => {
            set_if_some(&mut record.mcp_endpoint, endpoint);
            set_if_some(&mut record.mcp_version, version);
        }
        EndpointKind::A2a => {
            set_if_some(&mut record.a2a_endpoint, endpoint);
            set_if_some(&mut record.a2a_version, version);
        }
        EndpointKind::Oasf => {
            set_if_some(&mut record.oasf_endpoint, endpoint);
            set_if_some(&mut record.oasf_version, version);
            if let Some(skills) = entry.string_list("skills") {
                record.oasf_skills = skills;
            }
            if let Some(domains) = entry.string_list("domains") {
                record.oasf_domains = domains;
            }
        }
        EndpointKind::Web => set_if_some(&mut record.web_endpoint, endpoint),
        EndpointKind::Email => set_if_some(&mut record.email_endpoint, endpoint),
        EndpointKind::Ens => set_if_some(&mut record.ens, endpoint),
        EndpointKind::Did => set_if_some(&mut record.did, endpoint),
    }
}

fn set_if_some(field: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *field = value;
    }
}
