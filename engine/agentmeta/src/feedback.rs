/* Copyright (c) 2026 Olle Mårtensson. This Source Code Form is subject to the terms of the Eclipse Public License, v. 2.0. */
//! Decoder for feedback attachment documents.

use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde_json::Value;
use tracing::{error, info};

use crate::access::{integer, kind, parse_object, FieldAccess, JsonObject};
use crate::error::{AgentMetaError, AgentMetaResult};
use crate::record::FeedbackFile;

/// Values supplied by the on-chain event that triggered the file fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackContext {
    pub feedback_id: String,
    pub tx_hash: String,
    /// Tag emitted on chain; when non-empty the document's `tag1` is ignored.
    pub tag1_on_chain: String,
    pub tag2_on_chain: String,
    pub timestamp: BigInt,
}

impl FeedbackContext {
    /// Build a context from the string-keyed entries a host hands over.
    ///
    /// `timestamp` may be an integral number or a decimal string.
    pub fn from_entries(entries: &JsonObject) -> AgentMetaResult<Self> {
        let timestamp = match entries.present("timestamp") {
            None => return Err(AgentMetaError::MissingContextKey("timestamp")),
            Some(Value::String(raw)) => {
                BigInt::from_str(raw).map_err(|err| AgentMetaError::InvalidContextValue {
                    key: "timestamp",
                    reason: err.to_string(),
                })?
            }
            Some(other) => integer(other).ok_or_else(|| AgentMetaError::InvalidContextValue {
                key: "timestamp",
                reason: format!("expected integer, found {}", kind(other)),
            })?,
        };

        Ok(Self {
            feedback_id: context_string(entries, "feedbackId")?,
            tx_hash: context_string(entries, "txHash")?,
            tag1_on_chain: context_string(entries, "tag1OnChain")?,
            tag2_on_chain: context_string(entries, "tag2OnChain")?,
            timestamp,
        })
    }
}

fn context_string(entries: &JsonObject, key: &'static str) -> AgentMetaResult<String> {
    match entries.present(key) {
        None => Err(AgentMetaError::MissingContextKey(key)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(AgentMetaError::InvalidContextValue {
            key,
            reason: format!("expected string, found {}", kind(other)),
        }),
    }
}

/// Build the feedback record for `cid` from a feedback document.
///
/// Never fails: a document that is not a JSON object yields a record with
/// only the context-derived fields set. Non-empty on-chain tags are carried
/// into the record as-is.
pub fn decode_feedback_file(cid: &str, ctx: &FeedbackContext, content: &[u8]) -> FeedbackFile {
    let mut file = FeedbackFile::new(&ctx.tx_hash, cid, &ctx.feedback_id, ctx.timestamp.clone());
    file.tag1 = non_empty(&ctx.tag1_on_chain);
    file.tag2 = non_empty(&ctx.tag2_on_chain);
    info!(
        feedback_id = %ctx.feedback_id,
        cid,
        file_id = %file.id(),
        "parsing feedback file"
    );

    match parse_object(content) {
        Ok(obj) => populate(&mut file, ctx, &obj),
        Err(err) => error!(cid, %err, "failed to parse feedback file"),
    }
    file
}

fn populate(file: &mut FeedbackFile, ctx: &FeedbackContext, obj: &JsonObject) {
    file.agent_registry = obj.string("agentRegistry").map(str::to_owned);
    file.agent_id = obj.integer("agentId");
    file.client_address = obj.string("clientAddress").map(str::to_owned);
    file.created_at_iso = obj.string("createdAt").map(str::to_owned);
    file.value_raw = obj.integer("value");
    file.value_decimals = obj.integer("valueDecimals").and_then(|n| n.to_i32());
    file.text = obj.string("text").map(str::to_owned);

    if let Some(mcp) = obj.object("mcp") {
        file.mcp_tool = mcp.string("tool").map(str::to_owned);
        file.mcp_prompt = mcp.string("prompt").map(str::to_owned);
        file.mcp_resource = mcp.string("resource").map(str::to_owned);
    }

    if let Some(a2a) = obj.object("a2a") {
        if let Some(skills) = a2a.string_list("skills") {
            file.a2a_skills = skills;
        }
        file.a2a_context_id = a2a.string("contextId").map(str::to_owned);
        file.a2a_task_id = a2a.string("taskId").map(str::to_owned);
    }

    if let Some(oasf) = obj.object("oasf") {
        if let Some(skills) = oasf.string_list("skills") {
            file.oasf_skills = skills;
        }
        if let Some(domains) = oasf.string_list("domains") {
            file.oasf_domains = domains;
        }
    }

    if let Some(proof) = obj.object("proofOfPayment") {
        file.proof_of_payment_from_address = proof.string("fromAddress").map(str::to_owned);
        file.proof_of_payment_to_address = proof.string("toAddress").map(str::to_owned);
        file.proof_of_payment_chain_id = proof.string_or_integer("chainId");
        file.proof_of_payment_tx_hash = proof.string("txHash").map(str::to_owned);
    }

    // On-chain tags win; the document only fills tags the event left empty.
    if ctx.tag1_on_chain.is_empty() {
        file.tag1 = obj.string("tag1").map(str::to_owned);
    }
    if ctx.tag2_on_chain.is_empty() {
        file.tag2 = obj.string("tag2").map(str::to_owned);
    }
}

fn non_empty(tag: &str) -> Option<String> {
    (!tag.is_empty()).then(|| tag.to_owned())
}
