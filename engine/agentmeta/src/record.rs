/* Copyright (c) 2026 Olle Mårtensson. This Source Code Form is subject to the terms of the Eclipse Public License, v. 2.0. */
//! Normalized records produced by the decoders.

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// Metadata of an agent registration, keyed by the registration id.
///
/// List fields are always initialized; an unpopulated list is empty, never
/// missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationFile {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub active: Option<bool>,
    #[serde(rename = "x402support")]
    pub x402_support: Option<bool>,
    pub supported_trusts: Vec<String>,

    pub mcp_endpoint: Option<String>,
    pub mcp_version: Option<String>,
    pub mcp_tools: Vec<String>,
    pub mcp_prompts: Vec<String>,
    pub mcp_resources: Vec<String>,

    pub a2a_endpoint: Option<String>,
    pub a2a_version: Option<String>,
    pub a2a_skills: Vec<String>,

    pub web_endpoint: Option<String>,

    pub oasf_endpoint: Option<String>,
    pub oasf_version: Option<String>,
    pub oasf_skills: Vec<String>,
    pub oasf_domains: Vec<String>,

    pub email_endpoint: Option<String>,
    pub ens: Option<String>,
    pub did: Option<String>,

    /// Canonical rendering of the recognized subset of the endpoint list.
    pub endpoints_raw_json: Option<String>,
}

impl RegistrationFile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// A feedback attachment, keyed by `<txHash>:<cid>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackFile {
    id: String,
    pub cid: String,
    pub feedback_id: String,
    #[serde(with = "bigint_string")]
    pub created_at: BigInt,

    pub agent_registry: Option<String>,
    #[serde(default, with = "opt_bigint_string")]
    pub agent_id: Option<BigInt>,
    pub client_address: Option<String>,
    pub created_at_iso: Option<String>,
    #[serde(default, with = "opt_bigint_string")]
    pub value_raw: Option<BigInt>,
    pub value_decimals: Option<i32>,
    pub text: Option<String>,

    pub mcp_tool: Option<String>,
    pub mcp_prompt: Option<String>,
    pub mcp_resource: Option<String>,

    #[serde(default)]
    pub a2a_skills: Vec<String>,
    pub a2a_context_id: Option<String>,
    pub a2a_task_id: Option<String>,

    #[serde(default)]
    pub oasf_skills: Vec<String>,
    #[serde(default)]
    pub oasf_domains: Vec<String>,

    pub proof_of_payment_from_address: Option<String>,
    pub proof_of_payment_to_address: Option<String>,
    pub proof_of_payment_chain_id: Option<String>,
    pub proof_of_payment_tx_hash: Option<String>,

    pub tag1: Option<String>,
    pub tag2: Option<String>,
}

impl FeedbackFile {
    /// Composite record id for a feedback attachment.
    pub fn composite_id(tx_hash: &str, cid: &str) -> String {
        format!("{tx_hash}:{cid}")
    }

    pub fn new(
        tx_hash: &str,
        cid: impl Into<String>,
        feedback_id: impl Into<String>,
        created_at: BigInt,
    ) -> Self {
        let cid = cid.into();
        Self {
            id: Self::composite_id(tx_hash, &cid),
            cid,
            feedback_id: feedback_id.into(),
            created_at,
            agent_registry: None,
            agent_id: None,
            client_address: None,
            created_at_iso: None,
            value_raw: None,
            value_decimals: None,
            text: None,
            mcp_tool: None,
            mcp_prompt: None,
            mcp_resource: None,
            a2a_skills: Vec::new(),
            a2a_context_id: None,
            a2a_task_id: None,
            oasf_skills: Vec::new(),
            oasf_domains: Vec::new(),
            proof_of_payment_from_address: None,
            proof_of_payment_to_address: None,
            proof_of_payment_chain_id: None,
            proof_of_payment_tx_hash: None,
            tag1: None,
            tag2: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

mod bigint_string {
    use std::str::FromStr;

    use num_bigint::BigInt;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let raw = String::deserialize(deserializer)?;
        BigInt::from_str(&raw).map_err(de::Error::custom)
    }
}

mod opt_bigint_string {
    use std::str::FromStr;

    use num_bigint::BigInt;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<BigInt>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<BigInt>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| BigInt::from_str(&raw).map_err(de::Error::custom))
            .transpose()
    }
}
