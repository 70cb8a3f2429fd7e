use agentmeta::{decode_feedback_file, AgentMetaError, FeedbackContext, FeedbackFile};
use num_bigint::BigInt;
use serde_json::json;

fn context(tag1: &str, tag2: &str) -> FeedbackContext {
    FeedbackContext {
        feedback_id: "84532:17:0xclient:1".into(),
        tx_hash: "0xabc".into(),
        tag1_on_chain: tag1.into(),
        tag2_on_chain: tag2.into(),
        timestamp: BigInt::from(1_700_000_000u64),
    }
}

fn decode(doc: &str) -> FeedbackFile {
    decode_feedback_file("bafy123", &context("", ""), doc.as_bytes())
}

#[test]
fn tag_and_oasf_scenario() {
    let file = decode(r#"{"tag1":"helpful","oasf":{"skills":["planning"]}}"#);
    assert_eq!(file.id(), "0xabc:bafy123");
    assert_eq!(file.tag1.as_deref(), Some("helpful"));
    assert_eq!(file.oasf_skills, vec!["planning".to_string()]);
    assert!(file.oasf_domains.is_empty());
}

#[test]
fn context_fields_are_always_set() {
    let file = decode("{}");
    assert_eq!(file.cid, "bafy123");
    assert_eq!(file.feedback_id, "84532:17:0xclient:1");
    assert_eq!(file.created_at, BigInt::from(1_700_000_000u64));
    assert!(file.a2a_skills.is_empty());
}

#[test]
fn malformed_documents_keep_only_context_fields() {
    let expected = FeedbackFile::new(
        "0xabc",
        "bafy123",
        "84532:17:0xclient:1",
        BigInt::from(1_700_000_000u64),
    );
    for doc in ["{", "[]", "42", "\"text\"", "null", ""] {
        assert_eq!(decode(doc), expected, "document {doc:?}");
    }
}

#[test]
fn envelope_fields() {
    let file = decode(
        r#"{
            "agentRegistry": "eip155:84532:0x8004AA63c570c570eBF15376c0dB199918BFe9Fb",
            "agentId": 17,
            "clientAddress": "0xclient",
            "createdAt": "2025-09-23T12:00:00Z",
            "value": 4500000000000000000000,
            "valueDecimals": 2,
            "text": "fast and correct"
        }"#,
    );
    assert_eq!(
        file.agent_registry.as_deref(),
        Some("eip155:84532:0x8004AA63c570c570eBF15376c0dB199918BFe9Fb")
    );
    assert_eq!(file.agent_id, Some(BigInt::from(17)));
    assert_eq!(file.client_address.as_deref(), Some("0xclient"));
    assert_eq!(file.created_at_iso.as_deref(), Some("2025-09-23T12:00:00Z"));
    assert_eq!(
        file.value_raw,
        BigInt::parse_bytes(b"4500000000000000000000", 10)
    );
    assert_eq!(file.value_decimals, Some(2));
    assert_eq!(file.text.as_deref(), Some("fast and correct"));
}

#[test]
fn mistyped_envelope_fields_are_skipped() {
    let file = decode(
        r#"{"agentId": "17", "value": 1.25, "valueDecimals": 99999999999, "text": 5, "createdAt": 1}"#,
    );
    assert_eq!(file.agent_id, None);
    assert_eq!(file.value_raw, None);
    assert_eq!(file.value_decimals, None);
    assert_eq!(file.text, None);
    assert_eq!(file.created_at_iso, None);
}

#[test]
fn nested_protocol_objects() {
    let file = decode(
        r#"{
            "mcp": {"tool": "search", "prompt": null, "resource": 3},
            "a2a": {"skills": ["triage", false], "contextId": "ctx-1", "taskId": "task-9"},
            "oasf": {"skills": ["planning"], "domains": ["healthcare", {}]}
        }"#,
    );
    assert_eq!(file.mcp_tool.as_deref(), Some("search"));
    assert_eq!(file.mcp_prompt, None);
    assert_eq!(file.mcp_resource, None);
    assert_eq!(file.a2a_skills, vec!["triage".to_string()]);
    assert_eq!(file.a2a_context_id.as_deref(), Some("ctx-1"));
    assert_eq!(file.a2a_task_id.as_deref(), Some("task-9"));
    assert_eq!(file.oasf_skills, vec!["planning".to_string()]);
    assert_eq!(file.oasf_domains, vec!["healthcare".to_string()]);
}

#[test]
fn nested_objects_of_wrong_kind_are_ignored() {
    let file = decode(r#"{"mcp": "search", "a2a": ["x"], "oasf": null, "proofOfPayment": 1}"#);
    assert_eq!(file.mcp_tool, None);
    assert!(file.a2a_skills.is_empty());
    assert!(file.oasf_skills.is_empty());
    assert_eq!(file.proof_of_payment_chain_id, None);
}

#[test]
fn proof_of_payment_numeric_chain_id() {
    let file = decode(
        r#"{"proofOfPayment": {
            "fromAddress": "0xfrom",
            "toAddress": "0xto",
            "chainId": 84532,
            "txHash": "0xpay"
        }}"#,
    );
    assert_eq!(file.proof_of_payment_from_address.as_deref(), Some("0xfrom"));
    assert_eq!(file.proof_of_payment_to_address.as_deref(), Some("0xto"));
    assert_eq!(file.proof_of_payment_chain_id.as_deref(), Some("84532"));
    assert_eq!(file.proof_of_payment_tx_hash.as_deref(), Some("0xpay"));
}

#[test]
fn proof_of_payment_string_chain_id() {
    let file = decode(r#"{"proofOfPayment": {"chainId": "eip155:8453"}}"#);
    assert_eq!(file.proof_of_payment_chain_id.as_deref(), Some("eip155:8453"));

    let file = decode(r#"{"proofOfPayment": {"chainId": true}}"#);
    assert_eq!(file.proof_of_payment_chain_id, None);
}

#[test]
fn on_chain_tags_take_precedence() {
    let doc = br#"{"tag1": "from-doc", "tag2": "doc-two"}"#;

    let file = decode_feedback_file("bafy123", &context("starred", ""), doc);
    assert_eq!(file.tag1.as_deref(), Some("starred"));
    assert_eq!(file.tag2.as_deref(), Some("doc-two"));

    let file = decode_feedback_file("bafy123", &context("", "uptime"), doc);
    assert_eq!(file.tag1.as_deref(), Some("from-doc"));
    assert_eq!(file.tag2.as_deref(), Some("uptime"));

    let file = decode_feedback_file("bafy123", &context("a", "b"), b"not json");
    assert_eq!(file.tag1.as_deref(), Some("a"));
    assert_eq!(file.tag2.as_deref(), Some("b"));
}

#[test]
fn document_tags_must_be_strings() {
    let file = decode(r#"{"tag1": 5, "tag2": null}"#);
    assert_eq!(file.tag1, None);
    assert_eq!(file.tag2, None);
}

#[test]
fn context_from_entries() {
    let entries = json!({
        "feedbackId": "1:2:0xc:3",
        "txHash": "0xdef",
        "tag1OnChain": "",
        "tag2OnChain": "latency",
        "timestamp": "1700000000"
    });
    let ctx = FeedbackContext::from_entries(entries.as_object().expect("object"))
        .expect("complete context");
    assert_eq!(ctx.tx_hash, "0xdef");
    assert_eq!(ctx.tag2_on_chain, "latency");
    assert_eq!(ctx.timestamp, BigInt::from(1_700_000_000u64));

    let entries = json!({
        "feedbackId": "f", "txHash": "t", "tag1OnChain": "", "tag2OnChain": "",
        "timestamp": 1700000001u64
    });
    let ctx = FeedbackContext::from_entries(entries.as_object().expect("object"))
        .expect("numeric timestamp");
    assert_eq!(ctx.timestamp, BigInt::from(1_700_000_001u64));
}

#[test]
fn context_from_entries_reports_problems() {
    let entries = json!({ "feedbackId": "f", "tag1OnChain": "", "tag2OnChain": "", "timestamp": 1 });
    let err = FeedbackContext::from_entries(entries.as_object().expect("object"))
        .expect_err("missing txHash");
    assert!(matches!(err, AgentMetaError::MissingContextKey("txHash")));

    let entries = json!({
        "feedbackId": "f", "txHash": "t", "tag1OnChain": "", "tag2OnChain": "",
        "timestamp": "soon"
    });
    let err = FeedbackContext::from_entries(entries.as_object().expect("object"))
        .expect_err("bad timestamp");
    assert!(matches!(
        err,
        AgentMetaError::InvalidContextValue { key: "timestamp", .. }
    ));
}

#[test]
fn record_serializes_with_schema_field_names() {
    let file = decode(r#"{"value": 12345678901234567890123, "proofOfPayment": {"chainId": 1}}"#);
    let rendered = serde_json::to_value(&file).expect("serialize");
    assert_eq!(rendered["id"], "0xabc:bafy123");
    assert_eq!(rendered["createdAt"], "1700000000");
    assert_eq!(rendered["valueRaw"], "12345678901234567890123");
    assert_eq!(rendered["proofOfPaymentChainId"], "1");

    let back: FeedbackFile = serde_json::from_value(rendered).expect("deserialize");
    assert_eq!(back, file);
}
