use super::*;
use serde_json::json;

#[test]
fn document_type_tags_round_trip() {
    for kind in DocumentType::ALL {
        assert_eq!(DocumentType::from_tag(kind.tag()), Some(kind));
    }
    assert_eq!(DocumentType::from_tag("json"), None);
    assert_eq!(DocumentType::from_tag("XML"), None);
}

#[test]
fn document_type_from_str_is_case_insensitive() {
    assert_eq!("json".parse::<DocumentType>(), Ok(DocumentType::Json));
    assert_eq!(" pdf ".parse::<DocumentType>(), Ok(DocumentType::Pdf));
    assert_eq!("EMAIL".parse::<DocumentType>(), Ok(DocumentType::Email));
    assert!("csv".parse::<DocumentType>().is_err());
}

#[test]
fn agent_result_dispatches_on_agent_type() {
    let email = AgentResult::from_value(json!({
        "agent_type": "Email",
        "extracted_fields": { "sender": "a@b.test", "subject": "Order" },
        "tone_analysis": { "tone": "escalation" },
        "urgency_level": "high",
        "recommended_action": "escalate_immediate"
    }))
    .unwrap();
    let AgentResult::Email(email) = email else {
        panic!("expected email variant");
    };
    assert_eq!(
        email.extracted_fields.and_then(|f| f.sender).as_deref(),
        Some("a@b.test")
    );
    assert_eq!(email.urgency_level.as_deref(), Some("high"));

    let json_agent = AgentResult::from_value(json!({
        "agent_type": "JSON",
        "json_type": "invoice",
        "schema_validation": { "is_valid": true },
        "risk_level": "low",
        "anomalies": []
    }))
    .unwrap();
    assert!(matches!(json_agent, AgentResult::Json(ref r) if r.anomalies.is_empty()));
    assert_eq!(json_agent.agent_type(), Some("JSON"));
}

#[test]
fn agent_result_unknown_tag_is_neutral_fallback() {
    let result = AgentResult::from_value(json!({ "agent_type": "Audio", "x": 1 })).unwrap();
    assert_eq!(result, AgentResult::Unknown { agent_type: Some("Audio".into()) });
    assert_eq!(result.agent_type(), Some("Audio"));

    let missing = AgentResult::from_value(Value::Null).unwrap();
    assert_eq!(missing, AgentResult::default());
    assert_eq!(missing.agent_type(), None);
}

#[test]
fn pdf_result_tolerates_nulls() {
    let result = AgentResult::from_value(json!({
        "agent_type": "PDF",
        "document_type": "invoice",
        "text_length": 1200,
        "extracted_data": { "total_amount": null },
        "flags": null,
        "compliance_flags": [{ "regulation": "GDPR", "description": "mentions GDPR" }]
    }))
    .unwrap();
    let AgentResult::Pdf(pdf) = result else {
        panic!("expected pdf variant");
    };
    assert!(pdf.flags.is_empty());
    assert_eq!(pdf.compliance_flags.len(), 1);
    assert_eq!(pdf.extracted_data.and_then(|d| d.total_amount), None);
    assert_eq!(pdf.text_length, Some(1200));
}

#[test]
fn process_response_success_projects_result() {
    let body = json!({
        "success": true,
        "trace_id": "t-1",
        "classification": { "format": "Email", "intent": "Complaint", "confidence_score": 0.9 },
        "agent_result": { "agent_type": "Email" },
        "actions_triggered": {
            "total_actions": 1,
            "successful_actions": 1,
            "failed_actions": 0,
            "actions_triggered": [{ "action_type": "crm_log", "success": true }]
        },
        "message": "Input processed successfully through multi-agent system"
    });
    let response: ProcessResponse = serde_json::from_value(body).unwrap();
    let result = response.into_result().unwrap();
    assert_eq!(result.trace_id, "t-1");
    assert_eq!(result.classification.intent.as_deref(), Some("Complaint"));
    assert_eq!(result.actions.total_actions, 1);
    assert_eq!(result.actions.actions_triggered.len(), 1);
}

#[test]
fn process_response_failure_surfaces_backend_error() {
    let response: ProcessResponse =
        serde_json::from_value(json!({ "success": false, "error": "Input too short" })).unwrap();
    let err = response.into_result().unwrap_err();
    assert_eq!(err.to_string(), "Input too short");

    let response: ProcessResponse = serde_json::from_value(json!({ "success": false })).unwrap();
    assert_eq!(response.into_result().unwrap_err().to_string(), "Processing failed");
}

#[test]
fn action_detail_prefers_message_then_error() {
    let with_message = ActionRecord {
        response: Some(json!({ "message": "Issue logged in CRM system" })),
        error: Some("ignored".into()),
        ..ActionRecord::default()
    };
    assert_eq!(with_message.detail(), "Issue logged in CRM system");

    let with_error = ActionRecord {
        response: Some(json!({ "success": false })),
        error: Some("connection refused".into()),
        ..ActionRecord::default()
    };
    assert_eq!(with_error.detail(), "connection refused");

    assert_eq!(ActionRecord::default().detail(), "No details");
}

#[test]
fn trace_summary_projects_list_shape() {
    let trace: Trace = serde_json::from_value(json!({
        "trace_id": "abc",
        "timestamp": "2024-01-15T10:30:00.123456",
        "status": "completed",
        "total_processing_time": 0.0,
        "classification": { "format": "PDF", "intent": "Regulation", "content_preview": "POLICY" },
        "agent_result": { "agent_type": "PDF", "result_data": {} },
        "action_result": {
            "actions_triggered": [{ "action_type": "compliance_flag" }, { "action_type": "log_only" }],
            "success_count": 1,
            "failure_count": null
        }
    }))
    .unwrap();

    let summary = trace.summary();
    assert_eq!(summary.trace_id, "abc");
    assert_eq!(summary.classification.format.as_deref(), Some("PDF"));
    assert_eq!(summary.agent_type.as_deref(), Some("PDF"));
    assert_eq!(summary.action_total, 2);
    assert_eq!(summary.success_count, 1);
    assert_eq!(summary.failure_count, 0);
}

#[test]
fn trace_summary_defaults_missing_sub_objects() {
    let trace: Trace = serde_json::from_value(json!({ "trace_id": "x" })).unwrap();
    let summary = trace.summary();
    assert_eq!(summary.classification, Classification::default());
    assert_eq!(summary.agent_type, None);
    assert_eq!(summary.action_total, 0);
}

#[test]
fn trace_response_requires_trace_on_success() {
    let missing: TraceResponse = serde_json::from_value(json!({ "success": true })).unwrap();
    assert_eq!(
        missing.into_trace().unwrap_err().to_string(),
        "Failed to load trace details"
    );

    let failed: TracesResponse =
        serde_json::from_value(json!({ "success": false, "error": "db locked" })).unwrap();
    assert_eq!(failed.into_traces().unwrap_err().to_string(), "db locked");
}

#[test]
fn mistyped_pdf_total_decodes_as_absent() {
    let body = json!({
        "success": true,
        "trace_id": "t-pdf",
        "classification": { "format": "PDF", "confidence_score": "high" },
        "agent_result": {
            "agent_type": "PDF",
            "document_type": "invoice",
            "text_length": "812",
            "extracted_data": { "total_amount": "15,000.00" },
            "flags": [{ "type": "high_value_invoice", "severity": 3 }]
        }
    });
    let result = serde_json::from_value::<ProcessResponse>(body)
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(result.trace_id, "t-pdf");
    assert_eq!(result.classification.format.as_deref(), Some("PDF"));
    assert_eq!(result.classification.confidence_score, None);
    let AgentResult::Pdf(pdf) = result.agent_result else {
        panic!("expected pdf variant");
    };
    assert_eq!(pdf.document_type.as_deref(), Some("invoice"));
    assert_eq!(pdf.text_length, None);
    assert_eq!(pdf.extracted_data.and_then(|d| d.total_amount), None);
    assert_eq!(pdf.flags[0].kind.as_deref(), Some("high_value_invoice"));
    assert_eq!(pdf.flags[0].severity, None);
}

#[test]
fn mistyped_email_fields_decode_as_absent() {
    let body = json!({
        "success": true,
        "trace_id": "t-mail",
        "agent_result": {
            "agent_type": "Email",
            "extracted_fields": {
                "sender": "a@b.test",
                "deadline_mentioned": false,
                "key_points": "one point"
            },
            "tone_analysis": { "tone": "polite", "sentiment_score": "positive" }
        },
        "actions_triggered": { "total_actions": "1", "actions_triggered": {} }
    });
    let result = serde_json::from_value::<ProcessResponse>(body)
        .unwrap()
        .into_result()
        .unwrap();
    let AgentResult::Email(email) = result.agent_result else {
        panic!("expected email variant");
    };
    let fields = email.extracted_fields.unwrap();
    assert_eq!(fields.sender.as_deref(), Some("a@b.test"));
    assert_eq!(fields.deadline_mentioned, None);
    assert!(fields.key_points.is_empty());
    let tone = email.tone_analysis.unwrap();
    assert_eq!(tone.tone.as_deref(), Some("polite"));
    assert_eq!(tone.sentiment_score, None);
    assert_eq!(result.actions, ActionOutcome::default());
}

#[test]
fn mistyped_sub_object_decodes_as_absent() {
    let agent = AgentResult::from_value(json!({
        "agent_type": "JSON",
        "schema_validation": "valid",
        "anomalies": [{ "type": "negative_amount", "description": 42 }]
    }))
    .unwrap();
    let AgentResult::Json(json_agent) = agent else {
        panic!("expected json variant");
    };
    assert_eq!(json_agent.schema_validation, None);
    assert_eq!(json_agent.anomalies[0].kind.as_deref(), Some("negative_amount"));
    assert_eq!(json_agent.anomalies[0].description, None);
}
