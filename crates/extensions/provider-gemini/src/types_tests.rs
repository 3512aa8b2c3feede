use super::*;
use serde_json::json;

#[test]
fn test_request_wire_shape() {
    let mut request = GenerateContentRequest::from_prompt("Summarize this");
    request.safety_settings = vec![SafetySetting {
        category: "HARM_CATEGORY_HARASSMENT".to_string(),
        threshold: "BLOCK_NONE".to_string(),
    }];
    request.generation_config = Some(GenerationConfig {
        temperature: Some(0.2),
        max_output_tokens: Some(2048),
    });

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["contents"][0]["parts"][0]["text"], "Summarize this");
    assert!(value["contents"][0].get("role").is_none());
    assert_eq!(value["safetySettings"][0]["category"], "HARM_CATEGORY_HARASSMENT");
    assert_eq!(value["safetySettings"][0]["threshold"], "BLOCK_NONE");
    assert_eq!(value["generationConfig"]["maxOutputTokens"], 2048);
    assert!((value["generationConfig"]["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
}

#[test]
fn test_generation_config_default_is_empty() {
    let json = serde_json::to_string(&GenerationConfig::default()).unwrap();
    assert_eq!(json, "{}");
}

#[test]
fn test_first_text() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": "Summary." }, { "text": "ignored" }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 10, "candidatesTokenCount": 3, "totalTokenCount": 13 }
    }))
    .unwrap();

    assert_eq!(response.first_text(), Some("Summary."));
    assert_eq!(response.usage_metadata().unwrap().total_token_count, 13);
}

#[test]
fn test_first_text_missing_at_any_level() {
    let shapes = [
        json!({}),
        json!({ "candidates": null }),
        json!({ "candidates": [] }),
        json!({ "candidates": [{}] }),
        json!({ "candidates": [{ "content": {} }] }),
        json!({ "candidates": [{ "content": { "parts": [] } }] }),
        json!({ "candidates": [{ "content": { "parts": [{}] } }] }),
        json!({ "candidates": [{ "content": { "parts": [{ "text": "" }] } }] }),
        json!({ "candidates": [{ "finishReason": "SAFETY" }] }),
        json!({ "candidates": {} }),
        json!({ "candidates": "none" }),
        json!({ "candidates": [{ "content": { "parts": null } }] }),
        json!({ "candidates": [{ "content": { "parts": { "text": "nested oddly" } } }] }),
        json!({ "candidates": [{ "content": { "parts": [{ "text": 7 }] } }] }),
        json!([]),
    ];

    for shape in shapes {
        let response: GenerateContentResponse = serde_json::from_value(shape.clone()).unwrap();
        assert!(response.first_text().is_none(), "expected no text for {}", shape);
    }
}

#[test]
fn test_error_body() {
    let err: GeminiError = serde_json::from_value(json!({
        "error": {
            "code": 404,
            "message": "models/gemini-x is not found for API version v1beta",
            "status": "NOT_FOUND"
        }
    }))
    .unwrap();
    assert_eq!(err.error.code, Some(404));
    assert_eq!(err.error.status.as_deref(), Some("NOT_FOUND"));
    assert!(err.error.message.unwrap().contains("is not found"));
}

#[test]
fn test_error_body_partial() {
    let err: GeminiError = serde_json::from_value(json!({ "error": {} })).unwrap();
    assert!(err.error.message.is_none());
    assert!(err.error.status.is_none());
}
