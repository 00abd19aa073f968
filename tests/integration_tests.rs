use ai_cats::*;
use base64::{engine::general_purpose::STANDARD, Engine};

// --- Image shaping across the public surface ---

#[test]
fn test_every_shape_recovers_original_bytes() {
    let original: Vec<u8> = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
    for kind in [
        ResponseType::Blob,
        ResponseType::ArrayBuffer,
        ResponseType::Base64,
        ResponseType::DataUrl,
    ] {
        let shaped = ImageData::shape(original.clone(), kind);
        assert_eq!(shaped.into_bytes().unwrap(), original, "shape {:?}", kind);
    }
}

#[test]
fn test_base64_shape_matches_standard_encoding() {
    let original = b"not really a jpeg".to_vec();
    match ImageData::shape(original.clone(), ResponseType::Base64) {
        ImageData::Base64(text) => assert_eq!(text, STANDARD.encode(&original)),
        other => panic!("expected Base64, got {:?}", other),
    }
}

#[test]
fn test_data_url_uses_fixed_jpeg_prefix() {
    match ImageData::shape(vec![1, 2, 3], ResponseType::DataUrl) {
        ImageData::DataUrl(url) => {
            assert!(url.starts_with("data:image/jpeg;base64,"));
        }
        other => panic!("expected DataUrl, got {:?}", other),
    }
}

#[test]
fn test_empty_body_shapes_cleanly() {
    let shaped = ImageData::shape(Vec::new(), ResponseType::Base64);
    assert_eq!(shaped.into_bytes().unwrap(), Vec::<u8>::new());
}

// --- Wire tokens ---

#[test]
fn test_size_wire_tokens_are_bare_pixel_counts() {
    assert_eq!(Size::ALL.len(), 7);
    for size in Size::ALL {
        assert!(size.as_str().chars().all(|c| c.is_ascii_digit()));
    }
    assert_eq!(Size::default().as_str(), "1024");
}

#[test]
fn test_theme_round_trips_through_json() {
    let all = [
        Theme::Default,
        Theme::Spring,
        Theme::Summer,
        Theme::Autumn,
        Theme::Winter,
        Theme::Halloween,
        Theme::Xmas,
        Theme::NewYear,
        Theme::Easter,
    ];
    for theme in all {
        let json = serde_json::to_string(&theme).unwrap();
        assert_eq!(json, format!("\"{}\"", theme.as_str()));
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }
}

// --- Metadata decoding through the public types ---

#[test]
fn test_search_result_list_decodes() {
    let hits: Vec<SearchResult> = serde_json::from_str(
        r#"[
            {"id": "a1", "url": "https://x/a1.jpg"},
            {"id": "b2", "url": "https://x/b2.jpg"}
        ]"#,
    )
    .unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].id, "a1");
    assert_eq!(hits[1].url, "https://x/b2.jpg");
}

#[test]
fn test_cat_info_decodes_api_field_names() {
    let info: CatInfo = serde_json::from_str(
        r#"{
            "id": "3a7c9f2e-1b4d-4e8a-9c6f-d5e2a8b71c90",
            "dateCreated": 1714000000000,
            "prompt": "a cat in a santa hat",
            "theme": "Xmas"
        }"#,
    )
    .unwrap();
    assert_eq!(info.theme, Theme::Xmas);
    assert_eq!(info.date_created, 1714000000000);
    assert_eq!(info.prompt, "a cat in a santa hat");
}

// --- Client construction ---

#[test]
fn test_client_defaults_to_production_endpoint() {
    let client = CatsClient::new();
    assert_eq!(client.endpoint(), "https://api.ai-cats.net/v1");
    assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
}

#[test]
fn test_client_endpoint_override_drops_trailing_slash() {
    let client = CatsClient::new().with_endpoint("http://localhost:3000/");
    assert_eq!(client.endpoint(), "http://localhost:3000");
}

#[test]
fn test_client_is_cloneable_for_concurrent_use() {
    let client = CatsClient::new();
    let clone = client.clone();
    assert_eq!(client.endpoint(), clone.endpoint());
}

// --- Error surface ---

#[test]
fn test_request_failed_display_carries_status_text() {
    let err = CatsError::RequestFailed {
        context: "searching for cats",
        status: 503,
        status_text: "Service Unavailable".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("searching for cats"));
    assert!(msg.contains("503"));
    assert!(msg.contains("Service Unavailable"));
}
