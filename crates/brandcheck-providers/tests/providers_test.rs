//! Provider tests: catalog font matching, Ollama request shape, error mapping.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use brandcheck_core::config::{FontsConfig, JudgeConfig};
use brandcheck_core::models::{FontSet, Rgb, RgbRaster};
use brandcheck_core::traits::{IFontNameExtractor, ITextJudge, IVisionJudge};
use brandcheck_providers::ollama::GenerateRequest;
use brandcheck_providers::{
    create_judges, CatalogFontExtractor, OllamaClient, OllamaTextJudge, OllamaVisionJudge,
};
use test_fixtures::StaticRecognizer;

fn blank() -> RgbRaster {
    RgbRaster::solid(4, 4, Rgb::WHITE)
}

/// Serve one canned HTTP response on a random local port. Returns the base URL.
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        stream
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();
        let mut reader = BufReader::new(&stream);

        // Drain the request so the client sees the response, not a reset.
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap_or(0);
                }
            }
        }
        let mut request_body = vec![0u8; content_length];
        let _ = reader.read_exact(&mut request_body);

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let mut writer = &stream;
        let _ = writer.write_all(response.as_bytes());
        let _ = writer.flush();
    });
    format!("http://{addr}")
}

// ─── Catalog Fonts ───────────────────────────────────────────────────────────

#[test]
fn catalog_matches_builtin_fonts_case_insensitively() {
    let extractor = CatalogFontExtractor::new(Arc::new(StaticRecognizer::new([
        "Headline set in LEXEND bold",
        "Body: inter regular 12pt",
    ])));
    let expected: FontSet = ["Inter", "Lexend"].into_iter().collect();
    assert_eq!(extractor.detect_fonts(&blank()), expected);
}

#[test]
fn catalog_does_not_match_inside_words() {
    let extractor = CatalogFontExtractor::new(Arc::new(StaticRecognizer::new([
        "International expansion plan",
    ])));
    assert!(extractor.detect_fonts(&blank()).is_empty());
}

#[test]
fn catalog_includes_configured_fonts() {
    let config = FontsConfig {
        known_fonts: vec!["Poppins".to_string(), "arial".to_string(), " ".to_string()],
    };
    let extractor = CatalogFontExtractor::with_config(
        Arc::new(StaticRecognizer::new(["Poppins SemiBold"])),
        &config,
    );
    assert_eq!(extractor.catalog().len(), 6);
    assert!(extractor.detect_fonts(&blank()).contains("Poppins"));
}

#[test]
fn multi_word_family_matches() {
    let extractor =
        CatalogFontExtractor::new(Arc::new(StaticRecognizer::new(["times new roman"])));
    assert!(extractor.detect_fonts(&blank()).contains("Times New Roman"));
}

#[test]
fn recognizer_failure_yields_no_fonts() {
    let extractor = CatalogFontExtractor::new(Arc::new(StaticRecognizer::failing()));
    assert!(extractor.detect_fonts(&blank()).is_empty());
}

// ─── Ollama ──────────────────────────────────────────────────────────────────

#[test]
fn text_request_omits_images() {
    let request = GenerateRequest {
        model: "llama3",
        prompt: "Are these colors on brand?",
        images: Vec::new(),
        stream: false,
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["model"], "llama3");
    assert_eq!(json["stream"], false);
    assert!(json.get("images").is_none());
}

#[test]
fn vision_request_carries_images() {
    let request = GenerateRequest {
        model: "llava",
        prompt: "Where is the logo?",
        images: vec!["UE5H".to_string()],
        stream: false,
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["images"][0], "UE5H");
}

#[test]
fn client_builds_generate_url() {
    let client = OllamaClient::new("http://localhost:11434/", Duration::from_secs(5)).unwrap();
    assert_eq!(client.generate_url(), "http://localhost:11434/api/generate");
}

#[test]
fn unreachable_server_is_model_unavailable() {
    let client = OllamaClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    let judge = OllamaTextJudge::new(client.clone(), "llama3");
    let err = judge.ask("hello").unwrap_err();
    assert_eq!(err.kind(), "model_unavailable");
    assert!(err.to_string().starts_with("model unavailable: llama3"));

    let mut image = tempfile::NamedTempFile::new().unwrap();
    image.write_all(b"png").unwrap();
    let vision = OllamaVisionJudge::new(client, "llava");
    let err = vision.ask(image.path(), "where?").unwrap_err();
    assert_eq!(err.kind(), "model_unavailable");
}

#[test]
fn generate_returns_the_answer_text() {
    let base = serve_once("200 OK", r#"{"response":"1: fine","done":true}"#);
    let client = OllamaClient::new(base, Duration::from_secs(5)).unwrap();
    let judge = OllamaTextJudge::new(client, "llama3");
    assert_eq!(judge.ask("hello").unwrap(), "1: fine");
}

#[test]
fn error_status_is_model_unavailable() {
    let base = serve_once("500 Internal Server Error", r#"{"error":"model not loaded"}"#);
    let client = OllamaClient::new(base, Duration::from_secs(5)).unwrap();
    let judge = OllamaTextJudge::new(client, "llama3");
    let err = judge.ask("hello").unwrap_err();
    assert_eq!(err.kind(), "model_unavailable");
    let message = err.to_string();
    assert!(message.contains("500"), "{message}");
    assert!(message.contains("model not loaded"), "{message}");
}

#[test]
fn malformed_body_is_model_unavailable() {
    let base = serve_once("200 OK", "<html>not json</html>");
    let client = OllamaClient::new(base, Duration::from_secs(5)).unwrap();
    let judge = OllamaTextJudge::new(client, "llama3");
    let err = judge.ask("hello").unwrap_err();
    assert_eq!(err.kind(), "model_unavailable");
    assert!(err.to_string().contains("JSON parse error"), "{err}");
}

#[test]
fn body_without_response_field_is_model_unavailable() {
    let base = serve_once("200 OK", r#"{"done":true}"#);
    let client = OllamaClient::new(base, Duration::from_secs(5)).unwrap();
    let judge = OllamaTextJudge::new(client, "llama3");
    assert_eq!(judge.ask("hello").unwrap_err().kind(), "model_unavailable");
}

#[test]
fn factory_uses_configured_models() {
    let config = JudgeConfig {
        vision_model: "bakllava".to_string(),
        text_model: "mistral".to_string(),
        ..JudgeConfig::default()
    };
    let judges = create_judges(&config).unwrap();
    assert_eq!(judges.vision.name(), "bakllava");
    assert_eq!(judges.text.name(), "mistral");
}
