//! Built-in deterministic export engine
//!
//! Renders a minimal SVG document from the job's chart configuration, or
//! passes raw inline input through unchanged. Binary formats transport
//! the rendered bytes base64-encoded. Identical inputs always produce
//! identical artifacts, which is what the harness's own tests rely on.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::common::Result;
use crate::options::{JobOptions, JobRequest};

use super::{ExportEngine, ExportReply};

const DEFAULT_WIDTH: u32 = 600;
const DEFAULT_HEIGHT: u32 = 400;

/// Loopback engine standing in for a real export backend
#[derive(Debug, Default, Clone)]
pub struct StubEngine;

#[async_trait]
impl ExportEngine for StubEngine {
    async fn export(&self, job: &JobRequest) -> Result<ExportReply> {
        let document = match &job.options.payload {
            Some(raw) => raw.svg.clone(),
            None => render_svg(&job.options),
        };

        let data = if job.options.export.export_type.is_binary() {
            STANDARD.encode(document.as_bytes())
        } else {
            document
        };

        Ok(ExportReply {
            data,
            options: job.options.clone(),
        })
    }
}

fn render_svg(options: &JobOptions) -> String {
    let title = options
        .options
        .as_ref()
        .and_then(|o| o.pointer("/title/text"))
        .and_then(|t| t.as_str())
        .unwrap_or("");

    let scale = options.export.scale;
    let width = (f64::from(options.export.width.unwrap_or(DEFAULT_WIDTH)) * scale) as u32;
    let height = (f64::from(options.export.height.unwrap_or(DEFAULT_HEIGHT)) * scale) as u32;

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\">\
<title>{}</title></svg>",
        escape(title)
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{ExportType, RawPayload};
    use serde_json::json;

    fn request(options: JobOptions) -> JobRequest {
        JobRequest {
            scenario: "test.json".to_string(),
            options,
        }
    }

    #[tokio::test]
    async fn test_svg_export_is_plain_text() {
        let mut options = JobOptions::baseline();
        options.export.export_type = ExportType::Svg;
        options.options = Some(json!({"title": {"text": "hi"}}));

        let reply = StubEngine.export(&request(options)).await.unwrap();
        assert!(reply.data.starts_with("<svg"));
        assert!(reply.data.contains("<title>hi</title>"));
    }

    #[tokio::test]
    async fn test_binary_export_is_base64() {
        let options = JobOptions::baseline();
        let reply = StubEngine.export(&request(options)).await.unwrap();

        let decoded = STANDARD.decode(&reply.data).unwrap();
        assert!(String::from_utf8(decoded).unwrap().starts_with("<svg"));
    }

    #[tokio::test]
    async fn test_raw_payload_passes_through() {
        let mut options = JobOptions::baseline();
        options.export.export_type = ExportType::Svg;
        options.payload = Some(RawPayload {
            svg: "<svg>verbatim</svg>".to_string(),
        });

        let reply = StubEngine.export(&request(options)).await.unwrap();
        assert_eq!(reply.data, "<svg>verbatim</svg>");
    }

    #[tokio::test]
    async fn test_scale_applies_to_dimensions() {
        let mut options = JobOptions::baseline();
        options.export.export_type = ExportType::Svg;
        options.export.scale = 2.0;

        let reply = StubEngine.export(&request(options)).await.unwrap();
        assert!(reply.data.contains("width=\"1200\""));
        assert!(reply.data.contains("height=\"800\""));
    }

    #[tokio::test]
    async fn test_title_is_escaped() {
        let mut options = JobOptions::baseline();
        options.export.export_type = ExportType::Svg;
        options.options = Some(json!({"title": {"text": "a < b & c"}}));

        let reply = StubEngine.export(&request(options)).await.unwrap();
        assert!(reply.data.contains("a &lt; b &amp; c"));
    }

    #[tokio::test]
    async fn test_identical_inputs_render_identically() {
        let mut options = JobOptions::baseline();
        options.options = Some(json!({"title": {"text": "same"}}));

        let first = StubEngine.export(&request(options.clone())).await.unwrap();
        let second = StubEngine.export(&request(options)).await.unwrap();
        assert_eq!(first.data, second.data);
    }
}
