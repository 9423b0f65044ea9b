// HTTP response utilities for JSON/CSV bodies with optional Brotli encoding
use crate::application::csv_export::CsvExport;
use async_compression::tokio::bufread::BrotliEncoder;
use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Response, StatusCode},
};
use serde::Serialize;
use tokio::io::AsyncReadExt;

/// Whether the client advertised Brotli in `Accept-Encoding`
pub fn accepts_brotli(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.contains("br"))
        .unwrap_or(false)
}

async fn brotli(bytes: Vec<u8>) -> Result<Vec<u8>, StatusCode> {
    let cursor = std::io::Cursor::new(bytes);
    let mut encoder = BrotliEncoder::new(cursor);
    let mut compressed = Vec::new();
    encoder.read_to_end(&mut compressed).await.map_err(|e| {
        tracing::error!("Brotli compression error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(compressed)
}

async fn encoded_response(
    bytes: Vec<u8>,
    content_type: &'static str,
    compress: bool,
    extra: Option<(header::HeaderName, HeaderValue)>,
) -> Result<Response<Body>, StatusCode> {
    let (body_bytes, content_encoding) = if compress {
        let original_len = bytes.len();
        let compressed = brotli(bytes).await?;
        tracing::debug!("Compressed: {} → {} bytes", original_len, compressed.len());
        (compressed, Some("br"))
    } else {
        (bytes, None)
    };

    let mut response_builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, body_bytes.len());

    if let Some(encoding) = content_encoding {
        response_builder = response_builder
            .header(header::CONTENT_ENCODING, encoding)
            .header(header::VARY, "accept-encoding");
    }

    if let Some((name, value)) = extra {
        response_builder = response_builder.header(name, value);
    }

    response_builder.body(Body::from(body_bytes)).map_err(|e| {
        tracing::error!("Response build error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Serialize a value as JSON, optionally compressed
pub async fn json_response<T: Serialize>(
    value: &T,
    compress: bool,
) -> Result<Response<Body>, StatusCode> {
    let bytes = serde_json::to_vec(value).map_err(|e| {
        tracing::error!("JSON serialization error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    encoded_response(bytes, "application/json", compress, None).await
}

/// CSV body served as a file download
pub async fn csv_download(
    export: CsvExport,
    compress: bool,
) -> Result<Response<Body>, StatusCode> {
    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        export.filename
    ))
    .map_err(|e| {
        tracing::error!("Invalid export filename {:?}: {}", export.filename, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    encoded_response(
        export.body.into_bytes(),
        "text/csv; charset=utf-8",
        compress,
        Some((header::CONTENT_DISPOSITION, disposition)),
    )
    .await
}
