// Newline-delimited JSON streaming utilities
use crate::application::streaming_service::StreamMessage;
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::stream::Stream;
use futures::StreamExt;

/// Create a chunked NDJSON streaming response
pub fn chunked_json_stream<S>(stream: S) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = StreamMessage> + Send + 'static,
{
    let byte_stream = stream.map(serialize_chunk);
    let body = Body::from_stream(byte_stream);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/x-ndjson")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(body)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// One message per line
fn serialize_chunk(msg: StreamMessage) -> Result<Bytes, std::io::Error> {
    let json = serde_json::to_vec(&msg).map_err(std::io::Error::other)?;

    let mut chunk = BytesMut::with_capacity(json.len() + 1);
    chunk.put_slice(&json);
    chunk.put_u8(b'\n');

    Ok(chunk.freeze())
}

/// Helper to create a streaming response from a receiver
pub fn stream_from_receiver(
    mut rx: tokio::sync::mpsc::Receiver<StreamMessage>,
) -> impl IntoResponse {
    let stream = async_stream::stream! {
        while let Some(msg) = rx.recv().await {
            yield msg;
        }
    };

    match chunked_json_stream(stream) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
