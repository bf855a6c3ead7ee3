//! Stream bridge
//!
//! Per-call relay loop between an established upstream body stream and the
//! downstream client. Bytes are forwarded in arrival order, decoded
//! incrementally, and never interpreted as provider event framing. Once the
//! upstream is established no error escapes the bridge: post-establishment
//! failures become a single terminal diagnostic frame, and a dropped
//! session (client disconnect) releases the upstream handle silently.

use std::convert::Infallible;
use std::fmt::Display;
use std::time::Duration;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::UpstreamErrorBody;

use super::decoder::StreamDecoder;
use super::frame::Frame;

/// Transient state of one relay call.
///
/// Owns the upstream body handle and the decoder for exactly one client
/// request; dropping the session (or the frame stream built from it)
/// releases the upstream connection. Nothing here outlives the HTTP call.
pub struct RelaySession<S> {
    id: Uuid,
    upstream: S,
    decoder: StreamDecoder,
    idle_timeout: Duration,
}

impl<S> RelaySession<S> {
    /// Wrap an established upstream stream in a new session
    pub fn new(upstream: S, idle_timeout: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            upstream,
            decoder: StreamDecoder::new(),
            idle_timeout,
        }
    }

    /// Session id, for log correlation
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Consume the session into its outward frame stream.
    ///
    /// Yields `Data` frames in upstream arrival order, then exactly one
    /// `Done` after a clean end of body. A mid-stream transport error or an
    /// idle timeout yields one terminal `Error` frame instead, and the
    /// stream ends without the sentinel.
    pub fn into_frames<E>(mut self) -> impl Stream<Item = Frame> + Send
    where
        S: Stream<Item = Result<Bytes, E>> + Unpin + Send + 'static,
        E: Display + Send + 'static,
    {
        async_stream::stream! {
            loop {
                match tokio::time::timeout(self.idle_timeout, self.upstream.next()).await {
                    Err(_) => {
                        warn!(
                            session = %self.id,
                            timeout_secs = self.idle_timeout.as_secs(),
                            "Upstream went silent, abandoning relay"
                        );
                        yield Frame::Error(UpstreamErrorBody::new(
                            None,
                            Some(format!(
                                "upstream idle for {}s",
                                self.idle_timeout.as_secs()
                            )),
                        ));
                        return;
                    }
                    Ok(None) => {
                        let tail = self.decoder.finish();
                        if !tail.is_empty() {
                            yield Frame::Data(tail);
                        }
                        debug!(session = %self.id, "Upstream body complete");
                        yield Frame::Done;
                        return;
                    }
                    Ok(Some(Ok(bytes))) => {
                        let text = self.decoder.decode(&bytes);
                        if !text.is_empty() {
                            yield Frame::Data(text);
                        }
                    }
                    Ok(Some(Err(e))) => {
                        warn!(session = %self.id, error = %e, "Upstream failed mid-stream");
                        yield Frame::Error(UpstreamErrorBody::new(None, Some(e.to_string())));
                        return;
                    }
                }
            }
        }
    }

    /// Frame stream encoded as SSE body bytes for `axum::body::Body::from_stream`
    pub fn into_sse<E>(self) -> impl Stream<Item = Result<Bytes, Infallible>> + Send
    where
        S: Stream<Item = Result<Bytes, E>> + Unpin + Send + 'static,
        E: Display + Send + 'static,
    {
        self.into_frames()
            .map(|frame| Ok::<_, Infallible>(frame.into_bytes()))
    }
}
