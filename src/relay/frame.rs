//! Outward stream frames
//!
//! Tagged representation of everything the relay writes to a client:
//! forwarded upstream text, a terminal diagnostic, or the completion
//! sentinel. The wire encoding is SSE; data frames are passed through
//! verbatim because the upstream text already carries the provider's own
//! `data: ...` event framing.

use bytes::Bytes;

use crate::error::UpstreamErrorBody;

/// End-of-stream sentinel, the only positive completion signal clients get
pub const DONE_SENTINEL: &str = "data: [DONE]\n\n";

/// One outward frame of a relay session
#[derive(Debug, Clone)]
pub enum Frame {
    /// Decoded upstream text, forwarded verbatim
    Data(String),
    /// Terminal diagnostic; at most one per session, always the last frame
    Error(UpstreamErrorBody),
    /// Completion sentinel; absence signals an interrupted generation
    Done,
}

impl Frame {
    /// Encode the frame as wire bytes
    pub fn into_bytes(self) -> Bytes {
        match self {
            Frame::Data(text) => Bytes::from(text),
            Frame::Error(diagnostic) => {
                let json = serde_json::to_string(&diagnostic)
                    .expect("diagnostic frame should always serialize");
                Bytes::from(format!("data: {}\n\n", json))
            }
            Frame::Done => Bytes::from_static(DONE_SENTINEL.as_bytes()),
        }
    }
}
