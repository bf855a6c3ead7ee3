//! Streaming relay core
//!
//! Bridges an established upstream response body to the downstream client:
//! incremental UTF-8 decoding across chunk boundaries, tagged outward
//! frames, and the per-session forwarding loop.

pub mod bridge;
pub mod decoder;
pub mod frame;

pub use bridge::RelaySession;
pub use decoder::StreamDecoder;
pub use frame::{Frame, DONE_SENTINEL};
