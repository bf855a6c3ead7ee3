//! Incremental UTF-8 decoding
//!
//! Upstream bodies arrive as byte spans that may split a multi-byte
//! character across span boundaries. This decoder carries the trailing
//! bytes of an incomplete character between calls so the forwarded text is
//! identical to decoding the whole body at once.

/// Stateful decoder for a byte stream containing UTF-8 text.
///
/// Invalid sequences are replaced with U+FFFD and never abort decoding.
///
/// # Example
/// ```
/// use courier::relay::StreamDecoder;
///
/// let mut decoder = StreamDecoder::new();
///
/// // "é" is 0xC3 0xA9; the span boundary falls inside it
/// assert_eq!(decoder.decode(b"caf\xC3"), "caf");
/// assert_eq!(decoder.decode(b"\xA9"), "é");
/// ```
#[derive(Debug, Default)]
pub struct StreamDecoder {
    /// Trailing bytes of an incomplete character from the previous span
    pending: Vec<u8>,
}

impl StreamDecoder {
    /// Create a new decoder with no pending state
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the next byte span, returning all text that is complete so far.
    ///
    /// An incomplete trailing sequence is retained for the next call; an
    /// invalid sequence becomes one U+FFFD per rejected byte run.
    pub fn decode(&mut self, bytes: &[u8]) -> String {
        self.pending.extend_from_slice(bytes);
        let buf = std::mem::take(&mut self.pending);

        let mut out = String::with_capacity(buf.len());
        let mut input = buf.as_slice();

        loop {
            match std::str::from_utf8(input) {
                Ok(text) => {
                    out.push_str(text);
                    input = &[];
                    break;
                }
                Err(e) => {
                    let (valid, rest) = input.split_at(e.valid_up_to());
                    out.push_str(std::str::from_utf8(valid).unwrap_or_default());

                    match e.error_len() {
                        Some(invalid_len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            input = &rest[invalid_len..];
                        }
                        None => {
                            // Incomplete trailing character; wait for more bytes
                            break;
                        }
                    }
                }
            }
        }

        self.pending = input.to_vec();
        out
    }

    /// Flush the decoder at end of stream.
    ///
    /// A truncated trailing sequence decodes to U+FFFD, matching what a
    /// whole-body lossy decode would produce.
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            return String::new();
        }
        let tail = std::mem::take(&mut self.pending);
        String::from_utf8_lossy(&tail).into_owned()
    }

    /// Check whether an incomplete character is pending
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
