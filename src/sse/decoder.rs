//! Incremental line decoder for SSE response bodies.
//!
//! The transport hands over chunks that may end anywhere: in the middle of a
//! line, between the `\r` and `\n` of a CRLF pair, or inside a multi-byte
//! UTF-8 sequence. [`LineDecoder`] buffers whatever is not yet a complete line
//! and only ever returns whole lines, so the output does not depend on how the
//! body happened to be chunked.

/// Splits a chunked text stream into complete logical lines.
///
/// `\n`, `\r\n` and a lone `\r` all terminate a line. Returned lines never
/// contain terminator characters. The unterminated tail of the input is kept
/// in an internal buffer until a later chunk completes it.
#[derive(Debug, Default)]
pub struct LineDecoder {
    /// Unterminated suffix of the text fed so far
    buffer: String,
    /// Trailing bytes of an incomplete UTF-8 sequence (at most 3)
    partial_utf8: Vec<u8>,
    /// The previous chunk ended on `\r`; a leading `\n` belongs to that terminator
    skip_lf: bool,
}

impl LineDecoder {
    /// Create an empty decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a text chunk and return every line it completes, in order.
    pub fn feed(&mut self, chunk: &str) -> Vec<String> {
        let mut lines = Vec::new();
        if chunk.is_empty() {
            return lines;
        }

        let mut rest = chunk;
        if std::mem::take(&mut self.skip_lf) {
            rest = rest.strip_prefix('\n').unwrap_or(rest);
        }

        while let Some(pos) = rest.find(|c| c == '\r' || c == '\n') {
            self.buffer.push_str(&rest[..pos]);
            lines.push(std::mem::take(&mut self.buffer));

            let is_cr = rest.as_bytes()[pos] == b'\r';
            let after = &rest[pos + 1..];
            rest = if is_cr {
                match after.strip_prefix('\n') {
                    Some(remaining) => remaining,
                    None => {
                        // CRLF may straddle the chunk boundary
                        self.skip_lf = after.is_empty();
                        after
                    }
                }
            } else {
                after
            };
        }

        self.buffer.push_str(rest);
        lines
    }

    /// Feed raw body bytes and return every line they complete.
    ///
    /// An incomplete UTF-8 sequence at the end of `chunk` is held back until
    /// the next chunk supplies the rest of it. Invalid sequences decode to
    /// U+FFFD instead of failing the stream.
    pub fn feed_bytes(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut bytes = std::mem::take(&mut self.partial_utf8);
        bytes.extend_from_slice(chunk);

        let mut text = String::with_capacity(bytes.len());
        let mut input: &[u8] = &bytes;
        loop {
            match std::str::from_utf8(input) {
                Ok(valid) => {
                    text.push_str(valid);
                    input = &[];
                    break;
                }
                Err(err) => {
                    let (valid, after) = input.split_at(err.valid_up_to());
                    text.push_str(&String::from_utf8_lossy(valid));
                    match err.error_len() {
                        Some(invalid_len) => {
                            text.push(char::REPLACEMENT_CHARACTER);
                            input = &after[invalid_len..];
                        }
                        None => {
                            input = after;
                            break;
                        }
                    }
                }
            }
        }
        self.partial_utf8 = input.to_vec();

        self.feed(&text)
    }

    /// The unterminated text currently buffered.
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    /// Consume the decoder at end of stream.
    ///
    /// Returns the incomplete trailing line, if any. It is handed back for
    /// diagnostics only and must never be interpreted as a line.
    pub fn finish(self) -> Option<String> {
        let mut tail = self.buffer;
        if !self.partial_utf8.is_empty() {
            tail.push(char::REPLACEMENT_CHARACTER);
        }
        (!tail.is_empty()).then_some(tail)
    }
}
