//! Newline framing over the raw byte stream.
//!
//! The stream protocol has no length prefix: each message is one line of
//! UTF-8 text terminated by a single `\n`. Reads from the socket arrive at
//! arbitrary boundaries, so the splitter buffers whatever trails the last
//! newline and glues it to the next chunk.

/// Splits an incoming byte stream into complete message lines.
#[derive(Debug, Default)]
pub struct MessageSplitter {
    buffer: Vec<u8>,
}

impl MessageSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one chunk of bytes and returns every message completed by
    /// it, in arrival order. An unterminated tail stays buffered for the
    /// next call; it is never yielded on its own.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let mut messages = Vec::new();
        while let Some(end) = self.buffer.iter().position(|&byte| byte == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=end).collect();
            messages.push(String::from_utf8_lossy(&line[..end]).into_owned());
        }

        messages
    }

    /// Whether an incomplete message is still buffered.
    pub fn has_partial(&self) -> bool {
        !self.buffer.is_empty()
    }
}
