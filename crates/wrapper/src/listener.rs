//! Capture buffer for one output stream of the wrapped binary.

/// Accumulates the chunks a child process writes to one of its streams.
#[derive(Debug, Default, Clone)]
pub struct OutputListener {
    data: Vec<u8>,
}

impl OutputListener {
    /// Create an empty listener.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a chunk.
    pub fn append(&mut self, chunk: &[u8]) {
        self.data.extend_from_slice(chunk);
    }

    /// Everything recorded so far, decoded as UTF-8.
    ///
    /// Invalid sequences are replaced, so a multi-byte character split
    /// across two chunks still decodes once both have arrived.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}
