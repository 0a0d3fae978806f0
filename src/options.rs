//! Stream options.

/// Options fixed when an [`XdrStdio`](crate::XdrStdio) is created.
///
/// ```
/// use xdrio::StdioOptions;
///
/// let opts = StdioOptions::new().enforce_mode(false);
/// assert!(!opts.enforces_mode());
/// assert!(StdioOptions::default().enforces_mode());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StdioOptions {
    enforce_mode: bool,
}

impl StdioOptions {
    /// Default options: direction checks on.
    #[must_use]
    pub const fn new() -> Self {
        Self { enforce_mode: true }
    }

    /// Reject `get_*` on encode streams and `put_*` on decode streams.
    ///
    /// When off, a mismatched call goes straight to the file handle.
    #[must_use]
    pub const fn enforce_mode(mut self, enforce: bool) -> Self {
        self.enforce_mode = enforce;
        self
    }

    /// Whether direction checks are on.
    #[inline]
    #[must_use]
    pub const fn enforces_mode(&self) -> bool {
        self.enforce_mode
    }
}

impl Default for StdioOptions {
    fn default() -> Self {
        Self::new()
    }
}
