#[derive(Debug, Clone)]
pub struct Options {
    /// Indentation size (default: 2 spaces)
    pub indent: usize,
    /// Escape non-ASCII characters on output as `\uXXXX` (default: true).
    /// Normalized values are already ASCII, so this only affects object keys.
    pub ascii_only: bool,
    /// Create the destination directory before a batch run
    pub create_dest: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent: 2,
            ascii_only: true,
            create_dest: false,
        }
    }
}
