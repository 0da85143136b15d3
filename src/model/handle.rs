use std::fmt;

/// Handle to a bounding box entry of the panel.
///
/// Handles are allocated from a counter and never reused by the same panel,
/// so a stale handle can't alias a newer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxHandle(u32);

impl BoxHandle {
    pub(crate) fn new(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for BoxHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
