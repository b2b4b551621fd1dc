//! Style sink
//!
//! The ordered container scoped style text is injected into, such as a
//! document's `<head>`. The registry only ever inserts and removes; reading
//! the contents back is left to the host and its tests.

use indexmap::IndexMap;

/// `type` attribute carried by injected style entries.
pub const DEFAULT_STYLE_TYPE: &str = "text/css";

/// Identifies one inserted entry for later removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SinkHandle(u64);

impl SinkHandle {
    pub const fn new(raw: u64) -> Self {
        SinkHandle(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

pub trait StyleSink {
    /// Append `text` as a new entry tagged with the scope attribute `attr`.
    fn insert(&mut self, text: &str, attr: &str) -> SinkHandle;

    /// Remove a previously inserted entry. Unknown handles are ignored.
    fn remove(&mut self, handle: SinkHandle);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEntry {
    pub handle: SinkHandle,
    pub text: String,
    pub attr: String,
    pub style_type: String,
}

/// In-memory sink keeping entries in insertion order.
#[derive(Debug)]
pub struct MemorySink {
    entries: IndexMap<SinkHandle, StyleEntry>,
    next_handle: u64,
    style_type: String,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::with_style_type(DEFAULT_STYLE_TYPE)
    }

    pub fn with_style_type(style_type: impl Into<String>) -> Self {
        MemorySink {
            entries: IndexMap::new(),
            next_handle: 0,
            style_type: style_type.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, handle: SinkHandle) -> Option<&StyleEntry> {
        self.entries.get(&handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleEntry> {
        self.entries.values()
    }

    pub fn find_by_attr(&self, attr: &str) -> Option<&StyleEntry> {
        self.entries.values().find(|entry| entry.attr == attr)
    }

    /// Entry texts in document order.
    pub fn texts(&self) -> Vec<&str> {
        self.entries.values().map(|entry| entry.text.as_str()).collect()
    }

    /// Drop every entry. Handle numbering continues where it left off.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleSink for MemorySink {
    fn insert(&mut self, text: &str, attr: &str) -> SinkHandle {
        let handle = SinkHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.insert(
            handle,
            StyleEntry {
                handle,
                text: text.to_string(),
                attr: attr.to_string(),
                style_type: self.style_type.clone(),
            },
        );
        handle
    }

    fn remove(&mut self, handle: SinkHandle) {
        // shift_remove keeps the remaining entries in document order
        self.entries.shift_remove(&handle);
    }
}
