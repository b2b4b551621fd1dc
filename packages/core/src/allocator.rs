//! Scope-attribute allocator
//!
//! Hands out the numeric suffixes used to build attribute names for raw CSS.

#[derive(Debug, Default)]
pub struct ScopeAllocator {
    next_index: u64,
}

impl ScopeAllocator {
    pub fn new() -> Self {
        ScopeAllocator { next_index: 0 }
    }

    /// Returns "0", "1", "2", ... in order.
    pub fn next_suffix(&mut self) -> String {
        let suffix = self.next_index.to_string();
        self.next_index += 1;
        suffix
    }

    pub fn reset(&mut self) {
        self.next_index = 0;
    }
}
