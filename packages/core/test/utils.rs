//! Registry Test Utils

#![allow(dead_code)]

use kremling_core::{shared, MemorySink, SharedRegistry, StyleRegistry};

pub const SOME_RULE: &str = "
      & .someRule {
        background-color: red;
      }
    ";

pub fn registry() -> StyleRegistry<MemorySink> {
    StyleRegistry::new(MemorySink::new())
}

pub fn shared_registry() -> SharedRegistry<MemorySink> {
    shared(registry())
}

pub fn style_count(registry: &SharedRegistry<MemorySink>) -> usize {
    registry.borrow().sink().len()
}

pub fn first_style_text(registry: &SharedRegistry<MemorySink>) -> Option<String> {
    registry
        .borrow()
        .sink()
        .iter()
        .next()
        .map(|entry| entry.text.clone())
}
