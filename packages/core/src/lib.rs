#![deny(clippy::all)]

//! Kremling core
//!
//! Component-scoped CSS: selectors written against the `&` marker are
//! rewritten to an attribute selector unique to the injected stylesheet,
//! and identical CSS text is shared across every consumer through a
//! reference-counted registry.
//!
//! ```
//! use kremling_core::{bind, shared, MemorySink, StyleRegistry};
//!
//! let registry = shared(StyleRegistry::new(MemorySink::new()));
//! let binding = bind(&registry, "& .title { color: red; }", None).unwrap();
//! assert_eq!(binding.attr(), "kremling0");
//! assert_eq!(
//!     registry.borrow().sink().texts(),
//!     vec!["[kremling0] .title, [kremling0].title { color: red; }"]
//! );
//!
//! drop(binding);
//! assert!(registry.borrow().sink().is_empty());
//! ```

pub mod allocator;
pub mod binding;
pub mod config;
pub mod css_source;
mod error;
pub mod registry;
pub mod scope_css;
pub mod sink;

// Re-exports
pub use binding::{bind, shared, SharedRegistry, StyleBinding};
pub use config::{ScopeConfig, DEFAULT_NAMESPACE};
pub use css_source::{CssDescriptor, CssSource};
pub use error::{Result, ScopeError};
pub use registry::{Lease, ReleaseOutcome, StyleRegistry};
pub use scope_css::{scope_selector_for, transform_css};
pub use sink::{MemorySink, SinkHandle, StyleEntry, StyleSink};
