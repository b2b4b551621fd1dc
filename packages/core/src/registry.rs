//! Style Resource Registry
//!
//! Reference-counted cache mapping CSS source text to a single injected
//! style resource.
//!
//! Every consumer presenting textually identical CSS shares one sink entry
//! and one scope attribute. The entry is inserted on the first acquisition
//! and removed when the last lease for it is released.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, trace};

use crate::allocator::ScopeAllocator;
use crate::config::ScopeConfig;
use crate::css_source::CssSource;
use crate::error::{Result, ScopeError};
use crate::scope_css::{scope_selector_for, ScopeCss};
use crate::sink::{SinkHandle, StyleSink};

#[derive(Debug)]
struct StyleResource {
    attr: String,
    ref_count: usize,
    handle: SinkHandle,
    generation: u64,
}

/// Proof of one acquisition. Handing it back to [`StyleRegistry::release`]
/// consumes it, so a lease can only be released once.
#[derive(Debug, PartialEq, Eq)]
pub struct Lease {
    key: String,
    attr: String,
    generation: u64,
}

impl Lease {
    /// Scope attribute name to put on rendered root elements.
    pub fn attr(&self) -> &str {
        &self.attr
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn selector(&self) -> String {
        scope_selector_for(&self.attr)
    }
}

/// Leases dropped while the registry was already borrowed.
pub(crate) type DeferredReleases = Rc<RefCell<Vec<Lease>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Other consumers still hold the resource.
    Retained { remaining: usize },
    /// The last lease was released; the sink entry is gone.
    Evicted,
}

#[derive(Debug)]
pub struct StyleRegistry<S: StyleSink> {
    resources: HashMap<String, StyleResource>,
    allocator: ScopeAllocator,
    next_generation: u64,
    scope_css: ScopeCss,
    config: ScopeConfig,
    deferred: DeferredReleases,
    sink: S,
}

impl<S: StyleSink> StyleRegistry<S> {
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, ScopeConfig::default())
    }

    pub fn with_config(sink: S, config: ScopeConfig) -> Self {
        StyleRegistry {
            resources: HashMap::new(),
            allocator: ScopeAllocator::new(),
            next_generation: 0,
            scope_css: ScopeCss::new(),
            config,
            deferred: Rc::new(RefCell::new(Vec::new())),
            sink,
        }
    }

    /// Register interest in `source`.
    ///
    /// A cache hit bumps the reference count and returns the existing
    /// attribute; the namespace argument is ignored in that case. A miss
    /// allocates an attribute, scopes raw CSS against it (precomputed styles
    /// are injected verbatim) and inserts the result into the sink.
    ///
    /// The attribute is the namespace with the suffix appended directly, so
    /// names only stay distinct while namespaces do not end in digits: an
    /// override of `kremling1` with suffix `0` and the default namespace with
    /// suffix `10` both yield `kremling10`.
    pub fn acquire(&mut self, source: &CssSource, namespace: Option<&str>) -> Result<Lease> {
        self.drain_deferred();
        source.validate()?;
        let key = source.cache_key();

        if let Some(resource) = self.resources.get_mut(key) {
            resource.ref_count += 1;
            trace!(
                "reusing style resource {} (refs: {})",
                resource.attr,
                resource.ref_count
            );
            return Ok(Lease {
                key: key.to_string(),
                attr: resource.attr.clone(),
                generation: resource.generation,
            });
        }

        let namespace = self.resolve_namespace(source, namespace).to_string();
        let (attr, text) = match source {
            CssSource::Raw(css) => {
                let attr = format!("{}{}", namespace, self.allocator.next_suffix());
                let text = self
                    .scope_css
                    .scope_css_text(css, &scope_selector_for(&attr));
                (attr, text)
            }
            // Already scoped by the build step; the attribute is trusted as is.
            CssSource::Precomputed(descriptor) => (
                format!("{}{}", namespace, descriptor.id),
                descriptor.styles.clone(),
            ),
        };

        let handle = self.sink.insert(&text, &attr);
        let generation = self.next_generation;
        self.next_generation += 1;
        debug!(
            "created style resource {} ({} bytes, sink handle {})",
            attr,
            text.len(),
            handle.raw()
        );

        let resource = self
            .resources
            .entry(key.to_string())
            .or_insert(StyleResource {
                attr: attr.clone(),
                ref_count: 0,
                handle,
                generation,
            });
        resource.ref_count += 1;

        Ok(Lease {
            key: key.to_string(),
            attr,
            generation,
        })
    }

    /// Drop one reference. At zero the sink entry is removed and the key
    /// evicted. A lease for a resource that no longer exists (evicted, or
    /// issued before [`reset`](Self::reset)) changes nothing and reports
    /// [`ScopeError::DoubleRelease`].
    pub fn release(&mut self, lease: Lease) -> Result<ReleaseOutcome> {
        self.drain_deferred();
        self.release_lease(lease)
    }

    fn release_lease(&mut self, lease: Lease) -> Result<ReleaseOutcome> {
        let Lease { key, generation, .. } = lease;
        let resource = match self.resources.get_mut(&key) {
            Some(resource) if resource.generation == generation => resource,
            _ => return Err(ScopeError::DoubleRelease { key }),
        };

        resource.ref_count = resource.ref_count.saturating_sub(1);
        if resource.ref_count > 0 {
            trace!(
                "released style resource {} (refs: {})",
                resource.attr,
                resource.ref_count
            );
            return Ok(ReleaseOutcome::Retained {
                remaining: resource.ref_count,
            });
        }

        if let Some(resource) = self.resources.remove(&key) {
            self.sink.remove(resource.handle);
            debug!(
                "evicted style resource {} (sink handle {})",
                resource.attr,
                resource.handle.raw()
            );
        }
        Ok(ReleaseOutcome::Evicted)
    }

    /// Forget every resource and restart attribute numbering. The sink is
    /// left alone; callers clear it themselves when they need to.
    pub fn reset(&mut self) {
        self.drain_deferred();
        debug!("resetting style registry ({} resources)", self.resources.len());
        self.resources.clear();
        self.allocator.reset();
    }

    /// Apply releases parked while the registry was borrowed. Runs at the
    /// start of every `acquire`, `release` and `reset`.
    pub fn drain_deferred(&mut self) {
        let parked = std::mem::take(&mut *self.deferred.borrow_mut());
        for lease in parked {
            if let Err(err) = self.release_lease(lease) {
                debug!("ignoring deferred release: {}", err);
            }
        }
    }

    /// Number of releases waiting for [`drain_deferred`](Self::drain_deferred).
    pub fn deferred_len(&self) -> usize {
        self.deferred.borrow().len()
    }

    pub(crate) fn deferred_queue(&self) -> DeferredReleases {
        Rc::clone(&self.deferred)
    }

    pub fn ref_count(&self, key: &str) -> usize {
        self.resources.get(key).map_or(0, |r| r.ref_count)
    }

    pub fn attr_for(&self, key: &str) -> Option<&str> {
        self.resources.get(key).map(|r| r.attr.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.resources.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn resolve_namespace<'a>(
        &'a self,
        source: &'a CssSource,
        namespace: Option<&'a str>,
    ) -> &'a str {
        namespace
            .filter(|ns| !ns.is_empty())
            .or_else(|| source.namespace().filter(|ns| !ns.is_empty()))
            .unwrap_or(self.config.default_namespace.as_str())
    }
}
