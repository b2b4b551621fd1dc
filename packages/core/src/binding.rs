//! Lifecycle binding
//!
//! Ties a consumer's mount/update/unmount cycle to registry leases. A host
//! adapter calls [`bind`] when a component mounts, [`StyleBinding::update`]
//! when its CSS changes, and drops the binding (or calls
//! [`StyleBinding::release`]) when it unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use log::{debug, trace};

use crate::css_source::CssSource;
use crate::error::Result;
use crate::registry::{DeferredReleases, Lease, StyleRegistry};
use crate::scope_css::scope_selector_for;
use crate::sink::StyleSink;

/// Registry handle shared by every binding on the same thread.
pub type SharedRegistry<S> = Rc<RefCell<StyleRegistry<S>>>;

pub fn shared<S: StyleSink>(registry: StyleRegistry<S>) -> SharedRegistry<S> {
    Rc::new(RefCell::new(registry))
}

/// Acquire `source` and return a handle that releases it on drop.
pub fn bind<S: StyleSink>(
    registry: &SharedRegistry<S>,
    source: impl Into<CssSource>,
    namespace: Option<&str>,
) -> Result<StyleBinding<S>> {
    let source = source.into();
    let (lease, deferred) = {
        let mut registry = registry.borrow_mut();
        (registry.acquire(&source, namespace)?, registry.deferred_queue())
    };
    Ok(StyleBinding {
        registry: Rc::clone(registry),
        deferred,
        attr: lease.attr().to_string(),
        lease: Some(lease),
        source,
        namespace: namespace.map(str::to_string),
    })
}

pub struct StyleBinding<S: StyleSink> {
    registry: SharedRegistry<S>,
    deferred: DeferredReleases,
    lease: Option<Lease>,
    attr: String,
    source: CssSource,
    namespace: Option<String>,
}

impl<S: StyleSink> StyleBinding<S> {
    /// Scope attribute name. Still readable after release.
    pub fn attr(&self) -> &str {
        &self.attr
    }

    pub fn selector(&self) -> String {
        scope_selector_for(&self.attr)
    }

    /// The `{ attr: "" }` pair a host spreads onto rendered root elements.
    pub fn props(&self) -> IndexMap<String, String> {
        let mut props = IndexMap::with_capacity(1);
        props.insert(self.attr.clone(), String::new());
        props
    }

    pub fn source(&self) -> &CssSource {
        &self.source
    }

    pub fn is_active(&self) -> bool {
        self.lease.is_some()
    }

    /// Swap to new CSS. Unchanged input is a no-op; anything else releases
    /// the old resource before acquiring the new one, since other bindings
    /// may still hold the old resource.
    pub fn update(&mut self, source: impl Into<CssSource>, namespace: Option<&str>) -> Result<()> {
        let source = source.into();
        if self.is_active() && source == self.source && namespace == self.namespace.as_deref() {
            return Ok(());
        }
        source.validate()?;

        self.release();
        let lease = self.registry.borrow_mut().acquire(&source, namespace)?;
        trace!("binding moved from {} to {}", self.attr, lease.attr());
        self.attr = lease.attr().to_string();
        self.lease = Some(lease);
        self.source = source;
        self.namespace = namespace.map(str::to_string);
        Ok(())
    }

    /// Give the lease back. Calling this again is a no-op. If the registry
    /// is borrowed elsewhere the lease is parked and released by the
    /// registry's next `acquire`, `release` or `reset`.
    pub fn release(&mut self) {
        let Some(lease) = self.lease.take() else {
            return;
        };
        match self.registry.try_borrow_mut() {
            Ok(mut registry) => {
                if let Err(err) = registry.release(lease) {
                    debug!("ignoring release of {}: {}", self.attr, err);
                }
            }
            Err(_) => {
                trace!("registry busy, deferring release of {}", self.attr);
                self.deferred.borrow_mut().push(lease);
            }
        }
    }
}

impl<S: StyleSink> Drop for StyleBinding<S> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<S: StyleSink> std::fmt::Debug for StyleBinding<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleBinding")
            .field("attr", &self.attr)
            .field("active", &self.is_active())
            .finish()
    }
}
