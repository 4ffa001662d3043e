//! Binding registry: an explicit map from binding key to controller,
//! guarding against duplicate instantiation.
//!
//! Attaching is idempotent: the first attach for a key constructs a
//! controller, every later attach for that key routes its directive to the
//! existing instance instead.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use crate::indicator::controller::DotsController;
use crate::indicator::options::{Directive, DotsOptions};
use crate::sink::TextSink;

/// Keeps at most one [`DotsController`] per binding key.
#[derive(Default)]
pub struct Indicators {
    bound: HashMap<String, DotsController>,
}

impl Indicators {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind-or-reconfigure.
    ///
    /// For an unbound key, constructs a controller on `sink`: a `Patch`
    /// directive is merged over the default options, `Stop` constructs
    /// without autostart, and `Start` constructs with the defaults (which
    /// autostart). For a key that is already bound, the directive is
    /// applied to the existing controller and `sink` is ignored.
    pub fn attach(&mut self, key: impl Into<String>, sink: Arc<dyn TextSink>, directive: Directive) {
        match self.bound.entry(key.into()) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().apply(directive);
            }
            Entry::Vacant(entry) => {
                let options = match directive {
                    Directive::Patch(patch) => {
                        let mut options = DotsOptions::default();
                        options.apply(patch);
                        options
                    }
                    Directive::Start => DotsOptions::default(),
                    Directive::Stop => DotsOptions {
                        start: false,
                        ..DotsOptions::default()
                    },
                };
                entry.insert(DotsController::new(sink, options));
            }
        }
    }

    /// Stop the indicator bound to `key` (clearing its sink) and remove the
    /// binding. Returns whether a binding existed.
    pub fn detach(&mut self, key: &str) -> bool {
        if let Some(mut controller) = self.bound.remove(key) {
            controller.stop();
            true
        } else {
            false
        }
    }

    /// The controller bound to `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DotsController> {
        self.bound.get(key)
    }

    /// Mutable access to the controller bound to `key`, if any.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut DotsController> {
        self.bound.get_mut(key)
    }

    /// Number of bound indicators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    /// Whether no indicators are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}
