//! Stylesheet registration through an external collaborator.
//!
//! The badge markup relies on a CSS asset that the host application serves.
//! This crate never touches the asset itself; it asks a caller-provided
//! [`StyleRegistrar`] to register it, and guarantees that the request goes
//! through at most once per process via [`StyleGate`].
//!
//! The gate delivers at-most-once through itself; the registrar is expected
//! to be idempotent on its side as well, so the overall contract is
//! at-least-once with idempotent effect even if several gates exist.

use std::sync::atomic::{AtomicBool, Ordering};

/// Descriptor for a named stylesheet resource.
///
/// Mirrors what asset pipelines typically want: a stable identifier, the
/// location the asset path is relative to, the relative path itself, and the
/// identifiers of stylesheets it depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSheet {
    /// Stable identifier for the resource.
    pub id: &'static str,
    /// Location the relative path is resolved against.
    pub source: &'static str,
    /// Path of the asset relative to `source`.
    pub path: &'static str,
    /// Identifiers of stylesheets that must load first.
    pub dependencies: &'static [&'static str],
}

/// The stylesheet backing the badge markup.
pub const BADGE_STYLESHEET: StyleSheet = StyleSheet {
    id: "insignia-badges",
    source: env!("CARGO_MANIFEST_DIR"),
    path: "assets/badges.css",
    dependencies: &[],
};

/// External collaborator that registers stylesheet resources.
///
/// Implementations adapt whatever asset-registration mechanism the host
/// application uses. Registration must be idempotent on the collaborator's
/// side; this crate additionally gates its own calls so the collaborator is
/// invoked at most once per process through a given gate.
pub trait StyleRegistrar: Send + Sync {
    /// Registers the given stylesheet with the host asset system.
    ///
    /// Failures are the collaborator's to report or log; the badge core
    /// treats registration as opaque and has no recovery path of its own.
    fn register_style(&self, sheet: &StyleSheet);
}

/// Once-only gate in front of a [`StyleRegistrar`].
///
/// Holds the single piece of shared mutable state in the crate: a boolean
/// that starts `false`, flips to `true` on the first [`ensure`](Self::ensure)
/// call, and is never reset. The flip is a single atomic swap, so concurrent
/// first calls race to exactly one winner and the registrar is called at most
/// once through this gate.
///
/// # Example
///
/// ```rust
/// use insignia::{StyleGate, StyleRegistrar, StyleSheet, BADGE_STYLESHEET};
///
/// struct Noop;
/// impl StyleRegistrar for Noop {
///     fn register_style(&self, _sheet: &StyleSheet) {}
/// }
///
/// static GATE: StyleGate = StyleGate::new();
/// GATE.ensure(&Noop, &BADGE_STYLESHEET);
/// assert!(GATE.is_registered());
/// ```
#[derive(Debug)]
pub struct StyleGate {
    registered: AtomicBool,
}

impl StyleGate {
    /// Creates a gate in the unregistered state.
    pub const fn new() -> Self {
        Self {
            registered: AtomicBool::new(false),
        }
    }

    /// Registers `sheet` through `registrar` if this gate has not fired yet.
    ///
    /// Subsequent calls are a cheap no-op regardless of which caller or
    /// resolver instance made the first one.
    pub fn ensure(&self, registrar: &dyn StyleRegistrar, sheet: &StyleSheet) {
        if !self.registered.swap(true, Ordering::AcqRel) {
            registrar.register_style(sheet);
        }
    }

    /// Whether the gate has fired.
    pub fn is_registered(&self) -> bool {
        self.registered.load(Ordering::Acquire)
    }
}

impl Default for StyleGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide gate used by every [`BadgeResolver`](crate::BadgeResolver).
pub(crate) static BADGE_STYLE_GATE: StyleGate = StyleGate::new();
