//! Status resolution and badge rendering.

use std::collections::HashMap;
use std::sync::Arc;

use crate::assets::{StyleGate, StyleRegistrar, BADGE_STYLESHEET, BADGE_STYLE_GATE};
use crate::category::Category;
use crate::label::format_label;
use crate::render::{badge_markup, BadgeOptions};
use crate::status::{normalize, STATUS_CATEGORIES};

/// Resolves status strings to badge categories, icons and labels, and renders
/// the badge markup.
///
/// A resolver owns an immutable merged status map: the built-in table plus
/// any caller overrides supplied at construction, with overrides winning on
/// identical normalized key. No mutation methods are exposed; the map is
/// fixed for the resolver's lifetime.
///
/// Overrides are typed [`Category`] values, so an out-of-range category
/// cannot be supplied.
///
/// # Example
///
/// ```rust
/// use insignia::{BadgeResolver, Category};
///
/// let resolver = BadgeResolver::new();
/// assert_eq!(resolver.resolve_category("Active"), Category::Success);
/// assert_eq!(resolver.resolve_category("nope"), Category::Default);
///
/// let strict = BadgeResolver::new().override_status("active", Category::Danger);
/// assert_eq!(strict.resolve_category("active"), Category::Danger);
/// ```
#[derive(Clone)]
pub struct BadgeResolver {
    statuses: HashMap<String, Category>,
    registrar: Option<Arc<dyn StyleRegistrar>>,
    gate: &'static StyleGate,
}

impl BadgeResolver {
    /// Creates a resolver over the built-in status table.
    pub fn new() -> Self {
        Self {
            statuses: STATUS_CATEGORIES
                .iter()
                .map(|&(key, category)| (key.to_string(), category))
                .collect(),
            registrar: None,
            gate: &BADGE_STYLE_GATE,
        }
    }

    /// Creates a resolver with caller overrides merged over the built-in
    /// table. Override keys are normalized on insert and win on collision.
    ///
    /// # Example
    ///
    /// ```rust
    /// use insignia::{BadgeResolver, Category};
    ///
    /// let resolver = BadgeResolver::with_overrides([
    ///     ("active", Category::Danger),
    ///     ("Migrating", Category::Warning),
    /// ]);
    /// assert_eq!(resolver.resolve_category("active"), Category::Danger);
    /// assert_eq!(resolver.resolve_category("migrating"), Category::Warning);
    /// // Builtins without an override are unaffected.
    /// assert_eq!(resolver.resolve_category("pending"), Category::Warning);
    /// ```
    pub fn with_overrides<I, K>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, Category)>,
        K: AsRef<str>,
    {
        let mut resolver = Self::new();
        for (key, category) in overrides {
            resolver.statuses.insert(normalize(key.as_ref()), category);
        }
        resolver
    }

    /// Adds a single override, returning the updated resolver for chaining.
    pub fn override_status(mut self, status: &str, category: Category) -> Self {
        self.statuses.insert(normalize(status), category);
        self
    }

    /// Attaches the collaborator used to register the badge stylesheet.
    ///
    /// Without a registrar, [`ensure_registered`](Self::ensure_registered)
    /// and the registration step of [`render`](Self::render) are no-ops.
    pub fn with_registrar(mut self, registrar: Arc<dyn StyleRegistrar>) -> Self {
        self.registrar = Some(registrar);
        self
    }

    /// Routes registration through a caller-owned gate instead of the
    /// process-wide one. Intended for hosts that manage their own asset
    /// lifecycle, and for tests.
    pub fn with_gate(mut self, gate: &'static StyleGate) -> Self {
        self.gate = gate;
        self
    }

    /// Resolves a status string to its category.
    ///
    /// Lookup is case-insensitive and ignores surrounding whitespace.
    /// Unrecognized statuses resolve to [`Category::Default`]; the function
    /// is total.
    pub fn resolve_category(&self, status: &str) -> Category {
        self.statuses
            .get(&normalize(status))
            .copied()
            .unwrap_or(Category::Default)
    }

    /// Whether `status` resolves to `category`.
    pub fn is_category(&self, status: &str, category: Category) -> bool {
        self.resolve_category(status) == category
    }

    /// Whether `status` resolves to [`Category::Success`].
    pub fn is_success(&self, status: &str) -> bool {
        self.is_category(status, Category::Success)
    }

    /// Whether `status` resolves to [`Category::Warning`].
    pub fn is_warning(&self, status: &str) -> bool {
        self.is_category(status, Category::Warning)
    }

    /// Whether `status` resolves to [`Category::Danger`].
    pub fn is_danger(&self, status: &str) -> bool {
        self.is_category(status, Category::Danger)
    }

    /// Whether `status` resolves to [`Category::Info`].
    pub fn is_info(&self, status: &str) -> bool {
        self.is_category(status, Category::Info)
    }

    /// The effective merged status map.
    ///
    /// Returned as an immutable borrow; callers wanting a mutable copy can
    /// clone it without affecting this resolver.
    pub fn map(&self) -> &HashMap<String, Category> {
        &self.statuses
    }

    /// Renders the badge markup for `status`.
    ///
    /// The category is resolved from the status map and the label derived via
    /// [`format_label`]. Requests stylesheet registration first (a no-op
    /// after the first call, or when no registrar is attached). All
    /// interpolated values are HTML-escaped.
    ///
    /// # Errors
    ///
    /// Propagates template-engine errors; with the built-in template these do
    /// not occur in practice.
    pub fn render(&self, status: &str) -> Result<String, minijinja::Error> {
        self.render_with(status, &BadgeOptions::new())
    }

    /// Renders the badge markup for `status` with per-call overrides.
    ///
    /// `options.category` takes precedence over the resolved category and
    /// `options.label` over the derived label.
    pub fn render_with(
        &self,
        status: &str,
        options: &BadgeOptions,
    ) -> Result<String, minijinja::Error> {
        self.ensure_registered();

        let category = options
            .category
            .unwrap_or_else(|| self.resolve_category(status));
        let label = match &options.label {
            Some(label) => label.clone(),
            None => format_label(status),
        };

        badge_markup(category, &label)
    }

    /// Requests stylesheet registration without rendering.
    ///
    /// The first call through the gate forwards to the attached registrar;
    /// every later call, from any resolver sharing the gate, is a cheap
    /// no-op. Without a registrar this does nothing.
    pub fn ensure_registered(&self) {
        if let Some(registrar) = &self.registrar {
            self.gate.ensure(registrar.as_ref(), &BADGE_STYLESHEET);
        }
    }
}

impl Default for BadgeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BadgeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BadgeResolver")
            .field("statuses", &self.statuses.len())
            .field("registrar", &self.registrar.is_some())
            .field("registered", &self.gate.is_registered())
            .finish()
    }
}
