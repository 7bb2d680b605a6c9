//! Badge markup construction.
//!
//! Markup is produced through a pre-compiled minijinja template with HTML
//! auto-escaping forced on, so every interpolated value (category name, icon
//! identifier, label) is escaped before insertion. The category and icon come
//! from trusted internal tables and escaping them is defense-in-depth; the
//! label may be arbitrary caller input and escaping it is mandatory.

use minijinja::{AutoEscape, Environment};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::category::Category;

/// The badge markup structure. Bit-exact output contract: a root `span` with
/// the base class and a category modifier class, one nested empty `span`
/// carrying the icon class, then the escaped label as text content. No
/// whitespace beyond this literal structure.
const BADGE_TEMPLATE: &str =
    r#"<span class="badge badge--{{ category }}"><span class="{{ icon }}"></span>{{ label }}</span>"#;

static BADGE_ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.add_template("badge", BADGE_TEMPLATE)
        .expect("built-in badge template is statically valid");
    env
});

#[derive(Serialize)]
struct BadgeContext<'a> {
    category: Category,
    icon: &'static str,
    label: &'a str,
}

/// Renders the badge markup for an already-resolved category and label.
pub(crate) fn badge_markup(category: Category, label: &str) -> Result<String, minijinja::Error> {
    let template = BADGE_ENV.get_template("badge")?;
    template.render(BadgeContext {
        category,
        icon: category.icon(),
        label,
    })
}

/// Per-call render overrides.
///
/// Replaces the original's optional named parameters with an explicit options
/// struct: `category` forces the badge category regardless of what the status
/// would resolve to, and `label` replaces the derived display label.
///
/// # Example
///
/// ```rust
/// use insignia::{BadgeOptions, BadgeResolver, Category};
///
/// let resolver = BadgeResolver::new();
/// let html = resolver
///     .render_with("active", &BadgeOptions::new().category(Category::Info).label("Custom"))
///     .unwrap();
/// assert!(html.contains("badge--info"));
/// assert!(html.contains("Custom"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BadgeOptions {
    pub(crate) category: Option<Category>,
    pub(crate) label: Option<String>,
}

impl BadgeOptions {
    /// Creates options with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces the badge category.
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Replaces the derived label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
