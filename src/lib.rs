//! Status badge resolution and escaped HTML rendering.
//!
//! `insignia` turns free-text status strings (`"active"`, `"in_progress"`,
//! `"failed"`, ...) into styled badge markup. Each status resolves to one of
//! five closed [`Category`] values, which in turn selects an icon and a CSS
//! modifier class; the display label is derived from the status string. All
//! interpolated values are HTML-escaped by the template engine.
//!
//! The badge stylesheet is registered through a caller-provided
//! [`StyleRegistrar`] at most once per process, gated by an atomic
//! [`StyleGate`].
//!
//! # Example
//!
//! ```rust
//! use insignia::{BadgeOptions, BadgeResolver, Category};
//!
//! let resolver = BadgeResolver::new();
//!
//! assert_eq!(resolver.resolve_category("active"), Category::Success);
//! assert!(resolver.is_warning("pending"));
//!
//! let html = resolver.render("in_progress").unwrap();
//! assert_eq!(
//!     html,
//!     r#"<span class="badge badge--warning"><span class="icon-alert-triangle"></span>In Progress</span>"#
//! );
//!
//! // Per-call overrides via an explicit options struct.
//! let html = resolver
//!     .render_with("active", &BadgeOptions::new().category(Category::Info))
//!     .unwrap();
//! assert!(html.contains("badge--info"));
//! ```

mod assets;
mod category;
mod label;
mod render;
mod resolver;
mod status;

pub use assets::{StyleGate, StyleRegistrar, StyleSheet, BADGE_STYLESHEET};
pub use category::Category;
pub use label::format_label;
pub use render::BadgeOptions;
pub use resolver::BadgeResolver;
pub use status::STATUS_CATEGORIES;

/// Renders a badge for `status` with a throwaway default resolver.
///
/// Convenience for one-shot rendering; construct a [`BadgeResolver`] when
/// overrides, a registrar, or repeated rendering are involved.
///
/// # Example
///
/// ```rust
/// let html = insignia::render_badge("active").unwrap();
/// assert!(html.contains("badge--success"));
/// ```
pub fn render_badge(status: &str) -> Result<String, minijinja::Error> {
    BadgeResolver::new().render(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_badge_convenience() {
        let html = render_badge("failed").unwrap();
        assert_eq!(
            html,
            r#"<span class="badge badge--danger"><span class="icon-x-circle"></span>Failed</span>"#
        );
    }
}
