//! The closed set of badge categories and their fixed presentation data.

use serde::Serialize;

/// Semantic classification of a status.
///
/// The set is closed: every status resolves to exactly one of these five
/// values, and unknown statuses resolve to [`Category::Default`]. Because
/// overrides are typed as `Category`, an out-of-range category cannot be
/// constructed.
///
/// # Example
///
/// ```rust
/// use insignia::Category;
///
/// assert_eq!(Category::Success.as_str(), "success");
/// assert_eq!(Category::Warning.modifier_class(), "badge--warning");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Positive terminal states: active, completed, paid, ...
    Success,
    /// In-flight or attention states: pending, on hold, degraded, ...
    Warning,
    /// Negative states: failed, cancelled, expired, ...
    Danger,
    /// Neutral-informative states: new, open, archived, ...
    Info,
    /// Fallback for anything unrecognized.
    Default,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 5] = [
        Category::Success,
        Category::Warning,
        Category::Danger,
        Category::Info,
        Category::Default,
    ];

    /// Lowercase name used in CSS class tokens and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Success => "success",
            Category::Warning => "warning",
            Category::Danger => "danger",
            Category::Info => "info",
            Category::Default => "default",
        }
    }

    /// The icon identifier for this category.
    ///
    /// Every category has exactly one icon; the lookup is total.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Success => "icon-check-circle",
            Category::Warning => "icon-alert-triangle",
            Category::Danger => "icon-x-circle",
            Category::Info => "icon-info-circle",
            Category::Default => "icon-minus-circle",
        }
    }

    /// The category-suffixed modifier class carried by the badge root element.
    pub fn modifier_class(self) -> String {
        format!("badge--{}", self.as_str())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
