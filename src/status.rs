//! Built-in status table and key normalization.
//!
//! The table maps normalized status strings to their [`Category`]. Keys are
//! stored already normalized (lowercase, no surrounding whitespace); lookups
//! normalize the probe the same way, so `"Active"`, `" active "` and
//! `"ACTIVE"` all hit the `"active"` entry. Separator characters are part of
//! the key: `"on_hold"` and `"on-hold"` are distinct entries.

use crate::category::Category;

/// Built-in status → category table.
///
/// Shared by every resolver; caller overrides are merged on top of this at
/// construction and win on identical normalized key.
pub const STATUS_CATEGORIES: &[(&str, Category)] = &[
    // Success
    ("active", Category::Success),
    ("enabled", Category::Success),
    ("completed", Category::Success),
    ("complete", Category::Success),
    ("done", Category::Success),
    ("success", Category::Success),
    ("successful", Category::Success),
    ("published", Category::Success),
    ("approved", Category::Success),
    ("confirmed", Category::Success),
    ("verified", Category::Success),
    ("paid", Category::Success),
    ("resolved", Category::Success),
    ("online", Category::Success),
    ("healthy", Category::Success),
    ("passed", Category::Success),
    ("available", Category::Success),
    ("connected", Category::Success),
    ("delivered", Category::Success),
    ("up", Category::Success),
    // Warning
    ("pending", Category::Warning),
    ("in_progress", Category::Warning),
    ("in-progress", Category::Warning),
    ("processing", Category::Warning),
    ("waiting", Category::Warning),
    ("paused", Category::Warning),
    ("on_hold", Category::Warning),
    ("on-hold", Category::Warning),
    ("scheduled", Category::Warning),
    ("queued", Category::Warning),
    ("in_review", Category::Warning),
    ("retrying", Category::Warning),
    ("deferred", Category::Warning),
    ("degraded", Category::Warning),
    ("expiring", Category::Warning),
    ("partial", Category::Warning),
    ("trial", Category::Warning),
    ("stale", Category::Warning),
    // Danger
    ("inactive", Category::Danger),
    ("disabled", Category::Danger),
    ("failed", Category::Danger),
    ("failure", Category::Danger),
    ("error", Category::Danger),
    ("cancelled", Category::Danger),
    ("canceled", Category::Danger),
    ("rejected", Category::Danger),
    ("declined", Category::Danger),
    ("blocked", Category::Danger),
    ("banned", Category::Danger),
    ("suspended", Category::Danger),
    ("expired", Category::Danger),
    ("overdue", Category::Danger),
    ("deleted", Category::Danger),
    ("removed", Category::Danger),
    ("offline", Category::Danger),
    ("unhealthy", Category::Danger),
    ("down", Category::Danger),
    ("unpaid", Category::Danger),
    ("terminated", Category::Danger),
    ("revoked", Category::Danger),
    // Info
    ("new", Category::Info),
    ("open", Category::Info),
    ("draft", Category::Info),
    ("submitted", Category::Info),
    ("received", Category::Info),
    ("updated", Category::Info),
    ("imported", Category::Info),
    ("archived", Category::Info),
    ("invited", Category::Info),
    ("assigned", Category::Info),
    ("started", Category::Info),
    ("created", Category::Info),
    ("unread", Category::Info),
    // Default
    ("unknown", Category::Default),
    ("none", Category::Default),
    ("closed", Category::Default),
];

/// Normalizes a status string for table lookup: trims surrounding whitespace
/// and lowercases.
pub(crate) fn normalize(status: &str) -> String {
    status.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_no_duplicate_keys() {
        let mut seen = HashSet::new();
        for &(key, _) in STATUS_CATEGORIES {
            assert!(seen.insert(key), "duplicate status key: {}", key);
        }
    }

    #[test]
    fn test_table_keys_are_pre_normalized() {
        for &(key, _) in STATUS_CATEGORIES {
            assert_eq!(key, normalize(key), "key not normalized: {:?}", key);
        }
    }

    #[test]
    fn test_table_size() {
        assert!(
            STATUS_CATEGORIES.len() >= 70,
            "expected >= 70 builtin entries, got {}",
            STATUS_CATEGORIES.len()
        );
    }

    #[test]
    fn test_every_category_is_represented() {
        for category in Category::ALL {
            assert!(
                STATUS_CATEGORIES.iter().any(|&(_, c)| c == category),
                "no builtin status maps to {}",
                category
            );
        }
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Active "), "active");
        assert_eq!(normalize("ON_HOLD"), "on_hold");
        assert_eq!(normalize(""), "");
    }
}
