//! Path-prefix classification of projects into taxonomy folders.

/// Maps a literal path prefix to a taxonomy folder key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixRule {
    pub prefix: &'static str,
    pub folder: &'static str,
}

const fn rule(prefix: &'static str, folder: &'static str) -> PrefixRule {
    PrefixRule { prefix, folder }
}

/// Ordered prefix table; the first rule whose prefix starts a path wins.
pub const PREFIX_RULES: &[PrefixRule] = &[
    rule(r"libs\backend\core\", "core"),
    rule(r"libs\backend\auth\", "auth"),
    rule(r"libs\backend\catalog\", "catalog"),
    rule(r"libs\backend\sales\", "sales"),
    rule(r"libs\backend\marketplace\", "marketplace"),
    rule(r"libs\backend\messaging\", "messaging"),
    rule(r"libs\backend\files\", "files"),
    rule(r"libs\backend\shipping\", "shipping"),
    rule(r"libs\backend\integration\", "integration"),
    rule(r"libs\backend\other\", "other"),
    rule(r"libs\frontend\core\", "fe-core"),
    rule(r"libs\frontend\clients\", "clients"),
    rule(r"libs\frontend\realtime\", "realtime"),
    rule(r"libs\frontend\discovery\", "discovery"),
    rule(r"Apps\", "apps"),
    rule(r"Templates\", "templates"),
    rule(r"Examples\", "examples"),
];

/// Returns the folder key for a project path, or `None` when no prefix matches.
pub fn classify(path: &str) -> Option<&'static str> {
    classify_with(PREFIX_RULES, path)
}

/// Classifies `path` against an arbitrary ordered rule table.
pub fn classify_with(rules: &[PrefixRule], path: &str) -> Option<&'static str> {
    rules
        .iter()
        .find(|rule| path.starts_with(rule.prefix))
        .map(|rule| rule.folder)
}
