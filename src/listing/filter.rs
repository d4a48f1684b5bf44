//! Visibility filtering for directory children

use glob::Pattern;

use super::config::ListOptions;

/// Decides which directory children are listed.
///
/// Hidden names (leading `.`) are dropped unless the options show them, and
/// names matching an ignore pattern are always dropped. Pseudo-entries are
/// synthesized separately and never pass through here.
pub struct VisibilityFilter {
    show_hidden: bool,
    ignore: Vec<IgnorePattern>,
}

struct IgnorePattern {
    literal: String,
    glob: Option<Pattern>,
}

impl IgnorePattern {
    fn new(pattern: &str) -> Self {
        let glob = match Pattern::new(pattern) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::debug!(pattern, error = %e, "invalid ignore pattern, matching literally");
                None
            }
        };
        Self {
            literal: pattern.to_string(),
            glob,
        }
    }

    fn matches(&self, name: &str) -> bool {
        name == self.literal || self.glob.as_ref().is_some_and(|g| g.matches(name))
    }
}

impl VisibilityFilter {
    pub fn new(options: &ListOptions) -> Self {
        Self {
            show_hidden: options.shows_hidden(),
            ignore: options
                .ignore_patterns
                .iter()
                .map(|p| IgnorePattern::new(p))
                .collect(),
        }
    }

    /// Check if a child with this name should be listed.
    pub fn is_visible(&self, name: &str) -> bool {
        if !self.show_hidden && name.starts_with('.') {
            return false;
        }
        !self.ignore.iter().any(|p| p.matches(name))
    }
}
