//! Loose name matching for person lookup

/// A case-insensitive name pattern.
///
/// Query text is split on whitespace and punctuation into literal fragments;
/// a name matches when every fragment occurs in it, in order, with anything
/// in between. `"james t. kirk"` therefore matches `"Captain James T. Kirk"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePattern {
    fragments: Vec<String>,
}

impl NamePattern {
    pub fn parse(text: &str) -> Self {
        let fragments = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|f| !f.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { fragments }
    }

    /// True when the query text held no literal fragments at all
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Check a display name against the pattern.
    ///
    /// An empty pattern matches nothing.
    pub fn matches(&self, name: &str) -> bool {
        if self.fragments.is_empty() {
            return false;
        }

        let haystack = name.to_lowercase();
        let mut rest = haystack.as_str();
        for fragment in &self.fragments {
            match rest.find(fragment.as_str()) {
                Some(pos) => rest = &rest[pos + fragment.len()..],
                None => return false,
            }
        }
        true
    }
}
