//! Filter and row types for a tagged listing.
//!
//! These mirror what the listing page renders: a strip of filter labels of
//! the form `name(count)` and a list of rows, each carrying tag names.

use smol_str::SmolStr;

/// Position of a filter within its [`FilterState`](crate::FilterState).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilterId(pub usize);

impl FilterId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for FilterId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// A toggleable category label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    /// Tag name this filter matches against.
    pub name: SmolStr,
    /// Number of rows carrying the tag, as displayed in the label.
    pub count: usize,
    /// Excluded from the active tag set when true.
    pub disabled: bool,
}

impl Filter {
    /// Create an enabled filter.
    pub fn new(name: impl Into<SmolStr>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
            disabled: false,
        }
    }

    /// Create a filter from its rendered `name(count)` label.
    pub fn from_label(label: &str) -> Self {
        let (name, count) = parse_label(label);
        Self::new(name, count)
    }

    /// Builder-style setter for the disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    /// Render the display label, `name(count)`.
    pub fn label(&self) -> String {
        format!("{}({})", self.name, self.count)
    }
}

/// A listed item carrying zero or more tags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    /// Tag names. Order is kept but irrelevant for matching.
    pub tags: Vec<SmolStr>,
    pub visible: bool,
}

impl Row {
    /// Create a visible row with the given tags.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            visible: true,
        }
    }

    /// Check whether the row carries a tag with this name.
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag == name)
    }

    pub fn is_untagged(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Split a `name(count)` label into its name and count.
///
/// The name is everything before the first `(`, or empty when the label has
/// no `(` at all. The count is the number between `(` and the following `)`;
/// a missing or malformed count reads as 0.
pub fn parse_label(label: &str) -> (SmolStr, usize) {
    let label = label.trim();
    let Some(open) = label.find('(') else {
        return (SmolStr::default(), 0);
    };

    let name = SmolStr::new(&label[..open]);
    let rest = &label[open + 1..];
    let count = rest
        .find(')')
        .and_then(|close| rest[..close].trim().parse().ok())
        .unwrap_or(0);

    (name, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label() {
        assert_eq!(parse_label("rust(3)"), (SmolStr::new("rust"), 3));
        assert_eq!(parse_label("  go(12) \n"), (SmolStr::new("go"), 12));
    }

    #[test]
    fn test_parse_label_without_paren() {
        // No "(" means no name at all, not the whole text.
        assert_eq!(parse_label("rust"), (SmolStr::default(), 0));
        assert_eq!(parse_label(""), (SmolStr::default(), 0));
    }

    #[test]
    fn test_parse_label_bad_count() {
        assert_eq!(parse_label("a(x)"), (SmolStr::new("a"), 0));
        assert_eq!(parse_label("a(4"), (SmolStr::new("a"), 0));
        assert_eq!(parse_label("(7)"), (SmolStr::default(), 7));
    }

    #[test]
    fn test_parse_label_first_paren_wins() {
        assert_eq!(parse_label("f(x)(2)"), (SmolStr::new("f"), 0));
    }

    #[test]
    fn test_label_roundtrip() {
        let filter = Filter::from_label("拼音(5)");
        assert_eq!(filter.name, "拼音");
        assert_eq!(filter.count, 5);
        assert!(filter.is_enabled());
        assert_eq!(filter.label(), "拼音(5)");
    }

    #[test]
    fn test_row_tags() {
        let row = Row::new(["a", "b"]);
        assert!(row.visible);
        assert!(row.has_tag("b"));
        assert!(!row.has_tag("c"));
        assert!(Row::new(Vec::<&str>::new()).is_untagged());
    }
}
