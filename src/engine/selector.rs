use std::fmt;

use crate::utils::sanitize_test_name;

/// One `/`-separated piece of a `go test -run` pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// `^name$`
    Exact(String),
    /// `.*`, used when the sub-test name is only known at run time.
    Wildcard,
    /// `^(a|b|c)$`
    Alternation(Vec<String>),
}

impl Segment {
    pub fn exact(name: impl Into<String>) -> Self {
        Self::Exact(name.into())
    }

    /// Segment for a sub-test name, renamed the way `go test` renames it.
    ///
    /// Regex metacharacters in `name` are not escaped.
    pub fn subtest(name: &str) -> Self {
        Self::Exact(sanitize_test_name(name))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Exact(name) => write!(f, "^{name}$"),
            Segment::Wildcard => f.write_str(".*"),
            Segment::Alternation(names) => write!(f, "^({})$", names.join("|")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    segments: Vec<Segment>,
    separator: String,
}

impl Selector {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            segments: Vec::new(),
            separator: separator.into(),
        }
    }

    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn extend(&mut self, segments: impl IntoIterator<Item = Segment>) {
        self.segments.extend(segments);
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(&self.separator)?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
