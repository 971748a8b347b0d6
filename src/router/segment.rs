use smallvec::SmallVec;

pub(super) const SLASH: char = '/';
pub(super) const COLON: char = ':';

/// One pattern token that follows the static prefix of a route.
///
/// A fixed segment must equal the incoming path token verbatim, a variable
/// segment captures the incoming token under [`Segment::name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    name: Box<str>,
    fixed: bool,
}

impl Segment {
    pub(super) fn fixed(name: &str) -> Self {
        Self {
            name: name.into(),
            fixed: true,
        }
    }

    pub(super) fn variable(name: &str) -> Self {
        Self {
            name: name.into(),
            fixed: false,
        }
    }

    /// Literal text for a fixed segment, capture name for a variable one.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub(super) fn write_token(&self, buf: &mut String) {
        if !self.fixed {
            buf.push(COLON);
        }
        buf.push_str(&self.name);
    }
}

/// Splits `pattern` into its static prefix and the segments from the first
/// capture token onward.
///
/// Literal tokens after the first capture become fixed segments, they never
/// extend the prefix.
pub(super) fn split_pattern(pattern: &str) -> (String, Vec<Segment>) {
    let mut static_parts: SmallVec<[&str; 8]> = SmallVec::new();
    let mut segments: Vec<Segment> = Vec::new();

    for part in pattern.split(SLASH) {
        if part.starts_with(COLON) {
            segments.push(Segment::variable(&part[1..]));
        } else if segments.is_empty() {
            static_parts.push(part);
        } else {
            segments.push(Segment::fixed(part));
        }
    }

    (static_parts.join("/"), segments)
}
