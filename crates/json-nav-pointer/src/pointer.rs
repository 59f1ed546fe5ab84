//! Compiled JSON Pointers and their segment sequences.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::util::{escape_component, parse_index, unescape_component};
use crate::validate::{validate_json_pointer, PointerError};

/// One step of a compiled pointer.
///
/// The token is always usable as an object member name. When the token is
/// also a canonical array index, `index` carries its value, so the same
/// segment can address either container kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    token: String,
    index: Option<usize>,
}

impl Segment {
    /// Build a segment from an unescaped token.
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let index = parse_index(&token);
        Self { token, index }
    }

    /// Build a segment that is only ever a member name, even if it looks
    /// numeric.
    pub fn property(name: impl Into<String>) -> Self {
        Self {
            token: name.into(),
            index: None,
        }
    }

    /// Build an index segment.
    pub fn index_of(index: usize) -> Self {
        Self {
            token: index.to_string(),
            index: Some(index),
        }
    }

    /// The member name this segment matches in an object.
    pub fn name(&self) -> &str {
        &self.token
    }

    /// The element index this segment matches in an array, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Whether this segment can address an array element.
    pub fn may_match_element(&self) -> bool {
        self.index.is_some()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&escape_component(&self.token))
    }
}

/// A compiled JSON Pointer: an ordered, possibly empty list of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonPointer {
    segments: Vec<Segment>,
}

impl JsonPointer {
    /// The empty pointer, addressing the root node itself.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile a pointer expression such as `"/a/b/2"`.
    ///
    /// # Errors
    ///
    /// Fails if the expression is non-empty without a leading `/`, or too long.
    ///
    /// # Example
    ///
    /// ```
    /// use json_nav_pointer::JsonPointer;
    ///
    /// let ptr = JsonPointer::compile("/a~1b/2").unwrap();
    /// let names: Vec<&str> = ptr.segments().map(|step| step.segment().name()).collect();
    /// assert_eq!(names, ["a/b", "2"]);
    /// assert_eq!(ptr.to_string(), "/a~1b/2");
    /// ```
    pub fn compile(expr: &str) -> Result<Self, PointerError> {
        validate_json_pointer(expr)?;
        if expr.is_empty() {
            return Ok(Self::empty());
        }
        let segments = expr[1..]
            .split('/')
            .map(|component| Segment::new(unescape_component(component)))
            .collect();
        Ok(Self { segments })
    }

    /// Build a pointer from already-unescaped tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: tokens.into_iter().map(Segment::new).collect(),
        }
    }

    /// Build a pointer from prepared segments.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterate the segments in order, each with a look-ahead to the next one.
    ///
    /// The iterator is cheap to clone, so a sequence can be restarted from a
    /// saved copy or by calling `segments()` again.
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            segments: &self.segments,
            cursor: 0,
        }
    }

    /// The pointer made of the first `len` segments.
    pub fn prefix(&self, len: usize) -> Self {
        let len = len.min(self.segments.len());
        Self {
            segments: self.segments[..len].to_vec(),
        }
    }

    /// A new pointer with a member-name segment appended.
    pub fn append_property(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::property(name));
        Self { segments }
    }

    /// A new pointer with an index segment appended.
    pub fn append_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::index_of(index));
        Self { segments }
    }
}

impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for JsonPointer {
    type Err = PointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

/// A segment yielded by [`Segments`], together with its position and the
/// segment that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'a> {
    position: usize,
    segment: &'a Segment,
    next: Option<&'a Segment>,
}

impl<'a> Step<'a> {
    /// Zero-based position of this segment in the pointer.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn segment(&self) -> &'a Segment {
        self.segment
    }

    /// The following segment, `None` for the last one.
    pub fn next(&self) -> Option<&'a Segment> {
        self.next
    }

    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// Iterator over the segments of a [`JsonPointer`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    segments: &'a [Segment],
    cursor: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Step<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.segments.get(self.cursor)?;
        let step = Step {
            position: self.cursor,
            segment,
            next: self.segments.get(self.cursor + 1),
        };
        self.cursor += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.segments.len().saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl FusedIterator for Segments<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_empty() {
        let ptr = JsonPointer::compile("").unwrap();
        assert!(ptr.is_empty());
        assert_eq!(ptr.segments().count(), 0);
        assert_eq!(ptr.to_string(), "");
    }

    #[test]
    fn test_compile_root_slash_is_empty_name() {
        let ptr = JsonPointer::compile("/").unwrap();
        assert_eq!(ptr.len(), 1);
        assert_eq!(ptr.as_slice()[0].name(), "");
        assert_eq!(ptr.as_slice()[0].index(), None);
    }

    #[test]
    fn test_compile_dual_tokens() {
        let ptr = JsonPointer::compile("/a/2/-/01").unwrap();
        let indexes: Vec<Option<usize>> = ptr.as_slice().iter().map(Segment::index).collect();
        assert_eq!(indexes, vec![None, Some(2), None, None]);
        assert_eq!(ptr.as_slice()[1].name(), "2");
    }

    #[test]
    fn test_compile_rejects_relative() {
        assert!(matches!(
            JsonPointer::compile("a/b"),
            Err(PointerError::MissingLeadingSlash(_))
        ));
    }

    #[test]
    fn test_steps_look_ahead() {
        let ptr = JsonPointer::compile("/a/0").unwrap();
        let steps: Vec<Step<'_>> = ptr.segments().collect();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].position(), 0);
        assert_eq!(steps[0].next().and_then(Segment::index), Some(0));
        assert!(!steps[0].is_last());
        assert!(steps[1].is_last());
    }

    #[test]
    fn test_segments_restartable() {
        let ptr = JsonPointer::compile("/x/y/z").unwrap();
        let mut iter = ptr.segments();
        let saved = iter.clone();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        assert_eq!(saved.map(|s| s.segment().name().to_string()).collect::<Vec<_>>(), ["x", "y", "z"]);
        iter.next();
        iter.next();
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_prefix_and_append() {
        let ptr = JsonPointer::compile("/a/b/c").unwrap();
        assert_eq!(ptr.prefix(2).to_string(), "/a/b");
        assert_eq!(ptr.prefix(10), ptr);
        let ptr = ptr.prefix(1).append_index(3).append_property("5");
        assert_eq!(ptr.to_string(), "/a/3/5");
        assert_eq!(ptr.as_slice()[1].index(), Some(3));
        assert_eq!(ptr.as_slice()[2].index(), None);
    }

    #[test]
    fn test_from_tokens_escapes_on_display() {
        let ptr = JsonPointer::from_tokens(["a/b", "c~d"]);
        assert_eq!(ptr.to_string(), "/a~1b/c~0d");
        assert_eq!(ptr.last().map(Segment::name), Some("c~d"));
    }
}
