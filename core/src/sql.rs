use crate::AqlValue;
use compact_str::{CompactString, ToCompactString};
use core::fmt;
use smallvec::SmallVec;

/// A SQL text fragment paired with the values bound to its `?` placeholders.
///
/// A placeholder and its value are only ever appended together through
/// [`SqlFragment::push_param`], so the positional alignment between the
/// rendered text and the value list holds by construction. Misalignment here
/// would not crash the executor, it would silently bind values to the wrong
/// comparisons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlFragment {
    text: CompactString,
    params: SmallVec<[AqlValue; 4]>,
}

impl SqlFragment {
    /// Creates an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fragment from literal SQL text with no parameters.
    pub fn raw(text: impl AsRef<str>) -> Self {
        Self {
            text: text.as_ref().to_compact_string(),
            params: SmallVec::new(),
        }
    }

    /// Appends literal SQL text.
    pub fn push_raw(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Appends a `?` placeholder and records the value bound to it.
    pub fn push_param(&mut self, value: AqlValue) {
        self.text.push('?');
        self.params.push(value);
    }

    /// Appends another fragment, keeping its parameters in order after ours.
    pub fn append(&mut self, other: SqlFragment) {
        self.text.push_str(&other.text);
        self.params.extend(other.params);
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The bound values, aligned one-to-one with the `?` placeholders in
    /// [`SqlFragment::text`].
    pub fn params(&self) -> &[AqlValue] {
        &self.params
    }

    /// Consumes the fragment into its text and an owned parameter list.
    pub fn into_parts(self) -> (String, Vec<AqlValue>) {
        (self.text.into(), self.params.into_vec())
    }
}

impl fmt::Display for SqlFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"sql: "{}", params: {:?}"#, self.text, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_alignment() {
        let mut fragment = SqlFragment::raw("n.repo = ");
        fragment.push_param(AqlValue::from("libs-release"));
        fragment.push_raw(" and n.depth > ");
        fragment.push_param(AqlValue::from(2i64));

        assert_eq!(fragment.text(), "n.repo = ? and n.depth > ?");
        assert_eq!(fragment.text().matches('?').count(), fragment.params().len());
        assert_eq!(
            fragment.params(),
            &[AqlValue::from("libs-release"), AqlValue::from(2i64)]
        );
    }

    #[test]
    fn append_preserves_param_order() {
        let mut left = SqlFragment::new();
        left.push_param(AqlValue::from("a"));
        let mut right = SqlFragment::raw(" or ");
        right.push_param(AqlValue::from("b"));

        left.append(right);
        assert_eq!(left.text(), "? or ?");
        assert_eq!(left.params(), &[AqlValue::from("a"), AqlValue::from("b")]);
    }

    #[test]
    fn raw_has_no_params() {
        let fragment = SqlFragment::raw("1 = 1");
        assert!(fragment.params().is_empty());
        assert!(!fragment.is_empty());
    }
}
