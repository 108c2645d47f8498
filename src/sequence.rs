//! The [`TypedSequence`] container.

use core::fmt;

use indexmap::IndexMap;
use regex::Regex;
use respseq_values::Value;

use crate::{error::Result, options::SequenceOptions, pattern::compile_pattern};

/// Returned by [`TypedSequence::first`] and [`TypedSequence::last`] when the
/// sequence is empty.
pub const FALSE: &Value = &Value::Bool(false);

/// An ordered, indexable sequence of heterogeneous [`Value`]s.
///
/// Entries keep insertion order. Each entry has a `usize` index; indices are
/// `0..len` for sequences built from plain values and for every sequence an
/// operation derives, but a sequence built with
/// [`from_indexed`](Self::from_indexed) may have gaps until it is
/// [reindexed](Self::reindex).
///
/// Operations never modify `self`. Those that produce a sequence return a new
/// one carrying the same [`SequenceOptions`].
///
/// # Example
///
/// ```
/// use respseq::TypedSequence;
///
/// let seq = TypedSequence::from_values(["3", "x", "7.5"]);
/// assert_eq!(seq.map_integer(), vec![3, 0, 7]);
/// assert_eq!(seq.to_string(), "Array");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypedSequence {
    entries: IndexMap<usize, Value>,
    options: SequenceOptions,
}

impl TypedSequence {
    /// An empty sequence with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sequence indexed `0..n` from `values`.
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            entries: values
                .into_iter()
                .map(Into::into)
                .enumerate()
                .collect(),
            options: SequenceOptions::default(),
        }
    }

    /// Build a sequence from explicitly indexed entries.
    ///
    /// Order follows `entries`. A repeated index overwrites the earlier value
    /// but keeps the earlier position.
    ///
    /// ```
    /// use respseq::TypedSequence;
    ///
    /// let seq = TypedSequence::from_indexed([(5, "a"), (2, "b"), (5, "c")]);
    /// assert_eq!(seq.indices().collect::<Vec<_>>(), vec![5, 2]);
    /// assert_eq!(seq.get(5).and_then(|v| v.as_str()), Some("c"));
    /// ```
    pub fn from_indexed<I, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, V)>,
        V: Into<Value>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(index, value)| (index, value.into()))
                .collect(),
            options: SequenceOptions::default(),
        }
    }

    /// Replace the options of this sequence.
    pub fn with_options(mut self, options: SequenceOptions) -> Self {
        self.options = options;
        self
    }

    /// The options this sequence carries.
    pub fn options(&self) -> SequenceOptions {
        self.options
    }

    /// A new sequence of `values`, indexed from zero, sharing our options.
    fn derive(&self, values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            entries: values.into_iter().enumerate().collect(),
            options: self.options,
        }
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value stored under `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.entries.get(&index)
    }

    /// Whether indices are exactly `0..len` in order.
    pub fn is_contiguous(&self) -> bool {
        self.indices().enumerate().all(|(pos, index)| pos == index)
    }

    /// `(index, value)` pairs in iteration order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Indices in iteration order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    /// Values in iteration order.
    pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
        self.entries.values()
    }

    /// Consume the sequence, keeping values and dropping indices.
    pub fn into_values(self) -> Vec<Value> {
        self.entries.into_values().collect()
    }

    // ========================================================================
    // Coercing maps
    // ========================================================================

    /// Every element coerced with [`Value::to_int`], in order.
    pub fn map_integer(&self) -> Vec<i64> {
        self.values().map(Value::to_int).collect()
    }

    /// Every element coerced with [`Value::to_text`], in order.
    ///
    /// With a `pattern`, only strings it matches are kept. See
    /// [`compile_pattern`](crate::compile_pattern) for the accepted syntax.
    /// Matching is the only filter: a matched `""` or `"0"` stays.
    ///
    /// # Errors
    ///
    /// A malformed pattern, or an element that has no string form.
    ///
    /// ```
    /// use respseq::TypedSequence;
    ///
    /// let seq = TypedSequence::from_values(["apple", "banana", "avocado"]);
    /// assert_eq!(seq.map_string(Some("/^a/")).unwrap(), vec!["apple", "avocado"]);
    /// assert_eq!(seq.map_string(None).unwrap().len(), 3);
    /// ```
    pub fn map_string(&self, pattern: Option<&str>) -> Result<Vec<String>> {
        match pattern {
            Some(pattern) => self.map_string_matching(&compile_pattern(pattern)?),
            None => self.texts(),
        }
    }

    /// Like [`map_string`](Self::map_string) with a precompiled regex.
    pub fn map_string_matching(&self, regex: &Regex) -> Result<Vec<String>> {
        let texts = self.texts()?;
        let total = texts.len();
        let matched: Vec<String> = texts.into_iter().filter(|t| regex.is_match(t)).collect();
        tracing::debug!(
            pattern = regex.as_str(),
            total,
            kept = matched.len(),
            "map_string filtered elements"
        );
        Ok(matched)
    }

    fn texts(&self) -> Result<Vec<String>> {
        self.values()
            .map(|value| -> Result<String> { Ok(value.to_text()?.into_owned()) })
            .collect()
    }

    // ========================================================================
    // Aggregate checks
    // ========================================================================

    /// Whether every element exposing a success query reports success.
    ///
    /// Elements without the capability are skipped, so a sequence with none
    /// of them (including the empty sequence) is considered successful.
    pub fn are_ok(&self) -> bool {
        let mut checked = 0usize;
        let mut failed = 0usize;
        for (index, value) in self.iter() {
            let Some(ok) = value.status() else {
                continue;
            };
            checked += 1;
            if !ok {
                tracing::debug!(index, class = value.type_name(), "element reports failure");
                failed += 1;
            }
        }
        tracing::trace!(checked, failed, "are_ok");
        failed == 0
    }

    // ========================================================================
    // Callbacks
    // ========================================================================
    //
    // Callbacks see each element with its position (0-based), in order. The
    // `_with` variants also pass `bound`, an accumulator shared across calls.
    // The element count is fixed when the call starts.

    /// Run `callback` on every element for its side effects.
    pub fn each<F>(&self, mut callback: F) -> &Self
    where
        F: FnMut(&Value, usize),
    {
        self.each_with(&mut (), |value, position, _| callback(value, position))
    }

    /// Run `callback` on every element with a shared accumulator.
    ///
    /// ```
    /// use respseq::TypedSequence;
    ///
    /// let seq = TypedSequence::from_values([1, 2, 3]);
    /// let mut total = 0;
    /// seq.each_with(&mut total, |v, _, total| *total += v.to_int());
    /// assert_eq!(total, 6);
    /// ```
    pub fn each_with<S, F>(&self, bound: &mut S, mut callback: F) -> &Self
    where
        S: ?Sized,
        F: FnMut(&Value, usize, &mut S),
    {
        for (position, value) in self.values().enumerate() {
            callback(value, position, bound);
        }
        self
    }

    /// A new sequence of `callback`'s results, one per element.
    pub fn map<R, F>(&self, mut callback: F) -> Self
    where
        R: Into<Value>,
        F: FnMut(&Value, usize) -> R,
    {
        self.map_with(&mut (), |value, position, _| callback(value, position))
    }

    /// [`map`](Self::map) with a shared accumulator.
    pub fn map_with<S, R, F>(&self, bound: &mut S, mut callback: F) -> Self
    where
        S: ?Sized,
        R: Into<Value>,
        F: FnMut(&Value, usize, &mut S) -> R,
    {
        let mapped: Vec<Value> = self
            .values()
            .enumerate()
            .map(|(position, value)| callback(value, position, bound).into())
            .collect();
        self.derive(mapped)
    }

    /// A new sequence of the elements `callback` does not reject.
    ///
    /// Only an exact `false` rejects an element; `0`, `""` and null keep it.
    /// Kept elements are the originals, not the callback results.
    ///
    /// ```
    /// use respseq::TypedSequence;
    /// use respseq::values::Value;
    ///
    /// let seq = TypedSequence::from_values(["a", "b", "c", "d"]);
    /// let odd = seq.filter(|_, i| i % 2 == 1);
    /// assert_eq!(odd.into_values(), vec![Value::from("b"), Value::from("d")]);
    ///
    /// let kept = seq.filter(|_, _| 0);
    /// assert_eq!(kept.len(), 4);
    /// ```
    pub fn filter<R, F>(&self, mut callback: F) -> Self
    where
        R: Into<Value>,
        F: FnMut(&Value, usize) -> R,
    {
        self.filter_with(&mut (), |value, position, _| callback(value, position))
    }

    /// [`filter`](Self::filter) with a shared accumulator.
    pub fn filter_with<S, R, F>(&self, bound: &mut S, mut callback: F) -> Self
    where
        S: ?Sized,
        R: Into<Value>,
        F: FnMut(&Value, usize, &mut S) -> R,
    {
        let kept: Vec<Value> = self
            .values()
            .enumerate()
            .filter(|(position, value)| {
                !matches!(callback(*value, *position, bound).into(), Value::Bool(false))
            })
            .map(|(_, value)| value.clone())
            .collect();
        tracing::debug!(total = self.len(), kept = kept.len(), "filter");
        self.derive(kept)
    }

    #[deprecated(note = "this filters rather than folds; use `filter`")]
    pub fn reduce<R, F>(&self, callback: F) -> Self
    where
        R: Into<Value>,
        F: FnMut(&Value, usize) -> R,
    {
        self.filter(callback)
    }

    #[deprecated(note = "this filters rather than folds; use `filter_with`")]
    pub fn reduce_with<S, R, F>(&self, bound: &mut S, callback: F) -> Self
    where
        S: ?Sized,
        R: Into<Value>,
        F: FnMut(&Value, usize, &mut S) -> R,
    {
        self.filter_with(bound, callback)
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// The element with the lowest index, or [`FALSE`] when empty.
    pub fn first(&self) -> &Value {
        self.entries
            .iter()
            .min_by_key(|(index, _)| **index)
            .map_or(FALSE, |(_, value)| value)
    }

    /// The element in the last position, or [`FALSE`] when empty.
    ///
    /// This follows iteration order, not the highest index.
    pub fn last(&self) -> &Value {
        self.entries.last().map_or(FALSE, |(_, value)| value)
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    /// A new sequence without loose-falsy elements
    /// (see [`Value::is_truthy`]), indexed from zero.
    pub fn compress(&self) -> Self {
        let kept: Vec<Value> = self.values().filter(|v| v.is_truthy()).cloned().collect();
        tracing::debug!(total = self.len(), kept = kept.len(), "compress");
        self.derive(kept)
    }

    /// A new sequence with the same elements in the same order, indexed from
    /// zero.
    pub fn reindex(&self) -> Self {
        self.derive(self.values().cloned())
    }
}

/// Sequences are equal when they hold the same `(index, value)` pairs in the
/// same order. Options do not take part.
impl PartialEq for TypedSequence {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.iter().eq(other.iter())
    }
}

/// Always the literal `Array`. This is not a serialization of the contents.
impl fmt::Display for TypedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Array")
    }
}

impl<V: Into<Value>> FromIterator<V> for TypedSequence {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<V: Into<Value>> From<Vec<V>> for TypedSequence {
    fn from(values: Vec<V>) -> Self {
        Self::from_values(values)
    }
}

/// Iterator over `(index, value)` pairs, returned by [`TypedSequence::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: indexmap::map::Iter<'a, usize, Value>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(index, value)| (*index, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(index, value)| (*index, value))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a TypedSequence {
    type Item = (usize, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;
