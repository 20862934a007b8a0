//! Streaming classification for inputs as they arrive.
//!
//! This module provides iterator adapters that classify lazily, useful for
//! processing lines from a file or a socket without collecting them first.
//!
//! # Example
//!
//! ```
//! use card_classifier::stream::ClassifyExt;
//!
//! let inputs = vec!["4111111111111111", "4111111111111112", "abc"];
//! let real_count = inputs.iter().copied().real_only().count();
//!
//! assert_eq!(real_count, 1);
//! ```

use crate::batch::Outcome;
use crate::card::ClassificationResult;
use crate::classify::check;

/// Classifies every item of the wrapped iterator.
///
/// This struct is created by [`ClassifyExt::classify_cards`].
#[derive(Debug, Clone)]
pub struct ClassifyStream<I> {
    inner: I,
}

impl<I> ClassifyStream<I> {
    /// Creates a new ClassifyStream wrapping the given iterator.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Consumes the stream and returns the inner iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, S> Iterator for ClassifyStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Outcome;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| check(s.as_ref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, S> ExactSizeIterator for ClassifyStream<I>
where
    I: ExactSizeIterator<Item = S>,
    S: AsRef<str>,
{
}

impl<I, S> DoubleEndedIterator for ClassifyStream<I>
where
    I: DoubleEndedIterator<Item = S>,
    S: AsRef<str>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|s| check(s.as_ref()))
    }
}

/// Yields only the results that are probably real.
///
/// Rejected and fake inputs are skipped.
#[derive(Debug, Clone)]
pub struct RealOnlyStream<I> {
    inner: I,
}

impl<I> RealOnlyStream<I> {
    /// Creates a new RealOnlyStream wrapping the given iterator.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I, S> Iterator for RealOnlyStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = ClassificationResult;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        for s in self.inner.by_ref() {
            match check(s.as_ref()) {
                Ok(result) if result.is_probably_real() => return Some(result),
                _ => {}
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

/// Extension trait adding classification to any iterator.
///
/// Automatically implemented for all iterators; the adapters require the
/// items to be string-like.
pub trait ClassifyExt: Iterator + Sized {
    /// Classifies each input yielded by the iterator.
    ///
    /// # Example
    ///
    /// ```
    /// use card_classifier::stream::ClassifyExt;
    ///
    /// let inputs = ["4111111111111111", "abc"];
    /// let messages: Vec<String> = inputs
    ///     .iter()
    ///     .copied()
    ///     .classify_cards()
    ///     .map(|r| match r {
    ///         Ok(result) => result.into_message(),
    ///         Err(e) => e.to_string(),
    ///     })
    ///     .collect();
    /// assert_eq!(messages[1], "please provide the card number");
    /// ```
    fn classify_cards(self) -> ClassifyStream<Self>;

    /// Classifies and yields only probably-real results.
    fn real_only(self) -> RealOnlyStream<Self>;
}

impl<I: Iterator + Sized> ClassifyExt for I {
    #[inline]
    fn classify_cards(self) -> ClassifyStream<Self> {
        ClassifyStream::new(self)
    }

    #[inline]
    fn real_only(self) -> RealOnlyStream<Self> {
        RealOnlyStream::new(self)
    }
}
