//! Sequence helpers: predicates, reductions, searching and random ordering
//!
//! Everything is available as a free function and as a method of
//! [`SequenceExt`], which is implemented for slices (and so for `Vec` and
//! arrays through deref).

use crate::error::{Error, Result};
use num_traits::{AsPrimitive, CheckedAdd, Zero};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::hash::Hash;
use std::iter::Sum;

/// True if any item satisfies `predicate`. Stops at the first match.
pub fn any<I, F>(items: I, predicate: F) -> bool
where
    I: IntoIterator,
    F: FnMut(I::Item) -> bool,
{
    items.into_iter().any(predicate)
}

/// True if no item satisfies `predicate`. Stops at the first match.
pub fn none<I, F>(items: I, predicate: F) -> bool
where
    I: IntoIterator,
    F: FnMut(I::Item) -> bool,
{
    !any(items, predicate)
}

/// True if no two items compare equal.
pub fn is_unique<T: Eq + Hash>(items: &[T]) -> bool {
    items.iter().collect::<HashSet<_>>().len() == items.len()
}

/// Total of `items`, zero when empty.
///
/// Integer overflow behaves as in [`Iterator::sum`]: a panic in debug builds,
/// wrap-around in release. Use [`checked_sum`] when that matters.
pub fn sum<T: Copy + Sum<T>>(items: &[T]) -> T {
    items.iter().copied().sum()
}

/// Like [`sum`], but `None` on overflow.
pub fn checked_sum<T: Copy + Zero + CheckedAdd>(items: &[T]) -> Option<T> {
    items
        .iter()
        .try_fold(T::zero(), |total, item| total.checked_add(item))
}

/// Arithmetic mean as `f64`. Accepts any primitive number, including
/// `i64`, `u64` and `usize`.
///
/// # Errors
///
/// Returns [`Error::EmptySequence`] if `items` is empty.
pub fn average<T: AsPrimitive<f64>>(items: &[T]) -> Result<f64> {
    if items.is_empty() {
        return Err(Error::EmptySequence);
    }
    let total: f64 = items.iter().map(|v| v.as_()).sum();
    Ok(total / items.len() as f64)
}

/// Every position holding `target`, ascending.
pub fn indexes_of<T: PartialEq>(items: &[T], target: &T) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| *item == target)
        .map(|(idx, _)| idx)
        .collect()
}

/// Uniform in-place permutation.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    SliceRandom::shuffle(items, rng);
}

/// Uniformly permuted copy of `items`.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle(&mut out, rng);
    out
}

/// `min(count, len)` items drawn without replacement.
///
/// The whole sequence is permuted and then truncated, so every subset of the
/// requested size is equally likely.
pub fn sample<T: Clone, R: Rng + ?Sized>(items: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut out = shuffled(items, rng);
    out.truncate(count);
    out
}

pub fn random_element<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        items.get(rng.random_range(0..items.len()))
    }
}

/// Method-call form of the helpers in this module.
pub trait SequenceExt<T> {
    fn any_match<F: FnMut(&T) -> bool>(&self, predicate: F) -> bool;
    fn none_match<F: FnMut(&T) -> bool>(&self, predicate: F) -> bool;
    fn is_unique(&self) -> bool
    where
        T: Eq + Hash;
    fn sum(&self) -> T
    where
        T: Copy + Sum<T>;
    fn average(&self) -> Result<f64>
    where
        T: AsPrimitive<f64>;
    fn indexes_of(&self, target: &T) -> Vec<usize>
    where
        T: PartialEq;
    fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R);
    fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<T>
    where
        T: Clone;
    fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<T>
    where
        T: Clone;
    fn random_element<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T>;
}

impl<T> SequenceExt<T> for [T] {
    fn any_match<F: FnMut(&T) -> bool>(&self, mut predicate: F) -> bool {
        any(self, |item| predicate(item))
    }

    fn none_match<F: FnMut(&T) -> bool>(&self, mut predicate: F) -> bool {
        none(self, |item| predicate(item))
    }

    fn is_unique(&self) -> bool
    where
        T: Eq + Hash,
    {
        is_unique(self)
    }

    fn sum(&self) -> T
    where
        T: Copy + Sum<T>,
    {
        sum(self)
    }

    fn average(&self) -> Result<f64>
    where
        T: AsPrimitive<f64>,
    {
        average(self)
    }

    fn indexes_of(&self, target: &T) -> Vec<usize>
    where
        T: PartialEq,
    {
        indexes_of(self, target)
    }

    fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle(self, rng);
    }

    fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<T>
    where
        T: Clone,
    {
        shuffled(self, rng)
    }

    fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<T>
    where
        T: Clone,
    {
        sample(self, count, rng)
    }

    fn random_element<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        random_element(self, rng)
    }
}
