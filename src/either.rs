use std::fmt::{self, Display};

use crate::define_side_accessors;

pub mod convert;

/// A value which is exactly one of `L` or `R`.
///
/// By convention `Left` carries a failure and `Right` carries a success, so the
/// single-channel combinators (`map`, `flat_map`, `exists`, `get_or_none`) act on
/// `Right` and pass a `Left` through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    define_side_accessors!(left, Left, Right, L);
    define_side_accessors!(right, Right, Left, R);

    /// Chains a computation that may itself produce a `Left`.
    ///
    /// A `Left` short-circuits: `f` is not called.
    pub fn flat_map<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    pub fn map<T, F>(self, f: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    pub fn map_left<T, F>(self, f: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Maps whichever side is present. Exactly one of `left` and `right` runs.
    pub fn bimap<A, B, F, G>(self, left: F, right: G) -> Either<A, B>
    where
        F: FnOnce(L) -> A,
        G: FnOnce(R) -> B,
    {
        match self {
            Either::Left(l) => Either::Left(left(l)),
            Either::Right(r) => Either::Right(right(r)),
        }
    }

    /// Collapses both sides into one value.
    pub fn fold<T, F, G>(self, if_left: F, if_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => if_left(l),
            Either::Right(r) => if_right(r),
        }
    }

    #[must_use]
    pub fn get_or_none(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// `false` for any `Left`, otherwise whatever `predicate` says about the payload.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Either::Left(_) => false,
            Either::Right(r) => predicate(r),
        }
    }

    #[must_use]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    #[must_use]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    #[must_use]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }
}

impl<L: Display, R: Display> Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => l.fmt(f),
            Either::Right(r) => r.fmt(f),
        }
    }
}
