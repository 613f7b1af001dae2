use super::Either;

/// Wraps any value into an [`Either`], leaving the other side to inference.
///
/// ```
/// use sibpf_either::{Either, EitherExt};
///
/// let parsed = 5.as_right::<String>().map(|x| x * 2);
/// assert_eq!(parsed, Either::Right(10));
/// ```
#[allow(clippy::wrong_self_convention)]
pub trait EitherExt: Sized {
    fn as_left<R>(self) -> Either<Self, R>;

    fn as_right<L>(self) -> Either<L, Self>;
}

impl<T> EitherExt for T {
    fn as_left<R>(self) -> Either<Self, R> {
        Either::Left(self)
    }

    fn as_right<L>(self) -> Either<L, Self> {
        Either::Right(self)
    }
}

pub fn as_left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

pub fn as_right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}
