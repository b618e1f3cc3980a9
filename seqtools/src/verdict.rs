//! [`Verdict`], the normalized result of a predicate.
use core::convert::Infallible;
use core::fmt::Debug;

use sealed::sealed;

/// The output of a predicate: either a plain `bool`, or `Result<bool, E>` for predicates that can fail.
///
/// Combinators decide per call site what a failed predicate means: [`every_fail`](crate::every_fail) returns the
/// error, while [`some`](crate::some()) and [`some_fail`](crate::some_fail) treat it as a non-match.
#[sealed]
pub trait Verdict {
    /// Error of a failed predicate, [`Infallible`] for `bool`.
    type Error;

    /// Normalizes into `Ok(matched)` or `Err(error)`.
    fn into_result(self) -> Result<bool, Self::Error>;
}

#[sealed]
impl Verdict for bool {
    type Error = Infallible;

    fn into_result(self) -> Result<bool, Self::Error> {
        Ok(self)
    }
}

#[sealed]
impl<E> Verdict for Result<bool, E> {
    type Error = E;

    fn into_result(self) -> Result<bool, Self::Error> {
        self
    }
}

/// `true` iff the verdict is a match. Errors count as a non-match.
pub(crate) fn matched<V>(verdict: V) -> bool
where
    V: Verdict,
    V::Error: Debug,
{
    match verdict.into_result() {
        Ok(matched) => matched,
        Err(error) => {
            tracing::debug!(?error, "Predicate failed, treating as no match.");
            false
        }
    }
}
