//! Lifting fallible computations into option-like containers.
//!
//! The reason for a failure is dropped: an absent value is just absent.

use crate::nullable::OptionLike;

/// Runs `computation` and keeps its value only if it succeeded.
///
/// # Examples
///
/// ```rust
/// use vacant::support::attempt;
///
/// let parsed: Option<i32> = attempt(|| "42".parse::<i32>());
/// assert_eq!(parsed, Some(42));
///
/// let rejected: Option<i32> = attempt(|| "forty-two".parse::<i32>());
/// assert_eq!(rejected, None);
/// ```
pub fn attempt<N, E, F>(computation: F) -> N
where
    N: OptionLike,
    F: FnOnce() -> Result<N::Inner, E>,
{
    computation().map_or_else(|_| N::vacant(), N::present)
}

/// Narrows a sum-type value to one of its payloads.
///
/// Yields a populated container when `N::Inner` can be obtained from
/// `variant` through [`TryFrom`], and an empty one otherwise.
///
/// # Examples
///
/// ```rust
/// use vacant::support::from_variant;
///
/// enum Token {
///     Number(i64),
///     Word(String),
/// }
///
/// impl TryFrom<Token> for i64 {
///     type Error = Token;
///
///     fn try_from(token: Token) -> Result<Self, Token> {
///         match token {
///             Token::Number(number) => Ok(number),
///             other => Err(other),
///         }
///     }
/// }
///
/// let number: Option<i64> = from_variant(Token::Number(7));
/// let word: Option<i64> = from_variant(Token::Word(String::from("seven")));
/// assert_eq!(number, Some(7));
/// assert_eq!(word, None);
/// ```
pub fn from_variant<N, V>(variant: V) -> N
where
    N: OptionLike,
    N::Inner: TryFrom<V>,
{
    <N::Inner as TryFrom<V>>::try_from(variant).map_or_else(|_| N::vacant(), N::present)
}
