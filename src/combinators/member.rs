//! Member-function accessors as first-class values.

use std::fmt;

/// A parameterless accessor of `A` returning `B`, such as `Person::id`.
///
/// In Rust a method path is already a function `&A -> B`, so the free
/// combinators accept it directly. `Accessor` names that capability as a
/// value: it stores only the method pointer and calling it through the
/// wrapper is observably identical to calling the method.
///
/// # Examples
///
/// ```rust
/// use vacant::combinators::{Accessor, fmap_member};
///
/// struct Person {
///     age: u32,
/// }
///
/// impl Person {
///     fn age(&self) -> u32 {
///         self.age
///     }
/// }
///
/// let age = Accessor::new(Person::age);
/// let person = Some(Person { age: 30 });
/// assert_eq!(fmap_member(&person, age), Some(30));
/// ```
pub struct Accessor<A, B> {
    method: fn(&A) -> B,
}

impl<A, B> Accessor<A, B> {
    /// Wraps a method (or any function) taking `&A`.
    #[inline]
    pub const fn new(method: fn(&A) -> B) -> Self {
        Self { method }
    }

    /// Invokes the accessor on `receiver`.
    #[inline]
    pub fn call(&self, receiver: &A) -> B {
        (self.method)(receiver)
    }
}

impl<A, B> Clone for Accessor<A, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, B> Copy for Accessor<A, B> {}

impl<A, B> From<fn(&A) -> B> for Accessor<A, B> {
    fn from(method: fn(&A) -> B) -> Self {
        Self::new(method)
    }
}

impl<A, B> fmt::Debug for Accessor<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Accessor")
            .field("receiver", &std::any::type_name::<A>())
            .field("output", &std::any::type_name::<B>())
            .finish()
    }
}
