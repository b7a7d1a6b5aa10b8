//! The `Clonable` capability.

/// A value that can produce an independently owned copy of itself.
///
/// Unlike [`std::clone::Clone`], implementations are expected to recurse:
/// a deep clone of an `Rc<T>` allocates a fresh `Rc` holding a clone of `T`
/// instead of bumping the reference count. Types mix both behaviours per
/// field through `#[derive(Clonable)]` and `#[clone(strategy = ...)]`.
///
/// # Method resolution
///
/// The method is named `clone`, so for a type that also implements
/// `std::clone::Clone`, `value.clone()` is ambiguous while this trait is in
/// scope. Call it as `Clonable::clone(&value)` in that case. Generated code
/// always uses the fully qualified form.
pub trait Clonable: Sized {
    /// Returns a recursively cloned copy of `self`.
    fn clone(&self) -> Self;
}
