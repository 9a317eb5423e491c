//! In-place assignment of returned values.

/// Values that can either be built into a new `Output` or written into an existing one.
///
/// Operations producing a permutation (see [`crate::perm::ops`]) return a value implementing this
/// trait for every supported storage type. When producing many permutations in a row, assigning
/// into the same buffer reuses its allocation.
pub trait Inplace<Output: ?Sized> {
    /// Returns the result as a newly constructed value.
    fn build(self) -> Output
    where
        Output: Sized;

    /// Assigns to `output` in-place, overwriting a previous value, reusing its resources.
    fn assign_to(self, output: &mut Output);
}

/// Universal extension trait to support `target.assign(operation)` syntax.
///
/// This keeps the target of the assignment on the left, as it would be for a direct
/// `target = ...` assignment.
pub trait AssignInplace {
    /// Assign `value` in-place, overwriting a previous value, reusing resources.
    ///
    /// Delegates to [`Inplace::assign_to`].
    #[inline(always)]
    fn assign(&mut self, value: impl Inplace<Self>) {
        value.assign_to(self);
    }
}

impl<T: ?Sized> AssignInplace for T {}
