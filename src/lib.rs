//! Sequence diffing and patching. [`diff`] computes a minimal edit script
//! between two sequences as a [`Patch`]; applying the patch to the original
//! sequence yields the revised one, restoring walks it back.

pub mod chunk;
pub mod delta;
pub mod err;
pub mod myers;
pub mod patch;
pub mod util;

pub use chunk::Chunk;
pub use delta::Delta;
pub use err::{PatchError, SerdeError};
pub use myers::{MyersDiff, diff, diff_by};
pub use patch::Patch;

/// A diff engine producing a [`Patch`] from two sequences.
pub trait DiffAlgorithm<T> {
    fn diff(&self, original: &[T], revised: &[T]) -> Patch<T>;
}

/// Computes the patch with a caller-chosen algorithm.
pub fn diff_with<T, A: DiffAlgorithm<T>>(
    original: &[T],
    revised: &[T],
    algorithm: &A,
) -> Patch<T> {
    algorithm.diff(original, revised)
}

/// Splits both texts into lines and diffs line by line. Line terminators
/// are not part of the compared elements, so `\n` and `\r\n` endings
/// compare equal.
pub fn diff_lines<'a>(original: &'a str, revised: &'a str) -> Patch<&'a str> {
    let original: Vec<&str> = original.lines().collect();
    let revised: Vec<&str> = revised.lines().collect();
    MyersDiff.diff(&original, &revised)
}

/// Applies `patch` to `original`, producing the revised sequence.
pub fn patch<T: PartialEq + Clone>(original: &[T], patch: &Patch<T>) -> Result<Vec<T>, PatchError> {
    patch.apply(original)
}

/// Undoes `patch` on `revised`, recovering the original sequence.
pub fn unpatch<T: Clone>(revised: &[T], patch: &Patch<T>) -> Result<Vec<T>, PatchError> {
    patch.restore(revised)
}
