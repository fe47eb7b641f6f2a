//! Collaborator traits
//!
//! These define the interface between the platform-agnostic renderer
//! logic and the platform pieces it defers to.

use crate::error::MerrResult;

/// Maps an error number to a description, writing into a caller buffer.
///
/// Must be reentrant: the renderer calls it from any thread, concurrently,
/// with no locking.
pub trait Describe: Send + Sync {
    /// Write the description of `code` into `buf`, NUL-terminated.
    ///
    /// On success returns the description length (without terminator).
    /// Fails with `InvalidCode` for unknown codes and `BufferTooSmall` when
    /// `buf` cannot hold the whole description; in that case the contents
    /// of `buf` are unspecified. Any other failure (`Format`) makes the
    /// renderer fall back to a fixed message.
    fn describe(&self, code: i32, buf: &mut [u8]) -> MerrResult<usize>;
}

/// Formats packed values that belong to another encoding.
pub trait ForeignDecoder: Send + Sync {
    /// Render `raw` into `buf` (NUL-terminated, truncating).
    ///
    /// Returns the needed buffer size if the decoder knows it.
    fn strinfo(&self, raw: u64, buf: &mut [u8]) -> Option<usize>;
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe(&self, code: i32, buf: &mut [u8]) -> MerrResult<usize> {
        (**self).describe(code, buf)
    }
}

impl<T: ForeignDecoder + ?Sized> ForeignDecoder for &T {
    fn strinfo(&self, raw: u64, buf: &mut [u8]) -> Option<usize> {
        (**self).strinfo(raw, buf)
    }
}
