//! Decoder: `Merr` → errno, line, file.
//!
//! `errno_of` and `line_of` are plain mask-and-shift. `file_of` goes
//! through the region so a stale or corrupted value can only ever produce
//! a real section literal or a sentinel.

use merr_core::layout::MERR_UNKNOWN;
use merr_core::FileRegion;

use crate::section;
use crate::{Encoding, Merr};

pub use crate::value::{errno_of, line_of};

/// Shortened file name recorded in `err`, if any.
///
/// `None` for success, the unknown value, foreign values, and values
/// packed without a file.
#[inline]
pub fn file_of(err: Merr) -> Option<&'static str> {
    file_in(section::region(), err)
}

/// [`file_of`] against an explicit region.
pub fn file_in(region: &FileRegion, err: Merr) -> Option<&'static str> {
    if err.raw() == MERR_UNKNOWN || err.encoding() != Encoding::Merr {
        return None;
    }
    region.decode_offset(err.file_offset())
}

impl Merr {
    /// Shortened file name, see [`file_of`].
    #[inline]
    pub fn file(&self) -> Option<&'static str> {
        file_of(*self)
    }
}
