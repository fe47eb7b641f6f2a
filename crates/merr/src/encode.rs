//! Encoder: (code, file, line) → `Merr`.

use merr_core::FileRegion;

use crate::section;
use crate::Merr;

/// Pack an error code and source location.
///
/// `file` is only ever compared and subtracted, never read. Anything that
/// fails validation is dropped or replaced by a sentinel; packing cannot
/// fail. Prefer the [`merr!`](crate::merr) macro, which supplies a `file`
/// that lives in the section.
///
/// ```
/// let err = merr::pack(-libc::EAGAIN, None, 7);
/// assert_eq!(err.errno(), libc::EAGAIN as u32);
/// assert_eq!(err.lineno(), 7);
/// assert_eq!(err.file(), None);
/// ```
#[inline]
pub fn pack(code: i32, file: Option<*const u8>, line: u32) -> Merr {
    pack_in(section::region(), code, file, line)
}

/// [`pack`] against an explicit region.
pub fn pack_in(region: &FileRegion, code: i32, file: Option<*const u8>, line: u32) -> Merr {
    if code == 0 {
        return Merr::SUCCESS;
    }

    let off = file.and_then(|f| region.encode_offset(f));
    Merr::assemble(code.unsigned_abs(), line, off)
}
