//! Bit layout of a packed `Merr` value.
//!
//! ```text
//! ┌──────────────────────────┬──────┬─────────────────┬──────────────────┐
//! │  file offset (i32)       │ rsvd │  line (15 bit)  │  errno (16 bit)  │
//! │  63..32, signed, in      │  31  │  30..16         │  15..0           │
//! │  MERR_ALIGN units        │      │  wraps silently │  abs(code)       │
//! └──────────────────────────┴──────┴─────────────────┴──────────────────┘
//! ```
//!
//! The reserved bit is always 1 for values produced by this encoding.
//! A non-zero value with the bit clear belongs to a foreign encoding and
//! its other fields must not be interpreted.

pub const MERR_FILE_SHIFT: u32 = 32;
pub const MERR_RSVD_SHIFT: u32 = 31;
pub const MERR_LINE_SHIFT: u32 = 16;
pub const MERR_ERRNO_SHIFT: u32 = 0;

pub const MERR_FILE_MASK: u64 = 0xffff_ffff_0000_0000;
pub const MERR_RSVD_MASK: u64 = 1 << MERR_RSVD_SHIFT;
pub const MERR_LINE_MASK: u64 = 0x0000_0000_7fff_0000;
pub const MERR_ERRNO_MASK: u64 = 0x0000_0000_0000_ffff;

/// Largest line number that survives a round trip.
pub const MERR_LINE_MAX: u32 = (MERR_LINE_MASK >> MERR_LINE_SHIFT) as u32;

/// Largest errno that survives a round trip.
pub const MERR_ERRNO_MAX: u32 = (MERR_ERRNO_MASK >> MERR_ERRNO_SHIFT) as u32;

/// Alignment (and offset unit) of every file-name literal in the region.
pub const MERR_ALIGN: usize = 1 << 6;

/// Designated "unknown" value. Decodes to no file.
pub const MERR_UNKNOWN: u64 = u64::MAX;

/// Sign-extend the file field of a raw value.
#[inline]
pub const fn file_offset(raw: u64) -> i64 {
    ((raw & MERR_FILE_MASK) as i64) >> MERR_FILE_SHIFT
}

/// True if `off` fits the signed file field without truncation.
#[inline]
pub const fn offset_fits(off: i64) -> bool {
    (((off as u64) << MERR_FILE_SHIFT) as i64) >> MERR_FILE_SHIFT == off
}
