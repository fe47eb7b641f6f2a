//! The packed error value.

use merr_core::layout::*;

/// Which encoding owns a packed value.
///
/// Several subsystems may hand out 64-bit error values through the same
/// channels. The reserved bit decides who gets to interpret the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Zero: no error.
    Success,
    /// Reserved bit set: errno, line and file offset are ours.
    Merr,
    /// Reserved bit clear on a non-zero value: belongs to someone else.
    Foreign,
}

/// Packed "errno + source location" as a single `u64`.
///
/// Immutable and `Copy`. Create one at the failure site with `merr!` (or
/// `merr::pack`) and propagate it by value; decoding and rendering can
/// happen any number of times, on any thread.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Merr(u64);

impl Merr {
    /// No error.
    pub const SUCCESS: Merr = Merr(0);

    /// Designated "unknown" value.
    pub const UNKNOWN: Merr = Merr(MERR_UNKNOWN);

    /// Wrap a raw value received from elsewhere (another layer, a wire
    /// field, a foreign subsystem). No validation happens here; the
    /// accessors validate lazily.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw packed value.
    #[inline]
    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// Assemble a value from already-validated parts.
    ///
    /// `errno` and `line` are truncated by their masks. `file_off` must
    /// already have passed [`offset_fits`]; anything else is dropped.
    #[inline]
    pub const fn assemble(errno: u32, line: u32, file_off: Option<i64>) -> Self {
        let mut raw = MERR_RSVD_MASK;
        if let Some(off) = file_off {
            if offset_fits(off) {
                raw |= (off as u64) << MERR_FILE_SHIFT;
            }
        }
        raw |= ((line as u64) << MERR_LINE_SHIFT) & MERR_LINE_MASK;
        raw |= ((errno as u64) << MERR_ERRNO_SHIFT) & MERR_ERRNO_MASK;
        Self(raw)
    }

    /// Tag for dispatch.
    #[inline]
    pub const fn encoding(&self) -> Encoding {
        if self.0 == 0 {
            Encoding::Success
        } else if self.0 & MERR_RSVD_MASK != 0 {
            Encoding::Merr
        } else {
            Encoding::Foreign
        }
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }

    /// The errno field (always non-negative).
    #[inline]
    pub const fn errno(&self) -> u32 {
        errno_of(*self)
    }

    /// The line field.
    #[inline]
    pub const fn lineno(&self) -> u32 {
        line_of(*self)
    }

    /// Signed file offset in `MERR_ALIGN` units, `0` when absent.
    ///
    /// Only meaningful for [`Encoding::Merr`] values; the address it
    /// designates is untrusted until a `FileRegion` validates it.
    #[inline]
    pub const fn file_offset(&self) -> i64 {
        file_offset(self.0)
    }
}

/// Extract the errno field.
#[inline]
pub const fn errno_of(err: Merr) -> u32 {
    ((err.0 & MERR_ERRNO_MASK) >> MERR_ERRNO_SHIFT) as u32
}

/// Extract the line field.
#[inline]
pub const fn line_of(err: Merr) -> u32 {
    ((err.0 & MERR_LINE_MASK) >> MERR_LINE_SHIFT) as u32
}

impl From<u64> for Merr {
    fn from(raw: u64) -> Self {
        Merr(raw)
    }
}

impl From<Merr> for u64 {
    fn from(err: Merr) -> Self {
        err.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_zero() {
        assert!(Merr::SUCCESS.is_success());
        assert_eq!(Merr::SUCCESS.encoding(), Encoding::Success);
        assert_eq!(errno_of(Merr::SUCCESS), 0);
        assert_eq!(line_of(Merr::SUCCESS), 0);
        assert_eq!(Merr::default(), Merr::SUCCESS);
    }

    #[test]
    fn assemble_sets_marker() {
        let err = Merr::assemble(2, 42, None);
        assert_eq!(err.encoding(), Encoding::Merr);
        assert_eq!(err.raw() & MERR_RSVD_MASK, MERR_RSVD_MASK);
        assert_eq!(err.errno(), 2);
        assert_eq!(err.lineno(), 42);
        assert_eq!(err.file_offset(), 0);
    }

    #[test]
    fn line_wraps_silently() {
        let err = Merr::assemble(5, MERR_LINE_MAX + 3, None);
        assert_eq!(err.lineno(), 2);
        assert_eq!(err.errno(), 5);
    }

    #[test]
    fn errno_is_masked() {
        let err = Merr::assemble(0x1_0007, 1, None);
        assert_eq!(err.errno(), 7);
        assert_eq!(err.lineno(), 1);
    }

    #[test]
    fn negative_offset_survives() {
        let err = Merr::assemble(1, 1, Some(-12));
        assert_eq!(err.file_offset(), -12);
        assert_eq!(err.errno(), 1);
        assert_eq!(err.lineno(), 1);
    }

    #[test]
    fn oversized_offset_dropped() {
        let err = Merr::assemble(1, 1, Some(1 << 40));
        assert_eq!(err.file_offset(), 0);
        assert_eq!(err.encoding(), Encoding::Merr);
    }

    #[test]
    fn foreign_values_tagged() {
        assert_eq!(Merr::from_raw(0x1234).encoding(), Encoding::Foreign);
        assert_eq!(Merr::UNKNOWN.encoding(), Encoding::Merr);
    }

    #[test]
    fn copy_semantics() {
        let a = Merr::assemble(11, 7, None);
        let b = a;
        assert_eq!(a, b);
        assert_eq!(u64::from(a), a.raw());
        assert_eq!(Merr::from(a.raw()), a);
    }
}
