//! File-name region: where `merr` file literals live and how their
//! addresses become (and come back from) the packed offset field.
//!
//! Every file name referenced by a packed value is a [`MerrFile`] placed
//! in one contiguous region with published bounds. Encoding turns the
//! address into a signed offset from a base anchor; decoding turns the
//! offset back into an address, re-checks it against the bounds, and only
//! then reads the string. [`FileRegion::resolve`] is the single place that
//! reads memory through a reconstructed address.

use crate::layout::{offset_fits, MERR_ALIGN};
use crate::path;

/// Longest file name read back from the region.
pub const MERR_PATH_MAX: usize = 4096;

// `MerrFile` spells the alignment as a literal; keep it in sync.
const _: () = assert!(MERR_ALIGN == 64);

/// A NUL-terminated, zero-padded, `MERR_ALIGN`-aligned file-name literal.
///
/// `N` should come from [`merr_file_len`] so the array fills the whole
/// aligned block and the struct carries no padding.
#[repr(C, align(64))]
pub struct MerrFile<const N: usize>([u8; N]);

impl<const N: usize> MerrFile<N> {
    /// Build the literal at compile time. Names that do not fit (with
    /// their terminator) fail const evaluation.
    pub const fn new(name: &str) -> Self {
        let src = name.as_bytes();
        assert!(src.len() < N, "file name does not fit MerrFile");
        let mut buf = [0u8; N];
        let mut i = 0;
        while i < src.len() {
            buf[i] = src[i];
            i += 1;
        }
        Self(buf)
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const u8 {
        self.0.as_ptr()
    }

    /// The name without its terminator.
    pub fn as_str(&self) -> &str {
        let len = self.0.iter().position(|&b| b == 0).unwrap_or(N);
        core::str::from_utf8(&self.0[..len]).unwrap_or("")
    }
}

/// Array length for a `MerrFile` holding a name of `name_len` bytes.
pub const fn merr_file_len(name_len: usize) -> usize {
    (name_len + 1 + MERR_ALIGN - 1) & !(MERR_ALIGN - 1)
}

/// Fixed strings substituted when a file address cannot be trusted.
///
/// The encoder substitutes the first two by address, so they should live
/// inside the region themselves; the decoder hands out the last two as-is.
#[derive(Debug, Clone, Copy)]
pub struct Sentinels {
    /// File pointer not aligned to the machine word.
    pub misaligned: &'static str,
    /// File pointer inside the region but not on a `MERR_ALIGN` boundary.
    pub unaligned: &'static str,
    /// Recovered name contains non-printable bytes.
    pub corrupt: &'static str,
    /// Recovered address falls outside the region.
    pub out_of_region: &'static str,
}

/// Bounds of the file-name region plus the base anchor offsets are
/// measured from.
#[derive(Debug, Clone, Copy)]
pub struct FileRegion {
    start: usize,
    end: usize,
    base: usize,
    sentinels: Sentinels,
}

impl FileRegion {
    /// Describe a region.
    ///
    /// # Safety
    ///
    /// `[start, end)` must be initialized memory that stays valid and
    /// unmodified for the rest of the process (a link section or a
    /// `static`). `base` must be `MERR_ALIGN`-aligned.
    pub unsafe fn new(
        start: *const u8,
        end: *const u8,
        base: *const u8,
        sentinels: Sentinels,
    ) -> Self {
        Self {
            start: start as usize,
            end: end as usize,
            base: base as usize,
            sentinels,
        }
    }

    /// A region that contains nothing. Every file is dropped on encode.
    pub fn empty(sentinels: Sentinels) -> Self {
        Self {
            start: 0,
            end: 0,
            base: 0,
            sentinels,
        }
    }

    #[inline]
    pub fn contains(&self, addr: usize) -> bool {
        addr >= self.start && addr < self.end
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn sentinels(&self) -> &Sentinels {
        &self.sentinels
    }

    /// Validate a file address and compute its offset field.
    ///
    /// Never dereferences `file`. Returns `None` when the file information
    /// must be omitted: outside the region, or an offset too wide for the
    /// field.
    pub fn encode_offset(&self, file: *const u8) -> Option<i64> {
        let mut addr = file as usize;

        if addr % core::mem::size_of::<usize>() != 0 {
            crate::kdebug!("merr: misaligned file pointer {:#x}", addr);
            addr = self.sentinels.misaligned.as_ptr() as usize;
        }

        if !self.contains(addr) {
            crate::kdebug!("merr: file pointer {:#x} outside region", addr);
            return None;
        }

        if addr % MERR_ALIGN != 0 {
            crate::kdebug!("merr: file pointer {:#x} not on a {}-byte boundary", addr, MERR_ALIGN);
            addr = self.sentinels.unaligned.as_ptr() as usize;
        }

        let off = (addr as i64).wrapping_sub(self.base as i64) / MERR_ALIGN as i64;
        if !offset_fits(off) {
            crate::kdebug!("merr: file offset {} does not fit", off);
            return None;
        }
        Some(off)
    }

    /// Recover the (shortened) file name for an offset field.
    ///
    /// `0` means no file. Anything that fails re-validation yields a
    /// sentinel instead of memory contents.
    pub fn decode_offset(&self, off: i64) -> Option<&'static str> {
        if off == 0 {
            return None;
        }

        let addr = self
            .base
            .wrapping_add_signed((off as isize).wrapping_mul(MERR_ALIGN as isize));

        let Some(name) = self.resolve(addr) else {
            crate::kdebug!("merr: file offset {} resolves outside region", off);
            return Some(self.sentinels.out_of_region);
        };

        match path::shorten(name) {
            Some(short) => Some(short),
            None => {
                crate::kdebug!("merr: corrupt file name at {:#x}", addr);
                Some(self.sentinels.corrupt)
            }
        }
    }

    /// Read the NUL-terminated literal at `addr`.
    ///
    /// Checks bounds and alignment before touching memory and never reads
    /// past the region end or `MERR_PATH_MAX` bytes.
    pub fn resolve(&self, addr: usize) -> Option<&'static [u8]> {
        if !self.contains(addr) || addr % MERR_ALIGN != 0 {
            return None;
        }

        let limit = (self.end - addr).min(MERR_PATH_MAX);
        let ptr = addr as *const u8;
        let mut len = 0;
        while len < limit {
            // SAFETY: `addr + len` lies in [start, end), which `new`
            // guarantees is initialized 'static memory.
            if unsafe { ptr.add(len).read() } == 0 {
                // SAFETY: the same bytes were just read; none of them change.
                return Some(unsafe { core::slice::from_raw_parts(ptr, len) });
            }
            len += 1;
        }
        None
    }
}
