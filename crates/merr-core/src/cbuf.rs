//! NUL-terminated byte buffers.
//!
//! The renderer writes into caller-owned `&mut [u8]` with C string rules:
//! the output is always terminated when the buffer is non-empty, and
//! truncation is reported by returning the untruncated length.

use core::fmt;

/// Copy `src` into `buf`, truncating and terminating. Returns `src.len()`.
pub fn strlcpy(buf: &mut [u8], src: &[u8]) -> usize {
    if let Some(room) = buf.len().checked_sub(1) {
        let n = src.len().min(room);
        buf[..n].copy_from_slice(&src[..n]);
        buf[n] = 0;
    }
    src.len()
}

/// Length of the NUL-terminated string in `buf` (whole buffer if none).
pub fn strlen(buf: &[u8]) -> usize {
    buf.iter().position(|&b| b == 0).unwrap_or(buf.len())
}

/// The NUL-terminated contents of `buf` as text.
///
/// A truncation that split a multi-byte character is cut back to the last
/// complete one.
pub fn as_str(buf: &[u8]) -> &str {
    let bytes = &buf[..strlen(buf)];
    match core::str::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            let valid = &bytes[..e.valid_up_to()];
            // SAFETY: `valid_up_to` marks the longest valid UTF-8 prefix.
            unsafe { core::str::from_utf8_unchecked(valid) }
        }
    }
}

/// `fmt::Write` sink with `snprintf` semantics.
///
/// Writes what fits (leaving room for the terminator), keeps counting
/// past the end so [`written`](Self::written) reports the full length.
pub struct CBufWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
    total: usize,
}

impl<'a> CBufWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        if let Some(first) = buf.first_mut() {
            *first = 0;
        }
        Self { buf, pos: 0, total: 0 }
    }

    /// Untruncated length of everything written so far.
    #[inline]
    pub fn written(&self) -> usize {
        self.total
    }

    /// True if the output had to be cut short.
    #[inline]
    pub fn truncated(&self) -> bool {
        self.total >= self.buf.len()
    }
}

impl fmt::Write for CBufWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        self.total += bytes.len();

        let room = self.buf.len().saturating_sub(1).saturating_sub(self.pos);
        let n = bytes.len().min(room);
        if n > 0 {
            self.buf[self.pos..self.pos + n].copy_from_slice(&bytes[..n]);
            self.pos += n;
        }
        if self.pos < self.buf.len() {
            self.buf[self.pos] = 0;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn strlcpy_fits() {
        let mut buf = [0xaau8; 8];
        assert_eq!(strlcpy(&mut buf, b"abc"), 3);
        assert_eq!(&buf[..4], b"abc\0");
        assert_eq!(as_str(&buf), "abc");
    }

    #[test]
    fn strlcpy_truncates() {
        let mut buf = [0xaau8; 4];
        assert_eq!(strlcpy(&mut buf, b"abcdef"), 6);
        assert_eq!(&buf, b"abc\0");
    }

    #[test]
    fn strlcpy_empty_buffer() {
        let mut buf = [0u8; 0];
        assert_eq!(strlcpy(&mut buf, b"abc"), 3);
    }

    #[test]
    fn strlen_without_terminator() {
        assert_eq!(strlen(b"abc"), 3);
        assert_eq!(strlen(b"ab\0c"), 2);
    }

    #[test]
    fn as_str_cuts_split_char() {
        let buf = [b'a', 0xc3, 0];
        assert_eq!(as_str(&buf), "a");
    }

    #[test]
    fn writer_counts_past_end() {
        let mut buf = [0u8; 8];
        let mut w = CBufWriter::new(&mut buf);
        write!(w, "{}:{}: ", "src/lib.rs", 42).unwrap();
        assert_eq!(w.written(), 15);
        assert!(w.truncated());
        assert_eq!(&buf, b"src/lib\0");
    }

    #[test]
    fn writer_exact_fit() {
        let mut buf = [0u8; 6];
        let mut w = CBufWriter::new(&mut buf);
        write!(w, "a:{}: ", 1).unwrap();
        assert_eq!(w.written(), 5);
        assert!(!w.truncated());
        assert_eq!(&buf, b"a:1: \0");
    }

    #[test]
    fn writer_empty_buffer() {
        let mut buf = [0u8; 0];
        let mut w = CBufWriter::new(&mut buf);
        write!(w, "x").unwrap();
        assert_eq!(w.written(), 1);
        assert!(w.truncated());
    }
}
