use core::fmt;
use std::io;

use crate::codes::errno_name;
use crate::render::full_diagnostic;
use crate::{Encoding, Merr};

/// Stack buffer used by `Display` before falling back to the heap.
const DISPLAY_BUF: usize = 256;

// ── Display / Debug ───────────────────────────────────────────────

impl fmt::Display for Merr {
    /// Full diagnostic, `"file:line: description"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; DISPLAY_BUF];
        let (text, need) = full_diagnostic(*self, &mut buf);
        match need {
            Some(need) if need > DISPLAY_BUF => {
                let mut big = vec![0u8; need];
                let (text, _) = full_diagnostic(*self, &mut big);
                f.write_str(text)
            }
            _ => f.write_str(text),
        }
    }
}

struct Errno(u32);

impl fmt::Debug for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match errno_name(self.0) {
            Some(name) => write!(f, "{}({})", name, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

impl fmt::Debug for Merr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encoding() {
            Encoding::Success => f.write_str("Merr::SUCCESS"),
            Encoding::Foreign => write!(f, "Merr(foreign {:#x})", self.raw()),
            Encoding::Merr if *self == Merr::UNKNOWN => f.write_str("Merr::UNKNOWN"),
            Encoding::Merr => f
                .debug_struct("Merr")
                .field("errno", &Errno(self.errno()))
                .field("file", &self.file())
                .field("line", &self.lineno())
                .finish(),
        }
    }
}

impl std::error::Error for Merr {}

impl Merr {
    /// Owned full diagnostic.
    pub fn to_string_lossy(&self) -> String {
        self.to_string()
    }
}

// ── Into<io::Error> ───────────────────────────────────────────────

impl From<Merr> for io::Error {
    /// The errno becomes the raw OS error; location is dropped.
    ///
    /// Foreign values have no errno and become `ErrorKind::Other` wrapping
    /// the value itself.
    fn from(err: Merr) -> Self {
        match err.encoding() {
            Encoding::Merr => io::Error::from_raw_os_error(err.errno() as i32),
            _ => io::Error::new(io::ErrorKind::Other, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::pack;

    crate::merr_file!();

    #[test]
    fn display_without_file() {
        let err = pack(crate::codes::EBUG, None, 1);
        assert_eq!(err.to_string(), "software bug");
        assert_eq!(Merr::SUCCESS.to_string(), "success");
    }

    #[test]
    fn display_foreign() {
        assert_eq!(
            Merr::from_raw(0x42).to_string(),
            "foreign error 0x42"
        );
    }

    #[test]
    fn debug_forms() {
        assert_eq!(format!("{:?}", Merr::SUCCESS), "Merr::SUCCESS");
        assert_eq!(format!("{:?}", Merr::UNKNOWN), "Merr::UNKNOWN");
        assert_eq!(format!("{:?}", Merr::from_raw(0x42)), "Merr(foreign 0x42)");

        let err = pack(-libc::ENOENT, None, 42);
        assert_eq!(
            format!("{:?}", err),
            format!("Merr {{ errno: ENOENT({}), file: None, line: 42 }}", libc::ENOENT)
        );

        let err = pack(3000, None, 1);
        assert_eq!(format!("{:?}", err), "Merr { errno: 3000, file: None, line: 1 }");
    }

    #[test]
    fn into_io_error() {
        let io_err: io::Error = pack(libc::ENOENT, None, 7).into();
        assert_eq!(io_err.raw_os_error(), Some(libc::ENOENT));
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);

        let io_err: io::Error = Merr::from_raw(0x42).into();
        assert_eq!(io_err.kind(), io::ErrorKind::Other);
        assert_eq!(io_err.raw_os_error(), None);
    }

    #[cfg(any(target_os = "linux", target_os = "android", target_os = "freebsd"))]
    #[test]
    fn display_with_file() {
        let err = pack(crate::codes::EBUG, Some(crate::__merr_file!()), 9);
        assert_eq!(err.to_string_lossy(), "src/convert.rs:9: software bug");
        assert_eq!(
            format!("{:?}", err),
            "Merr { errno: EBUG(1001), file: Some(\"src/convert.rs\"), line: 9 }"
        );
    }
}
