/// Pack an error code with the current file and line.
///
/// Records the file literal declared by [`merr_file!`](crate::merr_file),
/// which must be invoked once in the enclosing module, so the name can be
/// validated and recovered later.
///
/// ```
/// use merr::merr;
///
/// merr::merr_file!();
///
/// fn open() -> Result<(), merr::Merr> {
///     Err(merr!(libc::ENOENT))
/// }
///
/// let err = open().unwrap_err();
/// assert_eq!(err.errno(), libc::ENOENT as u32);
/// ```
#[macro_export]
macro_rules! merr {
    ($code:expr) => {
        $crate::pack($code, ::core::option::Option::Some($crate::__merr_file!()), line!())
    };
}

/// Pack the OS error of an `std::io::Error` with the current file and line.
///
/// Errors that carry no OS error are recorded as `EIO`.
#[macro_export]
macro_rules! merr_io {
    ($err:expr) => {
        $crate::merr!(::std::io::Error::raw_os_error(&$err).unwrap_or($crate::codes::EIO))
    };
}

#[cfg(test)]
mod tests {
    use crate::codes::EIO;
    use crate::Merr;
    use std::io;

    crate::merr_file!();

    #[test]
    fn captures_line() {
        let line = line!() + 1;
        let err: Merr = merr!(-libc::EAGAIN);
        assert_eq!(err.errno(), libc::EAGAIN as u32);
        assert_eq!(err.lineno(), line);
    }

    #[test]
    fn zero_is_success() {
        assert!(merr!(0).is_success());
    }

    #[test]
    fn from_io_error() {
        let err = merr_io!(io::Error::from_raw_os_error(libc::EPIPE));
        assert_eq!(err.errno(), libc::EPIPE as u32);

        let err = merr_io!(io::Error::new(io::ErrorKind::Other, "custom"));
        assert_eq!(err.errno(), EIO as u32);
    }

    #[cfg(any(target_os = "linux", target_os = "android", target_os = "freebsd"))]
    #[test]
    fn captures_file() {
        assert_eq!(merr!(libc::EIO).file(), Some("src/macros.rs"));
    }

    #[test]
    fn call_sites_share_one_literal() {
        let a = merr!(libc::EIO);
        let b = merr!(libc::EPIPE);
        let c = merr_io!(io::Error::from_raw_os_error(libc::EINTR));
        assert_eq!(a.file_offset(), b.file_offset());
        assert_eq!(a.file_offset(), c.file_offset());
        assert_ne!(a.lineno(), b.lineno());
    }
}
