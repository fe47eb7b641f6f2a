//! System error descriptions.
//!
//! Unix targets use the XSI `strerror_r`, which writes into the caller's
//! buffer and is safe to call from any thread. Other targets go through
//! `std::io::Error`.

use merr_core::cbuf;
use merr_core::{Describe, MerrError, MerrResult};

/// The platform's error-description facility.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemStrerror;

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        impl Describe for SystemStrerror {
            fn describe(&self, code: i32, buf: &mut [u8]) -> MerrResult<usize> {
                if buf.is_empty() {
                    return Err(MerrError::BufferTooSmall);
                }

                // SAFETY: `buf` is valid for writes of `buf.len()` bytes and
                // strerror_r never writes more than that.
                let rc = unsafe {
                    libc::strerror_r(code, buf.as_mut_ptr().cast::<libc::c_char>(), buf.len())
                };

                // Older glibc reports failure as -1 + errno.
                let rc = if rc == -1 {
                    std::io::Error::last_os_error().raw_os_error().unwrap_or(libc::EINVAL)
                } else {
                    rc
                };

                match rc {
                    0 => Ok(cbuf::strlen(buf)),
                    libc::ERANGE => Err(MerrError::BufferTooSmall),
                    _ => Err(MerrError::InvalidCode(code)),
                }
            }
        }
    } else {
        impl Describe for SystemStrerror {
            fn describe(&self, code: i32, buf: &mut [u8]) -> MerrResult<usize> {
                let msg = std::io::Error::from_raw_os_error(code).to_string();
                // Drop std's " (os error N)" suffix.
                let msg = msg.rsplit_once(" (os error ").map_or(msg.as_str(), |(m, _)| m);
                if msg.len() >= buf.len() {
                    return Err(MerrError::BufferTooSmall);
                }
                Ok(cbuf::strlcpy(buf, msg.as_bytes()))
            }
        }
    }
}
