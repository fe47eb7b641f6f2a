//! Error numbers understood by the renderer.
//!
//! POSIX errnos come from the platform (`libc`), so the numeric values
//! match whatever `strerror_r` expects on the target. [`EBUG`] is merr's own
//! code for "this is a software bug", outside the range any platform uses.

/// Software bug. Rendered with a fixed message, never passed to
/// `strerror_r`.
pub const EBUG: i32 = 1001;

/// Recorded by `merr_io!` for I/O errors that carry no OS error.
pub const EIO: i32 = libc::EIO;

/// Symbolic name of an errno, for `Debug` output.
///
/// Only the commonly handled values are named; anything else is `None`.
///
/// ```
/// assert_eq!(merr::codes::errno_name(libc::ENOENT as u32), Some("ENOENT"));
/// assert_eq!(merr::codes::errno_name(merr::codes::EBUG as u32), Some("EBUG"));
/// ```
pub fn errno_name(errno: u32) -> Option<&'static str> {
    let Ok(code) = i32::try_from(errno) else {
        return None;
    };

    let name = match code {
        EBUG => "EBUG",

        // ── Process / permission ─────────────────────────────────
        libc::EPERM => "EPERM",
        libc::ENOENT => "ENOENT",
        libc::ESRCH => "ESRCH",
        libc::EINTR => "EINTR",
        libc::EIO => "EIO",
        libc::ENXIO => "ENXIO",
        libc::E2BIG => "E2BIG",
        libc::EACCES => "EACCES",
        libc::EEXIST => "EEXIST",
        libc::EBUSY => "EBUSY",

        // ── Memory / resources ───────────────────────────────────
        libc::ENOMEM => "ENOMEM",
        libc::EAGAIN => "EAGAIN",
        libc::EMFILE => "EMFILE",
        libc::ENFILE => "ENFILE",
        libc::ENOSPC => "ENOSPC",

        // ── I/O ──────────────────────────────────────────────────
        libc::EBADF => "EBADF",
        libc::EINVAL => "EINVAL",
        libc::EPIPE => "EPIPE",
        libc::EFBIG => "EFBIG",
        libc::ENOTDIR => "ENOTDIR",
        libc::EISDIR => "EISDIR",
        libc::EROFS => "EROFS",
        libc::ERANGE => "ERANGE",
        libc::ENAMETOOLONG => "ENAMETOOLONG",
        libc::ENOTEMPTY => "ENOTEMPTY",
        libc::ENOSYS => "ENOSYS",

        // ── Networking ───────────────────────────────────────────
        libc::EADDRINUSE => "EADDRINUSE",
        libc::EADDRNOTAVAIL => "EADDRNOTAVAIL",
        libc::ENETDOWN => "ENETDOWN",
        libc::ENETUNREACH => "ENETUNREACH",
        libc::ECONNABORTED => "ECONNABORTED",
        libc::ECONNRESET => "ECONNRESET",
        libc::ENOBUFS => "ENOBUFS",
        libc::EISCONN => "EISCONN",
        libc::ENOTCONN => "ENOTCONN",
        libc::ETIMEDOUT => "ETIMEDOUT",
        libc::ECONNREFUSED => "ECONNREFUSED",
        libc::EHOSTUNREACH => "EHOSTUNREACH",
        libc::EALREADY => "EALREADY",
        libc::EINPROGRESS => "EINPROGRESS",

        _ => return None,
    };
    Some(name)
}
