//! File-name shortening for diagnostics.

/// Number of trailing path components kept in diagnostics.
pub const PATH_COMPONENTS: usize = 2;

#[inline]
fn is_print(b: u8) -> bool {
    (0x20..=0x7e).contains(&b)
}

/// Keep the last [`PATH_COMPONENTS`] components of `name`.
///
/// Scans backward from the end and stops once it has passed the second
/// separator. Returns `None` if a scanned byte is not printable ASCII,
/// which is how corruption of the region shows up.
pub fn shorten(name: &[u8]) -> Option<&str> {
    let mut slashes = 0;
    let mut start = 0;

    for i in (0..name.len()).rev() {
        let b = name[i];
        if !is_print(b) {
            return None;
        }
        if b == b'/' {
            slashes += 1;
            if slashes >= PATH_COMPONENTS {
                start = i + 1;
                break;
            }
        }
    }

    // Every scanned byte is printable ASCII, so this cannot fail.
    core::str::from_utf8(&name[start..]).ok()
}
