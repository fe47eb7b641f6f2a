//! The `merr_files` link section.
//!
//! Every file name declared by `merr_file!` is a `MerrFile` static placed
//! in one dedicated section, next to the base anchor and the four sentinels
//! defined here. The linker publishes the section bounds; the process-wide
//! [`FileRegion`] is built from them once, on first use.
//!
//! | Target          | Section                 | Bounds                                   |
//! |-----------------|-------------------------|------------------------------------------|
//! | ELF             | `merr_files`            | `__start_merr_files` / `__stop_merr_files` |
//! | Apple           | `__DATA,__merr_files`   | `section$start$__DATA$__merr_files` / `section$end$…` |
//! | everything else | none                    | empty region, file information is dropped |

use std::sync::OnceLock;

use merr_core::{FileRegion, Sentinels};

/// Place a `MerrFile` literal in the file-name section.
#[doc(hidden)]
#[macro_export]
macro_rules! __merr_section_static {
    ($vis:vis $name:ident, $text:expr) => {
        #[cfg_attr(
            any(target_os = "macos", target_os = "ios", target_os = "tvos", target_os = "watchos"),
            link_section = "__DATA,__merr_files"
        )]
        #[cfg_attr(
            any(
                target_os = "linux",
                target_os = "android",
                target_os = "freebsd",
                target_os = "netbsd",
                target_os = "openbsd",
                target_os = "dragonfly",
                target_os = "illumos",
                target_os = "solaris",
                target_os = "fuchsia"
            ),
            link_section = "merr_files"
        )]
        #[used]
        #[allow(dead_code)]
        $vis static $name: $crate::MerrFile<{ $crate::merr_file_len($text.len()) }> =
            $crate::MerrFile::new($text);
    };
}

/// Declare the current file's name literal.
///
/// Invoke once per source file (at module level), before any `merr!` in
/// it. Every `merr!` in the module, and in child modules that glob-import
/// it, records the same literal, so the section holds one name per file.
///
/// ```
/// merr::merr_file!();
///
/// fn fail() -> merr::Merr {
///     merr::merr!(libc::EINVAL)
/// }
///
/// assert_eq!(fail().errno(), libc::EINVAL as u32);
/// ```
#[macro_export]
macro_rules! merr_file {
    () => {
        $crate::__merr_section_static!(_MERR_FILE, file!());
    };
}

/// Address of the literal declared by `merr_file!()` in scope.
#[doc(hidden)]
#[macro_export]
macro_rules! __merr_file {
    () => {
        _MERR_FILE.as_ptr()
    };
}

__merr_section_static!(MERR_BASE, "merr_base");
__merr_section_static!(MERR_BUG0, "merr_bug0");
__merr_section_static!(MERR_BUG1, "merr_bug1");
__merr_section_static!(MERR_BUG2, "merr_bug2");
__merr_section_static!(MERR_BUG3, "merr_bug3");

cfg_if::cfg_if! {
    if #[cfg(any(target_os = "macos", target_os = "ios", target_os = "tvos", target_os = "watchos"))] {
        extern "C" {
            #[link_name = "\x01section$start$__DATA$__merr_files"]
            static MERR_SECTION_START: u8;
            #[link_name = "\x01section$end$__DATA$__merr_files"]
            static MERR_SECTION_END: u8;
        }

        // addr_of! on an extern static needs unsafe before 1.82
        #[allow(unused_unsafe)]
        fn bounds() -> Option<(*const u8, *const u8)> {
            // SAFETY: only the addresses are taken; the linker defines both.
            unsafe {
                Some((
                    core::ptr::addr_of!(MERR_SECTION_START),
                    core::ptr::addr_of!(MERR_SECTION_END),
                ))
            }
        }
    } else if #[cfg(any(
        target_os = "linux",
        target_os = "android",
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd",
        target_os = "dragonfly",
        target_os = "illumos",
        target_os = "solaris",
        target_os = "fuchsia"
    ))] {
        extern "C" {
            #[link_name = "__start_merr_files"]
            static MERR_SECTION_START: u8;
            #[link_name = "__stop_merr_files"]
            static MERR_SECTION_END: u8;
        }

        #[allow(unused_unsafe)]
        fn bounds() -> Option<(*const u8, *const u8)> {
            // SAFETY: only the addresses are taken; the linker defines both
            // because this crate always places its sentinels in the section.
            unsafe {
                Some((
                    core::ptr::addr_of!(MERR_SECTION_START),
                    core::ptr::addr_of!(MERR_SECTION_END),
                ))
            }
        }
    } else {
        fn bounds() -> Option<(*const u8, *const u8)> {
            None
        }
    }
}

/// Sentinel literals, all living in the section.
pub fn sentinels() -> Sentinels {
    Sentinels {
        misaligned: MERR_BUG0.as_str(),
        unaligned: MERR_BUG1.as_str(),
        corrupt: MERR_BUG2.as_str(),
        out_of_region: MERR_BUG3.as_str(),
    }
}

/// Address of the base anchor. Offset `0` designates it and decodes to
/// "no file".
pub fn base_ptr() -> *const u8 {
    MERR_BASE.as_ptr()
}

fn init_region() -> FileRegion {
    let base = MERR_BASE.as_ptr() as usize;
    match bounds() {
        Some((start, end)) if (start as usize) <= base && base < end as usize => {
            merr_core::kdebug!(
                "merr: file region {:p}..{:p} ({} bytes)",
                start,
                end,
                end as usize - start as usize
            );
            // SAFETY: the linker-provided bounds enclose only `MerrFile`
            // statics, which are immutable and live for the whole process.
            unsafe { FileRegion::new(start, end, MERR_BASE.as_ptr(), sentinels()) }
        }
        Some((start, end)) => {
            merr_core::kwarn!(
                "merr: base {:#x} outside file region {:p}..{:p}, file names disabled",
                base,
                start,
                end
            );
            FileRegion::empty(sentinels())
        }
        None => FileRegion::empty(sentinels()),
    }
}

/// The process-wide file region, initialized once.
pub fn region() -> &'static FileRegion {
    static REGION: OnceLock<FileRegion> = OnceLock::new();
    REGION.get_or_init(init_region)
}
