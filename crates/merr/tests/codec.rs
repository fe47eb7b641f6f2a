//! End-to-end behavior of the packed error codec.

use merr::section;
use merr::{
    code_to_string, errno_of, file_of, full_diagnostic, line_of, merr, pack, Encoding, Merr,
    Renderer,
};
use merr_core::cbuf;
use merr_core::layout::MERR_LINE_MAX;

merr::merr_file!();

fn description(code: i32) -> String {
    let mut buf = [0u8; 512];
    let need = code_to_string(code, &mut buf);
    assert!(need <= buf.len());
    cbuf::as_str(&buf).to_owned()
}

#[test]
fn success_value() {
    let err = pack(0, Some(merr::__merr_file!()), 99);
    assert_eq!(err.raw(), 0);
    assert_eq!(errno_of(Merr::SUCCESS), 0);
    assert_eq!(line_of(Merr::SUCCESS), 0);
    assert_eq!(file_of(Merr::SUCCESS), None);
    assert_eq!(Merr::SUCCESS.encoding(), Encoding::Success);
}

#[test]
fn errno_and_line_round_trip() {
    for code in [1, 2, 5, 11, 110, 1001, 0xffff] {
        for line in [0, 1, 42, 4096, MERR_LINE_MAX] {
            for c in [code, -code] {
                let err = pack(c, None, line);
                assert_eq!(errno_of(err), code as u32);
                assert_eq!(line_of(err), line);
            }
        }
    }
}

#[test]
fn line_is_masked() {
    let err = pack(2, None, MERR_LINE_MAX + 1);
    assert_eq!(line_of(err), 0);
    assert_eq!(errno_of(err), 2);
}

#[test]
fn unknown_value() {
    assert_eq!(file_of(Merr::UNKNOWN), None);
    assert_eq!(Merr::UNKNOWN.encoding(), Encoding::Merr);
}

#[test]
fn exact_and_short_buffers() {
    let text = description(libc::ENOENT);

    let mut exact = vec![0xaau8; text.len() + 1];
    assert_eq!(code_to_string(libc::ENOENT, &mut exact), text.len() + 1);
    assert_eq!(cbuf::as_str(&exact), text);

    let mut short = vec![0xaau8; text.len()];
    assert_eq!(code_to_string(libc::ENOENT, &mut short), text.len() + 1);
    assert_eq!(cbuf::as_str(&short), &text[..text.len() - 1]);
    assert_eq!(short[text.len() - 1], 0);
}

#[test]
fn foreign_values_go_to_the_decoder() {
    struct Upper;

    impl merr::ForeignDecoder for Upper {
        fn strinfo(&self, raw: u64, buf: &mut [u8]) -> Option<usize> {
            Some(cbuf::strlcpy(buf, format!("UPPER {:X}", raw).as_bytes()) + 1)
        }
    }

    let r = Renderer::with(merr::SystemStrerror, Upper);
    let mut buf = [0u8; 64];
    let (text, need) = r.full_diagnostic(Merr::from_raw(0xbeef), &mut buf);
    assert_eq!(text, "UPPER BEEF");
    assert_eq!(need, Some(11));

    let (text, _) = full_diagnostic(Merr::from_raw(0xbeef), &mut buf);
    assert_eq!(text, "foreign error 0xbeef");
}

#[test]
fn sentinel_file_renders() {
    let bug0 = section::sentinels().misaligned.as_ptr();
    let err = pack(2, Some(bug0), 42);

    let mut buf = [0u8; 256];
    let (text, need) = full_diagnostic(err, &mut buf);
    let desc = description(2);
    assert!(text.ends_with(&desc), "{text:?}");
    assert_eq!(need, Some(text.len() + 1));

    if !section::region().is_empty() {
        assert_eq!(text, format!("merr_bug0:42: {desc}"));
    }
}

#[test]
fn rendered_size_is_enough() {
    let err = merr!(libc::ECONNRESET);
    let mut small = [0u8; 4];
    let (_, need) = full_diagnostic(err, &mut small);
    let need = need.unwrap();

    let mut big = vec![0u8; need];
    let (text, again) = full_diagnostic(err, &mut big);
    assert!(again.unwrap() <= need);
    assert!(text.ends_with(&description(libc::ECONNRESET)));
}

#[cfg(any(target_os = "linux", target_os = "android", target_os = "freebsd"))]
mod section_backed {
    use super::*;

    #[test]
    fn file_round_trip() {
        let err = merr!(libc::EAGAIN);
        assert_eq!(file_of(err), Some("tests/codec.rs"));
    }

    #[test]
    fn misaligned_pointer_uses_sentinel() {
        let err = pack(2, Some(section::base_ptr().wrapping_add(1)), 1);
        assert_eq!(file_of(err), Some("merr_bug0"));
    }

    #[test]
    fn unaligned_pointer_uses_sentinel() {
        let inside = section::base_ptr().wrapping_add(core::mem::size_of::<usize>());
        let err = pack(2, Some(inside), 1);
        assert_eq!(file_of(err), Some("merr_bug1"));
    }

    #[test]
    fn outside_pointer_dropped() {
        static HEAP_LIKE: [usize; 8] = [0; 8];
        let err = pack(2, Some(HEAP_LIKE.as_ptr().cast()), 1);
        assert_eq!(file_of(err), None);
        assert_eq!(errno_of(err), 2);
    }

    #[test]
    fn forged_offsets_yield_sentinels() {
        for off in [1i64 << 30, -(1i64 << 30), i32::MAX as i64, i32::MIN as i64] {
            let raw = Merr::assemble(2, 1, Some(off)).raw();
            let name = file_of(Merr::from_raw(raw));
            assert!(
                matches!(name, Some("merr_bug2") | Some("merr_bug3")),
                "offset {off}: {name:?}"
            );
        }
    }

    #[test]
    fn display_shows_location() {
        let line = line!() + 1;
        let err = merr!(merr::EBUG);
        assert_eq!(err.to_string(), format!("tests/codec.rs:{line}: software bug"));
    }
}

#[test]
fn concurrent_use_agrees() {
    // raw pointers are not Sync; share the address instead
    let file = merr::__merr_file!() as usize;
    let expected: Vec<(Merr, Option<&'static str>, String)> = (1..64)
        .map(|code| {
            let err = pack(code, Some(file as *const u8), code as u32 * 3);
            let mut buf = [0u8; 256];
            let text = full_diagnostic(err, &mut buf).0.to_owned();
            (err, file_of(err), text)
        })
        .collect();

    std::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..50 {
                    for (code, (err, name, text)) in (1..64).zip(&expected) {
                        let again = pack(code, Some(file as *const u8), code as u32 * 3);
                        assert_eq!(again, *err);
                        assert_eq!(file_of(again), *name);

                        let mut buf = [0u8; 256];
                        assert_eq!(full_diagnostic(again, &mut buf).0, text.as_str());
                    }
                }
            });
        }
    });
}
