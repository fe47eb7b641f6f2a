//! merr demo
//!
//! Packs errors at a few call sites, propagates them through `Result`,
//! and renders them from several threads.
//!
//! # Environment Variables
//!
//! - `MERR_LOG_LEVEL=debug` - Set log level (off, error, warn, info, debug, trace)
//! - `MERR_FLUSH_EPRINT=1` - Flush debug output immediately
//! - `MERR_STRERROR_BUF_SIZE`, `MERR_PREFIX_PAD` - Renderer overrides

use merr::{kdebug, kinfo, merr, merr_io, Merr, RenderConfig};
use std::fs::File;

merr::merr_file!();

// MERR_LOG_LEVEL=trace cargo run -p merr-demo
fn open_missing() -> Result<File, Merr> {
    File::open("/nonexistent/merr-demo").map_err(|e| merr_io!(e))
}

fn check_invariant(ok: bool) -> Result<(), Merr> {
    if !ok {
        return Err(merr!(merr::EBUG));
    }
    Ok(())
}

fn retry(attempts: u32) -> Result<(), Merr> {
    for i in 0..attempts {
        kdebug!("attempt {}", i);
    }
    Err(merr!(-libc::EAGAIN))
}

fn main() {
    println!("=== merr demo ===\n");

    merr::init_logging();
    RenderConfig::global().print();
    println!();

    let errors = [
        open_missing().err(),
        check_invariant(false).err(),
        retry(3).err(),
        Some(Merr::from_raw(0x1234_5678)),
        Some(Merr::SUCCESS),
    ];

    for err in errors.iter().flatten() {
        println!("{:<40} {:?}", err.to_string(), err);
    }

    // Undersized buffer: the returned size says how much is needed.
    if let Some(err) = errors[0] {
        let mut small = [0u8; 16];
        let (text, need) = err.strinfo(&mut small);
        println!("\ntruncated: {:?}, needed {:?} bytes", text, need);
    }

    println!();
    let errs: Vec<Merr> = errors.iter().flatten().copied().collect();
    std::thread::scope(|s| {
        for (id, err) in errs.iter().enumerate() {
            s.spawn(move || {
                let mut buf = [0u8; 128];
                let (text, _) = err.strinfo(&mut buf);
                kinfo!("[thread {}] {}", id, text);
            });
        }
    });

    let io_err: std::io::Error = merr!(libc::ENOENT).into();
    println!("as io::Error: {} (kind {:?})", io_err, io_err.kind());

    println!("\n=== Demo Complete ===");
}
