//! # merr — packed error values
//!
//! An error code plus the source location that produced it, packed into a
//! single `u64`. Values are `Copy`, cost nothing to propagate, and can be
//! turned back into `"file:line: description"` text on any thread without
//! allocating.
//!
//! ## Layout
//!
//! | Bits   | Field  | Contents                                             |
//! |--------|--------|------------------------------------------------------|
//! | 63..32 | file   | signed offset, in 64-byte units, from the base anchor |
//! | 31     | marker | set on every value this crate produces               |
//! | 30..16 | line   | source line (15 bits)                                |
//! | 15..0  | errno  | error number, sign discarded                         |
//!
//! File names are never stored in the value. `merr_file!()`, invoked once
//! per source file, places `file!()` in a dedicated link section and
//! `merr!` records where it is. Decoding checks the offset against the
//! section bounds before reading anything, so a corrupted or forged value
//! yields a sentinel name rather than stray memory.
//!
//! ## Quick Start
//!
//! ```rust
//! use merr::{merr, Merr};
//!
//! merr::merr_file!();
//!
//! fn read_config() -> Result<(), Merr> {
//!     Err(merr!(libc::ENOENT))
//! }
//!
//! let err = read_config().unwrap_err();
//! assert_eq!(err.errno(), libc::ENOENT as u32);
//!
//! let mut buf = [0u8; 128];
//! let cap = buf.len();
//! let (text, need) = err.strinfo(&mut buf);
//! assert!(need.unwrap() <= cap);
//! println!("{}", text);
//! ```
//!
//! ## Modules
//!
//! - `section` - The file-name link section and process-wide region
//! - `encode` / `decode` - Packing and field extraction
//! - `render` - Caller-buffer diagnostics
//! - `config` - Renderer configuration (build-time defaults + env)
//! - `codes` - `EBUG` and errno names

pub mod config;
#[macro_use]
pub mod section;
mod value;
pub mod codes;
pub mod encode;
pub mod decode;
pub mod render;
pub mod strerror;
pub mod foreign;
mod convert;
#[macro_use]
mod macros;

// ── Public API ────────────────────────────────────────────────────

pub use value::{Encoding, Merr};
pub use codes::EBUG;
pub use encode::{pack, pack_in};
pub use decode::{errno_of, file_in, file_of, line_of};
pub use render::{code_to_string, full_diagnostic, Renderer};
pub use config::RenderConfig;
pub use strerror::SystemStrerror;
pub use foreign::OpaqueForeign;

pub use merr_core::{
    merr_file_len, Describe, FileRegion, ForeignDecoder, MerrError, MerrFile, MerrResult,
    Sentinels,
};

// Logging
pub use merr_core::kprint::{init as init_logging, set_log_level, LogLevel};
pub use merr_core::{kdebug, kerror, kinfo, kprintln, ktrace, kwarn};
