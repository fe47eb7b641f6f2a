//! # merr-core
//!
//! Core pieces of `merr`, the packed "errno + source location" error value.
//!
//! This crate is platform-agnostic: it knows the bit layout, how to
//! validate a file address against a region whose bounds someone else
//! supplies, and how to read a name back out of that region. The link
//! section that provides the real bounds, the system `strerror_r`, and the
//! public renderer live in `merr`.
//!
//! ## Modules
//!
//! - `layout` - Bit field shifts, masks and the alignment unit
//! - `region` - File-name literals, region bounds, offset validation
//! - `path` - Diagnostic file-name shortening
//! - `cbuf` - NUL-terminated output buffers
//! - `traits` - Description facility and foreign decoder seams
//! - `error` - Error types
//! - `kprint` - Kernel-style debug printing macros
//! - `env` - Environment variable utilities

pub mod layout;
pub mod region;
pub mod path;
pub mod cbuf;
pub mod traits;
pub mod error;
pub mod kprint;
pub mod env;

pub use region::{merr_file_len, FileRegion, MerrFile, Sentinels};
pub use traits::{Describe, ForeignDecoder};
pub use error::{MerrError, MerrResult};
pub use env::{env_get, env_get_bool, env_get_opt};
