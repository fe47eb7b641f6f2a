//! Renderer: `Merr` → human-readable text in a caller buffer.
//!
//! Output follows C string rules. The buffer is NUL-terminated whenever it
//! is non-empty, truncation keeps the leading bytes, and every size
//! returned counts the terminator. A returned size larger than the buffer
//! means the text was cut short and tells the caller how much to allocate.
//!
//! The only allocation is the temporary description buffer used when the
//! caller's buffer is too small for the description facility. It is
//! reserved fallibly and dropped before returning.

use core::fmt::Write;
use std::sync::OnceLock;

use merr_core::cbuf::{self, CBufWriter};
use merr_core::{Describe, FileRegion, ForeignDecoder, MerrError, MerrResult};

use crate::codes::EBUG;
use crate::config::RenderConfig;
use crate::decode::file_in;
use crate::foreign::OpaqueForeign;
use crate::section;
use crate::strerror::SystemStrerror;
use crate::{Encoding, Merr};

const SUCCESS_TEXT: &str = "success";
const INVALID_CODE_TEXT: &str = "<invalid error code>";
const FORMAT_ERROR_TEXT: &str = "<error formatting error message>";

/// Renders error values using a description facility and a foreign decoder.
#[derive(Debug, Clone)]
pub struct Renderer<D = SystemStrerror, F = OpaqueForeign> {
    describe: D,
    foreign: F,
    config: RenderConfig,
    region: FileRegion,
}

impl Renderer {
    /// Platform `strerror_r`, opaque foreign values, process-wide config
    /// and region.
    pub fn system() -> Self {
        Self::with(SystemStrerror, OpaqueForeign)
    }
}

impl<D: Describe, F: ForeignDecoder> Renderer<D, F> {
    /// Renderer with injected collaborators.
    pub fn with(describe: D, foreign: F) -> Self {
        Self {
            describe,
            foreign,
            config: RenderConfig::global().clone(),
            region: *section::region(),
        }
    }

    pub fn config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn region(mut self, region: FileRegion) -> Self {
        self.region = region;
        self
    }

    #[inline]
    pub fn render_config(&self) -> &RenderConfig {
        &self.config
    }

    /// Describe an error number into `buf`.
    ///
    /// Returns the size needed to hold the whole description, terminator
    /// included.
    pub fn code_to_string(&self, code: i32, buf: &mut [u8]) -> usize {
        if code == EBUG {
            return terminated(buf, self.config.bug_message);
        }

        match self.describe.describe(code, buf) {
            Ok(len) => len + 1,
            Err(MerrError::InvalidCode(_)) => terminated(buf, INVALID_CODE_TEXT),
            Err(MerrError::BufferTooSmall) => self.describe_overflow(code, buf),
            Err(e) => {
                merr_core::kdebug!("merr: describe({}) failed: {}", code, e);
                terminated(buf, FORMAT_ERROR_TEXT)
            }
        }
    }

    /// Retry a description that did not fit through a temporary buffer.
    fn describe_overflow(&self, code: i32, buf: &mut [u8]) -> usize {
        let size = self.config.strerror_buf_size;

        let mut tmp = Vec::new();
        if tmp.try_reserve_exact(size).is_err() {
            merr_core::kwarn!("merr: cannot allocate {} bytes for error {}", size, code);
            return terminated(buf, FORMAT_ERROR_TEXT);
        }
        tmp.resize(size, 0);

        match self.describe.describe(code, &mut tmp) {
            Ok(len) => {
                let len = len.min(size);
                merr_core::ktrace!(
                    "merr: description of {} needs {} bytes, caller has {}",
                    code,
                    len + 1,
                    buf.len()
                );
                cbuf::strlcpy(buf, &tmp[..len]) + 1
            }
            Err(e) => {
                merr_core::kdebug!("merr: describe({}) retry failed: {}", code, e);
                terminated(buf, FORMAT_ERROR_TEXT)
            }
        }
    }

    /// Render `err` into `buf` as `"file:line: description"`.
    ///
    /// Returns the rendered text (the terminated contents of `buf`) and the
    /// needed buffer size, if known. Success has no needed size; foreign
    /// values report whatever their decoder reports.
    pub fn full_diagnostic<'b>(&self, err: Merr, buf: &'b mut [u8]) -> (&'b str, Option<usize>) {
        let need = match err.encoding() {
            Encoding::Success => {
                cbuf::strlcpy(buf, SUCCESS_TEXT.as_bytes());
                None
            }
            Encoding::Foreign => self.foreign.strinfo(err.raw(), buf),
            Encoding::Merr => Some(self.render_merr(err, buf)),
        };
        (cbuf::as_str(buf), need)
    }

    fn render_merr(&self, err: Merr, buf: &mut [u8]) -> usize {
        let mut off = 0;

        if let Some(file) = file_in(&self.region, err) {
            let sz = match write_prefix(buf, file, err.lineno()) {
                Ok(sz) => sz,
                Err(e) => {
                    merr_core::kdebug!("merr: prefix for {:#x}: {}", err.raw(), e);
                    return terminated(buf, FORMAT_ERROR_TEXT);
                }
            };
            if sz >= buf.len() {
                return sz + self.config.prefix_pad;
            }
            off = sz;
        }

        // errno fits in 16 bits
        off + self.code_to_string(err.errno() as i32, &mut buf[off..])
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::system()
    }
}

/// Write `"file:line: "`, returning its untruncated length.
fn write_prefix(buf: &mut [u8], file: &str, line: u32) -> MerrResult<usize> {
    let mut w = CBufWriter::new(buf);
    write!(w, "{}:{}: ", file, line).map_err(|_| MerrError::Format)?;
    Ok(w.written())
}

fn terminated(buf: &mut [u8], text: &str) -> usize {
    cbuf::strlcpy(buf, text.as_bytes()) + 1
}

/// The process-wide system renderer.
pub fn global() -> &'static Renderer {
    static RENDERER: OnceLock<Renderer> = OnceLock::new();
    RENDERER.get_or_init(Renderer::system)
}

/// Describe an error number with the system renderer.
///
/// ```
/// let mut buf = [0u8; 64];
/// let need = merr::code_to_string(merr::EBUG, &mut buf);
/// assert_eq!(need, "software bug".len() + 1);
/// ```
#[inline]
pub fn code_to_string(code: i32, buf: &mut [u8]) -> usize {
    global().code_to_string(code, buf)
}

/// Render `err` with the system renderer.
#[inline]
pub fn full_diagnostic(err: Merr, buf: &mut [u8]) -> (&str, Option<usize>) {
    global().full_diagnostic(err, buf)
}

impl Merr {
    /// Render into `buf`, see [`full_diagnostic`].
    #[inline]
    pub fn strinfo<'b>(&self, buf: &'b mut [u8]) -> (&'b str, Option<usize>) {
        full_diagnostic(*self, buf)
    }
}
