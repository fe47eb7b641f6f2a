//! Default handling of values from another encoding.

use core::fmt::Write;

use merr_core::cbuf::CBufWriter;
use merr_core::ForeignDecoder;

/// Renders a foreign value as its raw hex, without interpreting it.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpaqueForeign;

impl ForeignDecoder for OpaqueForeign {
    fn strinfo(&self, raw: u64, buf: &mut [u8]) -> Option<usize> {
        let mut w = CBufWriter::new(buf);
        write!(w, "foreign error {:#x}", raw).ok()?;
        Some(w.written() + 1)
    }
}
