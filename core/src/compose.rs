use std::io::Write;

use crate::Result;

/// Element-wise OR of two packed-pixel buffers. Both buffers must hold the
/// same number of pixels.
pub fn merge(a: &[u32], b: &[u32]) -> Vec<u32> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(a, b)| a | b).collect()
}

/// Writes `pixels` as assembler `.byte` directives, one row of `width`
/// values per line.
pub fn write_byte_rows(out: &mut impl Write, pixels: &[u32], width: usize) -> Result<()> {
    for row in pixels.chunks(width) {
        let values = row
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, ".byte {values}")?;
    }
    Ok(())
}
