use std::io::BufRead;

use log::warn;

use crate::Result;
use crate::layout::ChannelLayout;

/// Reads a plain-text ("P3") PPM image and packs every pixel according to
/// `layout`.
///
/// The three header lines are matched verbatim against the expected
/// dimensions and maximum channel value; a line matching neither the
/// header nor a comment stops the read, and pixels that were never reached
/// stay zero. Comment lines (`#`) are skipped anywhere, including between
/// header lines.
///
/// Raw samples are routed through a running red/green/blue rotation that
/// ignores line boundaries, so a triple may start on one line and finish
/// on the next.
pub fn read_quantized(
    input: impl BufRead,
    width: usize,
    height: usize,
    color_max: u32,
    layout: ChannelLayout,
) -> Result<Vec<u32>> {
    let mut pixels = vec![0u32; width * height];
    let header = [
        "P3".to_string(),
        format!("{width} {height}"),
        color_max.to_string(),
    ];
    let mut header_index = 0;
    let mut pixel_index = 0;
    let mut channel = 0;

    'lines: for line in input.lines() {
        let line = line?;
        if line.starts_with('#') {
            continue;
        }
        if header_index < header.len() {
            if line.trim_end() == header[header_index] {
                header_index += 1;
            } else {
                warn!("Wrong file format: {}", line.trim_end());
                break;
            }
            continue;
        }
        for token in line.split_ascii_whitespace() {
            if pixel_index == pixels.len() {
                break 'lines;
            }
            let raw = token.parse::<u32>()?;
            pixels[pixel_index] = layout.pack(pixels[pixel_index], raw, channel);
            channel += 1;
            if channel == 3 {
                channel = 0;
                pixel_index += 1;
            }
        }
    }

    Ok(pixels)
}
