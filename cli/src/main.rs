use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use argh::FromArgs;
use log::info;
use ppm2byte_core::{ChannelLayout, merge, read_quantized, write_byte_rows};

const WIDTH: usize = 32;
const HEIGHT: usize = 32;
const COLOR_MAX: u32 = 255;

/// Bake two 32x32 plain PPM layers into one `.byte` table.
#[derive(FromArgs)]
struct Args {
    /// base sprite layer (plain 32x32 PPM)
    #[argh(positional)]
    layer_a: String,

    /// overlay sprite layer (plain 32x32 PPM)
    #[argh(positional)]
    layer_b: String,

    /// bit layout of the base layer as multiplier:shift:stride
    #[argh(
        option,
        default = "ChannelLayout::new(3, 6, 3)",
        from_str_fn(parse_layout)
    )]
    layout_a: ChannelLayout,

    /// bit layout of the overlay layer as multiplier:shift:stride
    #[argh(
        option,
        default = "ChannelLayout::new(1, 5, 3)",
        from_str_fn(parse_layout)
    )]
    layout_b: ChannelLayout,

    /// output file, defaults to standard output
    #[argh(option, short = 'o')]
    output: Option<String>,
}

fn parse_layout(value: &str) -> Result<ChannelLayout, String> {
    let mut fields = value.split(':').map(|field| field.parse::<u32>());
    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(Ok(multiplier)), Some(Ok(shift)), Some(Ok(stride)), None) => {
            Ok(ChannelLayout::new(multiplier, shift, stride))
        }
        _ => Err(format!("expected multiplier:shift:stride, got '{value}'")),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let base = read_layer(&args.layer_a, args.layout_a);
    let overlay = read_layer(&args.layer_b, args.layout_b);
    let composite = merge(&base, &overlay);

    match &args.output {
        Some(path) => {
            let file = File::create(path).expect("Failed to create output file");
            emit(&mut BufWriter::new(file), &composite);
            info!("Wrote byte table to {path}");
        }
        None => emit(&mut std::io::stdout().lock(), &composite),
    }
}

fn read_layer(path: &str, layout: ChannelLayout) -> Vec<u32> {
    let file = File::open(path).expect("Failed to open input image");
    let pixels = read_quantized(BufReader::new(file), WIDTH, HEIGHT, COLOR_MAX, layout)
        .expect("Failed to read PPM data");
    info!("Read {path}");
    pixels
}

fn emit(out: &mut impl Write, pixels: &[u32]) {
    write_byte_rows(out, pixels, WIDTH).expect("Failed to write byte table");
}
