/*!
Bakes plain-text PPM sprite layers into one packed byte table.

Two fixed-size "P3" images are quantized down to a few bits per channel,
each channel shifted into its own slot of a composite pixel, OR-merged and
emitted as `.byte` rows ready for inclusion in an assembly source.

## Usage
```
# fn main() -> Result<(), ppm2byte_core::Error> {
use ppm2byte_core::{ChannelLayout, read_quantized};

let ppm = "P3\n2 1\n255\n255 255 255 0 0 0\n";
let pixels = read_quantized(ppm.as_bytes(), 2, 1, 255, ChannelLayout::new(3, 6, 3))?;
assert_eq!(pixels, [216, 0]);
# Ok(())
# }
```

## Limitations & non-goals
- plain-text ("P3") PPM only, no binary variants
- no alpha channel
- the declared maximum channel value is matched against, never interpreted
*/

mod compose;
mod layout;
mod reader;


pub use compose::{merge, write_byte_rows};
pub use layout::ChannelLayout;
pub use reader::read_quantized;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    BadSample(core::num::ParseIntError),
}

type Result<T> = core::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<core::num::ParseIntError> for Error {
    fn from(err: core::num::ParseIntError) -> Self {
        Error::BadSample(err)
    }
}
