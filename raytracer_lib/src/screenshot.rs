//! Raw screenshot files
//!
//! Native byte order, total length `8 + 4 * width * height` bytes
//! 1. tag -- 16bit unsigned, always `0xDEAD`
//! 2. width -- 16bit signed
//! 3. height -- 16bit signed
//! 4. 2 bytes padding
//! 5. pixels -- `width * height` 32bit packed colors, row by row from the top

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use byteorder::{ByteOrder, NativeEndian, WriteBytesExt};
use nom::{
    multi::count,
    number::{
        complete::{i16 as parse_i16, u16 as parse_u16, u32 as parse_u32},
        Endianness,
    },
    sequence::tuple,
    IResult,
};

use crate::{
    color::Color32,
    error::ScreenshotError,
    surface::{FrameBuffer, Surface},
};

pub const TAG: u16 = 0xDEAD;
pub const HEADER_LEN: usize = 4 * 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screenshot {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Color32>,
}

fn encode_header(width: i16, height: i16) -> [u8; HEADER_LEN] {
    let mut header = [0; HEADER_LEN];

    NativeEndian::write_u16(&mut header[0..2], TAG);
    NativeEndian::write_i16(&mut header[2..4], width);
    NativeEndian::write_i16(&mut header[4..6], height);
    // 2 byte padding

    header
}

type Header = (u16, i16, i16, i16);

fn header(input: &[u8]) -> IResult<&[u8], Header> {
    let native = Endianness::Native;
    tuple((
        parse_u16(native),
        parse_i16(native),
        parse_i16(native),
        parse_i16(native),
    ))(input)
}

fn pixel_data(input: &[u8], len: usize) -> IResult<&[u8], Vec<u32>> {
    count(parse_u32(Endianness::Native), len)(input)
}

impl Screenshot {
    pub fn new(width: usize, height: usize, pixels: Vec<Color32>) -> Result<Screenshot, ScreenshotError> {
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(ScreenshotError::SizeMismatch);
        }
        Ok(Screenshot {
            width,
            height,
            pixels,
        })
    }

    pub fn from_buffer(buffer: &FrameBuffer) -> Screenshot {
        Screenshot {
            width: buffer.width(),
            height: buffer.height(),
            pixels: buffer.pixels().to_vec(),
        }
    }

    pub fn into_buffer(self) -> Result<FrameBuffer, ScreenshotError> {
        FrameBuffer::from_pixels(self.width, self.height, self.pixels)
            .ok_or(ScreenshotError::SizeMismatch)
    }

    fn checked_dims(&self) -> Result<(i16, i16), ScreenshotError> {
        let invalid = || ScreenshotError::InvalidDimensions {
            width: self.width as i64,
            height: self.height as i64,
        };
        let width = i16::try_from(self.width).map_err(|_| invalid())?;
        let height = i16::try_from(self.height).map_err(|_| invalid())?;
        if self.pixels.len() != self.width * self.height {
            return Err(ScreenshotError::SizeMismatch);
        }
        Ok((width, height))
    }

    /// Dimensions over `i16::MAX` do not fit the header and are rejected
    /// before anything is written
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), ScreenshotError> {
        let (width, height) = self.checked_dims()?;

        writer.write_all(&encode_header(width, height))?;
        for &pixel in &self.pixels {
            writer.write_u32::<NativeEndian>(pixel)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ScreenshotError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        log::info!(
            "screenshot {}x{} saved to {}",
            self.width,
            self.height,
            path.display()
        );
        Ok(())
    }

    /// Parse whole file content.
    /// Nothing is returned unless header and all pixels are valid.
    pub fn read_from(bytes: &[u8]) -> Result<Screenshot, ScreenshotError> {
        let (rest, (tag, width, height, _padding)) =
            header(bytes).map_err(|_| ScreenshotError::Truncated)?;

        if tag != TAG {
            return Err(ScreenshotError::BadTag(tag));
        }
        if width < 0 || height < 0 {
            return Err(ScreenshotError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            });
        }

        let len = width as usize * height as usize;
        if rest.len() < len * 4 {
            return Err(ScreenshotError::Truncated);
        }
        if rest.len() > len * 4 {
            return Err(ScreenshotError::SizeMismatch);
        }

        let (_, pixels) = pixel_data(rest, len).map_err(|_| ScreenshotError::Truncated)?;

        Ok(Screenshot {
            width: width as usize,
            height: height as usize,
            pixels,
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Screenshot, ScreenshotError> {
        let bytes = std::fs::read(path)?;
        Screenshot::read_from(&bytes)
    }

    /// Draw at `[0, 0]`, clipped to the surface
    pub fn blit<S: Surface + ?Sized>(&self, surface: &mut S) {
        let w = usize::min(self.width, surface.width());
        let h = usize::min(self.height, surface.height());
        for y in 0..h {
            for x in 0..w {
                surface.put_pixel(x, y, self.pixels[y * self.width + x]);
            }
        }
    }
}
