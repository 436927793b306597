//! Adapters between bit sequences and the formats fed into the code engine.
//!
//! Everything here sits at the boundary of the engine: ASCII text and raw
//! pixel bytes are unpacked into bit sequences (most significant bit first)
//! before encoding, and packed back after decoding. Repacking pixel data
//! needs an [`ImageShape`] describing the target image, since a bare bit
//! sequence no longer knows its dimensions.

use bitvec::prelude::*;

use crate::error::{Error, Result};

/// Unpacks bytes into bits, most significant bit first.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    bytes.view_bits::<Msb0>().iter().by_vals().collect()
}

/// Packs bits into bytes, most significant bit first. A trailing group of
/// fewer than 8 bits is dropped.
pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    let mut packed = BitVec::<u8, Msb0>::with_capacity(bits.len() - bits.len() % 8);
    for chunk in bits.chunks_exact(8) {
        for &bit in chunk {
            packed.push(bit);
        }
    }
    packed.into_vec()
}

/// Converts ASCII text into a bit sequence, 8 bits per character.
///
/// # Arguments
///
/// * `text` - Text consisting of ASCII characters only
///
/// # Returns
///
/// The unpacked bits, or an error if the text contains non-ASCII characters
pub fn text_to_bits(text: &str) -> Result<Vec<bool>> {
    if !text.is_ascii() {
        return Err(Error::InvalidInput(
            "Text must consist of ASCII characters only".to_string(),
        ));
    }

    Ok(bytes_to_bits(text.as_bytes()))
}

/// Converts a bit sequence back into text, one character per 8 bits.
///
/// Bits that arrive here have usually passed through a noisy channel, so
/// bytes outside the ASCII range can occur; they are mapped through Latin-1
/// rather than rejected. A trailing group of fewer than 8 bits is dropped.
pub fn bits_to_text(bits: &[bool]) -> String {
    bits_to_bytes(bits).into_iter().map(char::from).collect()
}

/// Renders bits as a '0'/'1' string with a space after every 8 bits.
pub fn bit_string(bits: &[bool]) -> String {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .map(|&bit| if bit { '1' } else { '0' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a string of '0' and '1' characters into bits. Spaces are ignored,
/// any other character is an error.
pub fn parse_bit_string(text: &str) -> Result<Vec<bool>> {
    text.chars()
        .filter(|&c| c != ' ')
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(Error::InvalidInput(format!(
                "Bit strings may only contain '0', '1' and spaces, found {:?}",
                other
            ))),
        })
        .collect()
}

/// Dimensions and pixel layout of an image whose raw bytes travel through
/// the channel. Serves as the reference when bits are packed back into
/// pixel rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageShape {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    /// Bits per pixel of the pixel format
    pub bits_per_pixel: usize,
}

impl ImageShape {
    /// Bytes per pixel, rounded up to whole bytes.
    pub fn bytes_per_pixel(&self) -> usize {
        self.bits_per_pixel.div_ceil(8)
    }

    /// Bytes per pixel row.
    pub fn stride(&self) -> usize {
        self.width * self.bytes_per_pixel()
    }

    /// Total pixel bytes of the image.
    pub fn byte_len(&self) -> usize {
        self.height * self.stride()
    }
}

/// Packs a bit sequence back into raw pixel bytes for the given shape.
///
/// # Arguments
///
/// * `bits` - Exactly `shape.byte_len() * 8` bits of pixel data
/// * `shape` - The target image's dimensions and pixel layout
///
/// # Returns
///
/// The packed pixel bytes, or an error if the bit count does not match the
/// shape
pub fn bits_to_pixels(bits: &[bool], shape: &ImageShape) -> Result<Vec<u8>> {
    let expected = shape.byte_len() * 8;
    if bits.len() != expected {
        return Err(Error::InvalidInput(format!(
            "Expected {} pixel bits for a {}x{} image, got {}",
            expected,
            shape.width,
            shape.height,
            bits.len()
        )));
    }

    Ok(bits_to_bytes(bits))
}
