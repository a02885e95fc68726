//! PNG encoding for rasterized surfaces.
//!
//! Plots are mostly flat colors, so the encoder first tries an indexed
//! image (color type 3, at most 256 colors) and falls back to full RGBA
//! (color type 6) otherwise.

use std::collections::HashMap;
use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use plot_common::{PlotError, PlotResult};

const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Maximum colors for indexed PNG (PNG8)
const MAX_PALETTE_SIZE: usize = 256;

type Rgba = [u8; 4];

/// Encode straight-alpha RGBA pixels, choosing indexed output when possible.
pub fn encode(pixels: &[u8], width: usize, height: usize) -> PlotResult<Vec<u8>> {
    if pixels.len() != width * height * 4 {
        return Err(PlotError::RenderError(format!(
            "expected {} bytes for a {}x{} RGBA image, got {}",
            width * height * 4,
            width,
            height,
            pixels.len()
        )));
    }

    match build_palette(pixels) {
        Some((palette, indices)) => encode_indexed(width, height, &palette, &indices),
        None => encode_rgba(pixels, width, height),
    }
}

/// Map each pixel to a palette slot. `None` once more than 256 colors appear.
fn build_palette(pixels: &[u8]) -> Option<(Vec<Rgba>, Vec<u8>)> {
    let mut slots: HashMap<Rgba, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Vec<Rgba> = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices = Vec::with_capacity(pixels.len() / 4);

    for chunk in pixels.chunks_exact(4) {
        let color: Rgba = [chunk[0], chunk[1], chunk[2], chunk[3]];
        let index = match slots.get(&color) {
            Some(&index) => index,
            None => {
                if palette.len() == MAX_PALETTE_SIZE {
                    return None;
                }
                let index = palette.len() as u8;
                palette.push(color);
                slots.insert(color, index);
                index
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

/// Indexed PNG (color type 3) from a palette and one index byte per pixel.
pub fn encode_indexed(
    width: usize,
    height: usize,
    palette: &[Rgba],
    indices: &[u8],
) -> PlotResult<Vec<u8>> {
    let mut png = SIGNATURE.to_vec();
    write_chunk(&mut png, b"IHDR", &header(width, height, 3));

    let plte: Vec<u8> = palette.iter().flat_map(|c| [c[0], c[1], c[2]]).collect();
    write_chunk(&mut png, b"PLTE", &plte);

    if palette.iter().any(|c| c[3] < 255) {
        let trns: Vec<u8> = palette.iter().map(|c| c[3]).collect();
        write_chunk(&mut png, b"tRNS", &trns);
    }

    write_chunk(&mut png, b"IDAT", &deflate_scanlines(indices, width, height)?);
    write_chunk(&mut png, b"IEND", &[]);
    Ok(png)
}

/// Truecolor PNG with alpha (color type 6).
pub fn encode_rgba(pixels: &[u8], width: usize, height: usize) -> PlotResult<Vec<u8>> {
    let mut png = SIGNATURE.to_vec();
    write_chunk(&mut png, b"IHDR", &header(width, height, 6));
    write_chunk(&mut png, b"IDAT", &deflate_scanlines(pixels, width * 4, height)?);
    write_chunk(&mut png, b"IEND", &[]);
    Ok(png)
}

fn header(width: usize, height: usize, color_type: u8) -> Vec<u8> {
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr.extend_from_slice(&(height as u32).to_be_bytes());
    // bit depth, color type, compression, filter, interlace
    ihdr.extend_from_slice(&[8, color_type, 0, 0, 0]);
    ihdr
}

/// Prefix each scanline with filter type 0 and zlib-compress.
fn deflate_scanlines(data: &[u8], row_bytes: usize, height: usize) -> PlotResult<Vec<u8>> {
    let mut raw = Vec::with_capacity(height * (row_bytes + 1));
    for row in data.chunks_exact(row_bytes.max(1)).take(height) {
        raw.push(0);
        raw.extend_from_slice(row);
    }

    let compression_error =
        |e: std::io::Error| PlotError::RenderError(format!("IDAT compression failed: {}", e));

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::fast());
    encoder.write_all(&raw).map_err(compression_error)?;
    encoder.finish().map_err(compression_error)
}

fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk_types(png: &[u8]) -> Vec<String> {
        let mut types = Vec::new();
        let mut pos = 8;
        while pos + 8 <= png.len() {
            let len = u32::from_be_bytes([png[pos], png[pos + 1], png[pos + 2], png[pos + 3]]) as usize;
            types.push(String::from_utf8_lossy(&png[pos + 4..pos + 8]).to_string());
            pos += 12 + len;
        }
        types
    }

    #[test]
    fn test_few_colors_use_palette() {
        let pixels = [
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            255, 0, 0, 255, //
            0, 0, 0, 0,
        ];
        let png = encode(&pixels, 2, 2).unwrap();
        assert_eq!(&png[..8], &SIGNATURE);
        assert_eq!(png[25], 3, "color type should be indexed");
        assert_eq!(chunk_types(&png), vec!["IHDR", "PLTE", "tRNS", "IDAT", "IEND"]);
    }

    #[test]
    fn test_many_colors_fall_back_to_rgba() {
        let mut pixels = Vec::new();
        for i in 0..300u32 {
            pixels.extend_from_slice(&[(i % 256) as u8, (i / 256) as u8, 7, 255]);
        }
        let png = encode(&pixels, 300, 1).unwrap();
        assert_eq!(png[25], 6, "color type should be RGBA");
        assert_eq!(chunk_types(&png), vec!["IHDR", "IDAT", "IEND"]);
    }

    #[test]
    fn test_size_mismatch() {
        assert!(encode(&[0, 0, 0], 1, 1).is_err());
    }

    #[test]
    fn test_chunk_crc() {
        let mut png = Vec::new();
        write_chunk(&mut png, b"IEND", &[]);
        // Well-known CRC of an empty IEND chunk
        assert_eq!(&png[8..], &[0xAE, 0x42, 0x60, 0x82]);
    }
}
