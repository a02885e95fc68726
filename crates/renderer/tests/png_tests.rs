//! Tests for PNG encoding of rasterized plots.
//!
//! Covers format selection (indexed vs RGBA), chunk layout and that the
//! compressed scanlines decode back to the input pixels.

use std::collections::HashSet;
use std::io::Read;

use flate2::read::ZlibDecoder;
use renderer::png::{encode, encode_rgba};

// ============================================================================
// Helper functions
// ============================================================================

struct Chunk {
    kind: String,
    data: Vec<u8>,
}

fn chunks(png: &[u8]) -> Vec<Chunk> {
    let mut out = Vec::new();
    let mut pos = 8;
    while pos + 12 <= png.len() {
        let len = u32::from_be_bytes([png[pos], png[pos + 1], png[pos + 2], png[pos + 3]]) as usize;
        out.push(Chunk {
            kind: String::from_utf8_lossy(&png[pos + 4..pos + 8]).to_string(),
            data: png[pos + 8..pos + 8 + len].to_vec(),
        });
        pos += 12 + len;
    }
    out
}

fn inflate(png: &[u8]) -> Vec<u8> {
    let idat: Vec<u8> = chunks(png)
        .into_iter()
        .filter(|c| c.kind == "IDAT")
        .flat_map(|c| c.data)
        .collect();
    let mut raw = Vec::new();
    ZlibDecoder::new(idat.as_slice())
        .read_to_end(&mut raw)
        .unwrap();
    raw
}

/// Colormap-like gradient with `levels` distinct opaque colors.
fn banded_pixels(width: usize, height: usize, levels: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for _ in 0..height {
        for x in 0..width {
            let band = (x * levels / width.max(1)).min(levels - 1) as u8;
            pixels.extend_from_slice(&[band, 255 - band, 128, 255]);
        }
    }
    pixels
}

fn unique_colors(pixels: &[u8]) -> usize {
    pixels.chunks_exact(4).collect::<HashSet<_>>().len()
}

// ============================================================================
// Format selection
// ============================================================================

#[test]
fn test_banded_plot_is_indexed() {
    let pixels = banded_pixels(64, 16, 20);
    assert_eq!(unique_colors(&pixels), 20);

    let png = encode(&pixels, 64, 16).unwrap();
    let kinds: Vec<_> = chunks(&png).into_iter().map(|c| c.kind).collect();
    assert_eq!(kinds, vec!["IHDR", "PLTE", "IDAT", "IEND"]);
    assert_eq!(png[25], 3);
}

#[test]
fn test_256_colors_still_indexed() {
    let pixels = banded_pixels(256, 1, 256);
    let png = encode(&pixels, 256, 1).unwrap();
    assert_eq!(png[25], 3);
}

#[test]
fn test_257_colors_fall_back_to_rgba() {
    let mut pixels = banded_pixels(256, 1, 256);
    pixels.extend_from_slice(&[1, 2, 3, 4]);
    let png = encode(&pixels, 257, 1).unwrap();
    assert_eq!(png[25], 6);
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn test_indexed_scanlines_decode() {
    let pixels = [
        10, 20, 30, 255, 40, 50, 60, 255, //
        40, 50, 60, 255, 10, 20, 30, 255,
    ];
    let png = encode(&pixels, 2, 2).unwrap();

    let plte = chunks(&png).into_iter().find(|c| c.kind == "PLTE").unwrap();
    assert_eq!(plte.data, vec![10, 20, 30, 40, 50, 60]);

    // filter byte + one index per pixel
    assert_eq!(inflate(&png), vec![0, 0, 1, 0, 1, 0]);
}

#[test]
fn test_rgba_scanlines_decode() {
    let pixels: Vec<u8> = (0..2 * 3 * 4).map(|i| i as u8).collect();
    let png = encode_rgba(&pixels, 2, 3).unwrap();
    let raw = inflate(&png);

    assert_eq!(raw.len(), 3 * (1 + 2 * 4));
    assert_eq!(raw[0], 0);
    assert_eq!(&raw[1..9], &pixels[0..8]);
}

#[test]
fn test_transparent_background_gets_trns() {
    let pixels = [0, 0, 0, 0, 255, 255, 255, 255];
    let png = encode(&pixels, 2, 1).unwrap();
    let trns = chunks(&png).into_iter().find(|c| c.kind == "tRNS").unwrap();
    assert_eq!(trns.data, vec![0, 255]);
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_single_pixel() {
    let png = encode(&[255, 0, 0, 255], 1, 1).unwrap();
    assert_eq!(u32::from_be_bytes([png[16], png[17], png[18], png[19]]), 1);
    assert_eq!(u32::from_be_bytes([png[20], png[21], png[22], png[23]]), 1);
}

#[test]
fn test_wrong_buffer_size() {
    assert!(encode(&[0; 12], 2, 2).is_err());
}
