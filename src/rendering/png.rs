//! Minimal PNG writer
//!
//! Output is always 8-bit RGBA (color type 6), unfiltered, with the scanlines
//! wrapped in a zlib stream of stored DEFLATE blocks. Nothing is compressed:
//! an 800x600 image is roughly 1.9 MB.
//!
//! File layout:
//!
//! ```text
//! signature | IHDR | IDAT | IEND
//! chunk     = length (u32 BE) | type | payload | crc32(type + payload) (u32 BE)
//! zlib      = 0x78 0x01 | block* | adler32(raw) (u32 BE)
//! block     = final flag | LEN (u16 LE) | !LEN (u16 LE) | LEN raw bytes
//! ```

use super::canvas::Canvas;
use super::checksum::{adler32, Crc32};

/// The eight bytes every PNG file starts with.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Largest payload a stored DEFLATE block can carry.
pub const MAX_STORED_BLOCK: usize = 65_535;

const ZLIB_HEADER: [u8; 2] = [0x78, 0x01];
const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;
const FILTER_NONE: u8 = 0;

/// Encode a canvas as a complete PNG file.
pub fn encode_png(canvas: &Canvas) -> Vec<u8> {
    let raw = scanlines(canvas);
    let idat = zlib_stored(&raw);

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&canvas.width().to_be_bytes());
    ihdr.extend_from_slice(&canvas.height().to_be_bytes());
    // bit depth, color type, compression, filter, interlace
    ihdr.extend_from_slice(&[BIT_DEPTH, COLOR_TYPE_RGBA, 0, 0, 0]);

    let mut png = Vec::with_capacity(PNG_SIGNATURE.len() + 3 * 12 + ihdr.len() + idat.len());
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr);
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    tracing::debug!(
        width = canvas.width(),
        height = canvas.height(),
        bytes = png.len(),
        "Encoded PNG"
    );
    png
}

/// Every canvas row prefixed with filter type 0.
fn scanlines(canvas: &Canvas) -> Vec<u8> {
    let stride = canvas.width() as usize * 4;
    let mut raw = Vec::with_capacity(canvas.height() as usize * (stride + 1));
    for y in 0..canvas.height() {
        raw.push(FILTER_NONE);
        raw.extend_from_slice(canvas.row(y).unwrap_or_default());
    }
    raw
}

/// Wrap `raw` in a zlib stream made only of stored blocks.
///
/// An empty input still gets one (empty) final block so the stream stays
/// decodable.
pub fn zlib_stored(raw: &[u8]) -> Vec<u8> {
    let blocks = raw.len().div_ceil(MAX_STORED_BLOCK).max(1);
    let mut out = Vec::with_capacity(ZLIB_HEADER.len() + blocks * 5 + raw.len() + 4);
    out.extend_from_slice(&ZLIB_HEADER);

    if raw.is_empty() {
        write_stored_block(&mut out, &[], true);
    } else {
        let mut chunks = raw.chunks(MAX_STORED_BLOCK).peekable();
        while let Some(block) = chunks.next() {
            write_stored_block(&mut out, block, chunks.peek().is_none());
        }
    }

    out.extend_from_slice(&adler32(raw).to_be_bytes());
    out
}

fn write_stored_block(out: &mut Vec<u8>, block: &[u8], is_final: bool) {
    // chunks() never yields more than MAX_STORED_BLOCK bytes
    let len = block.len() as u16;
    out.push(u8::from(is_final));
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&(!len).to_le_bytes());
    out.extend_from_slice(block);
}

/// Append one chunk: length, type, payload, CRC over type and payload.
pub fn write_chunk(png: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(kind);
    png.extend_from_slice(data);

    let mut crc = Crc32::new();
    crc.update(kind);
    crc.update(data);
    png.extend_from_slice(&crc.finalize().to_be_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_model::Rgb;

    #[test]
    fn test_empty_iend_chunk_bytes() {
        let mut out = Vec::new();
        write_chunk(&mut out, b"IEND", &[]);
        assert_eq!(
            out,
            vec![0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]
        );
    }

    #[test]
    fn test_zlib_stored_small() {
        let out = zlib_stored(b"abc");
        assert_eq!(&out[..2], &[0x78, 0x01]);
        // final block, LEN = 3, NLEN = !3
        assert_eq!(&out[2..7], &[0x01, 0x03, 0x00, 0xFC, 0xFF]);
        assert_eq!(&out[7..10], b"abc");
        assert_eq!(&out[10..], &adler32(b"abc").to_be_bytes());
        assert_eq!(out.len(), 2 + 5 + 3 + 4);
    }

    #[test]
    fn test_zlib_stored_empty() {
        let out = zlib_stored(&[]);
        assert_eq!(out, vec![0x78, 0x01, 0x01, 0x00, 0x00, 0xFF, 0xFF, 0, 0, 0, 1]);
    }

    #[test]
    fn test_zlib_stored_splits_blocks() {
        let raw = vec![7u8; MAX_STORED_BLOCK + 10];
        let out = zlib_stored(&raw);
        assert_eq!(out.len(), 2 + 2 * 5 + raw.len() + 4);

        // first block: not final, full length
        assert_eq!(&out[2..7], &[0x00, 0xFF, 0xFF, 0x00, 0x00]);
        // second block header follows the first payload
        let second = 2 + 5 + MAX_STORED_BLOCK;
        assert_eq!(&out[second..second + 5], &[0x01, 10, 0, 0xF5, 0xFF]);
    }

    #[test]
    fn test_zlib_stored_exact_block_multiple() {
        let raw = vec![1u8; MAX_STORED_BLOCK];
        let out = zlib_stored(&raw);
        assert_eq!(out[2], 0x01);
        assert_eq!(out.len(), 2 + 5 + raw.len() + 4);
    }

    #[test]
    fn test_encode_png_layout() {
        let canvas = Canvas::new(2, 1, Rgb::new(10, 20, 30));
        let png = encode_png(&canvas);

        assert_eq!(&png[..8], &PNG_SIGNATURE);
        // IHDR: length 13
        assert_eq!(&png[8..16], &[0, 0, 0, 13, b'I', b'H', b'D', b'R']);
        assert_eq!(&png[16..24], &[0, 0, 0, 2, 0, 0, 0, 1]);
        assert_eq!(&png[24..29], &[8, 6, 0, 0, 0]);

        // IDAT payload = 2 header + 5 block header + 9 raw + 4 adler
        let idat_start = 8 + 12 + 13;
        assert_eq!(&png[idat_start..idat_start + 8], &[0, 0, 0, 20, b'I', b'D', b'A', b'T']);
        let raw = [0, 10, 20, 30, 255, 10, 20, 30, 255];
        let payload = &png[idat_start + 8..idat_start + 8 + 20];
        assert_eq!(&payload[7..16], &raw);

        assert_eq!(&png[png.len() - 12..png.len() - 4], &[0, 0, 0, 0, b'I', b'E', b'N', b'D']);
    }
}
