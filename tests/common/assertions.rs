//! Assertion helpers for PNG output.
//!
//! Checksums here are recomputed bit by bit, independently of the encoder's
//! table-driven implementation.

use pretty_assertions::assert_eq;

pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// One chunk read back from a PNG byte stream
#[derive(Debug, Clone)]
pub struct Chunk {
    pub kind: [u8; 4],
    pub data: Vec<u8>,
    pub crc: u32,
}

impl Chunk {
    pub fn kind_str(&self) -> &str {
        std::str::from_utf8(&self.kind).unwrap_or("????")
    }
}

/// Pixels decoded by the `png` crate
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let [r, g, b, _] = self.rgba(x, y);
        [r, g, b]
    }

    /// Number of pixels whose RGB equals `color`
    pub fn count(&self, color: [u8; 3]) -> usize {
        self.pixels
            .chunks_exact(4)
            .filter(|px| px[..3] == color)
            .count()
    }
}

pub fn reference_crc32(bytes: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &byte in bytes {
        crc ^= byte as u32;
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
        }
    }
    !crc
}

pub fn reference_adler32(bytes: &[u8]) -> u32 {
    let (mut a, mut b) = (1u32, 0u32);
    for &byte in bytes {
        a = (a + byte as u32) % 65_521;
        b = (b + a) % 65_521;
    }
    (b << 16) | a
}

fn be_u32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Split a PNG into chunks, asserting the signature and every CRC.
pub fn parse_chunks(png: &[u8]) -> Vec<Chunk> {
    assert!(png.len() >= 8, "PNG too short: {} bytes", png.len());
    assert_eq!(&png[..8], &PNG_SIGNATURE, "Bad PNG signature");

    let mut chunks = Vec::new();
    let mut pos = 8;
    while pos < png.len() {
        assert!(pos + 12 <= png.len(), "Truncated chunk header at {pos}");
        let len = be_u32(&png[pos..]) as usize;
        let kind: [u8; 4] = png[pos + 4..pos + 8].try_into().unwrap();
        let data_end = pos + 8 + len;
        assert!(data_end + 4 <= png.len(), "Truncated chunk body at {pos}");

        let data = png[pos + 8..data_end].to_vec();
        let crc = be_u32(&png[data_end..]);
        assert_eq!(
            crc,
            reference_crc32(&png[pos + 4..data_end]),
            "CRC mismatch in {} chunk",
            String::from_utf8_lossy(&kind)
        );

        chunks.push(Chunk { kind, data, crc });
        pos = data_end + 4;
    }
    chunks
}

/// Assert the exact IHDR, IDAT, IEND structure and return the chunks.
pub fn assert_valid_png(png: &[u8]) -> Vec<Chunk> {
    let chunks = parse_chunks(png);
    let kinds: Vec<&str> = chunks.iter().map(Chunk::kind_str).collect();
    assert_eq!(kinds, vec!["IHDR", "IDAT", "IEND"]);

    let ihdr = &chunks[0].data;
    assert_eq!(ihdr.len(), 13);
    // bit depth 8, RGBA, deflate, no filter method, no interlace
    assert_eq!(&ihdr[8..], &[8, 6, 0, 0, 0]);
    assert!(chunks[2].data.is_empty(), "IEND must be empty");
    chunks
}

/// Width and height from the IHDR chunk.
pub fn png_dimensions(png: &[u8]) -> (u32, u32) {
    let chunks = parse_chunks(png);
    (be_u32(&chunks[0].data[0..]), be_u32(&chunks[0].data[4..]))
}

/// Unwrap a zlib stream made of stored blocks, checking framing and Adler-32.
pub fn inflate_stored(zlib: &[u8]) -> Vec<u8> {
    assert_eq!(&zlib[..2], &[0x78, 0x01], "Unexpected zlib header");

    let mut raw = Vec::new();
    let mut pos = 2;
    loop {
        let header = zlib[pos];
        assert_eq!(header & 0b110, 0, "Only stored blocks expected");
        let len = u16::from_le_bytes([zlib[pos + 1], zlib[pos + 2]]);
        let nlen = u16::from_le_bytes([zlib[pos + 3], zlib[pos + 4]]);
        assert_eq!(nlen, !len, "NLEN is not the complement of LEN");

        let start = pos + 5;
        raw.extend_from_slice(&zlib[start..start + len as usize]);
        pos = start + len as usize;
        if header & 1 == 1 {
            break;
        }
    }

    assert_eq!(zlib.len(), pos + 4, "Trailing bytes after Adler-32");
    assert_eq!(be_u32(&zlib[pos..]), reference_adler32(&raw), "Adler-32 mismatch");
    raw
}

/// Decode with the `png` crate and assert every pixel is opaque.
pub fn decode_png(png: &[u8]) -> DecodedImage {
    let decoder = png::Decoder::new(png);
    let mut reader = decoder.read_info().expect("png crate rejected header");
    let mut pixels = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut pixels)
        .expect("png crate rejected image data");
    pixels.truncate(info.buffer_size());

    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    assert!(
        pixels.chunks_exact(4).all(|px| px[3] == 255),
        "Found a pixel that is not fully opaque"
    );

    DecodedImage {
        width: info.width,
        height: info.height,
        pixels,
    }
}
