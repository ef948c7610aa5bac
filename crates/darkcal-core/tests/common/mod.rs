use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// FITS block size; headers and data are padded to this.
pub const BLOCK_SIZE: usize = 2880;

/// Build a single 80-byte header card. Numeric values are right-justified
/// ending at column 30, per the fixed-format convention.
pub fn card(keyword: &str, value: &str) -> [u8; 80] {
    let mut rec = [b' '; 80];
    let kw = keyword.as_bytes();
    rec[..kw.len()].copy_from_slice(kw);
    if !value.is_empty() {
        rec[8] = b'=';
        let bytes = value.as_bytes();
        let start = if value.starts_with('\'') {
            10
        } else {
            30usize.saturating_sub(bytes.len())
        };
        rec[start..start + bytes.len()].copy_from_slice(bytes);
    }
    rec
}

/// Assemble a header from cards, append END, pad to a block boundary.
pub fn build_header(cards: &[(&str, &str)]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(BLOCK_SIZE);
    for (keyword, value) in cards {
        buf.extend_from_slice(&card(keyword, value));
    }
    buf.extend_from_slice(&card("END", ""));
    while buf.len() % BLOCK_SIZE != 0 {
        buf.push(b' ');
    }
    buf
}

/// Build a complete BITPIX=16 FITS file. `stored` holds the raw (signed)
/// values as written to disk; readers see `bzero + stored`.
pub fn build_fits_i16(width: usize, height: usize, stored: &[i16], bzero: f64) -> Vec<u8> {
    assert_eq!(stored.len(), width * height);
    let naxis1 = width.to_string();
    let naxis2 = height.to_string();
    let bzero_str = format!("{bzero}");
    let mut buf = build_header(&[
        ("SIMPLE", "T"),
        ("BITPIX", "16"),
        ("NAXIS", "2"),
        ("NAXIS1", &naxis1),
        ("NAXIS2", &naxis2),
        ("BZERO", &bzero_str),
        ("BSCALE", "1"),
        ("EXPTIME", "30"),
        ("IMAGETYP", "'Dark Frame'"),
    ]);
    for v in stored {
        buf.extend_from_slice(&v.to_be_bytes());
    }
    while buf.len() % BLOCK_SIZE != 0 {
        buf.push(0);
    }
    buf
}

/// Build a complete BITPIX=-32 (IEEE float) FITS file.
pub fn build_fits_f32(width: usize, height: usize, values: &[f32]) -> Vec<u8> {
    assert_eq!(values.len(), width * height);
    let naxis1 = width.to_string();
    let naxis2 = height.to_string();
    let mut buf = build_header(&[
        ("SIMPLE", "T"),
        ("BITPIX", "-32"),
        ("NAXIS", "2"),
        ("NAXIS1", &naxis1),
        ("NAXIS2", &naxis2),
    ]);
    for v in values {
        buf.extend_from_slice(&v.to_be_bytes());
    }
    while buf.len() % BLOCK_SIZE != 0 {
        buf.push(0);
    }
    buf
}

/// Convenience: BITPIX=16 file holding unsigned physical counts via the
/// conventional BZERO=32768 offset.
pub fn build_fits_u16(width: usize, height: usize, physical: &[u32]) -> Vec<u8> {
    let stored: Vec<i16> = physical
        .iter()
        .map(|&v| (v as i64 - 32768).clamp(i16::MIN as i64, i16::MAX as i64) as i16)
        .collect();
    build_fits_i16(width, height, &stored, 32768.0)
}

/// Write FITS bytes to a temporary file and return the handle.
///
/// The file stays alive as long as the returned `NamedTempFile` is not
/// dropped.
pub fn write_test_fits(data: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("create temp file");
    f.write_all(data).expect("write FITS data");
    f.flush().expect("flush");
    f
}

/// Write FITS bytes under `dir` with the given file name.
pub fn write_fits_in(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, data).expect("write FITS file");
    path
}
