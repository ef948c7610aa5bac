use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt};
use ndarray::Array2;
use tracing::debug;

use crate::error::{DarkCalError, Result};
use crate::frame::{Frame, FrameMetadata};

/// FITS header/data block size in bytes.
const BLOCK_SIZE: usize = 2880;
/// Header card (keyword record) size in bytes.
const CARD_SIZE: usize = 80;

/// Parsed primary-HDU header of a single-image FITS file.
#[derive(Clone, Debug)]
pub struct FitsHeader {
    pub bitpix: i64,
    pub width: usize,
    pub height: usize,
    pub bzero: f64,
    pub bscale: f64,
    pub exposure_secs: Option<f64>,
    pub image_type: Option<String>,
    pub instrument: Option<String>,
    pub date_obs: Option<String>,
}

impl FitsHeader {
    /// Bytes per pixel for the stored BITPIX.
    pub fn bytes_per_pixel(&self) -> usize {
        (self.bitpix.unsigned_abs() / 8) as usize
    }

    /// Size of the image payload in bytes, excluding block padding.
    pub fn data_byte_size(&self) -> usize {
        self.width * self.height * self.bytes_per_pixel()
    }
}

/// Read a single-image FITS file into a frame of raw counts.
///
/// The file handle is scoped to this call: opened, fully read and dropped
/// before returning, on error paths included.
pub fn read_frame(path: &Path) -> Result<Frame> {
    let (_, frame) = read_fits(path)?;
    Ok(frame)
}

/// Read a single-image FITS file, returning the parsed header alongside
/// the decoded frame.
pub fn read_fits(path: &Path) -> Result<(FitsHeader, Frame)> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DarkCalError::FileNotFound(path.to_path_buf()),
        _ => DarkCalError::Io(e),
    })?;
    let mut reader = BufReader::new(file);

    let header = read_header(&mut reader, path)?;
    let data = read_data(&mut reader, &header, path)?;

    debug!(
        path = %path.display(),
        bitpix = header.bitpix,
        width = header.width,
        height = header.height,
        "decoded FITS frame"
    );

    let metadata = FrameMetadata {
        exposure_secs: header.exposure_secs,
        source: Some(path.to_path_buf()),
        ..FrameMetadata::default()
    };
    Ok((header, Frame::with_metadata(data, metadata)))
}

/// Scan 2880-byte header blocks card by card until the END card.
fn read_header<R: Read>(reader: &mut R, path: &Path) -> Result<FitsHeader> {
    let mut cards: Vec<(String, String)> = Vec::new();
    let mut block = [0u8; BLOCK_SIZE];
    let mut seen_end = false;

    while !seen_end {
        reader
            .read_exact(&mut block)
            .map_err(|e| truncated(path, "header", e))?;
        for card in block.chunks_exact(CARD_SIZE) {
            let keyword = String::from_utf8_lossy(&card[..8]).trim().to_string();
            if keyword == "END" {
                seen_end = true;
                break;
            }
            if keyword.is_empty() || keyword == "COMMENT" || keyword == "HISTORY" {
                continue;
            }
            if card[8] == b'=' && card[9] == b' ' {
                let value = String::from_utf8_lossy(&card[10..]).trim().to_string();
                cards.push((keyword, value));
            }
        }
    }

    let get = |key: &str| {
        cards
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };
    let int_card = |key: &str| {
        get(key).and_then(parse_i64).ok_or_else(|| {
            DarkCalError::InvalidFits(format!("{}: missing or invalid {key} card", path.display()))
        })
    };

    match get("SIMPLE") {
        Some(v) if value_body(v).starts_with('T') => {}
        _ => {
            return Err(DarkCalError::InvalidFits(format!(
                "{}: missing SIMPLE card",
                path.display()
            )))
        }
    }

    let bitpix = int_card("BITPIX")?;
    let naxis = int_card("NAXIS")?;
    if naxis != 2 {
        return Err(DarkCalError::InvalidFits(format!(
            "{}: expected a single 2D image, NAXIS = {naxis}",
            path.display()
        )));
    }
    let width = int_card("NAXIS1")? as usize;
    let height = int_card("NAXIS2")? as usize;
    if width == 0 || height == 0 {
        return Err(DarkCalError::InvalidFits(format!(
            "{}: zero image dimension",
            path.display()
        )));
    }

    Ok(FitsHeader {
        bitpix,
        width,
        height,
        bzero: get("BZERO").and_then(parse_f64).unwrap_or(0.0),
        bscale: get("BSCALE").and_then(parse_f64).unwrap_or(1.0),
        exposure_secs: get("EXPTIME").and_then(parse_f64),
        image_type: get("IMAGETYP").and_then(parse_string),
        instrument: get("INSTRUME").and_then(parse_string),
        date_obs: get("DATE-OBS").and_then(parse_string),
    })
}

/// Decode the big-endian image payload into raw counts.
fn read_data<R: Read>(reader: &mut R, header: &FitsHeader, path: &Path) -> Result<Array2<f32>> {
    let count = header.width * header.height;
    let mut values: Vec<f32> = Vec::with_capacity(count);

    match header.bitpix {
        8 => {
            let mut buf = vec![0u8; count];
            reader
                .read_exact(&mut buf)
                .map_err(|e| truncated(path, "data", e))?;
            values.extend(buf.into_iter().map(|v| v as f32));
        }
        16 => {
            let mut buf = vec![0i16; count];
            reader
                .read_i16_into::<BigEndian>(&mut buf)
                .map_err(|e| truncated(path, "data", e))?;
            values.extend(buf.into_iter().map(|v| v as f32));
        }
        32 => {
            let mut buf = vec![0i32; count];
            reader
                .read_i32_into::<BigEndian>(&mut buf)
                .map_err(|e| truncated(path, "data", e))?;
            values.extend(buf.into_iter().map(|v| v as f32));
        }
        -32 => {
            let mut buf = vec![0f32; count];
            reader
                .read_f32_into::<BigEndian>(&mut buf)
                .map_err(|e| truncated(path, "data", e))?;
            values.extend(buf);
        }
        -64 => {
            let mut buf = vec![0f64; count];
            reader
                .read_f64_into::<BigEndian>(&mut buf)
                .map_err(|e| truncated(path, "data", e))?;
            values.extend(buf.into_iter().map(|v| v as f32));
        }
        other => return Err(DarkCalError::UnsupportedBitpix(other)),
    }

    // Physical value = BZERO + BSCALE * stored value.
    if header.bscale != 1.0 || header.bzero != 0.0 {
        for v in &mut values {
            *v = (header.bzero + header.bscale * *v as f64) as f32;
        }
    }

    let data = Array2::from_shape_vec((header.height, header.width), values)
        .expect("vec length matches dimensions");
    Ok(data)
}

fn truncated(path: &Path, what: &str, err: std::io::Error) -> DarkCalError {
    if err.kind() == ErrorKind::UnexpectedEof {
        DarkCalError::InvalidFits(format!("{}: truncated {what}", path.display()))
    } else {
        DarkCalError::Io(err)
    }
}

/// Strip an inline comment (or keep just the quoted part) of a card value.
fn value_body(raw: &str) -> &str {
    let body = if raw.starts_with('\'') {
        match raw[1..].find('\'') {
            Some(end) => &raw[..end + 2],
            None => raw,
        }
    } else {
        match raw.find('/') {
            Some(idx) => &raw[..idx],
            None => raw,
        }
    };
    body.trim()
}

fn parse_i64(raw: &str) -> Option<i64> {
    value_body(raw).parse().ok()
}

fn parse_f64(raw: &str) -> Option<f64> {
    // FITS allows Fortran-style D exponents.
    value_body(raw).replace(['D', 'd'], "E").parse().ok()
}

fn parse_string(raw: &str) -> Option<String> {
    let inner = value_body(raw).strip_prefix('\'')?;
    let inner = inner.strip_suffix('\'').unwrap_or(inner);
    Some(inner.trim_end().to_string())
}
