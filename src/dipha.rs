//! Minimal readers for DIPHA binary images and plaintext PGM images. This
//! is ambient CLI convenience, not a format-compliance deliverable — the
//! crate's core contract is the in-memory
//! `persistence_2d(rows, threshold, method)` entry point in
//! [`crate::engine`]; parsing lives only behind the `cli` feature.

use std::io::{BufRead, Read};

use crate::error::{CubicalError, Result};

/// DIPHA's magic number, used to distinguish a DIPHA binary file from a
/// PGM image when a path's extension doesn't tell us.
const DIPHA_MAGIC: i64 = 8_067_171_840;

/// Image data identifier within a DIPHA file.
const DIPHA_IMAGE_DATA: i64 = 1;

fn read_i64(r: &mut impl Read) -> Result<i64> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(i64::from_le_bytes(buf))
}

fn read_f64(r: &mut impl Read) -> Result<f64> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}

/// Read a DIPHA-format 2-D image: `magic, type=IMAGE_DATA, num_dims=2, ay,
/// ax`, followed by `ax * ay` little-endian doubles in row-major order
/// (`ax` rows of `ay` values each).
pub fn read_dipha_image(mut r: impl Read) -> Result<Vec<Vec<f64>>> {
    let magic = read_i64(&mut r)?;
    if magic != DIPHA_MAGIC {
        return Err(CubicalError::Format(format!("bad DIPHA magic number: {magic}")));
    }
    let kind = read_i64(&mut r)?;
    if kind != DIPHA_IMAGE_DATA {
        return Err(CubicalError::Format(format!("expected DIPHA image data (type {DIPHA_IMAGE_DATA}), got {kind}")));
    }
    let num_dims = read_i64(&mut r)?;
    if num_dims != 2 {
        return Err(CubicalError::Format(format!("only 2-D DIPHA images are supported, got {num_dims} dimensions")));
    }
    let ay = read_i64(&mut r)?;
    let ax = read_i64(&mut r)?;
    if ax <= 0 || ay <= 0 {
        return Err(CubicalError::Format(format!("invalid DIPHA image extents: ax={ax}, ay={ay}")));
    }
    let (ax, ay) = (ax as usize, ay as usize);

    let mut rows = Vec::with_capacity(ax);
    for _ in 0..ax {
        let mut row = Vec::with_capacity(ay);
        for _ in 0..ay {
            row.push(read_f64(&mut r)?);
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Read a plaintext PGM (`P2`) grayscale image into row-major `f64` rows.
/// This is the common case for quick manual testing; it does not attempt
/// binary PGM (`P5`) or any of the wider NetPBM family.
pub fn read_pgm(r: impl Read) -> Result<Vec<Vec<f64>>> {
    let mut lines = std::io::BufReader::new(r).lines();

    let magic = next_token_line(&mut lines)?;
    if magic.trim() != "P2" {
        return Err(CubicalError::Format(format!("unsupported PGM magic: {magic}")));
    }

    let dims = next_token_line(&mut lines)?;
    let mut dims_iter = dims.split_whitespace();
    let ay = dims_iter
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(|| CubicalError::Format("missing PGM width".into()))?;
    let ax = dims_iter
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(|| CubicalError::Format("missing PGM height".into()))?;

    let _maxval = next_token_line(&mut lines)?;

    let mut values = Vec::with_capacity(ax * ay);
    for line in lines {
        let line = line?;
        for tok in line.split_whitespace() {
            values.push(
                tok.parse::<f64>()
                    .map_err(|_| CubicalError::Format(format!("bad PGM pixel value: {tok}")))?,
            );
        }
    }
    if values.len() != ax * ay {
        return Err(CubicalError::Format(format!(
            "PGM declared {ax}x{ay} = {} pixels, found {}",
            ax * ay,
            values.len()
        )));
    }

    Ok(values.chunks(ay).map(|row| row.to_vec()).collect())
}

fn next_token_line(lines: &mut impl Iterator<Item = std::io::Result<String>>) -> Result<String> {
    for line in lines.by_ref() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        return Ok(trimmed.to_string());
    }
    Err(CubicalError::Format("unexpected end of file".into()))
}
