// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The text interchange formats at the pipeline's edges.
//!
//! The pixel matrix travels as plain text, one row of space-separated
//! integers per line; the seam travels as a single line of column
//! indices.  These formats are the contract with the surrounding
//! tooling and are preserved exactly, down to the trailing space the
//! seam writer has always emitted.

use crate::cq;
use crate::error::SeamError;
use crate::pixelgrid::PixelGrid;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

fn open(path: &Path) -> Result<File, SeamError> {
    File::open(path).map_err(|cause| SeamError::InputNotFound {
        path: path.display().to_string(),
        cause,
    })
}

fn create(path: &Path) -> Result<File, SeamError> {
    File::create(path).map_err(|cause| SeamError::OutputFailed {
        path: path.display().to_string(),
        cause,
    })
}

fn write_failed(path: &Path) -> impl FnOnce(std::io::Error) -> SeamError + '_ {
    move |cause| SeamError::OutputFailed {
        path: path.display().to_string(),
        cause,
    }
}

/// Read a pixel-matrix file into a grid.  Blank lines are tolerated;
/// ragged rows, unparseable values, and empty matrices are not, and
/// each complaint names the line it came from.
pub fn read_pixels<P: AsRef<Path>>(path: P) -> Result<PixelGrid, SeamError> {
    let path = path.as_ref();
    let reader = BufReader::new(open(path)?);

    let malformed = |detail: String| SeamError::MalformedMatrix {
        path: path.display().to_string(),
        detail,
    };

    let mut data: Vec<u32> = Vec::new();
    let mut rows = 0;
    let mut cols = 0;
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.map_err(|cause| SeamError::InputNotFound {
            path: path.display().to_string(),
            cause,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let mut width = 0;
        for token in line.split_whitespace() {
            let value: u32 = token.parse().map_err(|_| {
                malformed(format!("line {}: {:?} is not a pixel value", lineno + 1, token))
            })?;
            data.push(value);
            width += 1;
        }
        if rows == 0 {
            cols = width;
        } else if width != cols {
            return Err(malformed(format!(
                "line {}: {} values, expected {}",
                lineno + 1,
                width,
                cols
            )));
        }
        rows += 1;
    }

    PixelGrid::from_raw(rows, cols, data)
        .ok_or_else(|| malformed("no pixel rows found".to_string()))
}

/// Write a grid back out as a pixel-matrix file, one space-separated
/// row per line.
pub fn save_pixels<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> Result<(), SeamError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(create(path)?);
    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            let sep = cq!(c == 0, "", " ");
            write!(writer, "{}{}", sep, grid[(r, c)]).map_err(write_failed(path))?;
        }
        writeln!(writer).map_err(write_failed(path))?;
    }
    writer.flush().map_err(write_failed(path))
}

/// Write a seam file: every column index followed by a space, then a
/// newline.  The trailing space is part of the historical format and
/// costs the whitespace-splitting reader nothing.
pub fn save_seam<P: AsRef<Path>>(seam: &[u32], path: P) -> Result<(), SeamError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(create(path)?);
    for column in seam {
        write!(writer, "{} ", column).map_err(write_failed(path))?;
    }
    writeln!(writer).map_err(write_failed(path))?;
    writer.flush().map_err(write_failed(path))
}

/// Read a seam file back: whitespace-separated column indices.
pub fn read_seam<P: AsRef<Path>>(path: P) -> Result<Vec<u32>, SeamError> {
    let path = path.as_ref();
    let mut contents = String::new();
    BufReader::new(open(path)?)
        .read_to_string(&mut contents)
        .map_err(|cause| SeamError::InputNotFound {
            path: path.display().to_string(),
            cause,
        })?;

    contents
        .split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| SeamError::MalformedMatrix {
                path: path.display().to_string(),
                detail: format!("{:?} is not a column index", token),
            })
        })
        .collect()
}
