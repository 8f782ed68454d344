// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The error taxonomy for the seam pipeline.
//!
//! Everything here is a deterministic logic or I/O failure: there is
//! nothing transient to retry, and nothing is ever downgraded to a
//! default value.  Each variant carries enough context (the file path,
//! the expected and actual counts) to diagnose the run that produced
//! it.

use failure::Fail;
use std::io;

/// Every way a seam run can fail.
#[derive(Debug, Fail)]
pub enum SeamError {
    /// A source image or intermediate file could not be opened or read.
    #[fail(display = "could not read {}: {}", path, cause)]
    InputNotFound {
        /// The file we were asked for.
        path: String,
        /// The underlying I/O failure.
        #[fail(cause)]
        cause: io::Error,
    },

    /// A file opened but did not decode as an image.
    #[fail(display = "could not decode {}: {}", path, cause)]
    DecodeFailed {
        /// The file we were decoding.
        path: String,
        /// The decoder's complaint.
        #[fail(cause)]
        cause: image::ImageError,
    },

    /// A pixel-matrix or seam file opened but did not parse.
    #[fail(display = "{} is not a pixel matrix: {}", path, detail)]
    MalformedMatrix {
        /// The file we were parsing.
        path: String,
        /// What was wrong with it, with a line number where one makes
        /// sense.
        detail: String,
    },

    /// The sink was unreachable from the source.  Impossible for any
    /// rectangular grid as built, but a distinct, reportable condition
    /// rather than a garbage path.
    #[fail(display = "no path from source to sink in the seam graph")]
    PathNotFound,

    /// The reconstructed seam does not have one entry per image row.
    #[fail(display = "seam has {} entries, expected {}", actual, expected)]
    MalformedSeam {
        /// The grid's row count.
        expected: usize,
        /// What the reconstruction actually produced.
        actual: usize,
    },

    /// An output file could not be written.
    #[fail(display = "could not write {}: {}", path, cause)]
    OutputFailed {
        /// The file we were writing.
        path: String,
        /// The underlying I/O failure.
        #[fail(cause)]
        cause: io::Error,
    },
}
