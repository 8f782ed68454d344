// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Paint a seam onto the image it came from.
//!
//! The contract here is deliberately forgiving: a seam entry that
//! falls outside the image is skipped in silence rather than treated
//! as an error, so a caller may hand us a seam computed against a
//! different (or since-resized) image and still get something visible
//! back for the rows that do line up.

use image::{DynamicImage, Pixel, RgbImage};

/// The highlight color, in RGB.
pub const SEAM_COLOR: [u8; 3] = [255, 0, 0];

/// Overwrite pixel `(seam[r], r)` with the highlight color for every
/// in-bounds row.
pub fn paint_seam(image: &mut RgbImage, seam: &[u32]) {
    let (width, height) = image.dimensions();
    for (r, &c) in seam.iter().enumerate() {
        let r = r as u32;
        if r < height && c < width {
            image.put_pixel(c, r, *Pixel::from_slice(&SEAM_COLOR));
        }
    }
}

/// Copy the original image to RGB and paint the seam onto the copy.
pub fn highlight_seam(image: &DynamicImage, seam: &[u32]) -> RgbImage {
    let mut out = image.to_rgb();
    paint_seam(&mut out, seam);
    out
}
