// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! From decoded image to pixel grid.
//!
//! The seam search only ever sees grayscale intensities, so whatever
//! arrives here (RGB, RGBA, already-gray) gets projected through its
//! luma channel.  Generic over the image type the same way the rest
//! of the image ecosystem is.

use crate::pixelgrid::PixelGrid;
use image::{GenericImageView, Pixel, Primitive};
use itertools::iproduct;
use num_traits::NumCast;

// Pixel -> intensity, via the luma channel.
#[inline]
fn lumachannel<P, S>(p: &P) -> u32
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let c = p.to_luma().channels().to_owned();
    NumCast::from(c[0]).unwrap()
}

/// Project an image down to its intensity grid, row-major, top to
/// bottom.  Returns `None` only for an image with no pixels, which no
/// decoder should ever hand us.
pub fn grid_from_image<I, P, S>(image: &I) -> Option<PixelGrid>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let data = iproduct!(0..height, 0..width)
        .map(|(y, x)| lumachannel(&image.get_pixel(x, y)))
        .collect();
    PixelGrid::from_raw(height as usize, width as usize, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma, Rgb};

    const IMAGE_DATA: [u8; 6] = [12, 34, 56, 78, 90, 255];

    #[test]
    fn gray_image_maps_straight_through() {
        let buf: ImageBuffer<Luma<u8>, _> = ImageBuffer::from_raw(3, 2, &IMAGE_DATA[..]).unwrap();
        let grid = grid_from_image(&buf).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid[(0, 0)], 12);
        assert_eq!(grid[(1, 2)], 255);
    }

    #[test]
    fn neutral_rgb_keeps_its_value_through_the_luma_channel() {
        let buf: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_fn(2, 2, |x, y| *Pixel::from_slice(&[(40 * (x + y)) as u8; 3]));
        let grid = grid_from_image(&buf).unwrap();
        assert_eq!(grid[(0, 0)], 0);
        assert_eq!(grid[(0, 1)], 40);
        assert_eq!(grid[(1, 1)], 80);
    }
}
