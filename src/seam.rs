// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! From predecessor tree to finished seam.
//!
//! The solver hands back a predecessor relation over node ids; this
//! module walks it from the sink, strips the two virtual endpoints,
//! and projects what's left down to one column index per image row.
//! The row is implied by position, since the graph only ever steps
//! down one row at a time.

use crate::cq;
use crate::dijkstra::{shortest_path, ShortestPaths};
use crate::error::SeamError;
use crate::gridgraph::GridGraph;
use crate::pixelgrid::PixelGrid;

/// Walk the predecessor relation back from the sink and project the
/// path onto per-row column indices.  The walk ends wherever the
/// predecessor chain runs out; the root had better be the source, and
/// the length check at the end is what catches a search that was run
/// against the wrong grid.
pub fn reconstruct_seam(paths: &ShortestPaths, grid: &PixelGrid) -> Result<Vec<u32>, SeamError> {
    let cols = grid.cols();
    let sink = grid.rows() * cols + 1;

    // A search run against some other grid shows up either here or in
    // the length check below; never as a panic.
    if sink >= paths.predecessor.len() {
        return Err(SeamError::MalformedSeam {
            expected: grid.rows(),
            actual: 0,
        });
    }

    let mut path = Vec::with_capacity(grid.rows() + 2);
    let mut at = Some(sink);
    while let Some(node) = at {
        path.push(node);
        at = paths.predecessor[node];
    }
    path.reverse();

    // Drop the source off the front and the sink off the back; what
    // survives is one grid node per row, top to bottom.
    let interior = cq!(path.len() >= 2, &path[1..path.len() - 1], &path[..0]);
    let seam = interior.iter().map(|node| (node % cols) as u32).collect();
    validate_seam(seam, grid.rows())
}

/// The one structural check done after reconstruction: exactly one
/// entry per image row.  Column adjacency needs no re-verification; it
/// holds by construction, since only the three clamped neighbors are
/// ever connected.
pub fn validate_seam(seam: Vec<u32>, rows: usize) -> Result<Vec<u32>, SeamError> {
    if seam.len() != rows {
        return Err(SeamError::MalformedSeam {
            expected: rows,
            actual: seam.len(),
        });
    }
    Ok(seam)
}

/// The whole pipeline: build the graph view, run the search, walk the
/// result back into a seam.  One column per row, top to bottom,
/// adjacent entries never more than one column apart.
pub fn find_minimum_seam(grid: &PixelGrid) -> Result<Vec<u32>, SeamError> {
    let graph = GridGraph::new(grid);
    let paths = shortest_path(&graph)?;
    reconstruct_seam(&paths, grid)
}

/// The energy a seam actually crosses: the summed intensity
/// discontinuity between each pair of vertically adjacent seam pixels.
/// The virtual edges contribute nothing, so this is also the sink's
/// distance.
pub fn seam_energy(grid: &PixelGrid, seam: &[u32]) -> u64 {
    (1..seam.len())
        .map(|r| {
            let above = grid[(r - 1, seam[r - 1] as usize)];
            let here = grid[(r, seam[r] as usize)];
            u64::from(cq!(above > here, above - here, here - above))
        })
        .sum()
}
