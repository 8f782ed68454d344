// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The implicit graph over a pixel grid.
//!
//! The grid is effectively a sparse digraph: every pixel connects
//! downward to the three pixels below it (columns clamped at the
//! borders), a virtual source feeds the whole top row for free, and
//! the whole bottom row drains into a virtual sink for free.  Rather
//! than materializing `O(rows * cols * 3)` edges, this module exposes
//! the graph as a view: `neighbors()` is a pure function of the grid
//! and the node id, cheap enough to recompute on every visit and safe
//! to call from as many threads as you like.
//!
//! Node numbering: pixel `(r, c)` is `r * cols + c`, and the two
//! virtual endpoints take the next two ids after the grid range.  That
//! keeps them ordinary nodes as far as the solver is concerned; no
//! special-casing anywhere in the relaxation loop.

use crate::cq;
use crate::pixelgrid::PixelGrid;
use crate::seamgraph::SeamGraph;

/// A borrowed graph view over a pixel grid.
pub struct GridGraph<'a> {
    grid: &'a PixelGrid,
}

impl<'a> GridGraph<'a> {
    /// Wrap a grid.  Nothing is computed until `neighbors` is called.
    pub fn new(grid: &'a PixelGrid) -> Self {
        GridGraph { grid }
    }

    // The edge weight is the intensity discontinuity the seam crosses
    // when it steps from the parent pixel down to the child pixel.
    fn weight(&self, parent: (usize, usize), child: (usize, usize)) -> u32 {
        let p = self.grid[parent];
        let c = self.grid[child];
        cq!(p > c, p - c, c - p)
    }
}

impl<'a> SeamGraph for GridGraph<'a> {
    fn node_count(&self) -> usize {
        self.grid.rows() * self.grid.cols() + 2
    }

    fn source(&self) -> usize {
        self.grid.rows() * self.grid.cols()
    }

    fn sink(&self) -> usize {
        self.grid.rows() * self.grid.cols() + 1
    }

    fn neighbors(&self, node: usize) -> Vec<(usize, u32)> {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());

        if node == self.sink() {
            return Vec::new();
        }

        // The source feeds every top-row pixel for free, in column
        // order.
        if node == self.source() {
            return (0..cols).map(|c| (c, 0)).collect();
        }

        let (r, c) = (node / cols, node % cols);

        // The bottom row drains into the sink for free.
        if r == rows - 1 {
            return vec![(self.sink(), 0)];
        }

        // Everything else steps down a row, to the left, straight, and
        // right children, columns clamped at the borders.  Clamping
        // repeats a border child rather than skipping it; the
        // strict-improvement rule in the solver keeps the duplicate
        // edge harmless.
        let maxcol = cols - 1;
        let below = r + 1;
        [cq!(c == 0, 0, c - 1), c, cq!(c == maxcol, maxcol, c + 1)]
            .iter()
            .map(|&child_col| {
                (
                    below * cols + child_col,
                    self.weight((r, c), (below, child_col)),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 3 2 1
    // 4 6 5
    // 9 7 8
    const GRID_DATA: [u32; 9] = [3, 2, 1, 4, 6, 5, 9, 7, 8];

    fn grid() -> PixelGrid {
        PixelGrid::from_raw(3, 3, GRID_DATA.to_vec()).unwrap()
    }

    #[test]
    fn endpoints_sit_past_the_grid_range() {
        let grid = grid();
        let graph = GridGraph::new(&grid);
        assert_eq!(graph.node_count(), 11);
        assert_eq!(graph.source(), 9);
        assert_eq!(graph.sink(), 10);
    }

    #[test]
    fn source_feeds_the_top_row_for_free() {
        let grid = grid();
        let graph = GridGraph::new(&grid);
        assert_eq!(graph.neighbors(9), vec![(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn interior_node_has_left_straight_right_children() {
        let grid = grid();
        let graph = GridGraph::new(&grid);
        // (0, 1) holds 2; its children hold 4, 6, 5.
        assert_eq!(graph.neighbors(1), vec![(3, 2), (4, 4), (5, 3)]);
    }

    #[test]
    fn border_clamp_duplicates_the_edge_instead_of_skipping_it() {
        let grid = grid();
        let graph = GridGraph::new(&grid);
        // (0, 0) holds 3; left is clamped onto straight.
        assert_eq!(graph.neighbors(0), vec![(3, 1), (3, 1), (4, 3)]);
        // (0, 2) holds 1; right is clamped onto straight.
        assert_eq!(graph.neighbors(2), vec![(4, 5), (5, 4), (5, 4)]);
    }

    #[test]
    fn bottom_row_drains_into_the_sink() {
        let grid = grid();
        let graph = GridGraph::new(&grid);
        assert_eq!(graph.neighbors(6), vec![(10, 0)]);
        assert_eq!(graph.neighbors(8), vec![(10, 0)]);
        assert_eq!(graph.neighbors(10), vec![]);
    }

    #[test]
    fn single_column_grid_clamps_all_three_children_together() {
        let grid = PixelGrid::from_raw(2, 1, vec![5, 9]).unwrap();
        let graph = GridGraph::new(&grid);
        assert_eq!(graph.neighbors(0), vec![(1, 4), (1, 4), (1, 4)]);
    }

    #[test]
    fn single_pixel_grid_runs_source_to_sink_through_the_pixel() {
        let grid = PixelGrid::from_raw(1, 1, vec![5]).unwrap();
        let graph = GridGraph::new(&grid);
        assert_eq!((graph.source(), graph.sink()), (1, 2));
        assert_eq!(graph.neighbors(graph.source()), vec![(0, 0)]);
        assert_eq!(graph.neighbors(0), vec![(2, 0)]);
    }
}
