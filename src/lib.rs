// #![deny(missing_docs)]

extern crate image;

pub mod ternary;

pub mod error;
pub use error::SeamError;

pub mod pixelgrid;
pub use pixelgrid::PixelGrid;

pub mod seamgraph;
pub use seamgraph::SeamGraph;

pub mod gridgraph;
pub use gridgraph::GridGraph;

pub mod dijkstra;
pub use dijkstra::{shortest_path, ShortestPaths};

pub mod seam;
pub use seam::{find_minimum_seam, reconstruct_seam, seam_energy, validate_seam};

pub mod textio;
pub use textio::{read_pixels, read_seam, save_pixels, save_seam};

pub mod extract;
pub use extract::grid_from_image;

pub mod highlight;
pub use highlight::{highlight_seam, paint_seam};
