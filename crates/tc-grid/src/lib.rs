//! Foundational primitives for contour-map extraction.
//!
//! ## Grids
//! An [`ElevationGrid`] is a dense row-major array of single-precision
//! elevation samples. It is built once by an external loader (header parsing
//! and byte-order normalization happen there, not here) and mutated in place
//! only by [`ElevationGrid::quantize`].
//!
//! ## Quantization
//! Quantization floors every sample to the nearest lower multiple of a step,
//! turning continuous elevations into discrete contour bands. The grid records
//! the step so downstream stages can verify it ran.
//!
//! ## Windows
//! Regionalization operates over a [`Window`], an inclusive sub-rectangle
//! expressed in full-grid coordinates. Callers never translate coordinates:
//! results for a windowed run are addressed exactly like full-grid results.

mod error;
mod geom;
mod grid;

pub use error::Error;
pub use geom::{GridPoint, Window};
pub use grid::ElevationGrid;
