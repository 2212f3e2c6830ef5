//! Umbrella crate for the `topo-contour` workspace.
//!
//! Re-exports the pipeline stages: elevation grid and quantization
//! (`tc-grid`), span-based region discovery (`tc-region`), boundary tracing
//! and point thinning (`tc-hull`). Grid loading and rendering are external
//! collaborators; see `examples/contourmap.rs` for an end-to-end run on
//! synthetic terrain.

pub use tc_grid::*;
pub use tc_hull::*;
pub use tc_region::*;
