//! Region discovery over quantized elevation grids.
//!
//! A region is a maximal 4-connected set of cells sharing one quantized value,
//! represented not cell-by-cell but as horizontal runs ("spans") with a
//! row-to-row adjacency graph:
//! - [`Span`]: maximal same-value run on one row, with ordered `above`/`below`
//!   links to overlapping spans in the neighboring rows.
//! - [`Region`]: the spans of one component in an arena indexed by [`SpanId`],
//!   plus bounding box, cell count and the anchor span the hull walk starts
//!   from.
//! - [`Regionalizer`]: the flood-fill driver; builds the region table and a
//!   dense full-grid location→region index for a caller-chosen window.
//!
//! Operating on runs instead of cells keeps the fill cheap on large dense
//! grids, and the adjacency graph it leaves behind is exactly what boundary
//! tracing needs. The graph is final at fill time; nothing reconstructs it
//! later.

mod fill;
mod span;

pub use fill::Regionalizer;
pub use span::{BoundingBox, Region, RegionId, Span, SpanId, UNASSIGNED};
