//! Boundary tracing and point thinning for span regions.
//!
//! [`trace_hull`] walks one region's span adjacency graph into its ordered
//! outer boundary polygon, counter-clockwise from the anchor span's left end.
//! Interior holes are not represented. [`PathFilter`] thins the resulting
//! point stream by a minimum inter-point distance before it reaches a
//! renderer; [`trace_regions`] runs both stages over every region of a
//! finished fill in parallel.
//!
//! Regions are independent once discovered: the span graph and region table
//! are read-only here and each trace writes only its own output list.

mod filter;
mod trace;

pub use filter::{PathFilter, PathFilterConfig, PointSink};
pub use trace::{trace_hull, trace_regions, RegionOutline};
