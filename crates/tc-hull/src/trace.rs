use std::collections::HashMap;

use rayon::prelude::*;
use tc_grid::GridPoint;
use tc_region::{Region, RegionId, Regionalizer, SpanId};

use crate::filter::{PathFilter, PathFilterConfig};

/// One surviving region's renderer-facing output.
#[derive(Debug, Clone)]
pub struct RegionOutline {
    pub region: RegionId,
    pub value: f32,
    pub cell_count: usize,
    pub points: Vec<GridPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    Down,
    Up,
}

/// Spans of one region grouped per row, ordered by start column, for sibling
/// lookup during the walk.
struct RowIndex {
    rows: HashMap<usize, Vec<SpanId>>,
}

impl RowIndex {
    fn build(region: &Region) -> Self {
        let mut rows: HashMap<usize, Vec<SpanId>> = HashMap::new();
        for (id, span) in region.spans().iter().enumerate() {
            rows.entry(span.row).or_default().push(id);
        }
        for list in rows.values_mut() {
            list.sort_by_key(|&id| region.span(id).col_start);
        }
        Self { rows }
    }

    fn left_sibling(&self, region: &Region, id: SpanId) -> Option<SpanId> {
        let list = &self.rows[&region.span(id).row];
        let pos = list.iter().position(|&s| s == id)?;
        (pos > 0).then(|| list[pos - 1])
    }

    fn right_sibling(&self, region: &Region, id: SpanId) -> Option<SpanId> {
        let list = &self.rows[&region.span(id).row];
        let pos = list.iter().position(|&s| s == id)?;
        list.get(pos + 1).copied()
    }
}

/// Walks a region's outer boundary into an ordered polygon,
/// counter-clockwise from the anchor span's left end.
///
/// Single-span regions and regions with zero column width are ignored and
/// yield an empty list. Otherwise the walk alternates between descending the
/// left side (DOWN) and ascending the right side (UP) of the current span,
/// with two hand-classified adjacency cases:
/// - a "bowl": the current span and its left sibling rest on the same single
///   span below;
/// - an "n": the current span and its right sibling hang from the same single
///   span above.
///
/// The walk halts when it steps back into the anchor span, emitting the
/// anchor's right end. The anchor's minimum-row/minimum-start choice
/// guarantees the final approach is an upward step into it, so the output is
/// a closed, non-self-crossing silhouette. Interior holes are not traced.
pub fn trace_hull(region: &Region) -> Vec<GridPoint> {
    let bbox = region.bounding_box();
    if region.spans().len() < 2 || bbox.left == bbox.right {
        return Vec::new();
    }

    let rows = RowIndex::build(region);
    let anchor = region.anchor();

    let mut points = Vec::new();
    let mut current = anchor;
    let mut state = WalkState::Down;

    // A well-formed walk visits each span at most twice; the bound only
    // guards against a malformed adjacency graph.
    let max_steps = 4 * region.cell_count() + 4;
    for _ in 0..max_steps {
        match state {
            WalkState::Down => {
                let c = region.span(current);
                points.push(GridPoint {
                    col: c.col_start,
                    row: c.row,
                });

                if c.below.is_empty() {
                    // Bottom edge: continue from this span's right end upward.
                    state = WalkState::Up;
                } else if let Some(sib) = rows.left_sibling(region, current) {
                    let s = region.span(sib);
                    if !s.below.is_empty() && c.below.first() == s.below.last() {
                        // Bowl: both arms rest on the same span below. Emit
                        // the two notch corners and come back up the sibling.
                        points.push(GridPoint {
                            col: c.col_start,
                            row: c.row + 1,
                        });
                        points.push(GridPoint {
                            col: s.col_end,
                            row: s.row + 1,
                        });
                        current = sib;
                        state = WalkState::Up;
                    } else {
                        current = c.below[0];
                    }
                } else {
                    // Leftmost entry keeps the walk on the outer left side.
                    current = c.below[0];
                }
            }
            WalkState::Up => {
                let c = region.span(current);
                points.push(GridPoint {
                    col: c.col_end,
                    row: c.row,
                });

                if c.above.is_empty() {
                    state = WalkState::Down;
                } else if let Some(sib) = rows.right_sibling(region, current) {
                    let s = region.span(sib);
                    if !s.above.is_empty() && c.above.last() == s.above.first() {
                        // "n": both arms hang from the same span above.
                        points.push(GridPoint {
                            col: c.col_end,
                            row: c.row - 1,
                        });
                        points.push(GridPoint {
                            col: s.col_start,
                            row: s.row - 1,
                        });
                        current = sib;
                        state = WalkState::Down;
                    } else {
                        current = *c.above.last().expect("non-empty above list");
                    }
                } else {
                    // Rightmost entry keeps the walk on the outer right side.
                    current = *c.above.last().expect("non-empty above list");
                }
            }
        }

        if current == anchor {
            let a = region.span(anchor);
            points.push(GridPoint {
                col: a.col_end,
                row: a.row,
            });
            break;
        }
    }

    points
}

/// Traces and filters every surviving region of a finished fill.
///
/// Safe to parallelize: the span graph and region table are read-only by now
/// and each worker writes only its own output list. Ignored regions produce
/// no outline.
pub fn trace_regions(regionalizer: &Regionalizer<'_>, cfg: PathFilterConfig) -> Vec<RegionOutline> {
    regionalizer
        .regions()
        .par_iter()
        .filter_map(|region| {
            let hull = trace_hull(region);
            if hull.is_empty() {
                return None;
            }

            let mut points = Vec::with_capacity(hull.len());
            let mut filter = PathFilter::new(cfg, &mut points);
            for point in hull {
                filter.push(point);
            }

            Some(RegionOutline {
                region: region.id(),
                value: region.value(),
                cell_count: region.cell_count(),
                points,
            })
        })
        .collect()
}
