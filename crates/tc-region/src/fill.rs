use std::collections::{HashSet, VecDeque};

use rayon::prelude::*;
use tc_grid::{ElevationGrid, Error, Window};

use crate::span::{Region, RegionId, SpanId, UNASSIGNED};

/// Span-based flood-fill engine.
///
/// Owns a full-grid location→region-id index and the id→Region table. The
/// index is sized to the whole grid even when only a window is processed, so
/// callers address results in full-grid coordinates without translation.
///
/// Region ids start at 1 ([`UNASSIGNED`] is 0) and the counter is owned by
/// this instance: repeated or concurrent runs over different grids never
/// collide.
///
/// `generate_regions` itself is single-threaded: ids and the span adjacency
/// graph are mutated incrementally and must be complete before any per-region
/// parallel stage starts. Once it returns, the table and index are read-only.
#[derive(Debug)]
pub struct Regionalizer<'a> {
    grid: &'a ElevationGrid,
    window: Window,
    index: Vec<RegionId>,
    regions: Vec<Region>,
}

impl<'a> Regionalizer<'a> {
    /// Builds a regionalizer over the full grid.
    pub fn new(grid: &'a ElevationGrid) -> Result<Self, Error> {
        Self::with_window(grid, Window::full(grid))
    }

    /// Builds a regionalizer over `window`, in full-grid coordinates.
    ///
    /// Fails with `InvalidState` if the grid has not been quantized or the
    /// window does not fit it.
    pub fn with_window(grid: &'a ElevationGrid, window: Window) -> Result<Self, Error> {
        if !grid.is_quantized() {
            return Err(Error::InvalidState("grid must be quantized first"));
        }
        window.validate_for(grid)?;

        Ok(Self {
            grid,
            window,
            index: vec![UNASSIGNED; grid.rows() * grid.cols()],
            regions: Vec::new(),
        })
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        if id == UNASSIGNED {
            return None;
        }
        self.regions.get(id - 1)
    }

    /// Clears the region table and the full-grid index, reusing storage.
    /// Idempotent; rows of the index are independent, so they clear in
    /// parallel.
    pub fn reset(&mut self) {
        self.regions.clear();
        self.index
            .par_chunks_mut(self.grid.cols())
            .for_each(|row| row.fill(UNASSIGNED));
    }

    /// Discovers every region in the window.
    ///
    /// Scans window rows top to bottom, columns left to right; every
    /// unassigned location seeds a breadth-first fill over spans. On return,
    /// every window location maps to exactly one region whose spans cover it.
    pub fn generate_regions(&mut self) {
        self.reset();

        for row in self.window.top..=self.window.bottom {
            for col in self.window.left..=self.window.right {
                if self.index[row * self.grid.cols() + col] != UNASSIGNED {
                    continue;
                }
                let region = self.fill_from(row, col);
                self.regions.push(region);
            }
        }
    }

    /// Looks up the region covering a location.
    pub fn region_at(&self, row: usize, col: usize) -> Result<&Region, Error> {
        if row >= self.grid.rows() || col >= self.grid.cols() {
            return Err(Error::OutOfBounds { row, col });
        }
        match self.index[row * self.grid.cols() + col] {
            UNASSIGNED => Err(Error::NotFound { row, col }),
            id => Ok(&self.regions[id - 1]),
        }
    }

    /// Finds a region horizontally adjacent to `id` (transitively, if needed)
    /// with at least `min_size` cells.
    ///
    /// Each span of the candidate region is probed one cell left of its start
    /// and one cell right of its end. The first probed region meeting the
    /// size wins; otherwise the search follows the first probed region, since
    /// a small region may be nested inside another region that is itself too
    /// small. The walk is iterative with a visited set, and fails with
    /// `InvariantViolation` when a region has no probed neighbors at all or
    /// when every reachable region has been tried.
    pub fn neighboring_region_of_minimum_size(
        &self,
        id: RegionId,
        min_size: usize,
    ) -> Result<RegionId, Error> {
        let mut visited: HashSet<RegionId> = HashSet::new();
        visited.insert(id);
        let mut current = id;

        loop {
            let region = self
                .region(current)
                .ok_or(Error::InvalidState("region id not in table"))?;

            let checked = self.side_neighbors(region);
            if checked.is_empty() {
                return Err(Error::InvariantViolation("region has no neighboring regions"));
            }

            if let Some(&found) = checked
                .iter()
                .find(|&&n| self.regions[n - 1].cell_count() >= min_size)
            {
                return Ok(found);
            }

            let Some(&next) = checked.iter().find(|&&n| !visited.contains(&n)) else {
                return Err(Error::InvariantViolation(
                    "no neighboring region meets the minimum size",
                ));
            };
            visited.insert(next);
            current = next;
        }
    }

    /// Regions probed immediately left/right of the region's spans, in probe
    /// order, deduplicated.
    fn side_neighbors(&self, region: &Region) -> Vec<RegionId> {
        let cols = self.grid.cols();
        let mut out = Vec::new();

        for span in region.spans() {
            if let Some(col) = span.col_start.checked_sub(1) {
                if self.window.contains(span.row, col) {
                    let n = self.index[span.row * cols + col];
                    if n != UNASSIGNED && !out.contains(&n) {
                        out.push(n);
                    }
                }
            }
            let col = span.col_end + 1;
            if self.window.contains(span.row, col) {
                let n = self.index[span.row * cols + col];
                if n != UNASSIGNED && !out.contains(&n) {
                    out.push(n);
                }
            }
        }

        out
    }

    /// Grows one region from an unassigned seed by breadth-first traversal
    /// over a queue of spans to check.
    fn fill_from(&mut self, row: usize, col: usize) -> Region {
        let id = self.regions.len() + 1;
        let value = self.grid.row(row)[col];
        let mut region = Region::new(id, value);

        let mut queue: VecDeque<SpanId> = VecDeque::new();
        queue.push_back(self.span_at(row, col, &mut region));

        while let Some(sid) = queue.pop_front() {
            let (srow, start, end) = {
                let s = region.span(sid);
                (s.row, s.col_start, s.col_end)
            };

            if srow > self.window.top {
                self.check_neighbor_row(srow - 1, start, end, sid, true, &mut region, &mut queue);
            }
            if srow < self.window.bottom {
                self.check_neighbor_row(srow + 1, start, end, sid, false, &mut region, &mut queue);
            }

            region.absorb(sid);
        }

        region
    }

    /// Extends a maximal same-value run through `(row, col)` within the
    /// window, assigning every visited cell to the region. This is the only
    /// site that writes the index.
    fn span_at(&mut self, row: usize, col: usize, region: &mut Region) -> SpanId {
        let value = region.value();
        let cells = self.grid.row(row);

        // Quantized samples are exact step multiples, so bitwise equality is
        // the right match here.
        let mut start = col;
        while start > self.window.left && cells[start - 1] == value {
            start -= 1;
        }
        let mut end = col;
        while end < self.window.right && cells[end + 1] == value {
            end += 1;
        }

        let cols = self.grid.cols();
        let id = region.id();
        for c in start..=end {
            self.index[row * cols + c] = id;
        }

        region.push_span(row, start, end)
    }

    /// Scans the row above or below a checked span for unassigned matching
    /// cells within the span's column extent. Each discovered neighbor span
    /// (which may extend past that extent) is linked both ways and enqueued.
    #[allow(clippy::too_many_arguments)]
    fn check_neighbor_row(
        &mut self,
        nrow: usize,
        start: usize,
        end: usize,
        checked: SpanId,
        above: bool,
        region: &mut Region,
        queue: &mut VecDeque<SpanId>,
    ) {
        let cols = self.grid.cols();
        let value = region.value();

        let mut col = start;
        while col <= end {
            let unassigned = self.index[nrow * cols + col] == UNASSIGNED;
            if unassigned && self.grid.row(nrow)[col] == value {
                let neighbor = self.span_at(nrow, col, region);
                if above {
                    region.link_vertical(neighbor, checked);
                } else {
                    region.link_vertical(checked, neighbor);
                }
                queue.push_back(neighbor);
                col = region.span(neighbor).col_end + 1;
            } else {
                col += 1;
            }
        }
    }
}
