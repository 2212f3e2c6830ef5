pub type SpanId = usize;
pub type RegionId = usize;

/// Region id reserved for locations no fill has claimed yet.
pub const UNASSIGNED: RegionId = 0;

/// Maximal horizontal run of same-valued cells on one row.
///
/// `above` and `below` hold arena indices of overlapping spans in the
/// neighboring rows, kept ordered by start column. Adjacency is bidirectional:
/// if `b` is in `a.below`, then `a` is in `b.above`.
#[derive(Debug, Clone)]
pub struct Span {
    pub row: usize,
    pub col_start: usize,
    pub col_end: usize,
    pub above: Vec<SpanId>,
    pub below: Vec<SpanId>,
}

impl Span {
    pub fn width(&self) -> usize {
        self.col_end - self.col_start + 1
    }

    pub fn contains_col(&self, col: usize) -> bool {
        col >= self.col_start && col <= self.col_end
    }
}

/// Tight inclusive bounds of a region's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

/// One connected component of same-valued cells, as an arena of spans.
///
/// Grown incrementally during flood fill, immutable afterwards. Span ids are
/// indices into the region's own arena; they are stable and local to the
/// region, so the adjacency lists carry no ownership cycles.
#[derive(Debug, Clone)]
pub struct Region {
    id: RegionId,
    value: f32,
    spans: Vec<Span>,
    bbox: BoundingBox,
    cell_count: usize,
    anchor: SpanId,
}

impl Region {
    pub(crate) fn new(id: RegionId, value: f32) -> Self {
        Self {
            id,
            value,
            spans: Vec::new(),
            bbox: BoundingBox {
                top: usize::MAX,
                left: usize::MAX,
                bottom: 0,
                right: 0,
            },
            cell_count: 0,
            anchor: 0,
        }
    }

    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    /// The hull walk's start/stop span: minimum row, then minimum start
    /// column.
    pub fn anchor(&self) -> SpanId {
        self.anchor
    }

    pub fn span(&self, id: SpanId) -> &Span {
        &self.spans[id]
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.spans
            .iter()
            .any(|s| s.row == row && s.contains_col(col))
    }

    pub(crate) fn push_span(&mut self, row: usize, col_start: usize, col_end: usize) -> SpanId {
        debug_assert!(col_start <= col_end);
        let id = self.spans.len();
        self.spans.push(Span {
            row,
            col_start,
            col_end,
            above: Vec::new(),
            below: Vec::new(),
        });
        id
    }

    /// Folds a span into the region's bounding box, cell count and anchor.
    pub(crate) fn absorb(&mut self, id: SpanId) {
        let (row, start, end, width) = {
            let s = &self.spans[id];
            (s.row, s.col_start, s.col_end, s.width())
        };

        self.bbox.top = self.bbox.top.min(row);
        self.bbox.bottom = self.bbox.bottom.max(row);
        self.bbox.left = self.bbox.left.min(start);
        self.bbox.right = self.bbox.right.max(end);

        let first = self.cell_count == 0;
        self.cell_count += width;

        let a = &self.spans[self.anchor];
        if first || row < a.row || (row == a.row && start < a.col_start) {
            self.anchor = id;
        }
    }

    /// Links two vertically overlapping spans both ways, keeping the
    /// adjacency lists ordered by start column.
    pub(crate) fn link_vertical(&mut self, upper: SpanId, lower: SpanId) {
        let pos = self.ordered_pos(&self.spans[upper].below, lower);
        self.spans[upper].below.insert(pos, lower);

        let pos = self.ordered_pos(&self.spans[lower].above, upper);
        self.spans[lower].above.insert(pos, upper);
    }

    fn ordered_pos(&self, list: &[SpanId], id: SpanId) -> usize {
        let start = self.spans[id].col_start;
        list.iter()
            .position(|&other| self.spans[other].col_start > start)
            .unwrap_or(list.len())
    }
}

#[cfg(test)]
mod tests {
    use super::Region;

    #[test]
    fn absorb_tracks_bbox_count_and_anchor() {
        let mut r = Region::new(1, 40.0);
        let a = r.push_span(2, 3, 5);
        let b = r.push_span(1, 4, 4);
        let c = r.push_span(1, 0, 1);

        r.absorb(a);
        r.absorb(b);
        r.absorb(c);

        assert_eq!(r.cell_count(), 3 + 1 + 2);
        let bbox = r.bounding_box();
        assert_eq!((bbox.top, bbox.left, bbox.bottom, bbox.right), (1, 0, 2, 5));
        // Minimum row wins, then minimum start column.
        assert_eq!(r.anchor(), c);
    }

    #[test]
    fn link_vertical_is_bidirectional_and_ordered() {
        let mut r = Region::new(1, 0.0);
        let wide = r.push_span(1, 0, 9);
        let right = r.push_span(0, 6, 8);
        let left = r.push_span(0, 0, 2);

        // Linked right-first; ordering by start column must still hold.
        r.link_vertical(right, wide);
        r.link_vertical(left, wide);

        assert_eq!(r.span(wide).above, vec![left, right]);
        assert_eq!(r.span(left).below, vec![wide]);
        assert_eq!(r.span(right).below, vec![wide]);
    }

    #[test]
    fn contains_checks_span_extents() {
        let mut r = Region::new(1, 0.0);
        let s = r.push_span(3, 2, 4);
        r.absorb(s);

        assert!(r.contains(3, 2));
        assert!(r.contains(3, 4));
        assert!(!r.contains(3, 5));
        assert!(!r.contains(2, 3));
    }
}
