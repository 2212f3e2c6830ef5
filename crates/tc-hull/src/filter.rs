use tc_grid::GridPoint;

/// Consumer side of the point pipeline: one `accept` per surviving point.
pub trait PointSink {
    fn accept(&mut self, point: GridPoint);
}

impl PointSink for Vec<GridPoint> {
    fn accept(&mut self, point: GridPoint) {
        self.push(point);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathFilterConfig {
    /// Minimum distance a point must clear from the last accepted point.
    /// `0.0` disables distance filtering entirely.
    pub min_distance: f32,
    /// Reserved turn-angle threshold in radians. Its acceptance test is a
    /// stub that never passes; distance filtering is the only active rule.
    pub max_turn_angle: f32,
}

impl Default for PathFilterConfig {
    fn default() -> Self {
        Self {
            min_distance: 0.0,
            max_turn_angle: std::f32::consts::FRAC_PI_4,
        }
    }
}

/// Streaming point thinner between the hull tracer and a renderer sink.
///
/// The first presented point is always accepted. The second must clear the
/// configured minimum distance from it; later points pass on either the
/// turn-angle rule (currently never) or the distance rule. Accepted points go
/// to the sink synchronously; rejected points are dropped without side
/// effect.
#[derive(Debug)]
pub struct PathFilter<'a, S: PointSink> {
    cfg: PathFilterConfig,
    sink: &'a mut S,
    last_accepted: Option<GridPoint>,
    // Delta between the last two accepted points; kept for the turn-angle
    // rule, unused until that rule is implemented.
    last_delta: (f32, f32),
    accepted: usize,
}

impl<'a, S: PointSink> PathFilter<'a, S> {
    pub fn new(cfg: PathFilterConfig, sink: &'a mut S) -> Self {
        assert!(cfg.min_distance >= 0.0, "minimum distance must be >= 0");
        Self {
            cfg,
            sink,
            last_accepted: None,
            last_delta: (0.0, 0.0),
            accepted: 0,
        }
    }

    pub fn push(&mut self, point: GridPoint) {
        let Some(prev) = self.last_accepted else {
            self.accept(point, (0.0, 0.0));
            return;
        };

        let pass = if self.accepted == 1 {
            self.distance_passes(prev, point)
        } else {
            self.turn_exceeds_max_angle(prev, point) || self.distance_passes(prev, point)
        };

        if pass {
            let delta = (
                point.col as f32 - prev.col as f32,
                point.row as f32 - prev.row as f32,
            );
            self.accept(point, delta);
        }
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted
    }

    fn accept(&mut self, point: GridPoint, delta: (f32, f32)) {
        self.last_accepted = Some(point);
        self.last_delta = delta;
        self.accepted += 1;
        self.sink.accept(point);
    }

    fn distance_passes(&self, prev: GridPoint, point: GridPoint) -> bool {
        if self.cfg.min_distance <= 0.0 {
            return true;
        }
        let dx = point.col as f32 - prev.col as f32;
        let dy = point.row as f32 - prev.row as f32;
        (dx * dx + dy * dy).sqrt() > self.cfg.min_distance
    }

    // Stub: the turn-angle rule is configured but not implemented, so it
    // rejects unconditionally. `last_delta` is the state it would consume.
    fn turn_exceeds_max_angle(&self, _prev: GridPoint, _point: GridPoint) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use tc_grid::GridPoint;

    use super::{PathFilter, PathFilterConfig};

    fn p(col: usize, row: usize) -> GridPoint {
        GridPoint { col, row }
    }

    #[test]
    fn zero_min_distance_forwards_everything() {
        let input = [p(0, 0), p(0, 0), p(1, 0), p(1, 1), p(0, 1)];

        let mut out = Vec::new();
        let mut filter = PathFilter::new(PathFilterConfig::default(), &mut out);
        for &point in &input {
            filter.push(point);
        }

        assert_eq!(out, input);
    }

    #[test]
    fn first_point_is_always_accepted() {
        let cfg = PathFilterConfig {
            min_distance: 100.0,
            ..PathFilterConfig::default()
        };

        let mut out = Vec::new();
        let mut filter = PathFilter::new(cfg, &mut out);
        filter.push(p(3, 7));

        assert_eq!(filter.accepted_count(), 1);
        assert_eq!(out, vec![p(3, 7)]);
    }

    #[test]
    fn near_points_are_dropped() {
        let cfg = PathFilterConfig {
            min_distance: 1.5,
            ..PathFilterConfig::default()
        };

        let mut out = Vec::new();
        let mut filter = PathFilter::new(cfg, &mut out);
        filter.push(p(0, 0));
        filter.push(p(1, 0)); // distance 1, dropped
        filter.push(p(3, 0)); // distance 3 from (0,0), kept
        filter.push(p(4, 0)); // distance 1 from (3,0), dropped
        filter.push(p(4, 2)); // distance sqrt(5) from (3,0), kept

        assert_eq!(out, vec![p(0, 0), p(3, 0), p(4, 2)]);
    }

    #[test]
    fn distance_is_measured_from_last_accepted_point() {
        let cfg = PathFilterConfig {
            min_distance: 2.0,
            ..PathFilterConfig::default()
        };

        let mut out = Vec::new();
        let mut filter = PathFilter::new(cfg, &mut out);
        for col in 0..10 {
            filter.push(p(col, 0));
        }

        // 0 accepted, 1/2 dropped, 3 accepted, 4/5 dropped, ...
        assert_eq!(out, vec![p(0, 0), p(3, 0), p(6, 0), p(9, 0)]);
    }
}
