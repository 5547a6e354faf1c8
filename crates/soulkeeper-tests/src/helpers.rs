//! Shared test helpers for end-to-end tests.

use std::path::Path;

use soulkeeper_core::types::StatMap;
use soulkeeper_ledger::Tracker;

/// Build a [`StatMap`] from `(name, value)` pairs.
pub fn stat_map(pairs: &[(&str, f64)]) -> StatMap {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// Level up `points` times with a fixed horizon, elapsed counting up from
/// the points already spent. Returns the stats chosen, in order.
pub fn level_up_n(tracker: &mut Tracker, horizon: i64, points: usize) -> Vec<String> {
    let mut chosen = Vec::with_capacity(points);
    for _ in 0..points {
        let elapsed = tracker.state().points_spent() + 1;
        let rec = tracker
            .apply_recommendation(horizon, elapsed, None)
            .expect("valid plan");
        chosen.push(rec.stat);
    }
    chosen
}

/// Open a tracker on `path` that already tracks `areas` with one drop each.
pub fn tracker_with_areas(path: &Path, areas: &[(&str, u64)]) -> Tracker {
    let mut tracker = Tracker::open_path(path).expect("open tracker");
    for (area, souls) in areas {
        tracker.add_area(area).expect("add area");
        tracker.add_drop(area, *souls).expect("add drop");
    }
    tracker
}
