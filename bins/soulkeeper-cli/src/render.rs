//! Plain-text views of the tracker state.

use std::fmt::Write;

use soulkeeper_core::constants::RATE_DISPLAY_PRECISION;
use soulkeeper_core::types::{Recommendation, Stat};
use soulkeeper_ledger::{GameState, StatSheet};

/// One stat sheet in in-game menu order.
fn sheet(out: &mut String, title: &str, stats: &StatSheet) {
    let _ = writeln!(out, "{title}:");
    for stat in Stat::ALL {
        if let Some(v) = stats.get(stat.name()) {
            let _ = writeln!(out, "  {:<12}: {v}", stat.name());
        }
    }
}

/// Base and current stat sheets.
pub fn stats(state: &GameState) -> String {
    let mut out = String::new();
    sheet(&mut out, "Base stats", &state.base_stats);
    out.push('\n');
    sheet(&mut out, "Current stats", &state.current_stats);
    let _ = writeln!(out, "\nPoints spent: {}", state.points_spent());
    out
}

/// Souls summary lines.
pub fn souls_summary(state: &GameState) -> String {
    format!(
        "Total accumulated souls: {}\nTotal souls used for leveling: {}\nRemaining souls: {}\n",
        state.total_accumulated_souls(),
        state.total_souls_used(),
        state.remaining_souls()
    )
}

/// The full overview: class, status, stats, souls and merchant progress.
pub fn overview(state: &GameState) -> String {
    let mut out = String::new();
    let status = if state.game_status.is_empty() {
        "-"
    } else {
        state.game_status.as_str()
    };
    let _ = writeln!(out, "Game status: {status}");
    let _ = writeln!(out, "Starting class: {}\n", state.starting_class);
    out.push_str(&stats(state));
    out.push('\n');
    out.push_str(&souls_summary(state));
    let (bought, total) = state.merchant_progress();
    let _ = writeln!(out, "Merchants bought: {bought}/{total}");
    out
}

/// A planner recommendation with deficits, largest first.
pub fn recommendation(rec: &Recommendation) -> String {
    let p = RATE_DISPLAY_PRECISION;
    let mut out = format!("Next stat (greedy): {} (r={:.p$})\n", rec.stat, rec.rate);
    for (k, v) in rec.ranked_deficits() {
        let _ = writeln!(out, "{k:<12}: {v:.p$}");
    }
    out
}

/// Numbered list, 0-based to match delete indices.
pub fn indexed(values: &[u64]) -> String {
    if values.is_empty() {
        return "(none)\n".to_string();
    }
    let mut out = String::new();
    for (i, v) in values.iter().enumerate() {
        let _ = writeln!(out, "[{i}] {v}");
    }
    out
}

/// Tracked areas with their drop count and souls total.
pub fn areas(state: &GameState) -> String {
    if state.souls_by_area.is_empty() {
        return "(no areas)\n".to_string();
    }
    let mut out = String::new();
    for (area, count, total) in state.area_totals() {
        let _ = writeln!(out, "{area} ({count} drops, {total} souls)");
    }
    out
}

/// Merchant checklist grouped by area.
pub fn merchants(state: &GameState) -> String {
    if state.merchant_checklist.is_empty() {
        return "(no merchants)\n".to_string();
    }
    let mut out = String::new();
    for (area, section) in &state.merchant_checklist {
        let _ = writeln!(out, "{area}");
        for (name, bought) in section {
            let tag = if *bought { "(BOUGHT)" } else { "(pending)" };
            let _ = writeln!(out, "  {name:<30} {tag}");
        }
    }
    out
}
