//! Squarified row tiling.
//!
//! Row-building heuristic after Bruls, Huizing and van Wijk: values join
//! the current row while the row's worst aspect ratio keeps improving, then
//! the row is fixed as a strip along the shortest side of the free area and
//! the cursor advances. The aspect target defaults to the golden ratio,
//! which yields slightly calmer layouts than a strict 1:1 target.

use teselar_core::Rect;
use tracing::debug;

/// Default aspect-ratio target for row building.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Tiles `values` into `area`, one rectangle per value, preserving order.
///
/// Rectangle areas are proportional to the values, which must be finite and
/// non-negative. Zero values produce zero-area rectangles at the current
/// cursor. The output partitions `area` exactly: strip thickness comes from
/// the value share of the remaining space, and the last rectangle of each
/// row absorbs the floating-point remainder of its strip.
pub(crate) fn squarify(ratio: f64, values: &[f64], area: Rect) -> Vec<Rect> {
    let mut out = Vec::with_capacity(values.len());
    let mut x0 = area.x;
    let mut y0 = area.y;
    let x1 = area.right();
    let y1 = area.bottom();
    let mut remaining: f64 = values.iter().sum();
    let n = values.len();
    let mut i0 = 0;

    while i0 < n {
        let dx = x1 - x0;
        let dy = y1 - y0;

        // Seed the row. Zero values ride along until a non-zero seed is
        // found; if nothing non-zero is left, the row swallows the rest.
        let mut i1 = i0 + 1;
        let mut sum = values[i0];
        while sum == 0.0 && i1 < n {
            sum = values[i1];
            i1 += 1;
        }

        if remaining > 0.0 {
            let mut min_v = sum;
            let mut max_v = sum;
            let alpha = (dy / dx).max(dx / dy) / (remaining * ratio);
            let mut beta = sum * sum * alpha;
            let mut worst = (max_v / beta).max(beta / min_v);
            while i1 < n {
                let v = values[i1];
                let grown = sum + v;
                let low = min_v.min(v);
                let high = max_v.max(v);
                beta = grown * grown * alpha;
                let next = (high / beta).max(beta / low);
                if next > worst {
                    break;
                }
                sum = grown;
                min_v = low;
                max_v = high;
                worst = next;
                i1 += 1;
            }
        } else {
            i1 = n;
        }

        let row = &values[i0..i1];
        // Fix the row on the shortest side of the free area and advance.
        let dice = dx < dy;
        debug!(len = row.len(), sum, dice, "row fixed");
        if dice {
            let edge = if remaining > 0.0 { y0 + dy * sum / remaining } else { y1 };
            lay_row(row, sum, x0, y0, x1, edge, true, &mut out);
            y0 = edge;
        } else {
            let edge = if remaining > 0.0 { x0 + dx * sum / remaining } else { x1 };
            lay_row(row, sum, x0, y0, edge, y1, false, &mut out);
            x0 = edge;
        }
        remaining -= sum;
        i0 = i1;
    }
    out
}

/// Divides one strip among a row's values. A dice row spans the strip's
/// full height and divides its width; a slice row divides the height.
#[allow(clippy::too_many_arguments)]
fn lay_row(
    row: &[f64],
    row_sum: f64,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    dice: bool,
    out: &mut Vec<Rect>,
) {
    let span = if dice { x1 - x0 } else { y1 - y0 };
    let k = if row_sum > 0.0 { span / row_sum } else { 0.0 };
    let mut cursor = if dice { x0 } else { y0 };
    for (i, v) in row.iter().enumerate() {
        let last = i + 1 == row.len() && row_sum > 0.0;
        let far = if dice { x1 } else { y1 };
        let next = if last { far } else { cursor + v * k };
        if dice {
            out.push(Rect::from_corners(cursor, y0, next, y1));
        } else {
            out.push(Rect::from_corners(x0, cursor, x1, next));
        }
        cursor = next;
    }
}
