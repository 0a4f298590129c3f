//! Bead color usage counts.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::color::Rgb;

/// Header row of the histogram CSV export.
pub const CSV_HEADER: &str = "色號(HEX),RGB值,數量,百分比";

/// Usage of one resolved bead color.
#[derive(Debug, Clone, PartialEq)]
pub struct BeadColorEntry {
    /// Histogram key: the matched palette entry's name, or the sample's
    /// `#rrggbb` form when no palette is in use.
    pub label: String,
    /// First sample seen for this label (not an average, not the palette color).
    pub rgb: Rgb,
    /// Number of beads, always at least 1.
    pub count: usize,
    /// `count / total * 100`, rounded to two decimals.
    pub percentage: f64,
}

/// Accumulates bead counts per label during a grid scan.
///
/// Remembers the order in which labels were first seen so that equal counts
/// sort the same way on every run.
#[derive(Debug, Default)]
pub struct Histogram {
    index: HashMap<String, usize>,
    slots: Vec<Slot>,
    total: usize,
}

#[derive(Debug)]
struct Slot {
    label: String,
    rgb: Rgb,
    count: usize,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one bead for `label`. `sample` is kept only if the label is new.
    pub fn record(&mut self, label: &str, sample: Rgb) {
        self.total += 1;
        if let Some(&i) = self.index.get(label) {
            self.slots[i].count += 1;
            return;
        }
        self.index.insert(label.to_string(), self.slots.len());
        self.slots.push(Slot {
            label: label.to_string(),
            rgb: sample,
            count: 1,
        });
    }

    /// Beads recorded so far.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Distinct labels recorded so far.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Final entries, most used first.
    ///
    /// Equal counts keep first-seen order (the sort is stable).
    pub fn into_sorted(self) -> Vec<BeadColorEntry> {
        let total = self.total;
        let mut entries: Vec<BeadColorEntry> = self
            .slots
            .into_iter()
            .map(|slot| BeadColorEntry {
                percentage: percentage(slot.count, total),
                label: slot.label,
                rgb: slot.rgb,
                count: slot.count,
            })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}

/// `count / total * 100` rounded half-up to two decimal places.
///
/// Returns `0.0` when `total` is zero.
///
/// # Example
///
/// ```
/// use bead_grid::percentage;
///
/// assert_eq!(percentage(1, 3), 33.33);
/// assert_eq!(percentage(2, 3), 66.67);
/// ```
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 100.0 * 100.0).round() / 100.0
}

/// Render histogram entries as CSV, one row per entry in the given order.
///
/// Every line, including the last, ends with `\n`. Labels containing a
/// comma, a quote or a line break are quoted with inner quotes doubled.
///
/// # Example
///
/// ```
/// use bead_grid::{histogram_csv, BeadColorEntry, Rgb};
///
/// let entries = vec![BeadColorEntry {
///     label: "#ff0000".to_string(),
///     rgb: Rgb::new(255, 0, 0),
///     count: 2,
///     percentage: 50.0,
/// }];
/// let csv = histogram_csv(&entries);
/// assert!(csv.ends_with("#ff0000,\"rgb(255,0,0)\",2,50%\n"));
/// ```
pub fn histogram_csv(entries: &[BeadColorEntry]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');
    for entry in entries {
        csv.push_str(&format!(
            "{},\"{}\",{},{}%\n",
            csv_field(&entry.label),
            entry.rgb.to_css(),
            entry.count,
            entry.percentage
        ));
    }
    csv
}

fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
