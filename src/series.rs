use crate::parse::ResultRow;
use std::fmt;

// Metric name and CSV column name are identical for all three metrics, so
// selecting a value is a direct field lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Area,
    Delay,
    Qor,
}

impl Metric {
    pub fn all() -> [Metric; 3] {
        [Metric::Area, Metric::Delay, Metric::Qor]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Area => "Area",
            Metric::Delay => "Delay",
            Metric::Qor => "QoR",
        }
    }

    pub fn value(&self, row: &ResultRow) -> f64 {
        match self {
            Metric::Area => row.area,
            Metric::Delay => row.delay,
            Metric::Qor => row.qor,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub type Point = (i64, f64);

pub fn series_points(rows: &[ResultRow], metric: Metric) -> Vec<Point> {
    rows.iter().map(|row| (row.x, metric.value(row))).collect()
}

// Smaller is better for Area, Delay and QoR alike. Ties keep the first
// occurrence.
pub fn best_point(rows: &[ResultRow], metric: Metric) -> Option<Point> {
    let mut best: Option<Point> = None;
    for row in rows {
        let y = metric.value(row);
        let replace = match best {
            None => true,
            Some((_, min)) => y < min,
        };
        if replace {
            best = Some((row.x, y));
        }
    }
    best
}

#[cfg(test)]
fn mc_row(x: i64, area: f64, delay: f64, qor: f64) -> ResultRow {
    ResultRow {
        design: "pci_orig".to_string(),
        x,
        area,
        delay,
        qor,
    }
}

#[test]
fn should_pick_minimum_for_each_metric() {
    let rows = vec![mc_row(1, 500.0, 10.0, 5.0), mc_row(2, 480.0, 9.0, 4.0)];
    assert_eq!(best_point(&rows, Metric::Area), Some((2, 480.0)));
    assert_eq!(best_point(&rows, Metric::Delay), Some((2, 9.0)));
    assert_eq!(best_point(&rows, Metric::Qor), Some((2, 4.0)));
}

#[test]
fn should_break_ties_on_first_occurrence() {
    let rows = vec![
        mc_row(1, 500.0, 10.0, 5.0),
        mc_row(2, 480.0, 9.0, 4.0),
        mc_row(3, 480.0, 9.0, 4.0),
    ];
    assert_eq!(best_point(&rows, Metric::Area), Some((2, 480.0)));
    assert_eq!(best_point(&rows, Metric::Qor), Some((2, 4.0)));
}

#[test]
fn should_return_none_for_empty_series() {
    assert_eq!(best_point(&[], Metric::Area), None);
}

#[test]
fn should_extract_points_in_row_order() {
    let rows = vec![mc_row(1, 500.0, 10.0, 5.0), mc_row(4, 470.0, 8.5, 3.5)];
    assert_eq!(
        series_points(&rows, Metric::Delay),
        vec![(1, 10.0), (4, 8.5)]
    );
}

#[test]
fn should_name_metrics_like_the_csv_columns() {
    assert_eq!(Metric::Area.name(), "Area");
    assert_eq!(Metric::Delay.name(), "Delay");
    assert_eq!(Metric::Qor.name(), "QoR");
}
