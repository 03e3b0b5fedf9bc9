use crate::series::{Metric, Point};
use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;
use std::path::Path;

// Fixed colors so the two approaches stay recognizable across all charts.
const MC_COLOR: RGBColor = RED;
const SA_COLOR: RGBColor = GREEN;

const CHART_SIZE: (u32, u32) = (1500, 900);

pub fn render_comparison(
    output_file: &Path,
    design: &str,
    metric: Metric,
    mc_points: &[Point],
    mc_best: Point,
    sa_series: Option<(&[Point], Point)>,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(output_file, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_range, y_range) = axis_ranges(mc_points, sa_series.map(|(points, _)| points));

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "{} - {} Comparison: Monte Carlo vs Simulated Annealing",
                design, metric
            ),
            ("sans-serif", 40).into_font(),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Sample Number")
        .y_desc(format!("{} Value", metric))
        // Plain decimal tick labels, never exponential notation.
        .y_label_formatter(&|y| format!("{:.2}", y))
        .draw()?;

    chart
        .draw_series(LineSeries::new(mc_points.iter().copied(), &MC_COLOR))?
        .label(format!("Monte Carlo {}", metric))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &MC_COLOR));

    chart
        .draw_series(std::iter::once(Circle::new(mc_best, 7, MC_COLOR.filled())))?
        .label(format!("Best MC {}: {:.2}", metric, mc_best.1))
        .legend(|(x, y)| Circle::new((x + 10, y), 5, MC_COLOR.filled()));

    if let Some((sa_points, sa_best)) = sa_series {
        chart
            .draw_series(LineSeries::new(sa_points.iter().copied(), &SA_COLOR))?
            .label(format!("Simulated Annealing {}", metric))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &SA_COLOR));

        chart
            .draw_series(std::iter::once(Circle::new(sa_best, 7, SA_COLOR.filled())))?
            .label(format!("Best SA {}: {:.2}", metric, sa_best.1))
            .legend(|(x, y)| Circle::new((x + 10, y), 5, SA_COLOR.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    Ok(())
}

// Axis ranges over both series, padded so flat series and single points stay
// inside the plot area.
fn axis_ranges(mc_points: &[Point], sa_points: Option<&[Point]>) -> (Range<i64>, Range<f64>) {
    let mut x_min = i64::MAX;
    let mut x_max = i64::MIN;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for &(x, y) in mc_points.iter().chain(sa_points.into_iter().flatten()) {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if x_min > x_max {
        return (0..1, 0.0..1.0);
    }

    let x_pad = ((x_max - x_min) / 20).max(1);
    let y_pad = if y_max > y_min {
        (y_max - y_min) * 0.05
    } else {
        y_max.abs() * 0.05 + 1.0
    };
    (
        x_min - x_pad..x_max + x_pad,
        y_min - y_pad..y_max + y_pad,
    )
}

#[test]
fn should_pad_flat_series_ranges() {
    let (x_range, y_range) = axis_ranges(&[(3, 480.0)], None);
    assert!(x_range.start < 3 && x_range.end > 3);
    assert!(y_range.start < 480.0 && y_range.end > 480.0);
}

#[test]
fn should_span_both_series() {
    let mc = vec![(1, 500.0), (2, 480.0)];
    let sa = vec![(1, 520.0), (8, 470.0)];
    let (x_range, y_range) = axis_ranges(&mc, Some(&sa));
    assert!(x_range.start <= 1 && x_range.end >= 8);
    assert!(y_range.start <= 470.0 && y_range.end >= 520.0);
}

#[test]
fn should_render_single_point_series() {
    let dir = std::env::temp_dir().join("qor_report_chart_single");
    std::fs::create_dir_all(&dir).unwrap();
    let output_file = dir.join("single_point.png");
    render_comparison(
        &output_file,
        "pci_orig",
        Metric::Area,
        &[(1, 500.0)],
        (1, 500.0),
        None,
    )
    .unwrap();
    assert!(output_file.exists());
}
