use crate::chart;
use crate::parse::ResultTable;
use crate::series::{self, Metric};
use log::{debug, warn};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// What to do when a design has no Monte Carlo rows for a chart. Abort
// reproduces the historical behavior of failing the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyPolicy {
    Abort,
    Skip,
}

#[derive(Debug)]
pub struct EmptySeriesError {
    pub design: String,
    pub metric: Metric,
}

impl fmt::Display for EmptySeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no Monte Carlo rows for design {} while plotting {}",
            self.design, self.metric
        )
    }
}

impl Error for EmptySeriesError {}

pub fn prepare_output_dir(dir: &Path) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    Ok(dir.to_path_buf())
}

pub fn generate_reports(
    mc_results: &ResultTable,
    sa_results: &ResultTable,
    designs: &[String],
    metrics: &[Metric],
    output_dir: &Path,
    policy: EmptyPolicy,
) -> Result<usize, Box<dyn Error>> {
    let mut written = 0;

    for design in designs {
        let mc_rows = mc_results.design_rows(design);
        let sa_rows = sa_results.design_rows(design);

        for &metric in metrics {
            let mc_best = match series::best_point(&mc_rows, metric) {
                Some(best) => best,
                None => match policy {
                    EmptyPolicy::Abort => {
                        return Err(Box::new(EmptySeriesError {
                            design: design.clone(),
                            metric,
                        }));
                    }
                    EmptyPolicy::Skip => {
                        warn!(
                            "no Monte Carlo rows for design {}, skipping {}",
                            design, metric
                        );
                        continue;
                    }
                },
            };
            let mc_points = series::series_points(&mc_rows, metric);

            // An empty SA subset is not an error, the chart just carries the
            // MC series alone.
            let sa_points = series::series_points(&sa_rows, metric);
            let sa_series = series::best_point(&sa_rows, metric)
                .map(|best| (sa_points.as_slice(), best));

            let output_file = output_dir.join(format!("{}_{}_comparison.png", design, metric));
            chart::render_comparison(&output_file, design, metric, &mc_points, mc_best, sa_series)?;
            debug!("wrote {}", output_file.display());
            written += 1;
        }
    }

    Ok(written)
}

#[cfg(test)]
use crate::parse::ResultRow;

#[cfg(test)]
fn row(design: &str, x: i64, area: f64, delay: f64, qor: f64) -> ResultRow {
    ResultRow {
        design: design.to_string(),
        x,
        area,
        delay,
        qor,
    }
}

#[cfg(test)]
fn test_tables() -> (ResultTable, ResultTable) {
    let mc = ResultTable::from_rows(vec![
        row("pci_orig", 1, 500.0, 10.0, 5.0),
        row("pci_orig", 2, 480.0, 9.0, 4.0),
        row("aes_secworks_orig", 1, 900.0, 20.0, 9.0),
        row("aes_secworks_orig", 2, 880.0, 19.0, 8.5),
    ]);
    let sa = ResultTable::from_rows(vec![
        row("pci_orig", 1, 505.0, 10.5, 5.2),
        row("pci_orig", 2, 470.0, 8.8, 3.9),
    ]);
    (mc, sa)
}

#[test]
fn should_write_one_chart_per_design_and_metric() {
    let (mc, sa) = test_tables();
    let output_dir = std::env::temp_dir().join("qor_report_full_set");
    let output_dir = prepare_output_dir(&output_dir).unwrap();

    let designs = vec!["pci_orig".to_string(), "aes_secworks_orig".to_string()];
    let written = generate_reports(
        &mc,
        &sa,
        &designs,
        &Metric::all(),
        &output_dir,
        EmptyPolicy::Abort,
    )
    .unwrap();

    assert_eq!(written, 6);
    for design in &designs {
        for metric in Metric::all() {
            let file = output_dir.join(format!("{}_{}_comparison.png", design, metric));
            assert!(file.exists(), "missing {}", file.display());
        }
    }
}

#[test]
fn should_render_mc_only_when_sa_subset_is_empty() {
    let (mc, _) = test_tables();
    let sa = ResultTable::default();
    let output_dir = std::env::temp_dir().join("qor_report_mc_only");
    let output_dir = prepare_output_dir(&output_dir).unwrap();

    let written = generate_reports(
        &mc,
        &sa,
        &["aes_secworks_orig".to_string()],
        &[Metric::Area],
        &output_dir,
        EmptyPolicy::Abort,
    )
    .unwrap();

    assert_eq!(written, 1);
    assert!(output_dir
        .join("aes_secworks_orig_Area_comparison.png")
        .exists());
}

#[test]
fn should_abort_before_writing_when_mc_subset_is_empty() {
    let (mc, sa) = test_tables();
    let output_dir = std::env::temp_dir().join("qor_report_abort");
    let output_dir = prepare_output_dir(&output_dir).unwrap();

    let res = generate_reports(
        &mc,
        &sa,
        &["simple_spi_orig".to_string()],
        &Metric::all(),
        &output_dir,
        EmptyPolicy::Abort,
    );

    let err = res.expect_err("expected an empty series error");
    assert!(err.to_string().contains("no Monte Carlo rows"));
    for metric in Metric::all() {
        assert!(!output_dir
            .join(format!("simple_spi_orig_{}_comparison.png", metric))
            .exists());
    }
}

#[test]
fn should_skip_empty_designs_when_configured() {
    let (mc, sa) = test_tables();
    let output_dir = std::env::temp_dir().join("qor_report_skip");
    let output_dir = prepare_output_dir(&output_dir).unwrap();

    let designs = vec!["simple_spi_orig".to_string(), "pci_orig".to_string()];
    let written = generate_reports(
        &mc,
        &sa,
        &designs,
        &[Metric::Qor],
        &output_dir,
        EmptyPolicy::Skip,
    )
    .unwrap();

    assert_eq!(written, 1);
    assert!(!output_dir
        .join("simple_spi_orig_QoR_comparison.png")
        .exists());
    assert!(output_dir.join("pci_orig_QoR_comparison.png").exists());
}
