use crate::series::Metric;
use clap::{command, Arg, ArgAction};

const DEFAULT_MC_PATH: &str = "./results/combined_mc_results.csv";
const DEFAULT_SA_PATH: &str = "./results/combined_sa_results.csv";
const DEFAULT_OUTPUT_DIR: &str = "./graph";
const DEFAULT_DESIGNS: [&str; 3] = ["simple_spi_orig", "pci_orig", "aes_secworks_orig"];

#[derive(Debug)]
pub struct CliArgs {
    pub mc_path: String,
    pub sa_path: String,
    pub output_dir: String,
    pub designs: Vec<String>,
    pub metrics: Vec<Metric>,
    pub skip_empty: bool,
    pub flamegraph: bool,
}

pub fn cli() -> CliArgs {
    let arguments = command!("QoR Report")
        .version("1.0")
        .about("Generates per-design comparison charts from Monte Carlo and Simulated Annealing optimization logs.")
        .arg(
            Arg::new("mc")
                .help("Path to the combined Monte Carlo results CSV")
                .long("mc")
                .default_value(DEFAULT_MC_PATH),
        )
        .arg(
            Arg::new("sa")
                .help("Path to the combined Simulated Annealing results CSV")
                .long("sa")
                .default_value(DEFAULT_SA_PATH),
        )
        .arg(
            Arg::new("output")
                .help("Directory the chart images are written to")
                .long("output")
                .short('o')
                .default_value(DEFAULT_OUTPUT_DIR),
        )
        .arg(
            Arg::new("design")
                .help("Design to plot, may be given multiple times")
                .long("design")
                .short('d')
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("metric")
                .help("Metric to plot: area, delay or qor, may be given multiple times")
                .long("metric")
                .short('m')
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("skip_empty")
                .help("Skip designs without Monte Carlo rows instead of aborting")
                .long("skip-empty")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("flamegraph")
                .help("Specify whether to create a flamegraph")
                .long("flamegraph")
                .short('f')
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mc_path = match arguments.get_one::<String>("mc") {
        Some(path) => path.to_string(),
        None => panic!("MC results path is required"),
    };

    let sa_path = match arguments.get_one::<String>("sa") {
        Some(path) => path.to_string(),
        None => panic!("SA results path is required"),
    };

    let output_dir = match arguments.get_one::<String>("output") {
        Some(path) => path.to_string(),
        None => panic!("Output directory is required"),
    };

    let designs = match arguments.get_many::<String>("design") {
        Some(designs) => designs.cloned().collect(),
        None => DEFAULT_DESIGNS.iter().map(|d| d.to_string()).collect(),
    };

    let metrics = match arguments.get_many::<String>("metric") {
        Some(metrics) => metrics
            .map(|metric| match metric.to_lowercase().as_str() {
                "area" => Metric::Area,
                "delay" => Metric::Delay,
                "qor" => Metric::Qor,
                otherwise => panic!("{} is not a valid metric.", otherwise),
            })
            .collect(),
        None => Metric::all().to_vec(),
    };

    return CliArgs {
        mc_path,
        sa_path,
        output_dir,
        designs,
        metrics,
        skip_empty: arguments.get_flag("skip_empty"),
        flamegraph: arguments.get_flag("flamegraph"),
    };
}
