use flame;
use log::info;
use qor_report::{cli, parse, report};
use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let arguments = cli::cli();

    if arguments.flamegraph {
        flame::start("main");
    }

    let mc_results = parse::load_mc_results(&arguments.mc_path)?;
    let sa_results = parse::load_sa_results(&arguments.sa_path)?;
    let output_dir = report::prepare_output_dir(Path::new(&arguments.output_dir))?;

    let policy = if arguments.skip_empty {
        report::EmptyPolicy::Skip
    } else {
        report::EmptyPolicy::Abort
    };

    if arguments.flamegraph {
        flame::start("render");
    }

    let written = report::generate_reports(
        &mc_results,
        &sa_results,
        &arguments.designs,
        &arguments.metrics,
        &output_dir,
        policy,
    )?;

    if arguments.flamegraph {
        flame::end("render");
    }

    info!("{} charts written to {}", written, output_dir.display());
    println!("All comparison graphs generated successfully!");

    if arguments.flamegraph {
        flame::end("main");
        flame::dump_html(std::fs::File::create(output_dir.join("flamegraph.html"))?)?;
    }

    Ok(())
}
