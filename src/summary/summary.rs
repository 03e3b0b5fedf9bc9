use csv::Reader;
use glob::glob;
use std::collections::BTreeMap;
use std::error::Error;
use std::fs::File;
use std::io::Write;

/*
Writes a plain-text overview of the combined result files: per design, how
many rows each optimization approach logged and the best QoR it reached.
Useful for a quick sanity check of the inputs before generating the charts.
*/

fn main() -> Result<(), Box<dyn Error>> {
    let mut summary_file = File::create("results/summary.txt")?;

    for entry in glob("results/combined_*_results.csv")? {
        let path = entry?;
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or("Invalid file name")?;
        let approach = stem
            .strip_prefix("combined_")
            .and_then(|s| s.strip_suffix("_results"))
            .unwrap_or(stem);

        let mut rdr = Reader::from_path(&path)?;
        let headers = rdr.headers()?.clone();
        let design_idx = headers
            .iter()
            .position(|h| h == "Design")
            .ok_or("Design column missing")?;
        let qor_idx = headers
            .iter()
            .position(|h| h == "QoR")
            .ok_or("QoR column missing")?;

        let mut per_design: BTreeMap<String, (usize, f64)> = BTreeMap::new();
        for result in rdr.records() {
            let record = result?;
            let qor: f64 = record[qor_idx].parse().unwrap_or(f64::INFINITY);
            let entry = per_design
                .entry(record[design_idx].to_string())
                .or_insert((0, f64::INFINITY));
            entry.0 += 1;
            if qor < entry.1 {
                entry.1 = qor;
            }
        }

        writeln!(summary_file, "Approach: {}", approach)?;
        for (design, (count, best_qor)) in &per_design {
            writeln!(
                summary_file,
                "{}: {} rows, best QoR: {:.2}",
                design, count, best_qor
            )?;
        }
        if per_design.is_empty() {
            writeln!(summary_file, "WARNING: No rows found in {:?}", path)?;
        }
        writeln!(summary_file)?;
    }

    Ok(())
}
