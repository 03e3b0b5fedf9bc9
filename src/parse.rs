use csv::Reader;
use flame;
use serde::Deserialize;
use std::fmt;

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidInput(String),
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> LoadError {
        LoadError::Io(err)
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> LoadError {
        LoadError::Csv(err)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "io error: {}", err),
            LoadError::Csv(err) => write!(f, "csv error: {}", err),
            LoadError::InvalidInput(reason) => write!(f, "invalid input: {}", reason),
        }
    }
}

impl std::error::Error for LoadError {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct McRow {
    design: String,
    sample: i64,
    area: f64,
    delay: f64,
    #[serde(rename = "QoR")]
    qor: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SaRow {
    design: String,
    iteration: i64,
    area: f64,
    delay: f64,
    #[serde(rename = "QoR")]
    qor: f64,
}

// One normalized row shape for both logs: `x` is the MC sample number or the
// SA iteration number.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub design: String,
    pub x: i64,
    pub area: f64,
    pub delay: f64,
    pub qor: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn from_rows(rows: Vec<ResultRow>) -> Self {
        ResultTable { rows }
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    // Rows of one design, ascending by x. Sort is stable, so rows sharing an
    // x value keep their file order.
    pub fn design_rows(&self, design: &str) -> Vec<ResultRow> {
        let mut rows: Vec<ResultRow> = self
            .rows
            .iter()
            .filter(|row| row.design == design)
            .cloned()
            .collect();
        rows.sort_by_key(|row| row.x);
        rows
    }
}

pub fn load_mc_results(input_file: &str) -> Result<ResultTable, LoadError> {
    flame::start("load mc");
    if !input_file.ends_with(".csv") {
        return Err(LoadError::InvalidInput(
            "Only .csv files are allowed.".to_string(),
        ));
    }

    let mut rdr = Reader::from_path(input_file)?;
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: McRow = result?;
        rows.push(ResultRow {
            design: record.design,
            x: record.sample,
            area: record.area,
            delay: record.delay,
            qor: record.qor,
        });
    }

    flame::end("load mc");
    Ok(ResultTable::from_rows(rows))
}

pub fn load_sa_results(input_file: &str) -> Result<ResultTable, LoadError> {
    flame::start("load sa");
    if !input_file.ends_with(".csv") {
        return Err(LoadError::InvalidInput(
            "Only .csv files are allowed.".to_string(),
        ));
    }

    let mut rdr = Reader::from_path(input_file)?;
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: SaRow = result?;
        rows.push(ResultRow {
            design: record.design,
            x: record.iteration,
            area: record.area,
            delay: record.delay,
            qor: record.qor,
        });
    }

    flame::end("load sa");
    Ok(ResultTable::from_rows(rows))
}

#[cfg(test)]
fn write_temp_csv(name: &str, content: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn should_reject_non_csv_input() {
    let res = load_mc_results("results/combined_mc_results.txt");
    match res {
        Err(LoadError::InvalidInput(_)) => {}
        otherwise => panic!("Expected InvalidInput but got {:?}.", otherwise),
    }
}

#[test]
fn should_load_mc_rows() {
    let path = write_temp_csv(
        "qor_report_mc_rows.csv",
        "Design,Sample,Area,Delay,QoR\n\
         pci_orig,1,500,10,5\n\
         pci_orig,2,480,9,4\n",
    );
    let table = load_mc_results(path.to_str().unwrap()).unwrap();
    assert_eq!(table.rows().len(), 2);
    assert_eq!(table.rows()[0].design, "pci_orig");
    assert_eq!(table.rows()[0].x, 1);
    assert_eq!(table.rows()[1].area, 480.0);
    assert_eq!(table.rows()[1].qor, 4.0);
}

#[test]
fn should_load_sa_rows_with_iteration_as_x() {
    let path = write_temp_csv(
        "qor_report_sa_rows.csv",
        "Design,Iteration,Area,Delay,QoR\n\
         simple_spi_orig,3,120.5,2.5,1.75\n",
    );
    let table = load_sa_results(path.to_str().unwrap()).unwrap();
    assert_eq!(table.rows().len(), 1);
    assert_eq!(table.rows()[0].x, 3);
    assert_eq!(table.rows()[0].delay, 2.5);
}

#[test]
fn should_fail_on_missing_column() {
    let path = write_temp_csv(
        "qor_report_missing_column.csv",
        "Design,Sample,Area,Delay\n\
         pci_orig,1,500,10\n",
    );
    let res = load_mc_results(path.to_str().unwrap());
    match res {
        Err(LoadError::Csv(_)) => {}
        otherwise => panic!("Expected Csv error but got {:?}.", otherwise),
    }
}

#[test]
fn should_fail_on_missing_file() {
    let res = load_mc_results("results/does_not_exist.csv");
    assert!(res.is_err());
}

#[test]
fn should_sort_design_rows_by_x() {
    let table = ResultTable::from_rows(vec![
        ResultRow {
            design: "pci_orig".to_string(),
            x: 5,
            area: 510.0,
            delay: 11.0,
            qor: 6.0,
        },
        ResultRow {
            design: "aes_secworks_orig".to_string(),
            x: 1,
            area: 900.0,
            delay: 20.0,
            qor: 9.0,
        },
        ResultRow {
            design: "pci_orig".to_string(),
            x: 2,
            area: 480.0,
            delay: 9.0,
            qor: 4.0,
        },
    ]);
    let rows = table.design_rows("pci_orig");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].x, 2);
    assert_eq!(rows[1].x, 5);
}
