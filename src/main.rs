mod aggregate;
mod error;
mod month;
mod orders;
mod records;
mod report;

use std::path::PathBuf;

use clap::Parser;
use log::error;

use crate::records::load_sales_data;
use crate::report::build_report;

#[derive(Parser, Debug)]
struct Args {
    /// Comma-delimited sales transaction log
    #[clap(default_value = "sales_data.txt")]
    sales_data_file: PathBuf,
}

fn main() {
    env_logger::init();
    let sales_data_file = Args::parse().sales_data_file;

    let report = load_sales_data(&sales_data_file).and_then(|records| build_report(&records));

    match report {
        Ok(report) => print!("{}", report),
        Err(err) => {
            error!("Error reading sales data: {}", err);
            std::process::exit(1);
        }
    }
}
