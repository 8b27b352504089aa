mod args;
mod export;

use clap::Parser;
use log::{info, LevelFilter};
use snafu::ErrorCompat;

use crate::args::Args;

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.print_example {
        println!("{}", export::demo::EXAMPLE_DOCUMENT);
        return;
    }

    let res = export::build_settings(&args).and_then(|s| export::run_export(&s));
    match res {
        Ok(report) => {
            info!("Exported {} contributors", report.rows);
            if let Some(p) = report.csv_written {
                info!("CSV export: {}", p);
            }
            if let Some(p) = report.html_written {
                info!("HTML table: {}", p);
            }
            if report.failed_inputs > 0 {
                info!(
                    "{} input(s) could not be read, the last readable one was used",
                    report.failed_inputs
                );
            }
        }
        Err(e) => {
            eprintln!("An error occurred: {}", e);
            if let Some(bt) = ErrorCompat::backtrace(&e) {
                eprintln!("trace: {}", bt);
            }
            std::process::exit(1);
        }
    }
}
