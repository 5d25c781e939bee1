#[macro_use]
extern crate log;

use std::io;

use employee_report::ReportError;
use env_logger::Env;

fn main() {
    // diagnostics go to stderr, the reports themselves to stdout
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let path = employee_report::employees_path();
    let stdout = io::stdout();
    match employee_report::run(&path, stdout.lock()) {
        Ok(()) => {}
        Err(ReportError::NotFound { path }) => {
            println!("File path is: {}", path.display());
            println!("File does not exists. Please recheck. Closing program.");
            std::process::exit(1);
        }
        Err(err @ ReportError::Read(_)) => {
            debug!("reading {} failed", path.display());
            println!("Error: The file could not be read:");
            println!("{err}");
            std::process::exit(1);
        }
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    }
}
