use Blasius::BoundaryLayer::BlasiusShooting::{BlasiusError, BlasiusSolver};
use Blasius::BoundaryLayer::blasius_config::{BlasiusConfig, CONFIG_FILE};
use Blasius::Utils::logger::{init_logger, set_log_level};
use std::process::ExitCode;

fn run() -> Result<(), BlasiusError> {
    init_logger();
    let config = BlasiusConfig::load_or_default(CONFIG_FILE)?;
    set_log_level(config.level_filter()?);

    let mut solver = BlasiusSolver::from_config(&config)?;
    let solution = solver.solve()?;
    solution.pretty_print();
    solution.pretty_print_history(10);
    solution.save_outputs(&config)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
