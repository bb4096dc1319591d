use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::error;

use powerball::error::LotteryError;
use powerball::prize_table::PrizeTable;
use powerball::report::render_report;
use powerball::simulation::{run_simulation, SimulationConfig};

const USAGE: &str = "Usage: powerball-simulate";

fn parse_args() {
    let args: Vec<String> = std::env::args().collect();
    if let Some(arg) = args.get(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                println!("{}", USAGE);
                println!();
                println!("Simulates a year of Powerball drawings (3 per week) buying 2 quick-pick");
                println!("tickets per drawing, then prints spend, earnings and wins per category.");
                println!("Set RUST_LOG=info for timing diagnostics on stderr.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{}", USAGE);
                std::process::exit(1);
            }
        }
    }
}

fn run() -> Result<String, LotteryError> {
    let table = PrizeTable::standard()?;
    let config = SimulationConfig::default();
    let mut rng = SmallRng::from_os_rng();
    let result = run_simulation(&config, &table, &mut rng)?;
    render_report(&result)
}

fn main() {
    parse_args();
    powerball::env_config::init_logging();

    match run() {
        Ok(report) => println!("{}", report),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
