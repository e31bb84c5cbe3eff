use gym_membership::config::AppConfig;
use gym_membership::console::Console;
use gym_membership::notice::ConsoleNotifier;
use gym_membership::registry::MembershipRegistry;
use log::{debug, error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let config = AppConfig::from_args();
    debug!("Starting with {config:?}");
    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };
    let mut registry = MembershipRegistry::new(rng, ConsoleNotifier::new(io::stdout()));

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), &config);
    match console.run(&mut registry) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Console stopped unexpectedly, aborting...\n{e:#?}");
            ExitCode::FAILURE
        }
    }
}
