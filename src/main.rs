// forth-trace main program

mod config;
mod term;

use config::Config;

fn main() {
    pretty_env_logger::init();
    match Config::parse() {
        Ok(config) => term::main(config),
        Err(e) => {
            eprintln!("Failed to initialize: {}", e);
            std::process::exit(1);
        }
    }
}
