pub mod snapshot;
pub mod path_de;
pub mod ir;
pub mod lower;
pub mod codegen;
pub mod error;
pub mod cli;

use colored::Colorize;

fn main() {
    let command_line_interface = cli::CommandLineInterface::load();
    env_logger::Builder::new()
        .filter_level(command_line_interface.log_level())
        .parse_default_env()
        .init();
    if let Err(error) = command_line_interface.run() {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
