use colored::Colorize;
use commands::command_argument_builder;
use linksort::handlers::{RunMode, load_config, run};
use linksort_core::print_banner;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

fn main() {
    init_tracing();

    let cmd = command_argument_builder();
    let matches = cmd.get_matches();

    if !matches.get_flag("quiet") {
        print_banner();
    }

    let config_path = matches
        .get_one::<PathBuf>("config")
        .cloned()
        .unwrap_or_default();
    let mode = RunMode::from_arg(matches.get_one::<String>("COMMAND").map(String::as_str));

    let result = load_config(&config_path).and_then(|config| run(mode, &config));
    if let Err(e) = result {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
