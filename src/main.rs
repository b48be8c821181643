use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use quickadd::cli::args::{Cli, Commands, ConfigArgs, ConfigCommands};
use quickadd::cli::commands;
use quickadd::config::{ColorSetting, Config, Paths};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}: {e:#}", "error".red().bold());
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Paths::new()?.config_file,
    };

    let config = match Config::load_from_path(&config_path) {
        Ok(config) => config,
        // a broken file can still be replaced
        Err(e) if is_forced_init(&cli.command) => {
            tracing::warn!("{e}");
            Config::default()
        },
        Err(e) => return Err(anyhow::Error::new(e).context("could not load configuration")),
    };

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {},
    }

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Parse(args) => commands::parse(&args, &config, format)?,
        Commands::Preview(args) => commands::preview(&args, &config, format)?,
        Commands::Config(args) => commands::config(args.command, &config, &config_path, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

const fn is_forced_init(command: &Commands) -> bool {
    matches!(
        command,
        Commands::Config(ConfigArgs {
            command: ConfigCommands::Init { force: true }
        })
    )
}
