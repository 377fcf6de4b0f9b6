mod cli;
mod color;
mod commands;
mod config;
mod output;

use acks_admin::{AdminSite, RouteTable, Store};
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, ConfigCommands, OutputFormat};
use colored::Colorize;
use commands::render::RenderOptions;
use config::Config;
use output::{output_error, output_result, Displayable};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    color::init(cli.color);

    let format = cli.format;
    if let Err(e) = run(cli) {
        output_error(&e, format);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<()> {
    // Completions and the view catalogue need neither config nor data
    match &cli.command {
        Commands::Completions { shell } => {
            clap_complete::generate(*shell, &mut Cli::command(), "acks", &mut std::io::stdout());
            return Ok(());
        }
        Commands::Views => return commands::views::handle_views(cli.format),
        _ => {}
    }

    let mut config = Config::load(cli.config.as_deref())?;
    config.merge_with_cli(cli.snapshot.clone(), cli.base_path.clone());
    tracing_subscriber::fmt()
        .compact()
        .with_max_level(config.log_level()?)
        .with_writer(std::io::stderr)
        .with_ansi(colored::control::SHOULD_COLORIZE.should_colorize())
        .init();

    match &cli.command {
        Commands::Config { action } => handle_config(&config, action, &cli),
        Commands::Render {
            view,
            details,
            search,
            page,
            page_size,
            now,
        } => {
            let path = config.snapshot_path()?;
            let store = Store::load(path)
                .with_context(|| format!("Failed to load snapshot: {}", path.display()))?;
            let routes = RouteTable::new(&config.base_path);
            let site = AdminSite::new(&store, &routes);

            let options = RenderOptions {
                details: details.as_deref(),
                search: search.as_deref(),
                page: *page,
                page_size: page_size.unwrap_or(config.page_size),
                now: *now,
            };
            commands::render::handle_render(&site, *view, &options, cli.format)
        }
        Commands::Completions { .. } | Commands::Views => Ok(()),
    }
}

fn handle_config(config: &Config, action: &ConfigCommands, cli: &Cli) -> Result<()> {
    match action {
        ConfigCommands::Show => output_result(config, cli.format),
        ConfigCommands::Path => {
            let paths = config::config_paths(cli.config.as_deref());
            match cli.format {
                OutputFormat::Json => {
                    let entries: Vec<_> = paths
                        .iter()
                        .map(|p| serde_json::json!({ "path": p, "exists": p.exists() }))
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                }
                OutputFormat::Text => {
                    for path in paths {
                        let marker = if path.exists() {
                            "found".green()
                        } else {
                            "missing".dimmed()
                        };
                        println!("{} ({})", path.display(), marker);
                    }
                }
            }
        }
    }
    Ok(())
}

impl Displayable for Config {
    fn display(&self) -> String {
        let snapshot = self
            .snapshot
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string());
        format!(
            "{}: {}\n{}: {}\n{}: {}\n{}: {}",
            "base_path".dimmed(),
            self.base_path,
            "snapshot".dimmed(),
            snapshot,
            "page_size".dimmed(),
            self.page_size,
            "log_level".dimmed(),
            self.log_level
        )
    }
}
