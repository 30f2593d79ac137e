//! OpenCGA CLI - Main entry point

use clap::Parser;
use opencga_cli::commands::call::CallArgs;
use opencga_cli::{Cli, Commands, ConfigCommand};
use opencga_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    if cli.command.is_none() {
        eprintln!("Error: A subcommand is required");
        eprintln!();
        eprintln!("For more information, try '--help'.");
        process::exit(2);
    }

    // Verbose mode logs debug to the console, otherwise warnings only
    let level = if cli.verbose { LogLevel::Debug } else { LogLevel::Warn };
    let defaults = LogConfig::builder()
        .level(level)
        .output(LogOutput::Console)
        .log_file_prefix("opencga-cli")
        .filter_directives("hyper=warn,reqwest=warn")
        .build();

    // Environment variables take precedence
    let log_config = defaults.clone().merge_env().unwrap_or(defaults);

    // The CLI works without logging; keep the guard alive until exit
    let _guard = init_logging(&log_config).ok().flatten();

    if let Err(e) = execute_command(&cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> opencga_cli::Result<()> {
    let Some(ref command) = cli.command else {
        return Ok(());
    };

    match command {
        Commands::Endpoints { category } => {
            opencga_cli::commands::endpoints::run(category.as_deref()).await
        },

        Commands::Call {
            category,
            endpoint,
            args,
            params,
            body,
            dry_run,
        } => {
            let call_args = CallArgs {
                category: category.clone(),
                endpoint: endpoint.clone(),
                args: args.clone(),
                params: params.clone(),
                body: body.clone(),
                dry_run: *dry_run,
            };
            opencga_cli::commands::call::run(cli.client_config()?, call_args).await
        },

        Commands::Ping => opencga_cli::commands::ping::run(cli.client_config()?).await,

        Commands::Config { command } => match command {
            ConfigCommand::Show => opencga_cli::commands::config::show(&cli.client_config()?).await,
        },
    }
}
