//
//  clumio-sdk
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use clumio_sdk::api::ErrorPayload;
use clumio_sdk::cli::{Cli, Commands};
use clumio_sdk::output::write_error;
use clumio_sdk::{exit_codes, ClumioError};

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            write_error(&format!("{e:#}"));
            std::process::exit(exit_code(&e));
        }
    }
}

/// Logs go to stderr; `CLUMIO_LOG` takes an `EnvFilter` directive.
fn init_logging() {
    let filter = EnvFilter::try_from_env("CLUMIO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ClumioError>() {
        Some(ClumioError {
            errors: ErrorPayload::Configuration(_),
            ..
        }) => exit_codes::CONFIG_ERROR,
        _ => exit_codes::ERROR,
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Ops(cmd) => cmd.run(&cli.global).await,
        Commands::Call(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("clumio version {}", clumio_sdk::VERSION);
            Ok(())
        }
    }
}
