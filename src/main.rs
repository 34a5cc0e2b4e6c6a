use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use tomcat_deploy::config::{Cli, Config};
use tomcat_deploy::deployer::deploy;
use tomcat_deploy::error::{DeployError, EXIT_FAILURE};
use tomcat_deploy::runner::SystemRunner;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e
                .downcast_ref::<DeployError>()
                .map(DeployError::exit_code)
                .unwrap_or(EXIT_FAILURE);
            ExitCode::from(code)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_cli(cli)?;

    // curl is in our process group and receives Ctrl+C itself
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = interrupted.clone();
    ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    })
    .context("Failed to set Ctrl+C handler")?;

    if config.verbose {
        eprintln!(
            "Deploying {} to {} ({} API)",
            config.warfile,
            config.tomcat_url,
            config.manager_api()
        );
    }

    let spinner = if config.verbose {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg} [{elapsed}]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Uploading archive...");
        pb.enable_steady_tick(Duration::from_millis(120));
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let result = deploy(&config, &SystemRunner::new());

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if interrupted.load(Ordering::Relaxed) {
        eprintln!("\nDeployment cancelled");
        return Ok(ExitCode::from(130));
    }

    let outcome = result.with_context(|| format!("Failed to deploy {}", config.warfile))?;

    println!(
        "Deployed {} to {} in {:.2}s",
        config.warfile,
        outcome.command.target_url,
        start.elapsed().as_secs_f64()
    );

    Ok(ExitCode::SUCCESS)
}
