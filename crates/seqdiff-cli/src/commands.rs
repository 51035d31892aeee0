use std::io::Write;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use seqdiff_server::{SeqdiffServer, ServerConfig};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Diff(args) => cmd_diff(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = server_config(&args)?;
    eprintln!(
        "{} seqdiff server on {} (POST JSON with seqA and seqB to {})",
        "→".cyan().bold(),
        config.bind_addr.to_string().bold(),
        seqdiff_server::endpoints::COMPARE.yellow()
    );

    let runtime = tokio::runtime::Runtime::new().context("cannot start async runtime")?;
    runtime.block_on(SeqdiffServer::new(config).serve())?;
    Ok(())
}

/// Config file (or defaults) with command-line overrides applied.
fn server_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    tracing::debug!(?config, "server configuration");
    Ok(config)
}

fn cmd_diff(args: DiffArgs) -> anyhow::Result<()> {
    let text_a = read_text(&args.file_a)?;
    let text_b = read_text(&args.file_b)?;
    let diff = seqdiff_report::compare(&text_a, &text_b);
    let report = diff.render();

    match &args.output {
        Some(path) => std::fs::write(path, &report)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => std::io::stdout()
            .lock()
            .write_all(report.as_bytes())
            .context("cannot write report to stdout")?,
    }

    if diff.is_identical() {
        eprintln!(
            "{} No differences in {} lines.",
            "✓".green().bold(),
            diff.compared_lines()
        );
    } else {
        eprintln!(
            "{} {} of {} lines differ.",
            "✗".red().bold(),
            diff.diff_count().to_string().yellow(),
            diff.compared_lines()
        );
    }
    Ok(())
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}
