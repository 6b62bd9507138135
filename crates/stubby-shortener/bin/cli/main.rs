mod cli;

use crate::cli::{LogFormatArg, CLI};
use anyhow::Context;
use clap::Parser;
use std::io::{BufRead, Write};
use stubby_generator::RandomGeneratorSettings;
use stubby_shortener::{AliasStore, InMemoryShortener};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = CLI::try_parse()?;

    init_tracing(config.log_format);

    info!(
        base_url = %config.base_url,
        seeded = config.seed.is_some(),
        "starting shortener demo"
    );

    let settings = match config.seed {
        Some(seed) => RandomGeneratorSettings::builder().seed(seed).build(),
        None => RandomGeneratorSettings::default(),
    };
    let store = InMemoryShortener::in_memory_with(settings);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let url = match config.url {
        Some(url) => url,
        None => prompt_url(std::io::stdin().lock(), &mut out)?,
    };

    run(&store, &url, &config.base_url, &mut out)
}

fn init_tracing(format: LogFormatArg) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormatArg::Pretty => builder.init(),
        LogFormatArg::Json => builder.json().init(),
    }
}

/// Prompts for a URL and reads one line, without its line terminator.
fn prompt_url(mut input: impl BufRead, out: &mut impl Write) -> anyhow::Result<String> {
    writeln!(out, "Enter URL to shorten: ")?;
    out.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read URL from stdin")?;

    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

/// Walks one URL through every store operation, reporting each step.
fn run(
    store: &impl AliasStore,
    url: &str,
    base_url: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let alias = store.add(url)?;
    writeln!(out, "Short URL: {}", alias.to_url(base_url))?;

    if let Err(err) = store.resolve(alias.as_str()) {
        writeln!(out, "Error getting original URL: {err}")?;
    }

    match store.clicks(alias.as_str()) {
        Ok(clicks) => writeln!(out, "Clicks: {clicks}")?,
        Err(err) => writeln!(out, "Error getting clicks: {err}")?,
    }

    let listing = store.list()?;
    writeln!(
        out,
        "List of URLs: {}",
        serde_json::to_string_pretty(&listing)?
    )?;

    match store.delete(alias.as_str()) {
        Ok(()) => writeln!(out, "URL deleted successfully.")?,
        Err(err) => writeln!(out, "Error: {err}")?,
    }

    Ok(())
}
