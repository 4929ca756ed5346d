// SPDX-FileCopyrightText: The tourmark authors
// SPDX-License-Identifier: MPL-2.0

//! Export the configured tour into `output.md`.

use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use tourmark::Config;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout only carries the completion line.
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("tourmark=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::default();
    tourmark::export(&config)
        .with_context(|| format!("failed to export tour from {}", config.source_url))?;

    println!(
        "Done! Notion-compatible Markdown exported to {}",
        config.output_path.display()
    );
    Ok(())
}
