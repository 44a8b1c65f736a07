//! `modeline` binary.
//!
//! Loads each file given on the command line into a [`ModelineContext`] and
//! prints the settings its modeline resolves to.

mod cli;
mod host;
mod report;

use anyhow::{Context, bail};
use clap::Parser;
use modeline_primitives::DocumentId;
use modeline_worker::{DocumentEvent, ModelineContext};
use tracing::{debug, warn};

use crate::cli::Cli;
use crate::host::{FileDocument, FsHost};
use crate::report::FileReport;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let store = cli.settings_store()?;
	let host = FsHost::discover(&cli.syntax_dirs)?;
	let mut ctx: ModelineContext<_, _, FileDocument> = ModelineContext::new(host, store);
	ctx.initialize().context("invalid modeline configuration")?;

	let mut reports = Vec::with_capacity(cli.files.len());
	let mut unreadable = 0usize;

	for (index, path) in cli.files.iter().enumerate() {
		let document = match FileDocument::open(path) {
			Ok(document) => document,
			Err(error) => {
				warn!(path = %path.display(), %error, "cannot read file");
				unreadable += 1;
				continue;
			}
		};

		let id = DocumentId(index as u64);
		for evaluation in ctx.on_document_event(id, DocumentEvent::Loaded, document) {
			let Some(path) = usize::try_from(evaluation.document.0).ok().and_then(|i| cli.files.get(i)) else {
				continue;
			};
			debug!(doc = %evaluation.document, path = %path.display(), "file evaluated");
			reports.push(FileReport::new(path, &evaluation));
		}
	}

	if cli.json {
		println!("{}", serde_json::to_string_pretty(&reports)?);
	} else {
		for report in &reports {
			print!("{}", report.render_text());
		}
	}

	if unreadable > 0 {
		bail!("{unreadable} file(s) could not be read");
	}
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("MODELINE_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("modeline=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(verbose)
		.init();
}
