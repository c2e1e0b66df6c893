// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Locus command-line front end.
//!
//! `locus resolve` prints the visitor's region tag; `locus select` also checks
//! it against the external platform and prints the tag to present there.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use locus_common_locale::{CountryLocale, LocaleSignals};
use locus_server_config::{LocusConfig, LoggingConfig};
use locus_server_locale_support::{SelectorOptions, SupportedLocaleSelector};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "locus", about = "Resolve visitor locales", version)]
struct Cli {
	/// Config file (defaults to /etc/locus/locus.toml)
	#[arg(long, global = true, env = "LOCUS_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print the region tag derived from the given signals
	Resolve(SignalArgs),
	/// Print the region tag the platform accepts for the given signals
	Select(SignalArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct SignalArgs {
	/// Detected language code (e.g. fr)
	#[arg(long)]
	language: Option<String>,

	/// Detected sub-region code (e.g. CA)
	#[arg(long)]
	sub_region: Option<String>,

	/// Visitor country code (e.g. BE)
	#[arg(long)]
	country: Option<String>,

	/// Official language of the country, in order (repeatable)
	#[arg(long, requires = "country")]
	official: Vec<String>,

	/// Spoken language of the country, in order (repeatable)
	#[arg(long, requires = "country")]
	spoken: Vec<String>,
}

impl SignalArgs {
	fn to_signals(&self) -> LocaleSignals {
		let mut signals = LocaleSignals::new();
		if let Some(language) = &self.language {
			signals = signals.with_language_code(language);
		}
		if let Some(sub_region) = &self.sub_region {
			signals = signals.with_sub_region_code(sub_region);
		}
		if let Some(country) = &self.country {
			let locale = self
				.official
				.iter()
				.fold(CountryLocale::new(country), |l, code| l.with_official(code));
			let locale = self
				.spoken
				.iter()
				.fold(locale, |l, code| l.with_spoken(code));
			signals = signals.with_locale(locale);
		}
		signals
	}
}

fn selector_options(config: &LocusConfig) -> SelectorOptions {
	SelectorOptions {
		base_url: config.probe.base_url.clone(),
		resource_path: config.probe.resource_path.clone(),
		invalid_marker: config.probe.invalid_marker.clone(),
		timeout: config.probe.timeout(),
		cache_ttl: config.probe.cache_ttl(),
		cache_max_entries: config.probe.cache_max_entries,
		platform_default: config.probe.default_tag.clone(),
		resolver_default: config.locale.default_tag.clone(),
	}
}

/// Logs go to stderr so stdout carries only the tag.
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
	let filter = match EnvFilter::try_from_default_env() {
		Ok(filter) => filter,
		Err(_) => EnvFilter::try_new(&logging.level)?,
	};

	let (plain, json) = if logging.json {
		(
			None,
			Some(
				tracing_subscriber::fmt::layer()
					.json()
					.with_writer(std::io::stderr),
			),
		)
	} else {
		(
			Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
			None,
		)
	};

	tracing_subscriber::registry()
		.with(filter)
		.with(plain)
		.with(json)
		.try_init()?;
	Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let config = match &cli.config {
		Some(path) => locus_server_config::load_config_with_file(path)?,
		None => locus_server_config::load_config()?,
	};
	init_tracing(&config.logging)?;

	let selector = SupportedLocaleSelector::from_options(&selector_options(&config))?;

	let tag = match &cli.command {
		Command::Resolve(args) => selector.resolve(&args.to_signals()),
		Command::Select(args) => selector.select(&args.to_signals()).await,
	};
	tracing::debug!(tag = %tag, "locale selected");

	println!("{tag}");
	Ok(())
}
