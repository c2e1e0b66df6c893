// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent header.

use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::debug;

/// Creates a new HTTP client builder with the standard Locus User-Agent header.
///
/// Use this when you need to customize the client beyond a timeout.
///
/// # Example
/// ```ignore
/// let client = locus_common_http::builder()
///     .connect_timeout(Duration::from_secs(2))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Creates a new HTTP client whose requests are bounded by `timeout`.
///
/// The timeout covers the whole request, from connecting until the response
/// body has been read.
pub fn new_client_with_timeout(timeout: Duration) -> Result<Client, reqwest::Error> {
	debug!(?timeout, "building HTTP client");
	builder().timeout(timeout).build()
}

/// Returns the standard Locus User-Agent string.
///
/// Format: `locus/{os}-{arch}/{version}`
pub fn user_agent() -> String {
	format!(
		"locus/{}-{}/{}",
		std::env::consts::OS,
		std::env::consts::ARCH,
		env!("CARGO_PKG_VERSION")
	)
}
