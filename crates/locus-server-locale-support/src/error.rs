// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for locale support verification.

use thiserror::Error;

/// Errors that can occur while probing the platform for a locale resource.
///
/// These never reach callers of the support cache; they are logged and
/// treated as "unsupported".
#[derive(Debug, Error)]
pub enum ProbeError {
	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[source] reqwest::Error),

	/// The platform answered with a non-success status.
	#[error("Unexpected status: {0}")]
	Status(u16),

	/// The response body could not be read as text.
	#[error("Failed to read response body: {0}")]
	Body(#[source] reqwest::Error),
}

/// Errors raised while building the support components.
#[derive(Debug, Error)]
pub enum SupportError {
	#[error("Failed to build HTTP client: {0}")]
	HttpClient(#[from] reqwest::Error),

	#[error("Invalid option '{field}': {message}")]
	InvalidOption { field: &'static str, message: String },
}
