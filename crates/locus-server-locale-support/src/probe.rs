// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP probe for platform locale resources.

use std::time::Duration;

use async_trait::async_trait;
use locus_common_locale::platform::{DEFAULT_INVALID_LOCALE_MARKER, DEFAULT_RESOURCE_PATH};
use locus_common_locale::RegionTag;
use reqwest::Client;
use tracing::{debug, instrument, trace};

use crate::error::{ProbeError, SupportError};

/// Outcome of a successful probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeVerdict {
	Supported,
	Unsupported,
}

impl ProbeVerdict {
	pub fn is_supported(self) -> bool {
		matches!(self, ProbeVerdict::Supported)
	}
}

/// Asks the platform whether it has a resource for a locale.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocaleProbe: Send + Sync {
	async fn probe(&self, tag: &RegionTag) -> Result<ProbeVerdict, ProbeError>;
}

/// True when a 2xx body carries the platform's "invalid locale" message.
///
/// Plain substring match against `marker`.
pub fn is_unsupported_locale_body(body: &str, marker: &str) -> bool {
	body.contains(marker)
}

/// [`LocaleProbe`] issuing `GET <base_url>/<tag>/<resource_path>`.
#[derive(Debug, Clone)]
pub struct HttpLocaleProbe {
	http_client: Client,
	base_url: String,
	resource_path: String,
	invalid_marker: String,
}

impl HttpLocaleProbe {
	/// Creates a probe against `base_url` whose requests give up after `timeout`.
	pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SupportError> {
		let http_client = locus_common_http::new_client_with_timeout(timeout)?;

		Ok(Self {
			http_client,
			base_url: base_url.into(),
			resource_path: DEFAULT_RESOURCE_PATH.to_string(),
			invalid_marker: DEFAULT_INVALID_LOCALE_MARKER.to_string(),
		})
	}

	pub fn with_resource_path(mut self, resource_path: impl Into<String>) -> Self {
		self.resource_path = resource_path.into();
		self
	}

	pub fn with_invalid_marker(mut self, marker: impl Into<String>) -> Self {
		self.invalid_marker = marker.into();
		self
	}

	pub fn url_for(&self, tag: &RegionTag) -> String {
		format!(
			"{}/{}/{}",
			self.base_url.trim_end_matches('/'),
			tag,
			self.resource_path.trim_start_matches('/')
		)
	}
}

#[async_trait]
impl LocaleProbe for HttpLocaleProbe {
	#[instrument(skip(self), fields(tag = %tag))]
	async fn probe(&self, tag: &RegionTag) -> Result<ProbeVerdict, ProbeError> {
		let url = self.url_for(tag);
		debug!(url = %url, "probing platform for locale resource");

		let response = self.http_client.get(&url).send().await.map_err(|e| {
			if e.is_timeout() {
				return ProbeError::Timeout;
			}
			ProbeError::Network(e)
		})?;

		let status = response.status();
		debug!(status = %status, "received probe response");

		if !status.is_success() {
			return Err(ProbeError::Status(status.as_u16()));
		}

		let body = response.text().await.map_err(|e| {
			if e.is_timeout() {
				return ProbeError::Timeout;
			}
			ProbeError::Body(e)
		})?;
		trace!(body_len = body.len(), "read probe body");

		if is_unsupported_locale_body(&body, &self.invalid_marker) {
			Ok(ProbeVerdict::Unsupported)
		} else {
			Ok(ProbeVerdict::Supported)
		}
	}
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		/// Property: a body carrying the marker anywhere is unsupported
		#[test]
		fn test_marker_anywhere_is_unsupported(prefix in ".*", suffix in ".*") {
			let body = format!("{prefix}{DEFAULT_INVALID_LOCALE_MARKER}{suffix}");
			prop_assert!(is_unsupported_locale_body(&body, DEFAULT_INVALID_LOCALE_MARKER));
		}

		/// Property: bodies without the marker are supported
		#[test]
		fn test_marker_free_body_is_supported(body in "[^!]*") {
			prop_assert!(!is_unsupported_locale_body(&body, "!"));
		}
	}
}
