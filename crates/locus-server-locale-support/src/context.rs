// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request-scoped locale state.

use std::sync::Arc;

use locus_common_locale::{LocaleSignals, RegionTag};

use crate::selector::SupportedLocaleSelector;

/// Locale state for one request or page render.
///
/// The region tag and the platform-verified tag are each computed at most
/// once per context, even if the signals behind them could change.
#[derive(Debug)]
pub struct LocaleContext {
	signals: LocaleSignals,
	selector: Arc<SupportedLocaleSelector>,
	region_tag: once_cell::sync::OnceCell<RegionTag>,
	supported_tag: tokio::sync::OnceCell<RegionTag>,
}

impl LocaleContext {
	pub fn new(signals: LocaleSignals, selector: Arc<SupportedLocaleSelector>) -> Self {
		Self {
			signals,
			selector,
			region_tag: once_cell::sync::OnceCell::new(),
			supported_tag: tokio::sync::OnceCell::new(),
		}
	}

	pub fn signals(&self) -> &LocaleSignals {
		&self.signals
	}

	/// The visitor's resolved tag.
	pub fn region_tag(&self) -> &RegionTag {
		self.region_tag
			.get_or_init(|| self.selector.resolve(&self.signals))
	}

	/// The tag to present to the platform; probes at most once.
	pub async fn supported_tag(&self) -> &RegionTag {
		self.supported_tag
			.get_or_init(|| async { self.selector.select_tag(self.region_tag()).await })
			.await
	}
}
