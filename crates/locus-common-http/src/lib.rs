// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for Locus.
//!
//! This crate provides a pre-configured HTTP client with a consistent
//! User-Agent header and a bounded request timeout.

mod client;

pub use client::{builder, new_client_with_timeout, user_agent};
