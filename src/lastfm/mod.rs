//! # Last.fm Integration Module
//!
//! This module provides the interface to the Last.fm web service
//! (`ws.audioscrobbler.com`), implementing the request building, HTTP
//! communication and response parsing required to read a user's artist
//! library. It is the only place in the crate that talks to the network.
//!
//! ## Architecture
//!
//! The module sits between the CLI layer and the HTTP layer:
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Last.fm Integration Layer
//!     └── Library Operations (artists)
//!          ↓
//! HTTP Layer (reqwest, XML)
//!          ↓
//! Last.fm Web Service
//! ```
//!
//! ## Core Modules
//!
//! [`artists`] - Handles library artist retrieval:
//! - **Library Artists**: Fetches the artists in a user's library via the
//!   `library.getartists` method
//! - **Response Parsing**: Deserializes the service's XML envelope into
//!   typed structures and validates the status attribute
//!
//! ## Authentication Strategy
//!
//! The `library.getartists` method is a public read-only endpoint; requests
//! are authenticated with the shared API key constant only. There is no
//! session, token or signing step.
//!
//! ## Error Handling Philosophy
//!
//! Every failure mode maps to a [`crate::error::LastFmError`] variant so the
//! caller can distinguish transport failures, non-ok API answers and
//! malformed bodies from a legitimately empty library. A single request is
//! issued per run; there is no retry or rate-limit handling.

pub mod artists;

/// Shared API key for the public Last.fm web service.
pub const API_KEY: &str = "b25b959554ed76058ac220b7b2e0a026";

/// Base URL of the Last.fm 2.0 web service.
pub const API_URL: &str = "http://ws.audioscrobbler.com/2.0";
