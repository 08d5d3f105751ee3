//! # CLI Module
//!
//! This module provides the command implementation layer for the Last.fm
//! artists exporter. It coordinates configuration resolution, the Last.fm
//! API client and the output sink, and owns all user-facing feedback.
//!
//! ## Command
//!
//! - [`export_artists`] - Fetches a user's library, drops artists below the
//!   play-count limit and writes the remaining names as a comma-separated
//!   list to stdout or a file
//!
//! ## Data Flow
//!
//! 1. **Configuration**: Merge CLI flags with the optional INI file
//! 2. **API Interaction**: Fetch the library with a progress spinner
//! 3. **Shaping**: Filter by play count, join the names
//! 4. **Output**: Write to the configured file or stdout
//!
//! ## Error Handling Philosophy
//!
//! Configuration and retrieval failures print a message and end the run
//! without producing an artist list; the process still exits normally so a
//! failed fetch looks the same to shell pipelines as an empty library. Only
//! a failed write of an already-fetched list terminates with a non-zero
//! exit code. Status messages never go to stdout's artist list: the spinner
//! draws on stderr and the list is printed bare.

mod artists;

pub use artists::export_artists;
