//! Release index and download abstractions.
//!
//! The install pipeline only talks to these traits, so the GitHub-backed
//! implementations can be swapped for fakes in tests.
//!
//! - [`ReleaseIndex`] - Looks up a release and its assets by tag
//! - [`Downloader`] - Fetches an asset to a local file
//! - [`Release`], [`Asset`] - Release metadata as returned by the index

mod provider;

pub use provider::{Asset, Downloader, Release, ReleaseIndex};
