//! Read-only client for the public GitHub REST API and the view models it
//! produces. Nothing fetched here is ever persisted.

pub mod activity;
pub mod client;
pub mod types;

pub use activity::{ActivityEntry, Event, summarize};
pub use client::{GitHubClient, Lookup};
pub use types::{Commit, Profile, Repository};
