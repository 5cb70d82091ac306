//! Thin SharePoint document client over the Microsoft Graph API.
//!
//! One [`GraphClient`] wraps a shared `reqwest::Client` and exposes five
//! independent, stateless operations: token acquisition, site resolution,
//! drive listing, children listing, and file content retrieval. Each
//! operation issues exactly one request and reshapes the response into the
//! small typed values of `spgraph-types`; no retries, no pagination, no
//! caching.
//!
//! Each endpoint module keeps its URL building and response parsing as pure
//! functions so they can be tested without a network.

pub mod client;
pub mod drives;
pub mod items;
pub mod sites;
pub mod token;

pub use client::{GRAPH_BASE, GraphClient, LOGIN_BASE};
