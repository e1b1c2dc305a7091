//! Yahoo Finance chart API provider.
//!
//! Talks to the unauthenticated `v8/finance/chart` endpoint. One request per
//! fetch; the endpoint returns the whole requested window in a single
//! response, so there is no pagination.

pub mod params;
pub mod provider;
pub mod response;
