//! Trait seams for dependency injection.
//!
//! - [`HttpClient`] - outbound HTTP used by the generative AI client

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
