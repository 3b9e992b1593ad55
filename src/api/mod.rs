//! Anime content API: typed models, errors and the HTTP client.

pub mod client;
pub mod error;
pub mod models;

pub use client::*;
pub use error::*;
pub use models::*;
