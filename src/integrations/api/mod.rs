pub mod client;
pub mod port;
pub mod query;

pub use client::{parse_base_url, ApiClient};
pub use port::EncyclopediaApi;
pub use query::ListQuery;

#[cfg(test)]
pub use port::MockEncyclopediaApi;
