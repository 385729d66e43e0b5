// Adapters layer: concrete implementations of the domain ports (http resolver, stores).

pub mod http;
pub mod store;

pub use http::HttpModernResolver;
pub use store::{FileStore, InMemoryStore};
