//! Remote removal contract and its Portainer HTTP implementation

mod backend;
mod client;
mod error_body;

pub use backend::RemovalBackend;
pub use client::PortainerClient;
pub use error_body::ErrorFormat;
