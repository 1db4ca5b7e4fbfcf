mod api;
mod client;
mod error;
mod serde;

pub use api::*;
pub use client::Client;
pub use error::Error;

#[cfg(test)]
mod test;
