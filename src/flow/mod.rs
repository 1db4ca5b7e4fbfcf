pub use flow::{Addr, Flow, Key, Protocol};
pub use meta::{Geo, Meta, Record, Subdivision};

mod flow;
mod meta;

#[cfg(test)]
pub(crate) mod test;
