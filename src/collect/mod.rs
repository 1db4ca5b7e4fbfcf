pub use collect::{Collect, Stats};
pub use model::Model;
pub use sink::Sink;

mod collect;
mod model;
mod sink;
