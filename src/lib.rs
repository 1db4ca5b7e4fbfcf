pub mod args;
pub mod collect;
pub mod enrich;
pub mod export;
pub mod flow;
