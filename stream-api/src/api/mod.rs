pub use records::{Outcome, PutRecordsOutput, Record};

mod records;
