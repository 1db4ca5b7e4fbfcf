pub use buffer::{Buffer, Config, MAX_RECORDS};
pub use entry::{Entry, decode, encode};
pub use stream::{Failure, Stream};
pub use upload::Uploader;

mod buffer;
mod entry;
mod stream;
mod upload;
