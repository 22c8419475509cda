pub mod file;
pub mod http;
pub mod traits;

pub use file::JsonFileSource;
pub use http::BackOfficeClient;
pub use traits::BookingSource;
