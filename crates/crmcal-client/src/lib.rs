pub mod client;
pub mod error;
pub mod types;

pub use client::CalendarClient;
pub use error::ClientError;
pub use types::EventsEnvelope;
