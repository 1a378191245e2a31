//! Shared types and HTTP client for the remote calculator service.

mod client;
mod error;
mod history;
mod operation;

pub use client::history;
pub use client::perform;
pub use error::ApiError;
pub use history::HistoryEntry;
pub use history::HistoryFilter;
pub use history::SortKey;
pub use history::SortOrder;
pub use operation::Operation;
