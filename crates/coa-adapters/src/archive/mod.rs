//! HTTP archive download.

mod ureq_client;

pub use ureq_client::UreqArchiveClient;
