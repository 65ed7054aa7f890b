pub mod catalog;
pub mod client;
pub mod gateway;
pub mod session;
pub mod storage;
pub mod types;

pub use catalog::ApiCatalog;
pub use client::{Credentials, SynologyClient};
pub use gateway::{HttpGateway, UreqGateway};
pub use session::{LogoutOutcome, Session};
