pub mod handle;
pub mod resolve;
