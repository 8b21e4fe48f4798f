pub mod filter;
pub mod loader;
pub mod pager;
pub mod session;
pub mod stats;
