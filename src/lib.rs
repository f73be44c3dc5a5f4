pub mod app;
pub mod errors;
pub mod logging;
pub mod opts;
pub mod probe;
pub mod resolve_addr;
pub mod srv;
