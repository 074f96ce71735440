pub mod correlator;
pub mod loader;
pub mod merger;
pub mod models;
pub mod pipeline;
pub mod storage;
pub mod utils;
