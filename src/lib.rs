pub mod app;
pub mod clock;
pub mod config;
pub mod journal;
pub mod logging;
pub mod record;
pub mod score;
pub mod stats;
pub mod store;
