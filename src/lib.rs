pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod proxy;
pub mod tracker;
pub mod view;

pub use client::HenrikClient;
pub use config::Config;
pub use error::TrackerError;
pub use tracker::ProxyClient;
pub use view::{Outcome, PlayerView, ViewState};
