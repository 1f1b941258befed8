mod client;
mod models;

pub use client::GammaClient;
pub use models::{GammaEvent, GammaMarket};
