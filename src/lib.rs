pub mod aggregator;
pub mod catalog;
pub mod concurrent;
pub mod config;
pub mod dns;
pub mod engine;
pub mod error;
pub mod http_client;
pub mod listing;
pub mod output;
pub mod permutations;
pub mod probe;

pub use crate::aggregator::{AggregatedResult, ResultAggregator};
pub use crate::engine::Engine;
pub use crate::error::HunterError;
