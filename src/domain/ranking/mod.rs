//! Overseas market-analysis rankings — sub-client.

pub mod client;

pub use client::Ranking;
