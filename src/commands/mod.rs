//! Command implementations for the waygraph CLI

pub mod dispatch;

mod distances;
mod path;
mod reach;
mod sample;
mod show;
