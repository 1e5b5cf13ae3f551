#[path = "../common/mod.rs"]
mod common;

mod envelope;
mod lift_slope;
mod schrenk;
