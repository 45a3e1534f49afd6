#[path = "../common/mod.rs"]
mod common;

mod feed;
mod flight;
mod lifecycle;
