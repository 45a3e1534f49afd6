use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlightError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    #[error("No active flight session")]
    NoActiveFlight,

    #[error("Invalid maneuver script: {0}")]
    InvalidScript(String),

    #[error("Simulation stalled: {0}")]
    Stalled(String),
}

pub type Result<T> = std::result::Result<T, FlightError>;
