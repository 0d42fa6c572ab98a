use std::io;

use thiserror::Error;

/// Conditions that stop `neo` before an interactive session starts.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("no controlling terminal available")]
    NoTerminal(#[source] io::Error),
    #[error("standard input is a terminal; pipe the lines to choose from into neo")]
    InputIsTerminal,
    #[error("no input lines received")]
    EmptyInput,
    #[error("failed to read input lines")]
    ReadInput(#[source] io::Error),
}
