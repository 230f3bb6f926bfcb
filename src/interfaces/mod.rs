//! Input/output adapters for the command-line client.

pub mod csv;
pub mod outcome_writer;
