//! Core type definitions for surecp

mod error;
mod report;
mod task;

pub use error::SurecpError;
pub use report::RunReport;
pub use task::FileTask;
