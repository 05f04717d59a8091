//! Command entry points

pub mod copy;
