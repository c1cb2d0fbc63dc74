//! Interactive mode

pub mod repl;
