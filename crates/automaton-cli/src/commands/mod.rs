pub mod check;
pub mod description_loader;
pub mod dump;
pub mod exec;
pub mod repl;
pub mod run_common;
pub mod trace;
