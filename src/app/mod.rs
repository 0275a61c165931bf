pub mod interactive;
pub mod shell;
