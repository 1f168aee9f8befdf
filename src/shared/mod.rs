pub mod exceptions;
pub mod structs;
