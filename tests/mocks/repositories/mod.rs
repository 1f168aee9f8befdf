pub mod failing;
pub mod in_memory;
