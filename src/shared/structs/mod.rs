pub mod error_struct;
pub mod field_problem;
