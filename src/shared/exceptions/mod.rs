pub mod exception;
pub mod storage_failure;
