pub mod api_doc;
pub mod cors;
pub mod environment;
