pub mod endpoint;
pub mod location;
pub mod parameters;
pub mod result_table;
