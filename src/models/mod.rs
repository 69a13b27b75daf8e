pub mod response;
pub mod todo;
