#[macro_use]
extern crate serde;

pub mod history;
pub mod readings;
pub mod summary;
