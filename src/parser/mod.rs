//! Input parsing module.

mod data_parser;

pub use data_parser::DataParser;
