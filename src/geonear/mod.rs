pub mod commands;
pub mod context;
pub mod densify;
pub mod entity;
pub mod error;
pub mod extract;
pub mod input;
pub mod nearest;
pub mod point;
pub mod reader;
pub mod source;
pub mod store;
pub mod text;
pub mod writer;
