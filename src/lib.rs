#[macro_use]
extern crate log;

pub mod config;
pub mod console;
pub mod error;
pub mod member;
pub mod notice;
pub mod registry;
pub mod tools;
