#[macro_use]
extern crate log;
extern crate failure;
#[macro_use]
extern crate failure_derive;

pub mod demo;
pub mod error;
pub mod stack;

pub use error::StackError;
pub use stack::Stack;
