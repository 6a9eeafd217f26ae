pub mod answers;
pub mod madlib;
pub mod parser;
pub mod reader;
pub mod selection;
pub mod story;
pub mod validator;
