//! Main module for weft library functionality

pub mod ast;
pub mod catalog;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
