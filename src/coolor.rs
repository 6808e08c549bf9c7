//! Main module for coolor library functionality

pub mod ast;
pub mod error;
pub mod lexicon;
pub mod lexing;
pub mod parsing;
pub mod processor;
