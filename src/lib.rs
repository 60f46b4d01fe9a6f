//!
//! # SVG path data
//!
//! Translates the path mini-language used by the SVG `d` attribute into a sequence of
//! drawing primitives (move, line, cubic and quadratic curves, close) issued against a
//! `PathSink`.
//!
//! ```
//! use flo_svg_path::*;
//!
//! let mut ops: Vec<PathOp> = vec![];
//! compile_path("M75 0, 0 200, 150 200 Z", &mut ops).unwrap();
//!
//! assert!(ops[0] == PathOp::Move(75.0, 0.0));
//! assert!(ops[3] == PathOp::ClosePath);
//! ```
//!
#![warn(bare_trait_objects)]

#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;

mod error;
mod error_mode;
mod number;
mod resolve;
mod command;
mod state;
mod split;
mod arc;
mod sink;
mod parser;

#[cfg(feature = "canvas")]
mod canvas;

pub use self::error::*;
pub use self::error_mode::*;
pub use self::number::*;
pub use self::command::*;
pub use self::split::*;
pub use self::arc::*;
pub use self::sink::*;
pub use self::parser::*;

#[cfg(feature = "canvas")]
pub use self::canvas::*;
