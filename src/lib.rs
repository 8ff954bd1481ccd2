//! # seymour
//!
//! Converts the indentation-free Seymour markup dialect into HTML and derives a skeletal CSS
//! stylesheet (one empty rule per nesting path) from either Seymour or HTML sources.
//!
//! The conversion core lives in [`seymour::processor`]; file loading, configuration and output
//! sinks are layered around it so the core never touches the filesystem.
//!
//! ```text
//! div class:box          <div class="box">          div.box {}
//! p                 =>     <p>                  +   div.box p {}
//! /p                       </p>
//! /div                   </div>
//! ```

pub mod seymour;

pub use seymour::error::ConversionError;
pub use seymour::processor::{convert, Conversion, ConvertOptions, Converter};
pub use seymour::token::Mode;
