//! rnbw - ANSI foreground/background colors for terminal text
//!
//! Build color-wrapped strings, write them to any [`std::io::Write`], print
//! them to stdout, or switch stdout into a persistent color mode.
//!
//! ```
//! use rnbw::Color;
//!
//! assert_eq!(rnbw::colorize(Color::Red, "hello"), "\x1b[31mhello\x1b[0m");
//! assert_eq!(rnbw::bg_colorize(Color::Blue, "hello"), "\x1b[44mhello\x1b[0m");
//!
//! let mut out = Vec::new();
//! rnbw::write_colored_line(&mut out, Color::Green, "ok")?;
//! assert_eq!(out, b"\x1b[32mok\x1b[0m\n");
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod color;
pub mod error;
mod macros;
pub mod mode;
pub mod paint;
pub mod print;
pub mod write;

pub use color::{
    Color, RESET, background_code, background_code_for, foreground_code, foreground_code_for,
};
pub use error::{Error, Result};
pub use mode::{reset_color, set_background, set_foreground};
pub use paint::{
    bg_colorize, bg_colorize_fmt, colorize, colorize_fmt, styled_colorize, styled_colorize_fmt,
};
pub use print::{
    bg_print, bg_print_fmt, bg_println, print, print_fmt, println, styled_print, styled_print_fmt,
    styled_println,
};
pub use write::{
    write_bg_colored, write_bg_colored_fmt, write_bg_colored_line, write_colored,
    write_colored_fmt, write_colored_line, write_styled_colored, write_styled_colored_fmt,
    write_styled_colored_line,
};
