//! Stdout shorthands for the writers in [`crate::write`]
//!
//! These fail exactly when their [`crate::write`] counterparts do.

use crate::color::Color;
use crate::write;
use std::fmt;
use std::io;

/// Print `text` in `color`, returning the bytes written
///
/// # Errors
///
/// Fails if stdout errors or accepts only part of the string.
pub fn print(color: Color, text: &str) -> io::Result<usize> {
    write::write_colored(&mut io::stdout().lock(), color, text)
}

/// Print `text` in `color` followed by an uncolored newline
///
/// # Errors
///
/// Fails if stdout errors or accepts only part of the string.
pub fn println(color: Color, text: &str) -> io::Result<usize> {
    write::write_colored_line(&mut io::stdout().lock(), color, text)
}

/// # Errors
///
/// Fails if stdout errors or accepts only part of the string.
pub fn print_fmt(color: Color, args: fmt::Arguments<'_>) -> io::Result<usize> {
    write::write_colored_fmt(&mut io::stdout().lock(), color, args)
}

/// # Errors
///
/// Fails if stdout errors or accepts only part of the string.
pub fn bg_print(color: Color, text: &str) -> io::Result<usize> {
    write::write_bg_colored(&mut io::stdout().lock(), color, text)
}

/// # Errors
///
/// Fails if stdout errors or accepts only part of the string.
pub fn bg_println(color: Color, text: &str) -> io::Result<usize> {
    write::write_bg_colored_line(&mut io::stdout().lock(), color, text)
}

/// # Errors
///
/// Fails if stdout errors or accepts only part of the string.
pub fn bg_print_fmt(color: Color, args: fmt::Arguments<'_>) -> io::Result<usize> {
    write::write_bg_colored_fmt(&mut io::stdout().lock(), color, args)
}

/// # Errors
///
/// Fails if stdout errors or accepts only part of the string.
pub fn styled_print(fg: Color, bg: Color, text: &str) -> io::Result<usize> {
    write::write_styled_colored(&mut io::stdout().lock(), fg, bg, text)
}

/// # Errors
///
/// Fails if stdout errors or accepts only part of the string.
pub fn styled_println(fg: Color, bg: Color, text: &str) -> io::Result<usize> {
    write::write_styled_colored_line(&mut io::stdout().lock(), fg, bg, text)
}

/// # Errors
///
/// Fails if stdout errors or accepts only part of the string.
pub fn styled_print_fmt(fg: Color, bg: Color, args: fmt::Arguments<'_>) -> io::Result<usize> {
    write::write_styled_colored_fmt(&mut io::stdout().lock(), fg, bg, args)
}
