//! Writing color-wrapped text to any `io::Write`
//!
//! Each writer issues a single `write` call with the complete wrapped string
//! and returns the byte count the stream reports (escape codes included). A
//! stream error comes back unchanged, and a write that stops short of the full
//! string is an `ErrorKind::WriteZero` error. Nothing is retried. Line
//! variants place the newline after the reset code.

use crate::color::Color;
use crate::paint::{bg_colorize, colorize, styled_colorize};
use std::fmt;
use std::io::{self, Write};

/// One `write` call for all of `bytes`.
///
/// # Errors
///
/// Fails with the stream's error, or with `WriteZero` on a short write.
pub fn write_once<W: Write + ?Sized>(w: &mut W, bytes: &[u8]) -> io::Result<usize> {
    let n = w.write(bytes)?;
    if n < bytes.len() {
        return Err(io::Error::new(
            io::ErrorKind::WriteZero,
            format!("short write: {n} of {} bytes", bytes.len()),
        ));
    }
    Ok(n)
}

fn emit_line<W: Write + ?Sized>(w: &mut W, mut s: String) -> io::Result<usize> {
    s.push('\n');
    write_once(w, s.as_bytes())
}

/// Write `text` wrapped in `color`'s foreground code.
///
/// # Errors
///
/// Fails if the stream errors or accepts only part of the string.
pub fn write_colored<W: Write + ?Sized>(w: &mut W, color: Color, text: &str) -> io::Result<usize> {
    write_once(w, colorize(color, text).as_bytes())
}

/// # Errors
///
/// Fails if the stream errors or accepts only part of the string.
pub fn write_colored_line<W: Write + ?Sized>(
    w: &mut W,
    color: Color,
    text: &str,
) -> io::Result<usize> {
    emit_line(w, colorize(color, text))
}

/// # Errors
///
/// Fails if the stream errors or accepts only part of the string.
pub fn write_colored_fmt<W: Write + ?Sized>(
    w: &mut W,
    color: Color,
    args: fmt::Arguments<'_>,
) -> io::Result<usize> {
    write_colored(w, color, &fmt::format(args))
}

/// Write `text` wrapped in `color`'s background code.
///
/// # Errors
///
/// Fails if the stream errors or accepts only part of the string.
pub fn write_bg_colored<W: Write + ?Sized>(
    w: &mut W,
    color: Color,
    text: &str,
) -> io::Result<usize> {
    write_once(w, bg_colorize(color, text).as_bytes())
}

/// # Errors
///
/// Fails if the stream errors or accepts only part of the string.
pub fn write_bg_colored_line<W: Write + ?Sized>(
    w: &mut W,
    color: Color,
    text: &str,
) -> io::Result<usize> {
    emit_line(w, bg_colorize(color, text))
}

/// # Errors
///
/// Fails if the stream errors or accepts only part of the string.
pub fn write_bg_colored_fmt<W: Write + ?Sized>(
    w: &mut W,
    color: Color,
    args: fmt::Arguments<'_>,
) -> io::Result<usize> {
    write_bg_colored(w, color, &fmt::format(args))
}

/// Write `text` with both a foreground and a background color.
///
/// # Errors
///
/// Fails if the stream errors or accepts only part of the string.
pub fn write_styled_colored<W: Write + ?Sized>(
    w: &mut W,
    fg: Color,
    bg: Color,
    text: &str,
) -> io::Result<usize> {
    write_once(w, styled_colorize(fg, bg, text).as_bytes())
}

/// # Errors
///
/// Fails if the stream errors or accepts only part of the string.
pub fn write_styled_colored_line<W: Write + ?Sized>(
    w: &mut W,
    fg: Color,
    bg: Color,
    text: &str,
) -> io::Result<usize> {
    emit_line(w, styled_colorize(fg, bg, text))
}

/// # Errors
///
/// Fails if the stream errors or accepts only part of the string.
pub fn write_styled_colored_fmt<W: Write + ?Sized>(
    w: &mut W,
    fg: Color,
    bg: Color,
    args: fmt::Arguments<'_>,
) -> io::Result<usize> {
    write_styled_colored(w, fg, bg, &fmt::format(args))
}
