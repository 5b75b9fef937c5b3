//! `format!`-style front ends for the `_fmt` builders and printers

/// Format then wrap in a foreground color.
///
/// ```
/// use rnbw::{Color, colorize};
/// assert_eq!(colorize!(Color::Green, "count: {}", 42), "\x1b[32mcount: 42\x1b[0m");
/// ```
#[macro_export]
macro_rules! colorize {
    ($color:expr, $($arg:tt)*) => {
        $crate::colorize_fmt($color, ::std::format_args!($($arg)*))
    };
}

/// Format then wrap in a background color.
#[macro_export]
macro_rules! bg_colorize {
    ($color:expr, $($arg:tt)*) => {
        $crate::bg_colorize_fmt($color, ::std::format_args!($($arg)*))
    };
}

/// Format then wrap in foreground and background colors.
#[macro_export]
macro_rules! styled_colorize {
    ($fg:expr, $bg:expr, $($arg:tt)*) => {
        $crate::styled_colorize_fmt($fg, $bg, ::std::format_args!($($arg)*))
    };
}

/// Formatted foreground print to stdout, evaluating to `io::Result<usize>`.
#[macro_export]
macro_rules! print_colored {
    ($color:expr, $($arg:tt)*) => {
        $crate::print_fmt($color, ::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! bg_print {
    ($color:expr, $($arg:tt)*) => {
        $crate::bg_print_fmt($color, ::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! styled_print {
    ($fg:expr, $bg:expr, $($arg:tt)*) => {
        $crate::styled_print_fmt($fg, $bg, ::std::format_args!($($arg)*))
    };
}
