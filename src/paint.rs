//! Color-wrapped string builders

use crate::color::{Color, RESET};
use std::fmt;

/// Wrap `text` in `color`'s foreground code and a trailing reset
#[must_use]
pub fn colorize(color: Color, text: &str) -> String {
    wrap(&[color.foreground()], text)
}

/// Like [`colorize`], formatting `args` first
#[must_use]
pub fn colorize_fmt(color: Color, args: fmt::Arguments<'_>) -> String {
    colorize(color, &fmt::format(args))
}

/// Wrap `text` in `color`'s background code and a trailing reset
#[must_use]
pub fn bg_colorize(color: Color, text: &str) -> String {
    wrap(&[color.background()], text)
}

#[must_use]
pub fn bg_colorize_fmt(color: Color, args: fmt::Arguments<'_>) -> String {
    bg_colorize(color, &fmt::format(args))
}

/// Foreground code, then background code, then `text`, then reset
#[must_use]
pub fn styled_colorize(fg: Color, bg: Color, text: &str) -> String {
    wrap(&[fg.foreground(), bg.background()], text)
}

#[must_use]
pub fn styled_colorize_fmt(fg: Color, bg: Color, args: fmt::Arguments<'_>) -> String {
    styled_colorize(fg, bg, &fmt::format(args))
}

// Reset is always appended, even for `Color::Reset`.
fn wrap(codes: &[&str], text: &str) -> String {
    let len = codes.iter().map(|c| c.len()).sum::<usize>() + text.len() + RESET.len();
    let mut out = String::with_capacity(len);
    for code in codes {
        out.push_str(code);
    }
    out.push_str(text);
    out.push_str(RESET);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorize_red() {
        assert_eq!(colorize(Color::Red, "hello"), "\x1b[31mhello\x1b[0m");
    }

    #[test]
    fn colorize_empty_still_wrapped() {
        assert_eq!(colorize(Color::Red, ""), "\x1b[31m\x1b[0m");
    }

    #[test]
    fn colorize_reset_double_wraps() {
        assert_eq!(colorize(Color::Reset, "hello"), "\x1b[0mhello\x1b[0m");
    }

    #[test]
    fn colorize_fmt_substitutes_first() {
        assert_eq!(
            colorize_fmt(Color::Green, format_args!("count: {}", 42)),
            "\x1b[32mcount: 42\x1b[0m"
        );
    }

    #[test]
    fn bg_colorize_blue() {
        assert_eq!(bg_colorize(Color::Blue, "hello"), "\x1b[44mhello\x1b[0m");
        assert_eq!(
            bg_colorize_fmt(Color::Yellow, format_args!("val: {}", "test")),
            "\x1b[43mval: test\x1b[0m"
        );
    }

    #[test]
    fn styled_puts_foreground_first() {
        assert_eq!(
            styled_colorize(Color::White, Color::Red, "alert"),
            "\x1b[37m\x1b[41malert\x1b[0m"
        );
        assert_eq!(
            styled_colorize_fmt(Color::Cyan, Color::Purple, format_args!("n={}", 7)),
            "\x1b[36m\x1b[45mn=7\x1b[0m"
        );
    }

    #[test]
    fn styled_reset_is_not_collapsed() {
        assert_eq!(
            styled_colorize(Color::Reset, Color::Reset, "hello"),
            "\x1b[0m\x1b[0mhello\x1b[0m"
        );
    }

    #[test]
    fn ends_with_exactly_one_reset() {
        for color in Color::ALL {
            let out = colorize(color, "x");
            assert!(out.ends_with("x\x1b[0m"), "{color}: {out:?}");
        }
    }

    #[test]
    fn builders_are_repeatable() {
        for fg in Color::ALL {
            for bg in Color::ALL {
                assert_eq!(styled_colorize(fg, bg, "t"), styled_colorize(fg, bg, "t"));
            }
        }
    }
}
