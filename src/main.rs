//! rnbw - print colored text from the command line

use clap::{Parser, Subcommand};
use rnbw::error::Result;
use rnbw::{Color, write};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const BANNER: [(&str, Color); 4] = [
    ("▗▄▄▖  ▗▄▖ ▗▄▄▄▖▗▖  ▗▖▗▄▄▖  ▗▄▖ ▗▖ ▗▖", Color::Red),
    ("▐▌ ▐▌▐▌ ▐▌  █  ▐▛▚▖▐▌▐▌ ▐▌▐▌ ▐▌▐▌ ▐▌", Color::Yellow),
    ("▐▛▀▚▖▐▛▀▜▌  █  ▐▌ ▝▜▌▐▛▀▚▖▐▌ ▐▌▐▌ ▐▌", Color::Green),
    ("▐▌ ▐▌▐▌ ▐▌▗▄█▄▖▐▌  ▐▌▐▙▄▞▘▝▚▄▞▘▐▙█▟▌", Color::Blue),
];

#[derive(Parser)]
#[command(name = "rnbw")]
#[command(about = "Print text in ANSI terminal colors")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the banner and a tour of every style (default)
    Demo,
    /// Print text with the given colors
    Paint {
        /// Text color (red, green, yellow, blue, purple, cyan, white, gray, reset)
        #[arg(long)]
        fg: Option<Color>,
        /// Background color
        #[arg(long)]
        bg: Option<Color>,
        /// Do not print the trailing newline
        #[arg(short = 'n', long)]
        no_newline: bool,
        /// Words to print, joined by spaces
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// List every color with its escape codes
    Codes,
}

/// Resolved options for `paint`
#[derive(Debug, Clone, PartialEq, Eq)]
struct Config {
    fg: Option<Color>,
    bg: Option<Color>,
    newline: bool,
}

impl Config {
    fn new(fg: Option<Color>, bg: Option<Color>, no_newline: bool) -> Self {
        Self {
            fg,
            bg,
            newline: !no_newline,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("RNBW_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    let result = match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => demo(&mut out),
        Command::Paint {
            fg,
            bg,
            no_newline,
            text,
        } => paint(&mut out, &Config::new(fg, bg, no_newline), &text.join(" ")),
        Command::Codes => codes(&mut out),
    };

    match result.and_then(|()| out.flush().map_err(Into::into)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "write to stdout failed");
            ExitCode::FAILURE
        }
    }
}

fn demo<W: Write>(out: &mut W) -> Result<()> {
    for (line, color) in BANNER {
        write::write_colored_line(out, color, line)?;
    }
    writeln!(out)?;

    write::write_colored_line(out, Color::Green, "Success!")?;
    write::write_colored_line(out, Color::Red, "Error!")?;
    write::write_colored_fmt(out, Color::Blue, format_args!("Hello, {}!\n", "World"))?;
    writeln!(out)?;

    write::write_bg_colored_line(out, Color::Yellow, "Warning background")?;
    writeln!(out)?;

    write::write_styled_colored_line(out, Color::Gray, Color::Red, "Gray text on red background")?;
    writeln!(out)?;
    write::write_styled_colored_fmt(
        out,
        Color::Yellow,
        Color::Blue,
        format_args!("Score: {}", 100),
    )?;
    writeln!(out)?;
    Ok(())
}

fn paint<W: Write>(out: &mut W, config: &Config, text: &str) -> Result<()> {
    let written = match (config.fg, config.bg, config.newline) {
        (Some(fg), Some(bg), true) => write::write_styled_colored_line(out, fg, bg, text),
        (Some(fg), Some(bg), false) => write::write_styled_colored(out, fg, bg, text),
        (Some(fg), None, true) => write::write_colored_line(out, fg, text),
        (Some(fg), None, false) => write::write_colored(out, fg, text),
        (None, Some(bg), true) => write::write_bg_colored_line(out, bg, text),
        (None, Some(bg), false) => write::write_bg_colored(out, bg, text),
        (None, None, true) => write::write_once(out, format!("{text}\n").as_bytes()),
        (None, None, false) => write::write_once(out, text.as_bytes()),
    }?;
    tracing::debug!(written, "painted text");
    Ok(())
}

fn codes<W: Write>(out: &mut W) -> Result<()> {
    for color in Color::ALL {
        let fg = color.foreground().escape_debug().to_string();
        let bg = color.background().escape_debug().to_string();
        let row = format!("{:<7} fg {fg:<10} bg {bg:<11}", color.name());
        write::write_colored_line(out, color, &row)?;
    }
    Ok(())
}
