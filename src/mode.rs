//! Persistent terminal color modes
//!
//! These emit a bare escape code with no trailing reset, so the color stays
//! active for everything written afterwards until [`reset_color`] runs. No
//! record of the active mode is kept here.

use crate::color::{Color, RESET};
use crate::write::write_once;
use std::io::{self, Write};

/// # Errors
///
/// Fails if the stream errors or accepts only part of the code.
pub fn write_foreground_mode<W: Write + ?Sized>(w: &mut W, color: Color) -> io::Result<usize> {
    write_once(w, color.foreground().as_bytes())
}

/// # Errors
///
/// Fails if the stream errors or accepts only part of the code.
pub fn write_background_mode<W: Write + ?Sized>(w: &mut W, color: Color) -> io::Result<usize> {
    write_once(w, color.background().as_bytes())
}

/// # Errors
///
/// Fails if the stream errors or accepts only part of the code.
pub fn write_reset<W: Write + ?Sized>(w: &mut W) -> io::Result<usize> {
    write_once(w, RESET.as_bytes())
}

/// Switch stdout's text color to `color` until reset
pub fn set_foreground(color: Color) {
    tracing::trace!(%color, "set foreground mode");
    discard(write_foreground_mode(&mut io::stdout().lock(), color), "foreground");
}

/// Switch stdout's fill color to `color` until reset
pub fn set_background(color: Color) {
    tracing::trace!(%color, "set background mode");
    discard(write_background_mode(&mut io::stdout().lock(), color), "background");
}

/// Restore stdout's default colors
pub fn reset_color() {
    tracing::trace!("reset color mode");
    discard(write_reset(&mut io::stdout().lock()), "reset");
}

// Mode writes are fire-and-forget; failures only show up in logs.
fn discard(result: io::Result<usize>, mode: &str) {
    if let Err(e) = result {
        tracing::debug!(mode, error = %e, "dropped terminal mode write");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::write::testing::{FailingWriter, ShortWriter};
    use std::sync::{Arc, Mutex};

    #[test]
    fn foreground_mode_has_no_reset() {
        let mut buf = Vec::new();
        let n = write_foreground_mode(&mut buf, Color::Cyan).unwrap();
        assert_eq!(buf, b"\x1b[36m");
        assert_eq!(n, 5);
    }

    #[test]
    fn background_mode_then_reset() {
        let mut buf = Vec::new();
        write_background_mode(&mut buf, Color::Gray).unwrap();
        buf.extend_from_slice(b"text");
        write_reset(&mut buf).unwrap();
        assert_eq!(buf, b"\x1b[100mtext\x1b[0m");
    }

    #[test]
    fn stream_forms_surface_errors() {
        assert!(write_foreground_mode(&mut FailingWriter, Color::Red).is_err());
        assert!(write_background_mode(&mut FailingWriter, Color::Red).is_err());
        assert!(write_reset(&mut FailingWriter).is_err());
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logs_of(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn discard_logs_dropped_write() {
        let logs = logs_of(|| discard(Err(io::Error::other("closed")), "reset"));
        assert!(logs.contains("DEBUG"), "{logs}");
        assert!(logs.contains("dropped terminal mode write"), "{logs}");
        assert!(logs.contains("mode=\"reset\""), "{logs}");
        assert!(logs.contains("error=closed"), "{logs}");
    }

    #[test]
    fn discard_is_silent_on_success() {
        let logs = logs_of(|| discard(Ok(4), "reset"));
        assert!(logs.is_empty(), "{logs}");
    }

    #[test]
    fn short_mode_write_is_an_error() {
        let mut w = ShortWriter {
            limit: 2,
            buf: Vec::new(),
        };
        let err = write_reset(&mut w).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
    }
}
