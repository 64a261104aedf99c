// src/clipboard.rs
use crate::error::Result;

/// Somewhere a password can be copied to.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard backed by arboard.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_owned())?;
        Ok(())
    }
}

/// Copies `password` and reports whether the write went through.
///
/// Failures are only logged; callers show the confirmation regardless.
pub fn copy_password(sink: &mut dyn ClipboardSink, password: &str) -> bool {
    match sink.set_text(password) {
        Ok(()) => {
            log::debug!("Copied {} characters to the clipboard", password.chars().count());
            true
        }
        Err(e) => {
            log::warn!("Clipboard write failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::error::AppError;
    use std::io;

    #[derive(Default)]
    pub struct RecordingClipboard {
        pub contents: Option<String>,
        pub fail: bool,
    }

    impl ClipboardSink for RecordingClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(AppError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied")));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn copy_writes_to_sink() {
        let mut sink = RecordingClipboard::default();
        assert!(copy_password(&mut sink, "Ab1!Ab1!"));
        assert_eq!(sink.contents.as_deref(), Some("Ab1!Ab1!"));
    }

    #[test]
    fn copy_failure_is_not_an_error() {
        let mut sink = RecordingClipboard {
            fail: true,
            ..Default::default()
        };
        assert!(!copy_password(&mut sink, "secret"));
        assert!(sink.contents.is_none());
    }
}
