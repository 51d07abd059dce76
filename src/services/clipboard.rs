//! Clipboard module: handles both internal and system clipboard operations
//!
//! Copy targets two paths for coverage:
//! - crossterm's OSC 52 escape sequence (Konsole, Kitty, Alacritty, Wezterm,
//!   xterm, iTerm2)
//! - the arboard crate (X11/Wayland APIs, for terminals without OSC 52)
//!
//! An internal buffer is always kept so tests can observe copies without a
//! system clipboard, and so copy never fails outright.

use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;
use std::io::{stdout, Write};
use std::sync::Mutex;

/// Global clipboard holder to maintain X11 clipboard ownership for the application lifetime.
/// On X11, the clipboard owner must stay alive to respond to paste requests from other apps.
static SYSTEM_CLIPBOARD: Mutex<Option<arboard::Clipboard>> = Mutex::new(None);

/// Clipboard manager that handles both internal and system clipboard
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    /// Internal clipboard content (always available)
    internal: String,
    /// When true, copy() skips the system clipboard entirely (for testing)
    internal_only: bool,
}

impl Clipboard {
    /// Create a new empty clipboard
    pub fn new() -> Self {
        Self {
            internal: String::new(),
            internal_only: false,
        }
    }

    /// Enable internal-only mode (for testing)
    pub fn set_internal_only(&mut self, enabled: bool) {
        self.internal_only = enabled;
    }

    /// Copy text to both internal and system clipboard.
    ///
    /// Returns true when at least the internal copy succeeded, which is
    /// always; system-clipboard failures are logged and swallowed.
    pub fn copy(&mut self, text: &str) -> bool {
        self.internal = text.to_string();

        if self.internal_only {
            return true;
        }

        // OSC 52 first. It does not fail detectably: the terminal may or may
        // not honor the escape sequence.
        let osc52_result = execute!(stdout(), CopyToClipboard::to_clipboard_from(text));
        if let Err(e) = &osc52_result {
            tracing::debug!("Crossterm OSC 52 clipboard copy failed: {}", e);
        }
        let _ = stdout().flush();

        // Also try arboard for terminals without OSC 52 support. On X11 the
        // clipboard owner must stay alive to answer paste requests, hence
        // the static holder.
        if let Ok(mut guard) = SYSTEM_CLIPBOARD.lock() {
            if guard.is_none() {
                match arboard::Clipboard::new() {
                    Ok(cb) => *guard = Some(cb),
                    Err(e) => {
                        tracing::debug!("arboard clipboard init failed: {}", e);
                    }
                }
            }

            if let Some(clipboard) = guard.as_mut() {
                if let Err(e) = clipboard.set_text(text) {
                    tracing::debug!("arboard copy failed: {}, recreating clipboard", e);
                    drop(guard);
                    if let Ok(mut guard) = SYSTEM_CLIPBOARD.lock() {
                        if let Ok(new_clipboard) = arboard::Clipboard::new() {
                            *guard = Some(new_clipboard);
                            if let Some(cb) = guard.as_mut() {
                                let _ = cb.set_text(text);
                            }
                        }
                    }
                }
            }
        }

        true
    }

    /// Get the internal clipboard content without checking system clipboard
    pub fn get_internal(&self) -> &str {
        &self.internal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_internal() {
        let mut clipboard = Clipboard::new();
        clipboard.set_internal_only(true);
        assert!(clipboard.get_internal().is_empty());

        assert!(clipboard.copy("ashusonar1998@gmail.com"));
        assert_eq!(clipboard.get_internal(), "ashusonar1998@gmail.com");
    }

    #[test]
    fn test_clipboard_copy_overwrites() {
        let mut clipboard = Clipboard::new();
        clipboard.set_internal_only(true);
        clipboard.copy("first");
        clipboard.copy("second");
        assert_eq!(clipboard.get_internal(), "second");
    }
}
