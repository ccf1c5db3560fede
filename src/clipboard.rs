use copypasta_ext::{prelude::*, x11_fork::ClipboardContext};

use crate::error::FirelinkError;

// Read the system clipboard as text.
//
// Try reading the clipboard for WSL or SSH first, falling back to an
// X11-aware clipboard manager if unavailable.  Non-text clipboard contents
// surface as a read failure from both backends.
pub fn read() -> Result<String, FirelinkError> {
    if let Ok(contents) = clipboard_anywhere::get_clipboard() {
        return Ok(contents);
    }

    // Final attempt with an X11 context.  Some clipboard managers panic
    // rather than error, hence the catch_unwind.
    std::panic::catch_unwind(|| {
        let mut ctx = ClipboardContext::new().ok()?;
        ctx.get_contents().ok()
    })
    .ok()
    .flatten()
    .ok_or_else(|| FirelinkError::Input("clipboard is unreadable or not text".to_string()))
}
