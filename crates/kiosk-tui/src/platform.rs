//! Host side effects: click cue, browser launch, exit request.

use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, warn};

use kiosk_core::platform::Platform;

/// Terminal bell, the only sound a terminal host can make.
const BEL: &[u8] = b"\x07";

/// `Platform` for the terminal. The click cue rings the terminal bell, and
/// only when a click sound asset is configured and present.
pub struct TerminalPlatform<W: Write = io::Stdout> {
    bell: Option<W>,
    exit_requested: bool,
}

impl TerminalPlatform<io::Stdout> {
    pub fn new(click_sound: &Path) -> Self {
        let bell = if click_sound.exists() {
            Some(io::stdout())
        } else {
            debug!(path = %click_sound.display(), "Click sound missing, click cue disabled");
            None
        };
        Self::with_bell(bell)
    }
}

impl<W: Write> TerminalPlatform<W> {
    pub fn with_bell(bell: Option<W>) -> Self {
        Self {
            bell,
            exit_requested: false,
        }
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn bell(&self) -> Option<&W> {
        self.bell.as_ref()
    }
}

impl<W: Write> Platform for TerminalPlatform<W> {
    fn play_click(&mut self) {
        let Some(out) = self.bell.as_mut() else {
            return;
        };
        if let Err(e) = out.write_all(BEL).and_then(|_| out.flush()) {
            debug!("Click cue failed: {}", e);
        }
    }

    fn open_external(&mut self, url: &str) {
        if let Err(e) = open::that_detached(url) {
            warn!(%url, "Failed to open external link: {}", e);
        }
    }

    fn exit(&mut self) {
        self.exit_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_rings_bell_when_enabled() {
        let mut platform = TerminalPlatform::with_bell(Some(Vec::new()));
        platform.play_click();
        platform.play_click();
        assert_eq!(platform.bell().map(Vec::as_slice), Some(b"\x07\x07".as_slice()));
    }

    #[test]
    fn click_without_sound_is_a_no_op() {
        let mut platform = TerminalPlatform::new(Path::new("no/such/click.wav"));
        platform.play_click();
        assert!(platform.bell().is_none());
    }

    #[test]
    fn exit_sets_flag() {
        let mut platform = TerminalPlatform::<Vec<u8>>::with_bell(None);
        assert!(!platform.exit_requested());
        platform.exit();
        assert!(platform.exit_requested());
    }
}
