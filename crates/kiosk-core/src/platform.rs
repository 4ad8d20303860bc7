//! Fire-and-forget side effects the director triggers on behalf of scenes.

/// Host services outside the scene graph. None of these report back: a
/// missing click sound is silently skipped and a failed browser launch is the
/// host's problem.
pub trait Platform {
    /// UI click cue.
    fn play_click(&mut self);

    /// Open `url` in the system browser.
    fn open_external(&mut self, url: &str);

    /// Terminate the application after the current dispatch.
    fn exit(&mut self);
}
