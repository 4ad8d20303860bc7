//! Action enum: what a widget click asks the director to do.
//!
//! Widgets and scenes never touch the director directly; they return one of
//! these and the director interprets it.

/// Every scene the director knows how to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneDescriptor {
    Splash,
    Menu,
    /// Details of the catalog entry at `entry`.
    Detail { entry: usize },
    /// A static text page, optionally linking somewhere.
    Info {
        title: String,
        body: String,
        url: Option<String>,
    },
}

impl SceneDescriptor {
    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            SceneDescriptor::Splash => "splash",
            SceneDescriptor::Menu => "menu",
            SceneDescriptor::Detail { .. } => "detail",
            SceneDescriptor::Info { .. } => "info",
        }
    }
}

/// Every effect a click can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the active scene.
    NavigateTo(SceneDescriptor),
    /// Hand a URL to the system browser. The active scene stays.
    OpenExternal(String),
    /// Leave the application.
    Exit,
}
