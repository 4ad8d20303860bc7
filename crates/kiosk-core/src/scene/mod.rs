//! Scene trait and the four kiosk screens.
//!
//! Each scene owns its widgets and transient state, and reports what it wants
//! to happen next as an `Action`. Only the director acts on it.

pub mod detail;
pub mod info;
pub mod menu;
pub mod splash;

use std::rc::Rc;

use crate::action::{Action, SceneDescriptor};
use crate::assets::Assets;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::geometry::Size;
use crate::input::InputEvent;
use crate::render::Surface;

pub use detail::DetailScene;
pub use info::InfoScene;
pub use menu::MenuScene;
pub use splash::SplashScene;

/// Read-only data every scene may be built from.
#[derive(Debug, Clone)]
pub struct SceneContext {
    pub catalog: Catalog,
    pub assets: Rc<Assets>,
    pub canvas: Size,
    /// Splash screen heading.
    pub heading: String,
}

/// Implemented by every screen.
pub trait Scene {
    /// Handle an input event and optionally return an action for the director.
    fn handle(&mut self, event: &InputEvent) -> Option<Action> {
        let _ = event;
        None
    }

    /// Advance time by `dt` seconds.
    fn update(&mut self, dt: f32) -> Option<Action> {
        let _ = dt;
        None
    }

    /// Render the scene. Must not change any state.
    fn draw(&self, surface: &mut dyn Surface);
}

/// The closed set of screens the director can hold.
#[derive(Debug)]
pub enum ActiveScene {
    Splash(SplashScene),
    Menu(MenuScene),
    Detail(DetailScene),
    Info(InfoScene),
}

impl ActiveScene {
    /// Build a fresh scene. Fails if a detail page points outside the catalog.
    pub fn build(descriptor: &SceneDescriptor, ctx: &SceneContext) -> Result<Self> {
        Ok(match descriptor {
            SceneDescriptor::Splash => ActiveScene::Splash(SplashScene::new(ctx)),
            SceneDescriptor::Menu => ActiveScene::Menu(MenuScene::new(ctx)),
            SceneDescriptor::Detail { entry } => {
                ActiveScene::Detail(DetailScene::new(ctx, *entry)?)
            }
            SceneDescriptor::Info { title, body, url } => ActiveScene::Info(InfoScene::new(
                ctx,
                title.clone(),
                body.clone(),
                url.clone(),
            )),
        })
    }

    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            ActiveScene::Splash(_) => "splash",
            ActiveScene::Menu(_) => "menu",
            ActiveScene::Detail(_) => "detail",
            ActiveScene::Info(_) => "info",
        }
    }

    fn as_scene(&self) -> &dyn Scene {
        match self {
            ActiveScene::Splash(scene) => scene,
            ActiveScene::Menu(scene) => scene,
            ActiveScene::Detail(scene) => scene,
            ActiveScene::Info(scene) => scene,
        }
    }

    fn as_scene_mut(&mut self) -> &mut dyn Scene {
        match self {
            ActiveScene::Splash(scene) => scene,
            ActiveScene::Menu(scene) => scene,
            ActiveScene::Detail(scene) => scene,
            ActiveScene::Info(scene) => scene,
        }
    }
}

impl Scene for ActiveScene {
    fn handle(&mut self, event: &InputEvent) -> Option<Action> {
        self.as_scene_mut().handle(event)
    }

    fn update(&mut self, dt: f32) -> Option<Action> {
        self.as_scene_mut().update(dt)
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.as_scene().draw(surface)
    }
}

#[cfg(test)]
pub(crate) fn test_context() -> SceneContext {
    use crate::config::KioskConfig;

    let catalog = Catalog::new(KioskConfig::default().catalog);
    SceneContext {
        assets: Rc::new(Assets::placeholders(&catalog)),
        catalog,
        canvas: Size::new(900, 560),
        heading: "Feria de Universidades ISB 2025".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KioskError;

    #[test]
    fn build_covers_every_descriptor() {
        let ctx = test_context();
        let cases = [
            (SceneDescriptor::Splash, "splash"),
            (SceneDescriptor::Menu, "menu"),
            (SceneDescriptor::Detail { entry: 2 }, "detail"),
            (
                SceneDescriptor::Info {
                    title: "t".into(),
                    body: "b".into(),
                    url: None,
                },
                "info",
            ),
        ];
        for (descriptor, label) in cases {
            let scene = ActiveScene::build(&descriptor, &ctx).unwrap();
            assert_eq!(scene.label(), label);
            assert_eq!(descriptor.label(), label);
        }
    }

    #[test]
    fn detail_outside_catalog_fails() {
        let err = ActiveScene::build(&SceneDescriptor::Detail { entry: 7 }, &test_context())
            .unwrap_err();
        assert!(matches!(
            err,
            KioskError::InvalidNavigationTarget { entry: 7, len: 3 }
        ));
    }
}
