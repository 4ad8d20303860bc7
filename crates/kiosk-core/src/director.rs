//! Scene director: owns the single active scene and routes the frame loop
//! to it.

use tracing::{debug, info};

use crate::action::{Action, SceneDescriptor};
use crate::error::Result;
use crate::input::InputEvent;
use crate::platform::Platform;
use crate::render::Surface;
use crate::scene::{ActiveScene, Scene, SceneContext};

/// Whether the host loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Director {
    ctx: SceneContext,
    active: ActiveScene,
    /// Bumped on every `set_active`, so each installed scene is distinguishable.
    generation: u64,
    exiting: bool,
}

impl Director {
    /// Start on the splash screen.
    pub fn new(ctx: SceneContext) -> Self {
        let active = ActiveScene::Splash(crate::scene::SplashScene::new(&ctx));
        Self {
            ctx,
            active,
            generation: 0,
            exiting: false,
        }
    }

    pub fn active(&self) -> &ActiveScene {
        &self.active
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    /// Replace the active scene. The previous one is dropped.
    pub fn set_active(&mut self, scene: ActiveScene) {
        info!(from = self.active.label(), to = scene.label(), "Scene transition");
        self.active = scene;
        self.generation += 1;
    }

    /// Build a fresh scene from `descriptor` and make it active.
    pub fn navigate(&mut self, descriptor: &SceneDescriptor) -> Result<()> {
        let scene = ActiveScene::build(descriptor, &self.ctx)?;
        self.set_active(scene);
        Ok(())
    }

    /// Deliver one input event to the active scene.
    pub fn dispatch(&mut self, event: &InputEvent, platform: &mut dyn Platform) -> Result<Flow> {
        if self.exiting {
            debug!(?event, "Dropping event after exit");
            return Ok(Flow::Exit);
        }
        match self.active.handle(event) {
            Some(action) => {
                platform.play_click();
                self.apply(action, platform)
            }
            None => Ok(Flow::Continue),
        }
    }

    /// Advance the active scene by `dt` seconds.
    pub fn tick(&mut self, dt: f32, platform: &mut dyn Platform) -> Result<Flow> {
        if self.exiting {
            return Ok(Flow::Exit);
        }
        match self.active.update(dt) {
            Some(action) => self.apply(action, platform),
            None => Ok(Flow::Continue),
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        self.active.draw(surface);
    }

    fn apply(&mut self, action: Action, platform: &mut dyn Platform) -> Result<Flow> {
        match action {
            Action::NavigateTo(descriptor) => {
                self.navigate(&descriptor)?;
                Ok(Flow::Continue)
            }
            Action::OpenExternal(url) => {
                info!(%url, "Opening external link");
                platform.open_external(&url);
                Ok(Flow::Continue)
            }
            Action::Exit => {
                info!("Exit requested");
                self.exiting = true;
                platform.exit();
                Ok(Flow::Exit)
            }
        }
    }
}
