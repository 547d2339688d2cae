//! JSON scenario format and replay.
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use interaction_core::{
    CanvasPoint, EntityId, MenuEntry, MenuGeometry, MenuWidget, SceneBase, ScreenPoint, Target,
    Viewport, WorldPosition,
};
use interaction_runtime::testing::{
    DeviceCall, FakeScene, InstantScheduler, RecordingDevice, ScriptedCamera,
};
use interaction_runtime::{InteractionOutcome, Interactor, InteractorConfig, ProfileDelayScheduler};

/// Accessor state plus the interactions to replay against it.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    pub viewport: Viewport,
    /// Where the canvas sits on screen; only used for reporting.
    #[serde(default)]
    pub canvas_origin: ScreenPoint,
    #[serde(default)]
    pub scene_base: Option<SceneBase>,
    #[serde(default)]
    pub tiles: Vec<Tile>,
    #[serde(default)]
    pub menu: Option<MenuState>,
    /// Tiles the camera can bring into view.
    #[serde(default)]
    pub camera: Vec<Reveal>,
    pub interactions: Vec<Target>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tile {
    pub position: WorldPosition,
    #[serde(default)]
    pub projection: Option<CanvasPoint>,
    /// Front-most first.
    #[serde(default)]
    pub stack: Option<Vec<EntityId>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuState {
    pub geometry: MenuGeometry,
    /// Storage order: bottom-to-top.
    #[serde(default)]
    pub entries: Vec<MenuEntry>,
    #[serde(default)]
    pub widget: Option<MenuWidget>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Reveal {
    pub position: WorldPosition,
    pub projection: CanvasPoint,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse scenario {}", path.display()))
    }

    pub fn title(&self, path: &Path) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => path.display().to_string(),
        }
    }

    fn scene(&self) -> FakeScene {
        let mut scene = FakeScene::new().with_viewport(self.viewport);
        if let Some(base) = self.scene_base {
            scene = scene.with_scene_base(base);
        }

        for tile in &self.tiles {
            if let Some(point) = tile.projection {
                scene = scene.with_projection(tile.position, point);
            }
            if let Some(stack) = &tile.stack {
                scene = scene.with_stack(tile.position, stack.clone());
            }
        }

        if let Some(menu) = &self.menu {
            scene = scene.with_menu(menu.geometry, menu.entries.clone());
            if let Some(widget) = &menu.widget {
                scene = scene.with_widget(widget.clone());
            }
        }
        scene
    }

    fn camera(&self, scene: &FakeScene) -> Option<ScriptedCamera> {
        if self.camera.is_empty() {
            return None;
        }
        let camera = self
            .camera
            .iter()
            .fold(ScriptedCamera::new(scene), |camera, reveal| {
                camera.revealing(reveal.position, reveal.projection)
            });
        Some(camera)
    }
}

/// Runs every interaction in order and logs what the pointer did.
pub async fn replay(
    scenario: &Scenario,
    config: InteractorConfig,
    realtime: bool,
) -> Result<Vec<InteractionOutcome>> {
    let scene = scenario.scene();
    let device = RecordingDevice::attached_to(&scene);

    let mut builder = Interactor::builder()
        .config(config)
        .device(device.clone())
        .state(scene.clone());
    builder = if realtime {
        builder.scheduler(ProfileDelayScheduler::new())
    } else {
        builder.scheduler(InstantScheduler::new())
    };
    if let Some(camera) = scenario.camera(&scene) {
        builder = builder.camera(camera);
    }
    let interactor = builder.build()?;

    let mut outcomes = Vec::with_capacity(scenario.interactions.len());
    for (index, target) in scenario.interactions.iter().enumerate() {
        let before = device.calls().len();
        let outcome = interactor.perform(target).await;

        info!("#{} {} -> {}", index + 1, describe(target), outcome);
        for call in &device.calls()[before..] {
            info!("    {}", render(call, scenario.canvas_origin));
        }
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

fn describe(target: &Target) -> String {
    match target {
        Target::Ground(ground) => format!("take {} at {}", ground.display_name(), ground.position),
        Target::MenuAction(action) => format!("'{}' via {}", action.query(), action.hitbox),
    }
}

fn render(call: &DeviceCall, origin: ScreenPoint) -> String {
    match call {
        DeviceCall::MoveTo(point) => format!("{} -> {}", call, point.to_screen(origin)),
        DeviceCall::RightClick(hitbox) => {
            format!("{} -> at {}", call, hitbox.origin().to_screen(origin))
        }
        DeviceCall::Click | DeviceCall::DismissKey => call.to_string(),
    }
}
