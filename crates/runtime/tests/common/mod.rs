//! Shared fixtures for interaction integration tests.
#![allow(dead_code)]

use interaction_core::{CanvasPoint, EntityId, MenuGeometry, SceneBase, Viewport, WorldPosition};
use interaction_runtime::testing::{FakeScene, InstantScheduler, RecordingDevice, ScriptedCamera};
use interaction_runtime::{Interactor, InteractorConfig};
use tracing_subscriber::EnvFilter;

pub const BONES: EntityId = EntityId(526);
pub const COINS: EntityId = EntityId(995);

pub const TILE: WorldPosition = WorldPosition::new(3222, 3218, 0);
pub const ANCHOR: CanvasPoint = CanvasPoint::new(300, 200);
pub const MENU: MenuGeometry = MenuGeometry::new(250, 180, 120);

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A loaded scene with a standard fixed-mode viewport and nothing in it.
pub fn scene() -> FakeScene {
    FakeScene::new()
        .with_viewport(Viewport::new(765, 503))
        .with_scene_base(SceneBase::new(3200, 3200, 104, 4))
}

pub fn seeded_config() -> InteractorConfig {
    InteractorConfig {
        sampler_seed: Some(7),
        ..InteractorConfig::default()
    }
}

pub struct Harness {
    pub scene: FakeScene,
    pub device: RecordingDevice,
    pub scheduler: InstantScheduler,
    pub interactor: Interactor,
}

pub fn harness(scene: FakeScene) -> Harness {
    harness_with(scene, RecordingDevice::attached_to, seeded_config(), None)
}

pub fn harness_with(
    scene: FakeScene,
    make_device: impl FnOnce(&FakeScene) -> RecordingDevice,
    config: InteractorConfig,
    camera: Option<ScriptedCamera>,
) -> Harness {
    init_tracing();

    let device = make_device(&scene);
    let scheduler = InstantScheduler::new();

    let mut builder = Interactor::builder()
        .config(config)
        .device(device.clone())
        .state(scene.clone())
        .scheduler(scheduler.clone());
    if let Some(camera) = camera {
        builder = builder.camera(camera);
    }
    let interactor = builder.build().expect("interactor should build");

    Harness {
        scene,
        device,
        scheduler,
        interactor,
    }
}
