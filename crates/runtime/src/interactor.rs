//! High-level interaction orchestrator.
//!
//! [`Interactor`] owns the collaborators an interaction needs and exposes a
//! builder-based API. Every public operation resolves to an
//! [`InteractionOutcome`] or a boolean; failures are logged here and never
//! reach the caller as errors.
use std::sync::Arc;

use tracing::{debug, info, warn};

use interaction_core::{
    ClickSampler, EntityId, GameStateView, GroundTarget, Hitbox, LocatedEntry, MenuActionTarget,
    MenuEntryLocator, MenuQuery, StackOrderResolver, Target, WorldPosition, menu,
};

use crate::api::{
    CameraController, DelayScheduler, InputDevice, InteractionError, InteractionOutcome, Result,
};
use crate::config::InteractorConfig;
use crate::interaction::{Context, ground, menu_action};
use crate::pointer::SharedPointer;
use crate::scheduler::ProfileDelayScheduler;

/// Drives ground and menu interactions against live game state.
///
/// Interactions sharing a [`SharedPointer`] (including every call on one
/// `Interactor`) run one at a time; an interaction holds the pointer from its
/// first device call until it resolves.
pub struct Interactor {
    pointer: SharedPointer,
    state: Arc<dyn GameStateView>,
    scheduler: Arc<dyn DelayScheduler>,
    camera: Option<Arc<dyn CameraController>>,
    sampler: ClickSampler,
    locator: MenuEntryLocator,
    resolver: StackOrderResolver,
    config: InteractorConfig,
}

impl Interactor {
    /// Create a new interactor builder
    pub fn builder() -> InteractorBuilder {
        InteractorBuilder::new()
    }

    pub fn config(&self) -> &InteractorConfig {
        &self.config
    }

    /// Handle to the pointer this interactor drives.
    pub fn pointer(&self) -> SharedPointer {
        self.pointer.clone()
    }

    /// Runs one interaction to completion.
    pub async fn perform(&self, target: &Target) -> InteractionOutcome {
        match self.try_perform(target).await {
            Ok(()) => {
                debug!("interaction with {} succeeded", describe(target));
                InteractionOutcome::Succeeded
            }
            Err(err) => {
                let outcome = err.outcome();
                warn!("interaction with {} {}: {}", describe(target), outcome, err);
                outcome
            }
        }
    }

    /// Like [`Self::perform`] but surfaces the failure cause.
    pub async fn try_perform(&self, target: &Target) -> Result<()> {
        // Invalid targets never touch the pointer.
        target.validate()?;

        let lease = self.pointer.acquire().await;
        let ctx = Context {
            device: lease.device(),
            state: self.state.as_ref(),
            scheduler: self.scheduler.as_ref(),
            camera: self.camera.as_deref(),
            sampler: &self.sampler,
            locator: &self.locator,
            resolver: &self.resolver,
            config: &self.config,
        };

        match target {
            Target::Ground(target) => ground::run(&ctx, target).await,
            Target::MenuAction(target) => menu_action::run(&ctx, target).await,
        }
    }

    pub async fn interact(&self, target: &Target) -> bool {
        self.perform(target).await.is_success()
    }

    /// Picks up (or primary-clicks) the entity `entity` lying at `position`.
    pub async fn click_ground_target(
        &self,
        position: WorldPosition,
        entity: EntityId,
        name: Option<&str>,
    ) -> bool {
        let mut target = GroundTarget::new(position, entity);
        if let Some(name) = name {
            target = target.with_name(name);
        }
        self.interact(&target.into()).await
    }

    /// Opens the menu on `hitbox` and selects `action` (optionally on
    /// `target_name`).
    pub async fn select_menu_entry(
        &self,
        hitbox: Hitbox,
        action: &str,
        target_name: Option<&str>,
    ) -> bool {
        let mut target = MenuActionTarget::new(hitbox, action);
        if let Some(name) = target_name {
            target = target.with_target_name(name);
        }
        self.interact(&target.into()).await
    }

    /// Whether a bare primary click currently performs `action`.
    pub fn is_primary_action(&self, action: &str) -> bool {
        menu::is_primary_action(&self.state.menu_entries(), action)
    }

    /// Whether the current primary action contains `action`.
    pub fn is_primary_action_containing(&self, action: &str) -> bool {
        menu::is_primary_action_containing(&self.state.menu_entries(), action)
    }

    /// Locates `query` in the currently open menu without clicking anything.
    pub fn locate_entry(&self, query: &MenuQuery) -> Option<LocatedEntry> {
        self.locator.locate(self.state.as_ref(), query)
    }

    pub fn is_top_of_stack(&self, position: WorldPosition, entity: EntityId) -> bool {
        self.resolver
            .is_top_of_stack(self.state.as_ref(), position, entity)
    }
}

fn describe(target: &Target) -> String {
    match target {
        Target::Ground(ground) => format!("{} at {}", ground.display_name(), ground.position),
        Target::MenuAction(action) => format!("'{}' on {}", action.query(), action.hitbox),
    }
}

/// Builder for [`Interactor`].
///
/// Game state and a device (or shared pointer) are required. The scheduler
/// defaults to [`ProfileDelayScheduler`]; the camera is optional, and without
/// one an off-screen ground target fails immediately.
pub struct InteractorBuilder {
    config: InteractorConfig,
    pointer: Option<SharedPointer>,
    state: Option<Arc<dyn GameStateView>>,
    scheduler: Option<Arc<dyn DelayScheduler>>,
    camera: Option<Arc<dyn CameraController>>,
}

impl InteractorBuilder {
    fn new() -> Self {
        Self {
            config: InteractorConfig::default(),
            pointer: None,
            state: None,
            scheduler: None,
            camera: None,
        }
    }

    /// Override interactor configuration
    pub fn config(mut self, config: InteractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the input device, giving this interactor its own pointer
    pub fn device(mut self, device: impl InputDevice + 'static) -> Self {
        self.pointer = Some(SharedPointer::new(device));
        self
    }

    /// Share a pointer with other interactors
    pub fn pointer(mut self, pointer: SharedPointer) -> Self {
        self.pointer = Some(pointer);
        self
    }

    /// Set required game-state accessor
    pub fn state(self, state: impl GameStateView + 'static) -> Self {
        self.shared_state(Arc::new(state))
    }

    pub fn shared_state(mut self, state: Arc<dyn GameStateView>) -> Self {
        self.state = Some(state);
        self
    }

    pub fn scheduler(mut self, scheduler: impl DelayScheduler + 'static) -> Self {
        self.scheduler = Some(Arc::new(scheduler));
        self
    }

    pub fn camera(mut self, camera: impl CameraController + 'static) -> Self {
        self.camera = Some(Arc::new(camera));
        self
    }

    /// Build the interactor
    pub fn build(self) -> Result<Interactor> {
        let pointer = self
            .pointer
            .ok_or(InteractionError::MissingCollaborator("an input device"))?;
        let state = self
            .state
            .ok_or(InteractionError::MissingCollaborator("a game-state accessor"))?;
        let scheduler = self
            .scheduler
            .unwrap_or_else(|| Arc::new(ProfileDelayScheduler::new()));

        let mut config = self.config;
        if config.interaction.ground_click_size < InteractorConfig::MIN_GROUND_CLICK_SIZE {
            warn!(
                "ground click size {} raised to {}",
                config.interaction.ground_click_size,
                InteractorConfig::MIN_GROUND_CLICK_SIZE
            );
            config.interaction.ground_click_size = InteractorConfig::MIN_GROUND_CLICK_SIZE;
        }

        let interaction = &config.interaction;
        let sampler = match config.sampler_seed {
            Some(seed) => ClickSampler::seeded(interaction.offsets, seed),
            None => ClickSampler::new(interaction.offsets),
        }
        .with_adaptive_precision(interaction.adaptive_precision);
        let locator = MenuEntryLocator::new(interaction.match_policy, interaction.layout);
        let resolver = StackOrderResolver::new(interaction.assume_top_when_unresolved);

        info!(
            "interactor ready (match policy: {}, assume top: {}, camera: {})",
            interaction.match_policy,
            interaction.assume_top_when_unresolved,
            self.camera.is_some()
        );

        Ok(Interactor {
            pointer,
            state,
            scheduler,
            camera: self.camera,
            sampler,
            locator,
            resolver,
            config,
        })
    }
}
