//! Encounter engine.
//!
//! `Encounter` owns the hecs world of regular enemies, the player, the boss
//! and the projectile pool. It processes player commands, runs every system
//! in a fixed order and produces `EncounterSnapshot`s. Completely headless,
//! so a whole fight can be replayed deterministically in tests.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use duskvale_ai::boss::BossController;
use duskvale_ai::projectile::ProjectilePool;
use duskvale_core::commands::PlayerCommand;
use duskvale_core::constants::{DT, MAX_TIME_SCALE};
use duskvale_core::enums::EncounterPhase;
use duskvale_core::events::CombatEvent;
use duskvale_core::state::EncounterSnapshot;
use duskvale_core::tuning::{ConfigError, Tuning};
use duskvale_core::types::SimTime;

use crate::body::KinematicBody;
use crate::player::Player;
use crate::systems;
use crate::world_setup::{self, EncounterLayout};

/// Configuration for starting a new encounter.
#[derive(Debug, Clone)]
pub struct EncounterConfig {
    /// RNG seed for determinism. Same seed and inputs = same encounter.
    pub seed: u64,
    /// Simulation speed multiplier (1.0 = normal).
    pub time_scale: f32,
    pub tuning: Tuning,
    pub layout: EncounterLayout,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            tuning: Tuning::default(),
            layout: EncounterLayout::default(),
        }
    }
}

/// The encounter engine. Owns the ECS world and all fight state.
pub struct Encounter {
    seed: u64,
    tuning: Tuning,
    layout: EncounterLayout,
    world: World,
    player: Player,
    boss: Option<BossController<KinematicBody>>,
    projectiles: ProjectilePool,
    time: SimTime,
    phase: EncounterPhase,
    time_scale: f32,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<CombatEvent>,
}

impl Encounter {
    /// Build an encounter from a config. Fails if the tuning is invalid.
    pub fn new(config: EncounterConfig) -> Result<Self, ConfigError> {
        config.tuning.validate()?;

        let time_scale = if config.time_scale.is_finite() {
            config.time_scale.clamp(0.0, MAX_TIME_SCALE)
        } else {
            1.0
        };

        let mut encounter = Self {
            seed: config.seed,
            player: world_setup::spawn_player(&config.layout, &config.tuning),
            boss: None,
            tuning: config.tuning,
            layout: config.layout,
            world: World::new(),
            projectiles: ProjectilePool::new(),
            time: SimTime::default(),
            phase: EncounterPhase::Active,
            time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        };
        encounter.setup();
        Ok(encounter)
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the encounter by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> EncounterSnapshot {
        self.process_commands();

        if self.phase == EncounterPhase::Active {
            let dt = DT * self.time_scale;
            self.run_systems(dt);
            self.time.advance(dt);
            self.update_phase();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.player,
            self.boss.as_ref(),
            &self.projectiles,
            &self.time,
            self.phase,
            events,
        )
    }

    pub fn phase(&self) -> EncounterPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn boss(&self) -> Option<&BossController<KinematicBody>> {
        self.boss.as_ref()
    }

    pub fn projectiles(&self) -> &ProjectilePool {
        &self.projectiles
    }

    /// Spawn the layout into a cleared world with a freshly seeded RNG.
    fn setup(&mut self) {
        self.world.clear();
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.player = world_setup::spawn_player(&self.layout, &self.tuning);
        self.boss = world_setup::spawn_boss(&self.layout, &self.tuning);
        world_setup::spawn_enemies(&mut self.world, &mut self.rng, &self.layout, &self.tuning);
        self.projectiles.clear();
        self.time = SimTime::default();
        self.phase = EncounterPhase::Active;
        self.events.clear();
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Move { axis } => {
                if self.phase == EncounterPhase::Active {
                    self.player.set_move_axis(axis);
                }
            }
            PlayerCommand::Jump => {
                if self.phase == EncounterPhase::Active {
                    self.player.jump();
                }
            }
            PlayerCommand::Attack => {
                if self.phase == EncounterPhase::Active {
                    self.player.attack();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == EncounterPhase::Active {
                    self.phase = EncounterPhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == EncounterPhase::Paused {
                    self.phase = EncounterPhase::Active;
                }
            }
            PlayerCommand::Restart => {
                log::info!("restarting encounter with seed {}", self.seed);
                self.setup();
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Player timers, movement and swing
        systems::player::run(
            &mut self.world,
            &mut self.player,
            self.boss.as_mut(),
            &mut self.events,
            dt,
        );
        // 2. Regular enemy AI
        systems::enemies::run(
            &mut self.world,
            &mut self.player,
            &mut self.projectiles,
            &mut self.events,
            dt,
        );
        self.player.drain_events(&mut self.events);
        // 3. Projectile flight and hits
        systems::projectiles::run(
            &mut self.projectiles,
            &mut self.player,
            &self.layout.arena,
            &mut self.events,
            dt,
        );
        self.player.drain_events(&mut self.events);
        // 4. Boss state machine
        systems::boss::run(
            self.boss.as_mut(),
            &mut self.player,
            &mut self.rng,
            &mut self.events,
            dt,
        );
        self.player.drain_events(&mut self.events);
        // 5. Gravity, integration and ground contact
        systems::physics::run(
            &mut self.world,
            &mut self.player,
            self.boss.as_mut(),
            &self.layout.arena,
            dt,
        );
        // 6. Dead enemy removal
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    fn update_phase(&mut self) {
        if !self.player.combatant().is_alive() {
            log::info!("encounter lost at tick {}", self.time.tick);
            self.phase = EncounterPhase::Defeat;
        } else if self.boss.as_ref().is_some_and(|boss| boss.is_dead()) {
            log::info!("encounter won at tick {}", self.time.tick);
            self.phase = EncounterPhase::Victory;
        }
    }
}
