//! Per-frame bot driver.
//!
//! The host feeds one [`Frame`] per agent step, registers the behaviors it
//! wants for that frame and collects the resulting commands:
//!
//! ```ignore
//! let mut bot = Bot::builder()
//!     .services(services)
//!     .config(RuntimeConfig::from_env())
//!     .opening_book(book)
//!     .race(Race::Terran)
//!     .build()?;
//!
//! bot.begin_frame(frame);
//! bot.register_behavior(plan);
//! let output = bot.finish_frame()?;
//! ```
use game_content::OpeningBook;
use game_core::{Command, Frame, Race};
use maneuver::{Behavior, BehaviorExecutioner, FrameReport, run_isolated};
use tracing::{debug, info, warn};

use crate::build_order::BuildOrderRunner;
use crate::config::RuntimeConfig;
use crate::context::BotContext;
use crate::error::{Result, RuntimeError};
use crate::services::Services;

const RUNNER_NAME: &str = "BuildOrderRunner";

/// Everything one agent step produced.
#[derive(Debug, Clone, Default)]
pub struct FrameOutput {
    pub commands: Vec<Command>,
    pub report: FrameReport,
}

pub struct Bot {
    ctx: BotContext,
    executioner: BehaviorExecutioner<BotContext>,
    build_runner: Option<BuildOrderRunner>,
    isolate_failures: bool,
}

impl Bot {
    pub fn builder() -> BotBuilder {
        BotBuilder::new()
    }

    /// Starts a new agent step with a fresh snapshot.
    ///
    /// Behaviors registered but not executed in the previous step are
    /// dropped along with any unsent commands.
    pub fn begin_frame(&mut self, frame: Frame) {
        if !self.executioner.is_empty() {
            warn!(
                pending = self.executioner.len(),
                "previous frame was never finished; discarding its behaviors"
            );
            self.executioner = BehaviorExecutioner::new().with_isolation(self.isolate_failures);
        }
        let game_loop = frame.game_loop;
        self.ctx.begin_frame(frame);
        self.ctx.cooldowns_mut().prune(game_loop);
    }

    /// Queues a behavior for this frame. Runs in registration order.
    pub fn register_behavior<B>(&mut self, behavior: B)
    where
        B: Behavior<BotContext> + 'static,
    {
        self.executioner.register(behavior);
    }

    /// Advances the opening, runs every registered behavior and drains the
    /// command buffer.
    ///
    /// Fails with [`RuntimeError::Execution`] when the opening or a behavior
    /// panicked; everything else of the frame still ran, but its commands are
    /// discarded with the failed frame. A panicking opening is reported one
    /// index past the registered behaviors.
    pub fn finish_frame(&mut self) -> Result<FrameOutput> {
        let runner_index = self.executioner.len();
        let isolate = self.isolate_failures;
        let ctx = &mut self.ctx;
        let runner_failure = self.build_runner.as_mut().and_then(|runner| {
            run_isolated(runner_index, RUNNER_NAME, isolate, || runner.run(ctx)).err()
        });

        let mut report = self.executioner.execute(&mut self.ctx);
        report.failures.extend(runner_failure);
        let commands = self.ctx.take_commands();
        let report = report.into_result()?;

        debug!(
            game_loop = self.ctx.game_loop(),
            commands = commands.len(),
            acted = report.acted,
            "frame finished"
        );
        Ok(FrameOutput { commands, report })
    }

    pub fn context(&self) -> &BotContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut BotContext {
        &mut self.ctx
    }

    pub fn build_runner(&self) -> Option<&BuildOrderRunner> {
        self.build_runner.as_ref()
    }

    pub fn is_opening_completed(&self) -> bool {
        self.build_runner
            .as_ref()
            .is_none_or(BuildOrderRunner::is_completed)
    }
}

/// Builder for [`Bot`].
pub struct BotBuilder {
    services: Option<Services>,
    config: RuntimeConfig,
    opening_book: Option<OpeningBook>,
    build_runner: Option<BuildOrderRunner>,
    race: Race,
}

impl BotBuilder {
    fn new() -> Self {
        Self {
            services: None,
            config: RuntimeConfig::default(),
            opening_book: None,
            build_runner: None,
            race: Race::Terran,
        }
    }

    /// Set the world services (required).
    pub fn services(mut self, services: Services) -> Self {
        self.services = Some(services);
        self
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Openings the configured `opening` is looked up in.
    pub fn opening_book(mut self, book: OpeningBook) -> Self {
        self.opening_book = Some(book);
        self
    }

    /// Drive this build order instead of looking one up in the opening book.
    pub fn build_runner(mut self, runner: BuildOrderRunner) -> Self {
        self.build_runner = Some(runner);
        self
    }

    /// Race the opening is expanded for.
    pub fn race(mut self, race: Race) -> Self {
        self.race = race;
        self
    }

    pub fn build(self) -> Result<Bot> {
        let services = self
            .services
            .ok_or(RuntimeError::MissingService { name: "services" })?;
        let bot_config = self.config.bot.clone();

        let build_runner = match (self.build_runner, bot_config.opening.as_deref()) {
            (Some(runner), _) => {
                info!(opening = runner.opening(), steps = runner.len(), "build order supplied");
                Some(runner)
            }
            (None, Some(name)) => {
                let opening = self
                    .opening_book
                    .as_ref()
                    .and_then(|book| book.opening(name))
                    .ok_or_else(|| RuntimeError::UnknownOpening(name.to_string()))?;
                let mut runner = BuildOrderRunner::from_opening(name, opening, self.race)?;
                if bot_config.constant_worker_production_till > 0 {
                    runner = runner
                        .constant_worker_production_till(bot_config.constant_worker_production_till);
                }
                if !bot_config.persistent_worker {
                    runner = runner.persistent_worker(false);
                }
                info!(opening = name, steps = runner.len(), race = ?self.race, "opening loaded");
                Some(runner)
            }
            (None, None) => None,
        };

        Ok(Bot {
            ctx: BotContext::new(services, bot_config),
            executioner: BehaviorExecutioner::new().with_isolation(self.config.isolate_failures),
            build_runner,
            isolate_failures: self.config.isolate_failures,
        })
    }
}
