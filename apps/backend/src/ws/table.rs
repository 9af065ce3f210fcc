//! The game table: the single owner of the running game.
//!
//! Every intent, human or AI, arrives as a message in this actor's mailbox
//! and is validated, applied and broadcast before the next one is read.

use std::sync::Arc;
use std::time::Duration;

use actix::prelude::*;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::ai::{provider_for, MoveProvider, RandomPlayer};
use crate::config::server::ServerConfig;
use crate::domain::{
    AiAgent, GameController, GameState, Intent, PlayerId, RowComparisonScorer, ShuffledDeck,
};
use crate::error::AppError;
use crate::ws::hub::{SessionRegistry, TableEvent};

#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub conn_id: Uuid,
    pub recipient: Recipient<TableEvent>,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub conn_id: Uuid,
}

/// An intent from a connected session.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Submit {
    pub conn_id: Uuid,
    pub intent: Intent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStatus {
    pub game_in_progress: bool,
    pub connections: usize,
}

#[derive(Message)]
#[rtype(result = "TableStatus")]
pub struct GetStatus;

/// AI players for the current game.
struct AiSeats {
    seats: Vec<PlayerId>,
    provider: Box<dyn MoveProvider>,
}

pub struct GameTable {
    registry: Arc<SessionRegistry>,
    controller: GameController,
    game: Option<GameState>,
    ai: Option<AiSeats>,
    /// Bumped on every applied change; pending AI turns from an older
    /// generation are dropped.
    generation: u64,
    ai_think: Duration,
    ai_seed: Option<u64>,
    report_rejections: bool,
    make_provider: ProviderFactory,
    /// Plays for an AI seat whose provider fails, so the game keeps moving.
    fallback: RandomPlayer,
}

/// Builds the provider for a game's AI seats.
pub type ProviderFactory = fn(AiAgent, Option<u64>) -> Option<Box<dyn MoveProvider>>;

impl GameTable {
    pub fn new(config: &ServerConfig, registry: Arc<SessionRegistry>) -> Self {
        let controller = GameController::new(
            Box::new(ShuffledDeck::new(config.deal_seed)),
            Box::new(RowComparisonScorer),
        );
        Self::with_controller(config, registry, controller)
    }

    /// Table over a caller-supplied controller, e.g. one with a stacked deck.
    pub fn with_controller(
        config: &ServerConfig,
        registry: Arc<SessionRegistry>,
        controller: GameController,
    ) -> Self {
        Self {
            registry,
            controller,
            game: None,
            ai: None,
            generation: 0,
            ai_think: config.ai_think,
            ai_seed: config.ai_seed,
            report_rejections: config.report_rejections,
            make_provider: provider_for,
            fallback: RandomPlayer::new(config.ai_seed),
        }
    }

    /// Replace the registry lookup used when a game assigns AI seats.
    pub fn with_provider_factory(mut self, make_provider: ProviderFactory) -> Self {
        self.make_provider = make_provider;
        self
    }

    fn provider(&self, agent: AiAgent) -> Box<dyn MoveProvider> {
        match (self.make_provider)(agent, self.ai_seed) {
            Some(provider) => provider,
            None => {
                error!(%agent, "[TABLE] no provider registered; AI seats play randomly");
                Box::new(RandomPlayer::new(self.ai_seed))
            }
        }
    }

    fn status(&self) -> TableStatus {
        TableStatus {
            game_in_progress: self.game.as_ref().is_some_and(|g| !g.game_over),
            connections: self.registry.active_connections_count(),
        }
    }

    /// Validate, apply and broadcast one intent. `origin` is `None` for AI moves.
    fn process(&mut self, origin: Option<Uuid>, intent: Intent, ctx: &mut Context<Self>) {
        let next = match self.controller.apply(self.game.as_ref(), &intent) {
            Ok(next) => next,
            Err(err) => {
                debug!(
                    conn_id = ?origin,
                    code = %err.code(),
                    detail = err.detail(),
                    "[TABLE] intent rejected"
                );
                if let (true, Some(conn_id)) = (self.report_rejections, origin) {
                    self.registry.send_to(
                        conn_id,
                        TableEvent::Rejected {
                            code: err.code(),
                            detail: err.detail().to_string(),
                        },
                    );
                }
                return;
            }
        };

        if let Intent::StartGame(start) = &intent {
            let seats = start.ai_seats();
            self.ai = if seats.is_empty() {
                None
            } else {
                info!(agent = %start.ai_agent, seats = ?seats, "[TABLE] AI seats assigned");
                Some(AiSeats {
                    seats,
                    provider: self.provider(start.ai_agent),
                })
            };
        }

        self.generation += 1;
        let snapshot = Arc::new(next.clone());
        self.game = Some(next);
        self.registry.broadcast(TableEvent::Snapshot(snapshot));
        self.schedule_ai_turn(ctx);
    }

    fn ai_to_act(&self) -> Option<PlayerId> {
        let game = self.game.as_ref().filter(|g| !g.game_over)?;
        let ai = self.ai.as_ref()?;
        let seat = game.current_player_index;
        ai.seats.contains(&seat).then_some(seat)
    }

    fn schedule_ai_turn(&mut self, ctx: &mut Context<Self>) {
        let Some(seat) = self.ai_to_act() else {
            return;
        };
        let generation = self.generation;
        debug!(seat, generation, "[TABLE] AI turn scheduled");
        ctx.run_later(self.ai_think, move |table, ctx| {
            table.run_ai_turn(generation, ctx);
        });
    }

    fn run_ai_turn(&mut self, generation: u64, ctx: &mut Context<Self>) {
        if generation != self.generation {
            debug!(
                scheduled = generation,
                current = self.generation,
                "[TABLE] dropping stale AI turn"
            );
            return;
        }
        let Some(seat) = self.ai_to_act() else {
            return;
        };
        let (Some(game), Some(ai)) = (self.game.as_ref(), self.ai.as_ref()) else {
            return;
        };

        let proposal = ai.provider.propose_move(game, seat).or_else(|err| {
            let err = AppError::from(err);
            warn!(
                seat,
                code = %err.code(),
                detail = %err.detail(),
                "[TABLE] AI provider failed; playing a random card"
            );
            self.fallback.propose_move(game, seat)
        });
        match proposal {
            Ok(choice) => {
                debug!(
                    seat,
                    card_index = choice.card_index,
                    street = %choice.street,
                    "[TABLE] AI move proposed"
                );
                self.process(None, Intent::MakeMove(choice.into_intent(seat)), ctx);
            }
            Err(err) => {
                let err = AppError::from(err);
                error!(seat, code = %err.code(), detail = %err.detail(), "[TABLE] AI seat cannot move");
            }
        }
    }

    fn discard_game(&mut self) {
        if self.game.take().is_some() {
            info!("[TABLE] last connection closed; game discarded");
        }
        self.ai = None;
        self.generation += 1;
    }
}

impl Actor for GameTable {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!(report_rejections = self.report_rejections, "[TABLE] started");
    }
}

impl Handler<Connect> for GameTable {
    type Result = ();

    fn handle(&mut self, msg: Connect, _ctx: &mut Self::Context) -> Self::Result {
        self.registry.register(msg.conn_id, msg.recipient);
        info!(
            conn_id = %msg.conn_id,
            connections = self.registry.active_connections_count(),
            "[TABLE] connection joined"
        );
    }
}

impl Handler<Disconnect> for GameTable {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, _ctx: &mut Self::Context) -> Self::Result {
        if !self.registry.unregister(msg.conn_id) {
            warn!(conn_id = %msg.conn_id, "[TABLE] disconnect for unknown connection");
        }
        info!(
            conn_id = %msg.conn_id,
            connections = self.registry.active_connections_count(),
            "[TABLE] connection left"
        );
        if self.registry.is_empty() {
            self.discard_game();
        }
    }
}

impl Handler<Submit> for GameTable {
    type Result = ();

    fn handle(&mut self, msg: Submit, ctx: &mut Self::Context) -> Self::Result {
        self.process(Some(msg.conn_id), msg.intent, ctx);
    }
}

impl Handler<GetStatus> for GameTable {
    type Result = MessageResult<GetStatus>;

    fn handle(&mut self, _msg: GetStatus, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.status())
    }
}
