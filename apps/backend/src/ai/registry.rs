//! Maps AI agent identifiers to move providers.
//!
//! The identifiers sent by clients (`DQN`, `A3C`, `PPO`) name policies this
//! server treats as opaque; each is bound to an in-process provider here.
//! Keep ordering stable; avoid side effects in constructors.

use crate::ai::{GreedyPlacer, MoveProvider, RandomPlayer};
use crate::domain::AiAgent;

/// Factory definition for constructing move providers.
pub struct AiFactory {
    pub agent: AiAgent,
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn MoveProvider>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        agent: AiAgent::Dqn,
        name: GreedyPlacer::NAME,
        version: GreedyPlacer::VERSION,
        make: make_greedy,
    },
    AiFactory {
        agent: AiAgent::A3c,
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
    AiFactory {
        agent: AiAgent::Ppo,
        name: GreedyPlacer::NAME,
        version: GreedyPlacer::VERSION,
        make: make_greedy,
    },
];

/// Returns the statically registered AI factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds the factory bound to an agent identifier.
pub fn by_agent(agent: AiAgent) -> Option<&'static AiFactory> {
    registered_ais().iter().find(|factory| factory.agent == agent)
}

/// Build the provider registered for `agent`, if any.
pub fn provider_for(agent: AiAgent, seed: Option<u64>) -> Option<Box<dyn MoveProvider>> {
    by_agent(agent).map(|factory| (factory.make)(seed))
}

fn make_random_player(seed: Option<u64>) -> Box<dyn MoveProvider> {
    Box::new(RandomPlayer::new(seed))
}

fn make_greedy(seed: Option<u64>) -> Box<dyn MoveProvider> {
    Box::new(GreedyPlacer::new(seed))
}
