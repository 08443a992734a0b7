//! Multi-episode training loop.
//!
//! Runs episodes back to back, building a fresh board for every episode so
//! that no occupancy state carries over between them.

use serde::{Deserialize, Serialize};

use crate::agents::Agent;
use crate::core::BoardConfig;
use crate::error::Result;
use crate::observer::BoardObserver;
use crate::rules::GameEngine;

use super::episode::play_episode;
use super::trajectory::Trajectory;

/// Configuration for a training run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of episodes to play.
    pub episodes: usize,

    /// Exploration rate handed to the agent in the first episode.
    pub exploration_rate: f64,

    /// Multiplicative decay applied to the exploration rate per episode.
    /// 1.0 = constant.
    pub exploration_decay: f64,

    /// Floor for the decayed exploration rate.
    pub min_exploration: f64,

    /// Ask the agent for its best move instead of exploring.
    pub choose_best: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 100,
            exploration_rate: 1.0,
            exploration_decay: 0.99,
            min_exploration: 0.01,
            choose_best: false,
        }
    }
}

impl TrainingConfig {
    /// Create a new training config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of episodes.
    #[must_use]
    pub fn with_episodes(mut self, episodes: usize) -> Self {
        self.episodes = episodes;
        self
    }

    /// Set the starting exploration rate.
    #[must_use]
    pub fn with_exploration(mut self, rate: f64) -> Self {
        self.exploration_rate = rate;
        self
    }

    /// Set the per-episode exploration decay.
    #[must_use]
    pub fn with_exploration_decay(mut self, decay: f64) -> Self {
        self.exploration_decay = decay;
        self
    }

    /// Set the exploration floor.
    #[must_use]
    pub fn with_min_exploration(mut self, min: f64) -> Self {
        self.min_exploration = min;
        self
    }

    /// Request greedy play.
    #[must_use]
    pub fn with_choose_best(mut self, choose_best: bool) -> Self {
        self.choose_best = choose_best;
        self
    }

    /// Get the exploration rate for a given episode number.
    ///
    /// Never drops below `min_exploration`, unless the starting rate is
    /// already lower.
    pub fn effective_exploration(&self, episode: usize) -> f64 {
        let exponent = episode.min(i32::MAX as usize) as i32;
        let decayed = self.exploration_rate * self.exploration_decay.powi(exponent);
        decayed.max(self.min_exploration.min(self.exploration_rate))
    }
}

/// Aggregate outcome of a training run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Episodes played.
    pub episodes: usize,

    /// Episodes that ended with a single peg.
    pub wins: usize,

    /// Pegs left at the end of each episode.
    pub remaining_pegs: Vec<usize>,

    /// Terminal reward of each episode.
    pub final_rewards: Vec<i64>,
}

impl TrainingSummary {
    /// Record a finished episode.
    pub fn record(&mut self, trajectory: &Trajectory) {
        self.episodes += 1;
        if trajectory.result.is_victory() {
            self.wins += 1;
        }
        self.remaining_pegs.push(trajectory.result.remaining_pegs());
        self.final_rewards.push(trajectory.final_reward());
    }

    /// Fraction of episodes won.
    pub fn win_rate(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.wins as f64 / self.episodes as f64
    }

    /// Mean pegs left per episode.
    pub fn mean_remaining_pegs(&self) -> f64 {
        if self.remaining_pegs.is_empty() {
            return 0.0;
        }
        self.remaining_pegs.iter().sum::<usize>() as f64 / self.remaining_pegs.len() as f64
    }

    /// Fewest pegs left in any episode.
    pub fn best_remaining_pegs(&self) -> Option<usize> {
        self.remaining_pegs.iter().copied().min()
    }
}

/// Runs many episodes of one board configuration against one agent.
#[derive(Clone, Debug)]
pub struct Trainer {
    board: BoardConfig,
    config: TrainingConfig,
}

impl Trainer {
    /// Create a trainer.
    ///
    /// The board configuration is validated here, so a bad configuration
    /// fails before any episode runs.
    pub fn new(board: BoardConfig, config: TrainingConfig) -> Result<Self> {
        board.validate()?;
        Ok(Self { board, config })
    }

    /// Get the board configuration.
    pub fn board_config(&self) -> &BoardConfig {
        &self.board
    }

    /// Get the training configuration.
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Play all episodes and summarize them.
    pub fn run<A, O>(&self, agent: &mut A, observer: &mut O) -> Result<TrainingSummary>
    where
        A: Agent + ?Sized,
        O: BoardObserver + ?Sized,
    {
        let mut summary = TrainingSummary::default();
        self.for_each_episode(agent, observer, |trajectory| summary.record(&trajectory))?;
        Ok(summary)
    }

    /// Play all episodes and keep every trajectory.
    pub fn collect<A, O>(&self, agent: &mut A, observer: &mut O) -> Result<Vec<Trajectory>>
    where
        A: Agent + ?Sized,
        O: BoardObserver + ?Sized,
    {
        let mut trajectories = Vec::with_capacity(self.config.episodes);
        self.for_each_episode(agent, observer, |trajectory| trajectories.push(trajectory))?;
        Ok(trajectories)
    }

    fn for_each_episode<A, O>(
        &self,
        agent: &mut A,
        observer: &mut O,
        mut sink: impl FnMut(Trajectory),
    ) -> Result<()>
    where
        A: Agent + ?Sized,
        O: BoardObserver + ?Sized,
    {
        for episode in 0..self.config.episodes {
            let mut engine = GameEngine::new(&self.board)?;
            let trajectory = play_episode(
                &mut engine,
                agent,
                observer,
                self.config.effective_exploration(episode),
                self.config.choose_best,
            )?;
            sink(trajectory);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{IndexAgent, RandomAgent};
    use crate::board::StateKey;
    use crate::core::Action;
    use crate::observer::NoopObserver;

    #[test]
    fn test_training_config_default() {
        let config = TrainingConfig::default();
        assert_eq!(config.episodes, 100);
        assert_eq!(config.exploration_rate, 1.0);
        assert!(!config.choose_best);
    }

    #[test]
    fn test_effective_exploration() {
        let config = TrainingConfig::default()
            .with_exploration(1.0)
            .with_exploration_decay(0.5)
            .with_min_exploration(0.1);

        assert_eq!(config.effective_exploration(0), 1.0);
        assert_eq!(config.effective_exploration(1), 0.5);
        assert_eq!(config.effective_exploration(2), 0.25);
        assert_eq!(config.effective_exploration(10), 0.1);
    }

    #[test]
    fn test_effective_exploration_below_floor() {
        let config = TrainingConfig::default()
            .with_exploration(0.0)
            .with_min_exploration(0.1);

        assert_eq!(config.effective_exploration(0), 0.0);
        assert_eq!(config.effective_exploration(50), 0.0);
    }

    #[test]
    fn test_trainer_rejects_bad_board() {
        let err = Trainer::new(BoardConfig::triangle(0), TrainingConfig::default()).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_fresh_board_per_episode() {
        let trainer = Trainer::new(
            BoardConfig::triangle(4).with_hole(1, 1),
            TrainingConfig::default().with_episodes(5),
        )
        .unwrap();

        let trajectories = trainer.collect(&mut RandomAgent::new(1), &mut NoopObserver).unwrap();

        assert_eq!(trajectories.len(), 5);
        for t in &trajectories {
            assert_eq!(t.initial_state.as_str(), "1101111111");
        }
    }

    #[test]
    fn test_summary_counts() {
        let trainer = Trainer::new(
            BoardConfig::triangle(4).with_hole(1, 1),
            TrainingConfig::default().with_episodes(3),
        )
        .unwrap();

        let summary = trainer.run(&mut IndexAgent::first(), &mut NoopObserver).unwrap();

        assert_eq!(summary.episodes, 3);
        assert_eq!(summary.remaining_pegs.len(), 3);
        // Deterministic agent, identical boards: identical outcomes.
        assert!(summary.remaining_pegs.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(summary.best_remaining_pegs(), Some(summary.remaining_pegs[0]));
    }

    #[test]
    fn test_exploration_schedule_reaches_agent() {
        struct RateProbe {
            rates: Vec<f64>,
            best: Vec<bool>,
        }

        impl Agent for RateProbe {
            fn get_move(&mut self, _: &StateKey, moves: &[Action], e: f64, best: bool) -> Action {
                if self.rates.last() != Some(&e) {
                    self.rates.push(e);
                }
                self.best.push(best);
                moves[0]
            }
        }

        let trainer = Trainer::new(
            BoardConfig::triangle(4).with_hole(1, 1),
            TrainingConfig::default()
                .with_episodes(3)
                .with_exploration(0.8)
                .with_exploration_decay(0.5)
                .with_min_exploration(0.0)
                .with_choose_best(true),
        )
        .unwrap();

        let mut probe = RateProbe {
            rates: Vec::new(),
            best: Vec::new(),
        };
        trainer.run(&mut probe, &mut NoopObserver).unwrap();

        assert_eq!(probe.rates, vec![0.8, 0.4, 0.2]);
        assert!(probe.best.iter().all(|&b| b));
    }

    #[test]
    fn test_summary_rates() {
        let mut summary = TrainingSummary::default();
        assert_eq!(summary.win_rate(), 0.0);
        assert_eq!(summary.mean_remaining_pegs(), 0.0);
        assert_eq!(summary.best_remaining_pegs(), None);

        summary.episodes = 4;
        summary.wins = 1;
        summary.remaining_pegs = vec![1, 3, 2, 2];
        assert_eq!(summary.win_rate(), 0.25);
        assert_eq!(summary.mean_remaining_pegs(), 2.0);
        assert_eq!(summary.best_remaining_pegs(), Some(1));
    }
}
