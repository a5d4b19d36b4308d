//! Cascade orchestration.
//!
//! [`CascadeEngine`] strings the per-round steps together — detect → resolve
//! → score → clear → drop → refill — until a scan comes up empty. It is the
//! engine's only stateful-looking surface, yet still a pure transformation:
//! the caller hands in a grid by value and receives the settled grid plus
//! every intermediate round for playback. Pacing, animation, and applying
//! damage to health totals stay on the host side; a host that aborts
//! mid-animation simply discards the remaining buffered rounds.

use std::collections::BTreeSet;

use crate::board::{GenerateError, Grid, Position, Tile, apply_gravity, generate_initial_grid, refill};
use crate::chain::{TriggeredEffect, resolve_chains};
use crate::combat::{ModifierSet, score_round};
use crate::config::BoardConfig;
use crate::detect::{BonusTile, detect_matches, plan_bonus_tiles};
use crate::env::EngineEnv;
use crate::error::{EngineError, ErrorSeverity};

/// The player swap that initiated a cascade.
///
/// `second` is the cell the grabbed tile landed on; it is preferred as the
/// anchor for special tiles created on the first round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapAction {
    pub first: Position,
    pub second: Position,
}

impl SwapAction {
    pub const fn new(first: Position, second: Position) -> Self {
        Self { first, second }
    }
}

/// Everything that happened in one cascade round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// 1-based round index; feeds the combo multiplier.
    pub round: u32,
    /// Cells cleared this round: initial matches plus chain sweeps.
    pub cleared: BTreeSet<Position>,
    /// Modifier firings, in order.
    pub triggered: Vec<TriggeredEffect>,
    /// Special tiles written back after the clear.
    pub bonus_tiles: Vec<BonusTile>,
    pub damage: u32,
    pub healing: u32,
}

/// Running totals across a whole cascade.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CascadeTotals {
    pub damage: u32,
    pub healing: u32,
    pub rounds: u32,
}

/// How a cascade ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CascadeVerdict {
    /// The board reached a stable state.
    Settled,
    /// A hinted swap produced no match on the first scan. Not a failure: the
    /// host should revert the visual swap. The returned grid is unchanged.
    NoMatchOnSwap,
}

/// Full record of one cascade invocation.
///
/// The host adopts `grid` wholesale and replays `rounds` at whatever pace it
/// likes; the engine itself never waits.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CascadeOutcome {
    /// Per-round results in cascade order.
    pub rounds: Vec<RoundResult>,
    /// The settled grid.
    pub grid: Grid,
    pub totals: CascadeTotals,
    pub verdict: CascadeVerdict,
}

impl CascadeOutcome {
    /// True when the host should revert the initiating swap.
    pub fn is_rejected_swap(&self) -> bool {
        matches!(self.verdict, CascadeVerdict::NoMatchOnSwap)
    }
}

/// Engine faults. None of these occur in normal play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CascadeError {
    /// The round counter passed the defensive cap. With sane tuning this
    /// means a corrupted grid or a broken random source.
    #[error("cascade exceeded {limit} rounds without settling")]
    RoundLimitExceeded { limit: u32 },
}

impl EngineError for CascadeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::RoundLimitExceeded { .. } => "CASCADE_ROUND_LIMIT_EXCEEDED",
        }
    }
}

/// Synchronous cascade driver bound to a host environment.
///
/// The engine holds no grid and no session state; it borrows its oracles for
/// the duration of the calls the host makes.
pub struct CascadeEngine<'a> {
    env: EngineEnv<'a>,
}

impl<'a> CascadeEngine<'a> {
    pub fn new(env: EngineEnv<'a>) -> Self {
        Self { env }
    }

    /// Generates a fresh match-free board using the bound environment.
    pub fn new_board(&self, config: &BoardConfig, seed: u64) -> Result<Grid, GenerateError> {
        generate_initial_grid(
            config,
            self.env.balance().symbol_count(),
            self.env.rng(),
            seed,
        )
    }

    /// Runs a full cascade to quiescence.
    ///
    /// `action` is consumed on the first scan only: it supplies the
    /// special-tile anchor hint and arms the
    /// [`CascadeVerdict::NoMatchOnSwap`] signal. `active` parameterizes the
    /// damage and healing formulas for this call; the engine never retains
    /// it. `seed` keys every refill draw, so the outcome is a pure function
    /// of the arguments.
    pub fn run_cascade(
        &self,
        grid: Grid,
        action: Option<SwapAction>,
        active: ModifierSet,
        seed: u64,
    ) -> Result<CascadeOutcome, CascadeError> {
        let balance = self.env.balance();
        let rng = self.env.rng();

        let mut grid = grid;
        let mut rounds: Vec<RoundResult> = Vec::new();
        let mut totals = CascadeTotals::default();

        loop {
            let runs = detect_matches(&grid);
            if runs.is_empty() {
                let verdict = if rounds.is_empty() && action.is_some() {
                    CascadeVerdict::NoMatchOnSwap
                } else {
                    CascadeVerdict::Settled
                };
                return Ok(CascadeOutcome {
                    rounds,
                    grid,
                    totals,
                    verdict,
                });
            }

            let round = totals.rounds + 1;
            if round > BoardConfig::MAX_CASCADE_ROUNDS {
                return Err(CascadeError::RoundLimitExceeded {
                    limit: BoardConfig::MAX_CASCADE_ROUNDS,
                });
            }

            // The swap hint only applies to the first scan.
            let hint = if round == 1 {
                action.map(|started| started.second)
            } else {
                None
            };
            let bonus_tiles = plan_bonus_tiles(&grid, &runs, hint);

            let seeds = runs.iter().flat_map(|run| run.positions.iter().copied());
            let resolution = resolve_chains(&grid, seeds, balance.blast_radius());
            let score = score_round(&grid, &resolution, round, active, balance);

            for &position in &resolution.cleared {
                grid.set(position, Tile::Vacant);
            }
            // Bonus tiles land after the clear so they survive their own round.
            for bonus in &bonus_tiles {
                grid.set(bonus.position, Tile::special(bonus.symbol, bonus.modifier));
            }

            apply_gravity(&mut grid);
            refill(&mut grid, rng, balance.symbol_count(), seed, round);

            totals.damage += score.damage;
            totals.healing += score.healing;
            totals.rounds = round;
            rounds.push(RoundResult {
                round,
                cleared: resolution.cleared,
                triggered: resolution.triggered,
                bonus_tiles,
                damage: score.damage,
                healing: score.healing,
            });
        }
    }
}
