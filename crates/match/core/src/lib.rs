//! Deterministic match-resolution engine for a tile-matching combat game.
//!
//! `match-core` implements the pure board algebra — match detection,
//! special-tile chain resolution, cascade scoring, and the gravity/refill
//! mutators — behind a synchronous value-in/value-out API. The host
//! application owns pacing, rendering, and health bookkeeping: it hands the
//! engine a grid snapshot plus its active battle modifiers, and replays the
//! returned rounds however it likes. All randomness flows through
//! [`env::RngOracle`], so a fixed seed replays a cascade bit-for-bit.
pub mod board;
pub mod chain;
pub mod combat;
pub mod config;
pub mod detect;
pub mod engine;
pub mod env;
pub mod error;

pub use board::{
    GenerateError, Grid, Position, SwapError, Symbol, Tile, TileModifier, apply_gravity,
    are_adjacent, find_potential_move, generate_initial_grid, refill, swap,
};
pub use chain::{ChainResolution, TriggeredEffect, resolve_chains};
pub use combat::{BattleModifier, ModifierSet, RoundScore, score_round};
pub use config::BoardConfig;
pub use detect::{BonusTile, MatchAxis, MatchRun, detect_matches, plan_bonus_tiles};
pub use engine::{
    CascadeEngine, CascadeError, CascadeOutcome, CascadeTotals, CascadeVerdict, RoundResult,
    SwapAction,
};
pub use env::{
    BalanceOracle, BalanceTable, DamageParams, Env, EngineEnv, HealingParams, PcgRng, RngOracle,
    mix_seed,
};
pub use error::{EngineError, ErrorSeverity};
