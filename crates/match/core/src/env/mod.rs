//! Read-only oracles supplying balance data and randomness.
//!
//! The engine never owns tuning or entropy: both arrive by reference through
//! [`Env`], so hosts can swap balance tables and random sources without
//! touching engine code, and replays stay deterministic.
mod balance;
mod rng;

pub use balance::{BalanceOracle, BalanceTable, DamageParams, HealingParams};
pub use rng::{PcgRng, RngOracle, mix_seed};

/// Aggregates the read-only oracles required by the cascade engine.
///
/// Unlike a full game environment, both oracles are mandatory — there is no
/// cascade without tuning values and refill randomness — so absence is
/// unrepresentable rather than a runtime error.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, B, R>
where
    B: BalanceOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    balance: &'a B,
    rng: &'a R,
}

/// Trait-object form used across the engine surface.
pub type EngineEnv<'a> = Env<'a, dyn BalanceOracle + 'a, dyn RngOracle + 'a>;

impl<'a, B, R> Env<'a, B, R>
where
    B: BalanceOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(balance: &'a B, rng: &'a R) -> Self {
        Self { balance, rng }
    }

    pub fn balance(&self) -> &'a B {
        self.balance
    }

    pub fn rng(&self) -> &'a R {
        self.rng
    }
}

impl<'a, B, R> Env<'a, B, R>
where
    B: BalanceOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into the trait-object based [`EngineEnv`].
    pub fn as_engine_env(&self) -> EngineEnv<'a> {
        Env {
            balance: self.balance as _,
            rng: self.rng as _,
        }
    }
}
