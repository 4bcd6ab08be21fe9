pub mod ai;
pub mod calculators;
pub mod engine;
pub mod rng;
pub mod state;
pub mod turn_orchestrator;

#[cfg(test)]
mod tests;
