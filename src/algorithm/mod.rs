/// Deadlock detection and reshuffling
pub mod deadlock;
/// Search for currently matchable pairs
pub mod hint;
/// Two-bend connectivity check between tiles
pub mod path;
/// Straight segment and single cell clearance checks
pub mod segment;
/// Automatic player for simulations
pub mod solver;
