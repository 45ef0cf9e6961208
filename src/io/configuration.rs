//! Game constants and runtime configuration defaults

// Scoring
/// Points for a single match before the level multiplier is applied
pub const MATCH_POINTS: u64 = 10;
/// Points per remaining whole second when a level is cleared
pub const TIME_BONUS_PER_SECOND: u64 = 5;

// Board geometry
/// Cells a connecting path may travel outside the board on each side
pub const BOARD_MARGIN: i32 = 1;

// Safety limit to keep the two-bend scan and layouts small
/// Maximum allowed rows or columns of a level
pub const MAX_BOARD_DIMENSION: usize = 32;

// Prevents an unlucky board from reshuffling forever
/// Maximum reshuffles when resolving a deadlocked board
pub const MAX_RESHUFFLE_ATTEMPTS: usize = 64;

// Default values for configurable parameters
/// Fixed seed for reproducible layouts
pub const DEFAULT_SEED: u64 = 42;
/// Default number of simulated games
pub const DEFAULT_GAMES: usize = 1;
/// Default simulated time spent on each move
pub const DEFAULT_MOVE_TIME_MS: u64 = 1500;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to board snapshot filenames
pub const SNAPSHOT_SUFFIX: &str = "_board";
/// Suffix added to replay filenames
pub const REPLAY_SUFFIX: &str = "_replay";
/// Edge length of one board cell in exported images (pixels)
pub const SNAPSHOT_CELL_SIZE: u32 = 16;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 120;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
