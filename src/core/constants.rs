// Screen (world units, y-up, origin bottom-left)
pub const SCREEN_WIDTH: f64 = 800.0;
pub const SCREEN_HEIGHT: f64 = 480.0;

// Frame loop
pub const TARGET_FPS: u32 = 60;
pub const MAX_FRAME_DT: f64 = 0.25;

// Dino
pub const DINO_X: f64 = 50.0;
pub const DINO_GROUND_Y: f64 = 125.0;
pub const DINO_WIDTH: f64 = 88.0;
pub const DINO_HEIGHT: f64 = 94.0;
pub const GRAVITY: f64 = -200.0;
pub const JUMP_VELOCITY: f64 = 300.0;

// Session
pub const STARTING_LIVES: u32 = 3;

// Background scroll
pub const BG_SCROLL_SPEED: f64 = 4.0;
pub const BG_WIDTH: f64 = 800.0;

// Cacti
pub const CACTUS_SPAWN_DELAY: f64 = 3.0;
pub const CACTUS_Y: f64 = 85.0;
pub const CACTUS_WIDTH: f64 = 200.0;
pub const CACTUS_HEIGHT: f64 = 300.0;
pub const CACTUS_SPEED: f64 = -200.0;

// Collision inset applied to every cactus sprite: the hitbox starts
// BOUNDS_OFFSET in from the sprite corner and is narrower/shorter by the
// shrink amounts.
pub const CACTUS_BOUNDS_OFFSET: f64 = 50.0;
pub const CACTUS_BOUNDS_WIDTH_SHRINK: f64 = 100.0;
pub const CACTUS_BOUNDS_HEIGHT_SHRINK: f64 = 180.0;

// HUD placement, measured from the top-right corner
pub const HUD_RIGHT_MARGIN: f64 = 100.0;
pub const HUD_SCORE_TOP_MARGIN: f64 = 10.0;
pub const HUD_LIVES_TOP_MARGIN: f64 = 30.0;

// Main menu
pub const MENU_BUTTON_WIDTH: f64 = 200.0;
pub const MENU_BUTTON_HEIGHT: f64 = 60.0;
pub const MENU_TITLE_RAISE: f64 = 100.0;
pub const MENU_CONTROLS_DROP: f64 = 100.0;

// Files under ~/.dino-run/
pub const DATA_DIR_NAME: &str = ".dino-run";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "dino-run.log";
