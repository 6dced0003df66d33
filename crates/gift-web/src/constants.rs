// Frontend layout and presentation constants.

// DOM element ids the overlay and canvas wiring expect in index.html.
pub const CANVAS_ID: &str = "gift-canvas";
pub const TITLE_ID: &str = "title";
pub const HINT_ID: &str = "hint";
pub const REPLAY_ID: &str = "replay";
pub const GREETING_ID: &str = "greeting";
pub const GREETING_HEADLINE_ID: &str = "greeting-headline";
pub const GREETING_SUBTITLE_ID: &str = "greeting-subtitle";

// Camera: slightly above the box, looking at the origin.
pub const CAMERA_EYE: [f32; 3] = [0.0, 1.5, 9.0];
pub const CAMERA_FOVY_RADIANS: f32 = 50.0 * std::f32::consts::PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Pointer picking
pub const BOX_HIT_RADIUS: f32 = 1.8; // generous sphere around the box

// Rendered sizes
pub const SPIRAL_POINT_SCALE: f32 = 0.09; // world size of one spiral glow quad
pub const SPIRAL_VISIBILITY_CUTOFF: f32 = 0.01; // skip quads dimmer than this

// Box part colors
pub const VELVET_COLOR: [f32; 3] = [0.565, 0.047, 0.247]; // deep ruby
pub const GOLD_COLOR: [f32; 3] = [1.0, 0.843, 0.0];
pub const FLOOR_COLOR: [f32; 3] = [1.0, 0.894, 0.882]; // misty rose

// Greeting layer: world-space y mapped to CSS pixels of upward travel.
pub const GREETING_PX_PER_UNIT: f32 = 40.0;
