// Shared animation tuning constants used by the core entities and the
// web frontend.

// Gift box lid and internal light
pub const LID_OPEN_ANGLE: f32 = -std::f32::consts::PI / 1.8; // ~-100 degrees about the back-edge pivot
pub const LID_ADVANCE_ANGLE: f32 = -1.5; // lid angle past which opening counts as done
pub const LID_OPEN_RATE: f32 = 2.0;
pub const LID_CLOSE_RATE: f32 = 3.0;
pub const LIGHT_OPEN_INTENSITY: f32 = 8.0;
pub const LIGHT_OPEN_RATE: f32 = 3.0;
pub const LIGHT_CLOSE_RATE: f32 = 5.0;

// Idle float of the whole box
pub const BOB_AMPLITUDE: f32 = 0.1;
pub const YAW_AMPLITUDE: f32 = 0.05;
pub const YAW_FREQUENCY: f32 = 0.5; // half the bob speed
pub const STABILIZE_RATE: f32 = 2.0;

// Spiral light
pub const SPIRAL_TURNS: u32 = 5;
pub const SPIRAL_HEIGHT: f32 = 6.0;
pub const SPIRAL_POINTS_PER_TURN: u32 = 120;
pub const SPIRAL_RADIUS_MAX: f32 = 4.5;
pub const SPIRAL_SPIN_RATE: f32 = 0.2; // rad/s about Y, phase-independent
pub const SPIRAL_PROGRESS_TARGET: f32 = 1.1; // overshoot so the tip fully reveals
pub const SPIRAL_PROGRESS_RATE: f32 = 0.5;
pub const SPIRAL_COMPLETE_THRESHOLD: f32 = 0.99;
pub const SPIRAL_FADE_RATE: f32 = 2.0;
pub const SPIRAL_REVEAL_SOFTNESS: f32 = 0.1; // smoothstep band around the reveal front
pub const SPIRAL_BASE_COLOR: [f32; 3] = [1.0, 0.0, 0.43]; // deep pink
pub const SPIRAL_TIP_COLOR: [f32; 3] = [1.0, 0.84, 0.0]; // gold

// Floating orbs
pub const ORB_COUNT: usize = 150;
pub const ORB_RING_RADIUS_MIN: f32 = 3.0;
pub const ORB_RING_RADIUS_SPAN: f32 = 5.0;
pub const ORB_HEIGHT_MIN: f32 = -2.0;
pub const ORB_HEIGHT_SPAN: f32 = 8.0;
pub const ORB_SCALE_MIN: f32 = 0.2;
pub const ORB_SCALE_SPAN: f32 = 0.4;
pub const ORB_SPEED_MIN: f32 = 0.2;
pub const ORB_SPEED_SPAN: f32 = 0.5;
pub const ORB_TIME_OFFSET_SPAN: f32 = 100.0;
pub const ORB_HIDE_RATE: f32 = 5.0; // pull to origin while boxed
pub const ORB_EMERGE_RATE: f32 = 2.0; // explosion outward
pub const ORB_HOVER_RATE: f32 = 1.0; // follow the hover point
pub const ORB_RESET_RATE: f32 = 4.0; // suck-in, faster than the idle pull
pub const ORB_HOVER_AMPLITUDE: f32 = 0.5;
pub const ORB_HIDE_DISTANCE: f32 = 0.5; // invisible inside this radius while boxed
pub const ORB_POP_DISTANCE: f32 = 1.0; // scale ramps in below this radius
pub const ORB_TUMBLE_RATE_X: f32 = 0.5;
pub const ORB_TUMBLE_RATE_Y: f32 = 0.3;

// Greeting text
pub const TEXT_TARGET_Y: f32 = 3.5;
pub const TEXT_SHOW_FRACTION: f32 = 0.05; // per-frame, not delta-scaled
pub const TEXT_HIDE_FRACTION: f32 = 0.1;
pub const TEXT_BOB_AMPLITUDE: f32 = 0.005;
pub const TEXT_BOB_FREQUENCY: f32 = 2.0;
pub const TEXT_FULL_WIDTH: f32 = 13.0; // viewport width at which the text fits at scale 1

pub const GREETING_HEADLINE: &str = "HAPPY BIRTHDAY";
pub const GREETING_SUBTITLE: &str = "Wishing you a magical year!";

// Sequencer
pub const EMERGE_TO_CELEBRATION_SEC: f32 = 2.0;

// Orb palette: gold, hot pink, soft pink, white
pub const ORB_PALETTE: [[f32; 3]; 4] = [
    [1.0, 0.84, 0.0],
    [1.0, 0.0, 0.43],
    [1.0, 0.72, 0.7],
    [1.0, 1.0, 1.0],
];
