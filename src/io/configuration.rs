//! Recipe constants and runtime configuration defaults

// Profile analysis
/// Longest side a reference image is reduced to before statistics are gathered
pub const ANALYSIS_MAX_SIDE: u32 = 256;
/// Upper bound on color samples drawn from one reference image
pub const SAMPLES_PER_IMAGE: usize = 4000;
/// Number of palette entries extracted by the default recipe
pub const PALETTE_SIZE: usize = 6;
/// Fixed number of k-means refinement passes
pub const KMEANS_ITERATIONS: usize = 8;
/// Gradient threshold used when measuring edge density of references
pub const PROFILE_EDGE_THRESHOLD: f64 = 50.0;
/// Minimum saturation for a palette entry to count toward warm/cool hue bias
pub const HUE_BIAS_MIN_SATURATION: f64 = 0.15;
/// Factor by which one hue family must outnumber the other to win
pub const HUE_BIAS_DOMINANCE: f64 = 1.2;

// Composite pipeline
/// Opaque light gray drawn under everything unless the background is transparent
pub const BACKGROUND_FILL: [u8; 4] = [240, 240, 240, 255];
/// Opacity of the inked edge layer
pub const EDGE_LAYER_OPACITY: f32 = 0.9;
/// Edge threshold when outline weight is zero
pub const EDGE_THRESHOLD_BASE: f64 = 100.0;
/// Threshold reduction per unit of outline weight
pub const EDGE_THRESHOLD_SPAN: f64 = 80.0;
/// Lowest posterization level count (reached at zero intensity)
pub const POSTER_LEVELS_BASE: f64 = 5.0;
/// Additional levels gained at full intensity
pub const POSTER_LEVELS_SPAN: f64 = 5.0;

// Burst layer
/// Rays drawn at any visible strength
pub const BURST_BASE_RAYS: usize = 16;
/// Additional rays gained at full strength
pub const BURST_EXTRA_RAYS: f64 = 64.0;
/// Distance from the canvas center where rays begin
pub const BURST_INNER_RADIUS: f32 = 20.0;
/// Stroke width of a single ray
pub const BURST_RAY_WIDTH: f32 = 3.0;
/// Strength at or below which no rays are drawn
pub const BURST_MIN_STRENGTH: f64 = 0.01;

// Halftone layer
/// Dot spacing at zero density
pub const HALFTONE_MAX_SPACING: i64 = 12;

// Motif layer
/// Stroke width of wave crests
pub const WAVE_STROKE_WIDTH: f32 = 3.0;
/// Vertical squash applied to wave crest curls
pub const WAVE_TIGHTNESS: f32 = 0.6;
/// Points sampled along one wave crest
pub const WAVE_STEPS: usize = 64;
/// Vertical anchor of flame tongues as a fraction of canvas height
pub const FLAME_BASELINE: f32 = 0.85;
/// Stroke width of spiral lines
pub const SPIRAL_STROKE_WIDTH: f32 = 2.0;
/// Full turns per spiral
pub const SPIRAL_TURNS: f32 = 3.0;
/// Points sampled along one spiral
pub const SPIRAL_STEPS: usize = 200;

// Output settings
/// Suffix added to stylized output filenames
pub const OUTPUT_SUFFIX: &str = "_poster";
/// Key under which the active profile is persisted
pub const DEFAULT_PROFILE_KEY: &str = "style-profile";
/// Profile name used when none is given
pub const DEFAULT_PROFILE_NAME: &str = "Untitled";
