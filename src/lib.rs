//! moodlights renders an animated field of glowing points whose colors blend a palette of
//! procedural light patterns, weighted by how closely a short mood description matches each
//! pattern's embedding.
//!
//! # Pipeline overview
//!
//! 1. **Embed**: free text -> [`EmbeddingVector`] via an [`EmbeddingProvider`]
//! 2. **Resolve**: embedding -> [`WeightMap`] via cosine similarity and a [`WeightingMechanism`]
//! 3. **Composite**: `(point, time, weights)` -> [`Color`] via the [`Compositor`]
//! 4. **Layout**: point count + canvas -> [`Point`]s via a [`LayoutKind`]
//! 5. **Surface** (optional): frame -> SVG document -> RGBA pixels -> PNG
//!
//! [`MoodSession`] ties these together: the animation clock and layout drive frames, while text
//! input resolves asynchronously and is committed by sequence number, so frames never block on
//! embedding and a stale result never overwrites a newer one.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod compose;
mod config;
mod embedding;
mod foundation;
mod layout;
mod patterns;
mod session;
mod surface;
mod weights;

pub use compose::compositor::Compositor;
pub use config::mood_config::MoodConfig;
pub use embedding::hashing::{HashingEncoder, HashingLoader};
pub use embedding::model::{ModelEmbeddingProvider, ModelLoader, TextEncoder};
pub use embedding::provider::{EmbeddingProvider, EmbeddingVector};
pub use embedding::similarity::{cosine_similarity, try_cosine_similarity};
pub use embedding::stub::{STUB_DIMENSIONS, StubEmbeddingProvider};
pub use embedding::{EmbeddingKind, build_provider};
pub use foundation::core::{Color, Dimensions, Point, Rgb};
pub use foundation::error::{MoodError, MoodResult};
pub use layout::generator::{
    CONCENTRIC_RINGS, LayoutKind, MIN_POINT_COUNT, POINT_SPACING, point_count_for,
};
pub use patterns::library::{ColorFn, Pattern, PatternInfo, PatternLibrary};
pub use patterns::palette::builtin_patterns;
pub use session::clock::AnimationClock;
pub use session::mood_session::{FrameSnapshot, MoodSession};
pub use surface::glow::{CORE_BOOST, GlowLayer, core_highlight, css_rgb, glow_layers};
pub use surface::raster::{FrameRGBA, rasterize_all, rasterize_svg, write_png};
pub use surface::svg::scene_svg;
pub use weights::map::WeightMap;
pub use weights::mechanism::{RawScore, WEIGHTED_MEAN_FLOOR, WeightingMechanism};
pub use weights::resolver::WeightResolver;
pub use weights::state::{InputSeq, WeightState};
