use crate::compose::compositor::Compositor;
use crate::config::mood_config::MoodConfig;
use crate::embedding::build_provider;
use crate::embedding::provider::EmbeddingProvider;
use crate::foundation::core::{Color, Dimensions, Point};
use crate::foundation::error::{MoodError, MoodResult};
use crate::layout::generator::point_count_for;
use crate::patterns::library::PatternLibrary;
use crate::session::clock::AnimationClock;
use crate::surface::svg::scene_svg;
use crate::weights::map::WeightMap;
use crate::weights::resolver::WeightResolver;
use crate::weights::state::{InputSeq, WeightState};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Everything a rendering surface needs to draw one frame.
#[derive(Clone, Debug)]
pub struct FrameSnapshot {
    /// Animation time the colors were evaluated at.
    pub time: u64,
    /// Point count the patterns were evaluated with.
    pub total_points: usize,
    /// Point positions, in draw order.
    pub points: Vec<Point>,
    /// One color per point.
    pub colors: Vec<Color>,
}

/// Single-session driver: animation clock, layout, weights and text input.
///
/// Frames never wait on weight resolution. Each input gets an [`InputSeq`]; its result is
/// committed only if nothing newer has been committed, and failures leave the previous weights
/// in place.
pub struct MoodSession {
    config: MoodConfig,
    resolver: Arc<WeightResolver>,
    compositor: Compositor,
    state: Arc<Mutex<WeightState>>,
    clock: AnimationClock,
    dims: Dimensions,
    total_points: usize,
    points: Vec<Point>,
    ready: bool,
}

impl MoodSession {
    /// Session over the built-in palette with the configured provider.
    pub fn new(config: MoodConfig) -> MoodResult<Self> {
        let provider = build_provider(config.embedding, config.embedding_dims);
        Self::with_parts(config, Arc::new(PatternLibrary::builtin()), provider)
    }

    /// Session over an explicit library and provider.
    pub fn with_parts(
        config: MoodConfig,
        library: Arc<PatternLibrary>,
        provider: Arc<dyn EmbeddingProvider>,
    ) -> MoodResult<Self> {
        config.validate()?;
        let state = WeightState::new(WeightMap::uniform(&library));
        let resolver = WeightResolver::new(Arc::clone(&library), provider, config.mechanism);
        let mut session = Self {
            resolver: Arc::new(resolver),
            compositor: Compositor::new(library),
            state: Arc::new(Mutex::new(state)),
            clock: AnimationClock::new(),
            dims: config.canvas,
            total_points: 0,
            points: Vec::new(),
            ready: false,
            config,
        };
        session.resize(session.dims)?;
        Ok(session)
    }

    /// Initialize the embedding provider and start the clock. Input is refused until this
    /// completes.
    pub async fn initialize(&mut self) -> MoodResult<()> {
        self.resolver.provider().initialize().await?;
        self.ready = true;
        self.clock.start();
        tracing::info!(
            provider = self.resolver.provider().name(),
            mechanism = ?self.resolver.mechanism(),
            layout = ?self.config.layout,
            "mood session ready"
        );
        Ok(())
    }

    /// Whether input is accepted.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Session configuration.
    pub fn config(&self) -> &MoodConfig {
        &self.config
    }

    /// Recompute point count and positions for a new canvas size.
    pub fn resize(&mut self, dims: Dimensions) -> MoodResult<()> {
        let total = self
            .config
            .point_count
            .unwrap_or_else(|| point_count_for(dims));
        let points = self.config.layout.generate(total, dims)?;
        tracing::debug!(width = dims.width, height = dims.height, total, "layout regenerated");
        self.dims = dims;
        self.total_points = total;
        self.points = points;
        Ok(())
    }

    /// Current canvas size.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Point count the patterns see.
    pub fn total_points(&self) -> usize {
        self.total_points
    }

    /// Cached point positions.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Read-only view of the clock.
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Resume the animation clock.
    pub fn start(&mut self) {
        self.clock.start();
    }

    /// Stop the animation clock.
    pub fn stop(&mut self) {
        self.clock.stop();
    }

    /// Advance the clock by one frame.
    pub fn tick(&mut self) -> u64 {
        self.clock.tick()
    }

    /// Snapshot of the committed weights.
    pub fn weights(&self) -> Arc<WeightMap> {
        lock(&self.state).current()
    }

    /// Colors for every cached point at the current time.
    pub fn frame(&self) -> FrameSnapshot {
        let weights = self.weights();
        let time = self.clock.now();
        FrameSnapshot {
            time,
            total_points: self.total_points,
            points: self.points.clone(),
            colors: self
                .compositor
                .colors(self.points.len(), time, self.total_points, &weights),
        }
    }

    /// Tick, then snapshot.
    pub fn advance(&mut self) -> FrameSnapshot {
        self.tick();
        self.frame()
    }

    /// SVG document for a frame snapshot on this session's canvas.
    pub fn frame_svg(&self, frame: &FrameSnapshot) -> String {
        scene_svg(self.dims, self.config.background, &frame.points, &frame.colors)
    }

    /// Resolve `text` inline and commit the result. Returns whether it was committed.
    ///
    /// Resolution failures are logged and reported as `Ok(false)`.
    ///
    /// # Errors
    ///
    /// [`MoodError::NotInitialized`] before [`MoodSession::initialize`]; no update is performed.
    pub async fn apply_input(&self, text: &str) -> MoodResult<bool> {
        let seq = self.dispatch()?;
        Ok(resolve_and_commit(
            Arc::clone(&self.resolver),
            Arc::clone(&self.state),
            seq,
            text.to_owned(),
        )
        .await)
    }

    /// Spawn resolution of `text` on the current tokio runtime and return its handle.
    ///
    /// The task resolves to whether its result was committed. A later submission supersedes an
    /// earlier one regardless of completion order.
    ///
    /// # Errors
    ///
    /// [`MoodError::NotInitialized`] before initialization; [`MoodError::Other`] when called
    /// outside a tokio runtime.
    pub fn submit_input(&self, text: impl Into<String>) -> MoodResult<JoinHandle<bool>> {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|e| MoodError::Other(anyhow::anyhow!("submit_input needs a runtime: {e}")))?;
        let seq = self.dispatch()?;
        Ok(handle.spawn(resolve_and_commit(
            Arc::clone(&self.resolver),
            Arc::clone(&self.state),
            seq,
            text.into(),
        )))
    }

    /// Drive `frames` ticks at the configured interval, handing each snapshot to `on_frame`.
    ///
    /// Spawned input tasks keep running between ticks.
    pub async fn run<F>(&mut self, frames: u64, mut on_frame: F)
    where
        F: FnMut(&FrameSnapshot),
    {
        let mut interval =
            tokio::time::interval(Duration::from_millis(self.config.frame_interval_ms));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        for _ in 0..frames {
            interval.tick().await;
            let frame = self.advance();
            on_frame(&frame);
        }
    }

    fn dispatch(&self) -> MoodResult<InputSeq> {
        if !self.ready {
            return Err(MoodError::not_initialized(self.resolver.provider().name()));
        }
        Ok(lock(&self.state).dispatch())
    }
}

fn lock(state: &Mutex<WeightState>) -> MutexGuard<'_, WeightState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn resolve_and_commit(
    resolver: Arc<WeightResolver>,
    state: Arc<Mutex<WeightState>>,
    seq: InputSeq,
    text: String,
) -> bool {
    let superseded = lock(&state).is_superseded(seq);
    if superseded {
        tracing::debug!(?seq, "input superseded before resolution");
        return false;
    }

    match resolver.resolve(&text).await {
        Ok(weights) => {
            let committed = lock(&state).commit(seq, weights);
            if !committed {
                tracing::debug!(?seq, "discarding stale weights");
            }
            committed
        }
        Err(err) => {
            tracing::warn!(%err, ?seq, "weight update failed; keeping previous weights");
            false
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/mood_session.rs"]
mod tests;
