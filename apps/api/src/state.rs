use std::sync::Arc;

use crate::analysis::MoodPatternAnalyzer;
use crate::store::MoodDataSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable sample loader. Default: FileMoodStore rooted at MOOD_DATA_DIR.
    pub mood_source: Arc<dyn MoodDataSource>,
    pub analyzer: MoodPatternAnalyzer,
}
