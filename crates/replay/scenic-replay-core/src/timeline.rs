//! Ordered command stream as loaded by the viewer.

use log::debug;

use scenic_api_core::{FrameBatch, SceneError};

/// The full frame stream of one replay, validated on ingestion.
///
/// Frame indices must be strictly increasing; a violation means the stream
/// was corrupted or reordered in transit and the load fails rather than
/// producing a scrambled timeline.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    frames: Vec<FrameBatch>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_frame(&mut self, batch: FrameBatch) -> Result<(), SceneError> {
        if let Some(last) = self.frames.last() {
            if batch.frame <= last.frame {
                return Err(SceneError::NonMonotonicFrame {
                    last: last.frame,
                    requested: batch.frame,
                });
            }
        }
        self.frames.push(batch);
        Ok(())
    }

    pub fn from_batches(
        batches: impl IntoIterator<Item = FrameBatch>,
    ) -> Result<Self, SceneError> {
        let mut timeline = Self::new();
        for batch in batches {
            timeline.push_frame(batch)?;
        }
        Ok(timeline)
    }

    /// Load a serialized stream. Unknown curve names fail here, at the
    /// deserialization boundary; they are never defaulted to "no curve".
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let batches: Vec<FrameBatch> =
            serde_json::from_str(json).map_err(|e| SceneError::Decode {
                reason: e.to_string(),
            })?;
        let timeline = Self::from_batches(batches)?;
        debug!("loaded timeline: {} frames", timeline.len());
        Ok(timeline)
    }

    pub fn frames(&self) -> &[FrameBatch] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
