//! Playhead: steps a timeline frame by frame and samples transitions.

use hashbrown::HashMap;
use log::debug;

use scenic_api_core::{Curve, EntityId, PropertyValue};

use crate::interp::interpolate;
use crate::timeline::Timeline;

/// One interpolated property value at a sample point.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertySample {
    pub entity: EntityId,
    pub property: String,
    pub value: PropertyValue,
}

#[derive(Clone, Debug)]
struct Transition {
    entity: EntityId,
    property: String,
    /// None on a property's first appearance: nothing to tween from.
    from: Option<PropertyValue>,
    to: PropertyValue,
    curve: Option<Curve>,
}

/// Steps through a timeline's frames. Between [`Playhead::begin_frame`] and
/// [`Playhead::end_frame`], [`Playhead::sample`] produces the tweened values
/// of the active frame at any normalized progress in `[0,1]`.
///
/// The baseline map holds each property's last committed value; it only
/// advances at `end_frame`, so a frame can be sampled repeatedly and out of
/// order within its window.
#[derive(Debug)]
pub struct Playhead<'a> {
    timeline: &'a Timeline,
    cursor: usize,
    baseline: HashMap<(EntityId, String), PropertyValue>,
    active: Vec<Transition>,
}

impl<'a> Playhead<'a> {
    pub fn new(timeline: &'a Timeline) -> Self {
        Self {
            timeline,
            cursor: 0,
            baseline: HashMap::new(),
            active: Vec::new(),
        }
    }

    /// Activate the next frame's transitions. Returns its frame index, or
    /// `None` at the end of the stream.
    ///
    /// Repeated commands for one property within the frame chain: each later
    /// transition tweens from the previous command's target.
    pub fn begin_frame(&mut self) -> Option<u64> {
        let batch = self.timeline.frames().get(self.cursor)?;
        self.active.clear();
        for cmd in batch.iter() {
            let from = self
                .active
                .iter()
                .rev()
                .find(|t| t.entity == cmd.entity && t.property == cmd.property)
                .map(|t| t.to)
                .or_else(|| {
                    self.baseline
                        .get(&(cmd.entity, cmd.property.clone()))
                        .copied()
                });
            self.active.push(Transition {
                entity: cmd.entity,
                property: cmd.property.clone(),
                from,
                to: cmd.value,
                curve: cmd.curve,
            });
        }
        debug!(
            "frame {}: {} active transitions",
            batch.frame,
            self.active.len()
        );
        Some(batch.frame)
    }

    /// Sample the active frame at normalized `progress`. Samples come out in
    /// command order; when a property was commanded twice in the frame, the
    /// later sample supersedes the earlier at apply time.
    pub fn sample(&self, progress: f64) -> Vec<PropertySample> {
        self.active
            .iter()
            .map(|tr| {
                let value = match (tr.from, tr.curve) {
                    // With a curve and a baseline, tween.
                    (Some(prev), Some(curve)) => interpolate(&prev, &tr.to, curve, progress),
                    // No curve, or first appearance: instantaneous at the
                    // frame boundary.
                    _ => tr.to,
                };
                PropertySample {
                    entity: tr.entity,
                    property: tr.property.clone(),
                    value,
                }
            })
            .collect()
    }

    /// Fold the active frame's final values into the baseline and advance.
    pub fn end_frame(&mut self) {
        for tr in self.active.drain(..) {
            self.baseline.insert((tr.entity, tr.property), tr.to);
        }
        self.cursor += 1;
    }

    /// Committed baseline value of a property, if it has ever appeared.
    pub fn value(&self, entity: EntityId, property: &str) -> Option<PropertyValue> {
        self.baseline
            .get(&(entity, property.to_string()))
            .copied()
    }

    /// Frames remaining, counting the active one.
    pub fn remaining(&self) -> usize {
        self.timeline.len().saturating_sub(self.cursor)
    }
}
