//! Scene: entity registry and per-frame command emission.

use log::debug;

use scenic_api_core::{Command, EntityId, FrameBatch};

use crate::config::Config;
use crate::entity::EntityCore;
use crate::ids::IdAllocator;
use crate::property::PropertyStore;
use crate::shapes::{Circle, Line};
use crate::sprite::Sprite;

/// Any entity the scene can own.
#[derive(Debug)]
pub enum SceneEntity {
    Sprite(Sprite),
    Circle(Circle),
    Line(Line),
}

impl SceneEntity {
    pub fn id(&self) -> EntityId {
        match self {
            SceneEntity::Sprite(e) => e.id(),
            SceneEntity::Circle(e) => e.id(),
            SceneEntity::Line(e) => e.id(),
        }
    }

    pub fn props(&self) -> &PropertyStore {
        match self {
            SceneEntity::Sprite(e) => e.props(),
            SceneEntity::Circle(e) => e.props(),
            SceneEntity::Line(e) => e.props(),
        }
    }

    pub fn props_mut(&mut self) -> &mut PropertyStore {
        match self {
            SceneEntity::Sprite(e) => e.props_mut(),
            SceneEntity::Circle(e) => e.props_mut(),
            SceneEntity::Line(e) => e.props_mut(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            SceneEntity::Sprite(_) => "sprite",
            SceneEntity::Circle(_) => "circle",
            SceneEntity::Line(_) => "line",
        }
    }
}

/// Owns the entities of one simulation and snapshots their dirty properties
/// into ordered command batches, one per frame.
///
/// The simulation is single-threaded and cooperative: one frame's setter
/// calls complete before [`Scene::commit_frame`] runs.
#[derive(Debug)]
pub struct Scene {
    cfg: Config,
    ids: IdAllocator,
    /// Creation order; emission iterates this order.
    entities: Vec<SceneEntity>,
    last_frame: Option<u64>,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(cfg: Config) -> Self {
        Self {
            ids: IdAllocator::new(),
            entities: Vec::with_capacity(cfg.entity_capacity),
            last_frame: None,
            cfg,
        }
    }

    pub fn create_sprite(&mut self) -> &mut Sprite {
        let id = self.ids.alloc();
        self.entities.push(SceneEntity::Sprite(Sprite::new(id)));
        match self.entities.last_mut() {
            Some(SceneEntity::Sprite(sprite)) => sprite,
            _ => unreachable!("just pushed a sprite"),
        }
    }

    pub fn create_circle(&mut self) -> &mut Circle {
        let id = self.ids.alloc();
        self.entities.push(SceneEntity::Circle(Circle::new(id)));
        match self.entities.last_mut() {
            Some(SceneEntity::Circle(circle)) => circle,
            _ => unreachable!("just pushed a circle"),
        }
    }

    pub fn create_line(&mut self) -> &mut Line {
        let id = self.ids.alloc();
        self.entities.push(SceneEntity::Line(Line::new(id)));
        match self.entities.last_mut() {
            Some(SceneEntity::Line(line)) => line,
            _ => unreachable!("just pushed a line"),
        }
    }

    pub fn entity(&self, id: EntityId) -> Option<&SceneEntity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut SceneEntity> {
        self.entities.iter_mut().find(|e| e.id() == id)
    }

    pub fn sprite_mut(&mut self, id: EntityId) -> Option<&mut Sprite> {
        match self.entity_mut(id) {
            Some(SceneEntity::Sprite(sprite)) => Some(sprite),
            _ => None,
        }
    }

    pub fn circle_mut(&mut self, id: EntityId) -> Option<&mut Circle> {
        match self.entity_mut(id) {
            Some(SceneEntity::Circle(circle)) => Some(circle),
            _ => None,
        }
    }

    pub fn line_mut(&mut self, id: EntityId) -> Option<&mut Line> {
        match self.entity_mut(id) {
            Some(SceneEntity::Line(line)) => Some(line),
            _ => None,
        }
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn last_committed_frame(&self) -> Option<u64> {
        self.last_frame
    }

    /// Snapshot every dirty property into an ordered command batch and clear
    /// the pending markers. Entities are visited in creation order and
    /// properties in declaration order, so identical runs emit identical
    /// batches. Unchanged properties emit nothing.
    ///
    /// # Panics
    ///
    /// Panics if `frame` is not strictly greater than the previously
    /// committed frame. A non-monotonic frame index would corrupt the
    /// timeline; it is a programmer error, not a recoverable condition.
    pub fn commit_frame(&mut self, frame: u64) -> FrameBatch {
        if let Some(last) = self.last_frame {
            assert!(
                frame > last,
                "commit_frame({frame}) after frame {last}: frame indices must increase"
            );
        }
        self.last_frame = Some(frame);

        let mut batch = FrameBatch::with_capacity(frame, self.cfg.commands_per_frame);
        for entity in &mut self.entities {
            let id = entity.id();
            entity.props_mut().drain_pending(|name, change| {
                batch.push(Command {
                    entity: id,
                    property: name.to_string(),
                    value: change.value,
                    curve: change.curve,
                });
            });
        }
        debug!("frame {frame}: emitted {} commands", batch.len());
        batch
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
