//! Per-entity property storage.
//!
//! A store holds the authoritative current value of every declared property
//! plus the pending changes recorded by the active frame's setters. Slots
//! keep declaration order; lookups are linear scans. Entities carry a
//! handful of properties, and a Vec preserves the emission order a hash map
//! would lose.

use scenic_api_core::{Curve, PropertyKind, PropertyValue, SceneError, MAX_RGB};

/// A change waiting to be snapshotted by the next frame commit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PendingChange {
    pub value: PropertyValue,
    pub curve: Option<Curve>,
}

#[derive(Clone, Debug)]
struct Slot {
    name: &'static str,
    kind: PropertyKind,
    value: PropertyValue,
    /// Every successful set appends here, including sets to an unchanged
    /// value; two sets of one property in one frame emit two commands.
    pending: Vec<PendingChange>,
}

/// Ordered property table for one entity.
#[derive(Clone, Debug, Default)]
pub struct PropertyStore {
    slots: Vec<Slot>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a property with its default value. Declaration order is the
    /// emission order for this entity.
    pub(crate) fn declare(&mut self, name: &'static str, default: PropertyValue) {
        debug_assert!(
            self.slots.iter().all(|s| s.name != name),
            "property '{name}' declared twice"
        );
        self.slots.push(Slot {
            name,
            kind: default.kind(),
            value: default,
            pending: Vec::new(),
        });
    }

    fn slot_mut(&mut self, name: &'static str) -> &mut Slot {
        // Typed setters only reach declared properties; a miss is a
        // programmer error in the entity constructor, so it is fatal.
        self.slots
            .iter_mut()
            .find(|s| s.name == name)
            .unwrap_or_else(|| panic!("undeclared property '{name}'"))
    }

    fn record(slot: &mut Slot, value: PropertyValue, curve: Option<Curve>) {
        slot.value = value;
        slot.pending.push(PendingChange { value, curve });
    }

    pub(crate) fn set_float(&mut self, name: &'static str, value: f64, curve: Option<Curve>) {
        let slot = self.slot_mut(name);
        Self::record(slot, PropertyValue::Float(value), curve);
    }

    pub(crate) fn set_int(&mut self, name: &'static str, value: i32, curve: Option<Curve>) {
        let slot = self.slot_mut(name);
        Self::record(slot, PropertyValue::Int(value), curve);
    }

    pub(crate) fn set_bool(&mut self, name: &'static str, value: bool, curve: Option<Curve>) {
        let slot = self.slot_mut(name);
        Self::record(slot, PropertyValue::Bool(value), curve);
    }

    /// Colors are range-checked before any mutation; on failure the property
    /// keeps its prior value and no pending change is recorded.
    pub(crate) fn set_color(
        &mut self,
        name: &'static str,
        color: u32,
        curve: Option<Curve>,
    ) -> Result<(), SceneError> {
        if color > MAX_RGB {
            return Err(SceneError::InvalidColor { value: color });
        }
        let slot = self.slot_mut(name);
        Self::record(slot, PropertyValue::Color(color), curve);
        Ok(())
    }

    /// Dynamic mutation by name. Unlike the typed setters, unknown names and
    /// kind mismatches are caller errors here, not programmer errors.
    pub fn set(
        &mut self,
        name: &str,
        value: PropertyValue,
        curve: Option<Curve>,
    ) -> Result<(), SceneError> {
        value.validate()?;
        let slot = self
            .slots
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| SceneError::UnknownProperty {
                name: name.to_string(),
            })?;
        if value.kind() != slot.kind {
            return Err(SceneError::KindMismatch {
                property: name.to_string(),
                expected: slot.kind,
                actual: value.kind(),
            });
        }
        Self::record(slot, value, curve);
        Ok(())
    }

    /// Last successfully applied value; rejected sets are invisible.
    pub fn get(&self, name: &str) -> Option<PropertyValue> {
        self.slots.iter().find(|s| s.name == name).map(|s| s.value)
    }

    pub(crate) fn float(&self, name: &'static str) -> f64 {
        match self.get(name) {
            Some(PropertyValue::Float(v)) => v,
            _ => panic!("undeclared float property '{name}'"),
        }
    }

    pub(crate) fn int(&self, name: &'static str) -> i32 {
        match self.get(name) {
            Some(PropertyValue::Int(v)) => v,
            _ => panic!("undeclared int property '{name}'"),
        }
    }

    pub(crate) fn color(&self, name: &'static str) -> u32 {
        match self.get(name) {
            Some(PropertyValue::Color(v)) => v,
            _ => panic!("undeclared color property '{name}'"),
        }
    }

    pub(crate) fn bool(&self, name: &'static str) -> bool {
        match self.get(name) {
            Some(PropertyValue::Bool(v)) => v,
            _ => panic!("undeclared bool property '{name}'"),
        }
    }

    /// Declared property names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.iter().map(|s| s.name)
    }

    /// True if any property has a pending change for the active frame.
    pub fn is_dirty(&self) -> bool {
        self.slots.iter().any(|s| !s.pending.is_empty())
    }

    /// Yield pending changes in declaration order (call order within one
    /// property) and clear the markers. The applied values stay as the next
    /// frame's baseline.
    pub(crate) fn drain_pending(&mut self, mut emit: impl FnMut(&'static str, PendingChange)) {
        for slot in &mut self.slots {
            for change in slot.pending.drain(..) {
                emit(slot.name, change);
            }
        }
    }
}
