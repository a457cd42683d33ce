//! Entity trait: a record that keeps its identity while its fields change.

/// Something addressed by a stable identifier.
///
/// Stores look records up through [`Entity::has_id`], so the comparison lives
/// in one place regardless of how the id is held.
pub trait Entity {
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;

    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
