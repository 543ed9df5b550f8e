use super::{FreeModifier, OnlyOneEdgeModifier, RoundModifier, ShapeModifier, UniformModifier};
use crate::error::ModifierError;
use ahash::{HashMap, HashMapExt};
use smallvec::SmallVec;

/// Builds a modifier in its default configuration.
pub type ModifierFactory = fn() -> Box<dyn ShapeModifier>;

/// Identifier of the modifier a new procedural image starts with.
pub const DEFAULT_MODIFIER_ID: &str = FreeModifier::ID;

/// Maps modifier identifiers to factories.
///
/// The registry is filled once at start-up, usually through
/// [`ModifierRegistry::with_builtin`], and then consulted whenever a modifier has to be
/// created by name, for example when restoring a saved layout or populating a selection
/// list.
///
/// # Examples
///
/// ```rust
/// use procedural_image::{CornerRadii, ModifierRegistry, Rect, ShapeModifier};
///
/// let registry = ModifierRegistry::with_builtin();
/// assert_eq!(registry.ids().as_slice(), &["Free", "Only One Edge", "Round", "Uniform"]);
///
/// let round = registry.create("Round").unwrap();
/// assert_eq!(round.calculate_radius(&Rect::from_size(10.0, 4.0)), CornerRadii::all(2.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModifierRegistry {
    factories: HashMap<&'static str, ModifierFactory>,
}

impl ModifierRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Creates a registry holding every modifier shipped with this crate.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        let builtin: [(&'static str, ModifierFactory); 4] = [
            (RoundModifier::ID, || Box::new(RoundModifier)),
            (UniformModifier::ID, || Box::<UniformModifier>::default()),
            (FreeModifier::ID, || Box::<FreeModifier>::default()),
            (OnlyOneEdgeModifier::ID, || {
                Box::<OnlyOneEdgeModifier>::default()
            }),
        ];
        for (id, factory) in builtin {
            registry.factories.insert(id, factory);
        }
        registry
    }

    /// Registers `factory` under `id`.
    ///
    /// # Returns
    /// - `Err(ModifierError::DuplicateId(id))` if `id` is already taken. The existing entry is
    ///   kept.
    pub fn register(
        &mut self,
        id: &'static str,
        factory: ModifierFactory,
    ) -> Result<(), ModifierError> {
        if self.factories.contains_key(id) {
            return Err(ModifierError::DuplicateId(id));
        }
        tracing::debug!(modifier = id, "registered shape modifier");
        self.factories.insert(id, factory);
        Ok(())
    }

    /// Creates a new modifier registered under `id`.
    pub fn create(&self, id: &str) -> Result<Box<dyn ShapeModifier>, ModifierError> {
        self.factories
            .get(id)
            .map(|factory| factory())
            .ok_or_else(|| ModifierError::UnknownId(id.to_owned()))
    }

    /// Creates the modifier registered under [`DEFAULT_MODIFIER_ID`], falling back to a
    /// zero-radius [`FreeModifier`] if it was never registered.
    pub fn create_default(&self) -> Box<dyn ShapeModifier> {
        self.create(DEFAULT_MODIFIER_ID)
            .unwrap_or_else(|_| Box::<FreeModifier>::default())
    }

    /// Whether a factory is registered under `id`.
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Registered identifiers in alphabetical order.
    pub fn ids(&self) -> SmallVec<[&'static str; 8]> {
        let mut ids: SmallVec<[&'static str; 8]> = self.factories.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered modifiers.
    #[inline]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether no modifier is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ModifierRegistry, DEFAULT_MODIFIER_ID};
    use crate::error::ModifierError;
    use crate::{CornerRadii, Rect, RoundModifier, ShapeModifier, UniformModifier};

    #[test]
    fn builtin_registry_lists_ids_sorted() {
        let registry = ModifierRegistry::with_builtin();
        assert_eq!(
            registry.ids().as_slice(),
            &["Free", "Only One Edge", "Round", "Uniform"]
        );
        assert_eq!(registry.len(), 4);
        assert!(registry.contains(DEFAULT_MODIFIER_ID));
    }

    #[test]
    fn created_modifier_reports_its_own_id() {
        let registry = ModifierRegistry::with_builtin();
        for id in registry.ids() {
            let modifier = registry.create(id).unwrap();
            assert_eq!(modifier.id(), id);
        }
    }

    #[test]
    fn create_unknown_id_fails() {
        let registry = ModifierRegistry::with_builtin();
        assert_eq!(
            registry.create("Cut Corners").unwrap_err(),
            ModifierError::UnknownId("Cut Corners".to_owned())
        );
    }

    #[test]
    fn register_rejects_duplicates_and_keeps_original() {
        let mut registry = ModifierRegistry::new();
        assert!(registry.is_empty());

        registry
            .register(RoundModifier::ID, || Box::new(RoundModifier))
            .unwrap();
        let err = registry
            .register(RoundModifier::ID, || Box::new(UniformModifier::new(3.0)))
            .unwrap_err();
        assert_eq!(err, ModifierError::DuplicateId("Round"));

        let modifier = registry.create("Round").unwrap();
        assert_eq!(
            modifier.calculate_radius(&Rect::from_size(8.0, 8.0)),
            CornerRadii::all(4.0)
        );
    }

    #[test]
    fn create_default_falls_back_when_missing() {
        let registry = ModifierRegistry::new();
        let modifier = registry.create_default();
        assert_eq!(modifier.id(), DEFAULT_MODIFIER_ID);
        assert_eq!(
            modifier.calculate_radius(&Rect::from_size(8.0, 8.0)),
            CornerRadii::ZERO
        );
    }
}
