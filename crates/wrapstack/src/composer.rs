//! Composer
//!
//! Merges an ordered list of helper instances into one [`Renderable`].
//!
//! # Algorithm
//! 1. Walk the instances in order, keeping an insertion-ordered map from
//!    wrapper id to resolved arguments.
//! 2. A simple instance claims its wrapper; a second claim is an error.
//! 3. A composite instance opens an all-empty slot tuple the first time its
//!    wrapper is seen, then writes its own slot.
//! 4. Apply every wrapper once, in first-seen order, and nest the results
//!    with the first one outermost.

use crate::config::{ComposerConfig, SlotOverwrite};
use crate::error::CompositionError;
use crate::identity::WrapperId;
use crate::instance::{Apply, CompositeInstance, HelperInstance, PendingComposite};
use crate::renderable::Renderable;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Compose `instances` with the default configuration
///
/// # Errors
/// [`CompositionError::DuplicateHelper`] when a simple wrapper appears twice.
pub fn compose<N, I>(instances: I) -> Result<Renderable<N>, CompositionError>
where
    N: 'static,
    I: IntoIterator<Item = HelperInstance<N>>,
{
    Composer::default().compose(instances)
}

/// Arguments collected for one wrapper
enum Resolved<N> {
    Simple(Apply<N>),
    Composite(Box<dyn PendingComposite<N>>),
}

impl<N> Resolved<N> {
    fn into_renderable(self) -> Renderable<N> {
        match self {
            Self::Simple(apply) => apply(),
            Self::Composite(pending) => pending.finish(),
        }
    }
}

/// Helper composer
#[derive(Debug, Clone, Default)]
pub struct Composer {
    config: ComposerConfig,
}

impl Composer {
    /// Create composer with `config`
    #[inline]
    #[must_use]
    pub fn new(config: ComposerConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Merge `instances` into one wrapper
    ///
    /// Wrapper functions run here, once each, in the order their wrappers were
    /// first introduced. The returned [`Renderable`] only nests the results.
    ///
    /// # Errors
    /// - [`CompositionError::DuplicateHelper`] for a repeated simple wrapper
    /// - [`CompositionError::SlotOverwritten`] for a repeated composite slot
    ///   under [`SlotOverwrite::Reject`]
    /// - [`CompositionError::SlotLayoutMismatch`] if an instance cannot be
    ///   merged into its wrapper's slot state
    pub fn compose<N, I>(&self, instances: I) -> Result<Renderable<N>, CompositionError>
    where
        N: 'static,
        I: IntoIterator<Item = HelperInstance<N>>,
    {
        let mut resolved: IndexMap<WrapperId, Resolved<N>> = IndexMap::new();

        for instance in instances {
            tracing::trace!("Merging helper instance: {:?}", instance);
            match instance {
                HelperInstance::Simple(simple) => {
                    let wrapper = *simple.wrapper();
                    match resolved.entry(wrapper.id()) {
                        Entry::Occupied(_) => {
                            return Err(CompositionError::duplicate(wrapper));
                        }
                        Entry::Vacant(slot) => {
                            slot.insert(Resolved::Simple(simple.into_apply()));
                        }
                    }
                }
                HelperInstance::Composite(composite) => {
                    self.merge_composite(&mut resolved, composite)?;
                }
            }
        }

        tracing::debug!("Composing {} wrappers", resolved.len());

        let layers = resolved
            .into_values()
            .map(Resolved::into_renderable)
            .collect();

        Ok(Renderable::nest(layers))
    }

    /// Write one composite instance into its wrapper's slots
    fn merge_composite<N: 'static>(
        &self,
        resolved: &mut IndexMap<WrapperId, Resolved<N>>,
        composite: CompositeInstance<N>,
    ) -> Result<(), CompositionError> {
        let wrapper = *composite.wrapper();
        let index = composite.helper_index();
        let (open, fill) = composite.into_parts();

        let entry = resolved
            .entry(wrapper.id())
            .or_insert_with(|| Resolved::Composite(open()));

        let Resolved::Composite(pending) = entry else {
            return Err(CompositionError::SlotLayoutMismatch { wrapper });
        };

        let was_filled =
            fill(pending.as_mut()).ok_or(CompositionError::SlotLayoutMismatch { wrapper })?;

        if was_filled {
            match self.config.slot_overwrite {
                SlotOverwrite::LastWins => {
                    tracing::debug!("Slot {} of {} supplied twice, keeping the last", index, wrapper);
                }
                SlotOverwrite::Reject => {
                    return Err(CompositionError::slot_overwritten(wrapper, index));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_composite_helpers, create_simple_helper};

    fn tag(name: &'static str) -> crate::SimpleHelper<(), String> {
        create_simple_helper(move |(): ()| {
            Renderable::new(move |children: String| format!("<{name}>{children}</{name}>"))
        })
    }

    #[test]
    fn default_composer_uses_default_config() {
        let composer = Composer::default();
        assert_eq!(composer.config(), &ComposerConfig::default());

        let composer = Composer::new(ComposerConfig::new().with_slot_overwrite(SlotOverwrite::Reject));
        assert_eq!(composer.config().slot_overwrite, SlotOverwrite::Reject);
    }

    #[test]
    fn empty_is_passthrough() {
        let wrapper = compose(Vec::<HelperInstance<String>>::new()).unwrap();
        assert_eq!(wrapper.render("leaf".to_string()), "leaf");
    }

    #[test]
    fn single_simple_applies_directly() {
        let section = tag("section");
        let wrapper = compose([section.call(())]).unwrap();
        assert_eq!(wrapper.render("leaf".to_string()), "<section>leaf</section>");
    }

    #[test]
    fn input_order_is_outer_to_inner() {
        let a = tag("a");
        let b = tag("b");

        let ab = compose([a.call(()), b.call(())]).unwrap();
        let ba = compose([b.call(()), a.call(())]).unwrap();

        assert_eq!(ab.render("x".to_string()), "<a><b>x</b></a>");
        assert_eq!(ba.render("x".to_string()), "<b><a>x</a></b>");
    }

    #[test]
    fn duplicate_simple_is_rejected() {
        let section = tag("section").named("with_section");
        let err = compose([section.call(()), section.call(())]).unwrap_err();

        assert!(matches!(err, CompositionError::DuplicateHelper { .. }));
        assert_eq!(err.wrapper().id(), section.id());
    }

    #[test]
    fn composite_slots_merge_into_one_application() {
        let (first, second) = create_composite_helpers(|(a, b): (Option<u8>, Option<u8>)| {
            Renderable::new(move |children: String| format!("({a:?},{b:?}){children}"))
        });

        let only_first = compose([first.call(1)]).unwrap();
        let only_second = compose([second.call(2)]).unwrap();
        let both = compose([second.call(2), first.call(1)]).unwrap();

        assert_eq!(only_first.render(String::new()), "(Some(1),None)");
        assert_eq!(only_second.render(String::new()), "(None,Some(2))");
        assert_eq!(both.render(String::new()), "(Some(1),Some(2))");
    }

    #[test]
    fn repeated_slot_last_wins_by_default() {
        let (only,) = create_composite_helpers(|(a,): (Option<u8>,)| {
            Renderable::new(move |children: String| format!("{a:?}{children}"))
        });

        let wrapper = compose([only.call(1), only.call(2)]).unwrap();
        assert_eq!(wrapper.render(String::new()), "Some(2)");
    }

    #[test]
    fn repeated_slot_rejected_when_configured() {
        let (only,) = create_composite_helpers(|(a,): (Option<u8>,)| {
            Renderable::new(move |children: String| format!("{a:?}{children}"))
        });

        let composer = Composer::new(ComposerConfig::new().with_slot_overwrite(SlotOverwrite::Reject));
        let err = composer.compose([only.call(1), only.call(2)]).unwrap_err();

        assert!(matches!(err, CompositionError::SlotOverwritten { index: 0, .. }));
    }

    #[test]
    fn composite_position_is_first_introduction() {
        let outer = tag("outer");
        let (left, right) = create_composite_helpers(|(l, r): (Option<u8>, Option<u8>)| {
            Renderable::new(move |children: String| format!("[{l:?}|{r:?}]{children}"))
        });

        let wrapper = compose([left.call(1), outer.call(()), right.call(2)]).unwrap();
        assert_eq!(
            wrapper.render("x".to_string()),
            "[Some(1)|Some(2)]<outer>x</outer>"
        );
    }
}
