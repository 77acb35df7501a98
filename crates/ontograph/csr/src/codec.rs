use crate::bits::BitValue;
use crate::error::CodecError;
use ontograph_types::RelationType;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// Assigns every relation type to a slot of the packed adjacency value.
///
/// The i-th propagating relation type (in first-seen order) owns slots `2i`
/// (forward) and `2i + 1` (inverse). Non-propagating relation types follow,
/// one slot each, in first-seen order.
#[derive(Clone, Debug)]
pub struct RelationCodec {
    slots: HashMap<RelationType, u32>,
    max_idx: Option<u32>,
}

impl RelationCodec {
    /// Assign slots to `relation_types`. Repeated relation types keep their first slot.
    pub fn new(relation_types: &[RelationType]) -> Self {
        let mut slots = HashMap::with_capacity(relation_types.len());

        let mut next = 0u32;
        for rt in relation_types.iter().filter(|rt| rt.propagates) {
            if let Entry::Vacant(slot) = slots.entry(rt.clone()) {
                slot.insert(next);
                next += 2;
            }
        }
        for rt in relation_types.iter().filter(|rt| !rt.propagates) {
            if let Entry::Vacant(slot) = slots.entry(rt.clone()) {
                slot.insert(next);
                next += 1;
            }
        }

        let max_idx = next.checked_sub(1);
        debug!(
            relation_types = slots.len(),
            max_idx = ?max_idx,
            "Assigned relation type slots"
        );
        Self { slots, max_idx }
    }

    /// Assign slots and check that they fit into values of type `E`.
    pub fn for_width<E: BitValue>(relation_types: &[RelationType]) -> Result<Self, CodecError> {
        let codec = Self::new(relation_types);
        codec.check_width::<E>()?;
        Ok(codec)
    }

    /// Fail if the highest assigned slot does not fit into values of type `E`.
    pub fn check_width<E: BitValue>(&self) -> Result<(), CodecError> {
        match self.max_idx {
            Some(required) if required > E::max_idx() => Err(CodecError::InsufficientWidth {
                relation_types: self.slots.len(),
                required_max_idx: required,
                available_slots: E::max_idx() + 1,
            }),
            _ => Ok(()),
        }
    }

    /// Highest assigned slot, `None` if no relation type is registered.
    pub fn max_idx(&self) -> Option<u32> {
        self.max_idx
    }

    /// Number of registered relation types.
    pub fn relation_type_count(&self) -> usize {
        self.slots.len()
    }

    /// Slot of `relation_type`, or `None` for an unregistered relation type.
    ///
    /// `inverted` selects the inverse slot and is ignored for non-propagating
    /// relation types.
    pub fn calculate_bit_index(&self, relation_type: &RelationType, inverted: bool) -> Option<u32> {
        let base = *self.slots.get(relation_type)?;
        if inverted && relation_type.propagates {
            Some(base + 1)
        } else {
            Some(base)
        }
    }

    /// Test whether `value` carries `relation_type` in the given direction.
    ///
    /// Unregistered relation types, and slots beyond the width of `E`, are never set.
    pub fn is_set<E: BitValue>(&self, value: E, relation_type: &RelationType, inverted: bool) -> bool {
        self.calculate_bit_index(relation_type, inverted)
            .and_then(|slot| value.is_set(slot).ok())
            .unwrap_or(false)
    }
}
