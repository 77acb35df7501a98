use crate::error::CodecError;
use ontograph_types::RelationType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-width scalar used as the value of a CSR matrix entry.
///
/// Every bit position ("slot") records one independent yes/no fact. The
/// operations are pure: `set` and `unset` return a new value and never
/// mutate in place.
pub trait BitValue: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Width of the scalar.
    const WIDTH: ValueWidth;

    /// The value with no slot set.
    fn empty() -> Self;

    /// Highest addressable slot (`W - 1`).
    fn max_idx() -> u32 {
        Self::WIDTH.max_idx()
    }

    /// Return a copy of `self` with slot `n` set.
    fn set(self, n: u32) -> Result<Self, CodecError>;

    /// Return a copy of `self` with slot `n` cleared.
    fn unset(self, n: u32) -> Result<Self, CodecError>;

    /// Test slot `n`.
    fn is_set(self, n: u32) -> Result<bool, CodecError>;
}

fn check_slot(n: u32, max_idx: u32) -> Result<(), CodecError> {
    if n > max_idx {
        return Err(CodecError::SlotOutOfRange { slot: n, max_idx });
    }
    Ok(())
}

macro_rules! impl_bit_value {
    ($t:ty, $width:expr) => {
        impl BitValue for $t {
            const WIDTH: ValueWidth = $width;

            fn empty() -> Self {
                0
            }

            fn set(self, n: u32) -> Result<Self, CodecError> {
                check_slot(n, Self::max_idx())?;
                Ok(self | (1 << n))
            }

            fn unset(self, n: u32) -> Result<Self, CodecError> {
                check_slot(n, Self::max_idx())?;
                Ok(self & !(1 << n))
            }

            fn is_set(self, n: u32) -> Result<bool, CodecError> {
                check_slot(n, Self::max_idx())?;
                Ok((self >> n) & 1 == 1)
            }
        }
    };
}

impl_bit_value!(u8, ValueWidth::W8);
impl_bit_value!(u16, ValueWidth::W16);
impl_bit_value!(u32, ValueWidth::W32);
impl_bit_value!(u64, ValueWidth::W64);

/// Width of the per-entry value, chosen from the number of relation types.
///
/// Propagating relation types cost two slots, the others one.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ValueWidth {
    #[default]
    W8,
    W16,
    W32,
    W64,
}

impl ValueWidth {
    pub const ALL: [ValueWidth; 4] = [Self::W8, Self::W16, Self::W32, Self::W64];

    pub fn bits(&self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    pub fn max_idx(&self) -> u32 {
        self.bits() - 1
    }

    /// The narrowest width that holds `slots` slots.
    pub fn for_slot_count(slots: usize) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|w| slots <= w.bits() as usize)
    }

    /// The narrowest width that encodes all distinct `relation_types`.
    pub fn required_for(relation_types: &[RelationType]) -> Option<Self> {
        let mut distinct: Vec<&RelationType> = Vec::with_capacity(relation_types.len());
        for rt in relation_types {
            if !distinct.contains(&rt) {
                distinct.push(rt);
            }
        }
        let slots = distinct
            .iter()
            .map(|rt| if rt.propagates { 2usize } else { 1 })
            .sum();
        Self::for_slot_count(slots)
    }
}

impl fmt::Display for ValueWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}
