//! Last-non-empty-wins field policy.
//!
//! A later source replaces a field only when its own value is "present":
//! a non-empty string or collection, a non-zero number, or a `Some` whose
//! contents are present. Absent values never erase existing data.

use unicat_types::ContactInfo;

/// Whether a value counts as supplied for the purpose of overriding.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for u32 {
    fn is_present(&self) -> bool {
        *self != 0
    }
}

impl Presence for u64 {
    fn is_present(&self) -> bool {
        *self != 0
    }
}

impl Presence for ContactInfo {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}

/// Overwrites `slot` with `incoming` if `incoming` is present.
///
/// Returns true if the stored value changed.
pub fn overlay<T>(slot: &mut T, incoming: &T) -> bool
where
    T: Presence + Clone + PartialEq,
{
    if incoming.is_present() && slot != incoming {
        *slot = incoming.clone();
        true
    } else {
        false
    }
}
