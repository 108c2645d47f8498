//! Construction options carried by every [`TypedSequence`](crate::TypedSequence).
//!
//! Options are pass-through configuration: they are stored, exposed and
//! propagated to derived sequences, but no sequence operation changes
//! behavior because of them.

use bitflags::bitflags;

bitflags! {
    /// Property-visibility flags for hosts that expose sequence entries as
    /// properties.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct SequenceFlags: u8 {
        /// Entries are listed when the sequence is enumerated as a property bag.
        const STD_PROP_LIST = 1;
        /// Entries may be read as properties.
        const ARRAY_AS_PROPS = 2;
    }
}

impl Default for SequenceFlags {
    fn default() -> Self {
        SequenceFlags::STD_PROP_LIST
    }
}

/// Iteration strategy requested by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IteratorKind {
    /// Visit top-level entries only.
    #[default]
    Flat,
    /// Descend into nested lists.
    Recursive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SequenceOptions {
    pub flags: SequenceFlags,
    pub iterator: IteratorKind,
}

impl SequenceOptions {
    pub fn with_flags(mut self, flags: SequenceFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_iterator(mut self, iterator: IteratorKind) -> Self {
        self.iterator = iterator;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = SequenceOptions::default();
        assert_eq!(options.flags, SequenceFlags::STD_PROP_LIST);
        assert_eq!(options.iterator, IteratorKind::Flat);
    }

    #[test]
    fn builder_overrides() {
        let options = SequenceOptions::default()
            .with_flags(SequenceFlags::STD_PROP_LIST | SequenceFlags::ARRAY_AS_PROPS)
            .with_iterator(IteratorKind::Recursive);
        assert!(options.flags.contains(SequenceFlags::ARRAY_AS_PROPS));
        assert_eq!(options.iterator, IteratorKind::Recursive);
    }
}
