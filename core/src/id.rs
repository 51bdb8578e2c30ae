//! Identity types for classes.

use std::fmt;

/// Identifier for a class in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub u32);

impl ClassId {
    /// The root class every object, array and function descends from.
    pub const OBJECT: ClassId = ClassId(0);
    /// The class of array values.
    pub const ARRAY: ClassId = ClassId(1);
    /// The class of function values.
    pub const FUNCTION: ClassId = ClassId(2);

    /// Number of ids reserved for builtin classes.
    pub const BUILTIN_COUNT: u32 = 3;

    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }

    /// Returns true if this id is one of the builtin classes.
    pub fn is_builtin(&self) -> bool {
        self.0 < Self::BUILTIN_COUNT
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}
