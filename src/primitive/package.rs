//! Packages as namespaces scoping symbol names.
//!
//! Symbols refer to their package through a [`PackageId`], a stable index
//! into the registry's package arena, so values stay valid independent of
//! registry internals.

use std::fmt;

use serde::{Deserialize, Serialize};


pub type PackageIndex = u64;

#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialOrd, PartialEq, Serialize, Deserialize,
)]
pub struct PackageId(PackageIndex);

impl PackageId {
    pub const fn new(index: PackageIndex) -> PackageId {
        PackageId(index)
    }

    pub const fn index(&self) -> PackageIndex {
        self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pkg[{}]", self.0)
    }
}


#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Package {
    name: String,
}

impl Package {
    pub fn new<S: AsRef<str>>(name: S) -> Package {
        Package {
            name: name.as_ref().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
