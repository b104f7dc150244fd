//! Package registry backing symbol resolution.

use std::collections::HashMap;

use log::debug;

use crate::primitive::{Package, PackageId};


const USER_PACKAGE: &str = "risp-user";
const KEYWORD_PACKAGE: &str = "keyword";


/// Owns every Package for its lifetime; Symbols refer back into the
/// arena by PackageId.
///
/// Package creation is the only mutation and is idempotent. No internal
/// locking; sharing across readers is the embedder's concern.
pub struct State {
    packages: Vec<Package>,
    index: HashMap<String, PackageId>,

    current_package: PackageId,
    keyword_package: PackageId,
}

impl State {
    pub fn new() -> Self {
        let mut state = Self {
            packages: Vec::default(),
            index: HashMap::default(),
            current_package: PackageId::default(),
            keyword_package: PackageId::default(),
        };
        state.current_package = state.define_package(USER_PACKAGE);
        state.keyword_package = state.define_package(KEYWORD_PACKAGE);
        state
    }

    /// Existing package for name, or a freshly created one.
    pub fn define_package<S: AsRef<str>>(&mut self, name: S) -> PackageId {
        let name = name.as_ref();
        if let Some(id) = self.index.get(name) {
            return *id;
        }

        let id = PackageId::new(self.packages.len() as u64);
        debug!("defining package {} as {}", name, id);
        self.packages.push(Package::new(name));
        self.index.insert(name.to_string(), id);
        id
    }

    /// Lookup without creation.
    pub fn find_package<S: AsRef<str>>(&self, name: S) -> Option<PackageId> {
        self.index.get(name.as_ref()).copied()
    }

    pub fn package(&self, id: PackageId) -> &Package {
        &self.packages[id.index() as usize]
    }

    pub fn current_package(&self) -> PackageId {
        self.current_package
    }

    pub fn keyword_package(&self) -> PackageId {
        self.keyword_package
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
