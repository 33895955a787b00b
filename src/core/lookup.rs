//! Environment variable lookup.
//!
//! The resolver never reads the process environment directly; it receives a
//! [`Lookup`] so tests can supply a fixed map.

use std::collections::{BTreeMap, HashMap};

/// Source of environment variables.
pub trait Lookup {
    /// Value of `name`, if set.
    fn get(&self, name: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Lookup for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// An environment with nothing set.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyEnv;

impl Lookup for EmptyEnv {
    fn get(&self, _name: &str) -> Option<String> {
        None
    }
}

impl Lookup for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl Lookup for BTreeMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        BTreeMap::get(self, name).cloned()
    }
}

/// Adapts a closure into a [`Lookup`].
#[derive(Debug, Clone, Copy)]
pub struct FnLookup<F>(pub F);

impl<F> Lookup for FnLookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Option<String> {
        (self.0)(name)
    }
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}
