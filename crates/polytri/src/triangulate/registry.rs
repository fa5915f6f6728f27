use std::collections::BTreeMap;
use std::fmt;

use crate::geom2::Segment;

use super::{EarClipping, FanTriangulation, Triangulation, TriangulationError, Triangulator};

/// Triangulators keyed by `Triangulator::name`.
#[derive(Default)]
pub struct Registry {
    algos: BTreeMap<&'static str, Box<dyn Triangulator>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `EarClipping::default()` and `FanTriangulation`.
    pub fn with_defaults() -> Self {
        let mut reg = Self::new();
        reg.register(EarClipping::default());
        reg.register(FanTriangulation);
        reg
    }

    /// Insert under the algorithm's name; returns the entry it replaced, if any.
    pub fn register<T: Triangulator + 'static>(
        &mut self,
        algo: T,
    ) -> Option<Box<dyn Triangulator>> {
        self.algos.insert(algo.name(), Box::new(algo))
    }

    pub fn get(&self, name: &str) -> Option<&dyn Triangulator> {
        self.algos.get(name).map(|a| &**a)
    }

    /// Keys in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.algos.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Triangulator> + '_ {
        self.algos.values().map(|a| &**a)
    }

    pub fn run(&self, name: &str, boundary: &[Segment]) -> Result<Triangulation, TriangulationError> {
        let algo = self
            .get(name)
            .ok_or_else(|| TriangulationError::UnknownAlgorithm {
                name: name.to_string(),
            })?;
        algo.run(boundary)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.algos.keys()).finish()
    }
}
