pub mod heuristics;

use crate::env::ForagingEnv;

pub use heuristics::{GreedyImportance, ImportanceRatio, NearestNeighbour};

/// Chooses the next candidate to visit. `None` when nothing is left unvisited.
pub trait Policy {
    fn name(&self) -> &'static str;
    fn choose(&mut self, env: &ForagingEnv) -> Option<usize>;
}

/// The three reference heuristics, in report order.
pub fn default_policies() -> Vec<Box<dyn Policy>> {
    vec![
        Box::new(NearestNeighbour),
        Box::new(GreedyImportance),
        Box::new(ImportanceRatio::default()),
    ]
}
