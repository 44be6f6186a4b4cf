//! Compiled marker tables: scope, layer and direction synonyms.

use regex::Regex;
use stratum_core::errors::ClassificationError;

use super::registry::compile_anchored;

/// Token-to-value lookup, one alternation per value, tried in table order.
#[derive(Debug, Clone)]
pub struct MarkerSet<T> {
    entries: Vec<(T, Regex)>,
}

impl<T> Default for MarkerSet<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Copy> MarkerSet<T> {
    pub fn compile(table: &[(T, &[&str])]) -> Result<Self, ClassificationError> {
        let entries = table
            .iter()
            .map(|(value, synonyms)| {
                let alternation = synonyms.join("|");
                compile_anchored(&alternation).map(|re| (*value, re))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    /// Value whose synonyms fully match `token`.
    pub fn lookup(&self, token: &str) -> Option<T> {
        self.entries
            .iter()
            .find(|(_, re)| re.is_match(token))
            .map(|(value, _)| *value)
    }

    pub fn is_marker(&self, token: &str) -> bool {
        self.entries.iter().any(|(_, re)| re.is_match(token))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::rules::{DIRECTION_MARKERS, LAYER_MARKERS};
    use stratum_core::types::{DirectionType, LayerType};

    #[test]
    fn markers_are_whole_token_and_case_insensitive() {
        let layers = MarkerSet::compile(LAYER_MARKERS).unwrap();
        assert_eq!(layers.lookup("Domain"), Some(LayerType::Domain));
        assert_eq!(layers.lookup("infra"), Some(LayerType::Adapters));
        assert_eq!(layers.lookup("port"), Some(LayerType::Ports));
        assert_eq!(layers.lookup("domains_legacy"), None);
        assert_eq!(layers.lookup("application_x"), None);
    }

    #[test]
    fn abbreviated_directions() {
        let directions = MarkerSet::compile(DIRECTION_MARKERS).unwrap();
        assert_eq!(directions.lookup("drv"), Some(DirectionType::Driving));
        assert_eq!(directions.lookup("OUT"), Some(DirectionType::Driven));
        assert_eq!(directions.lookup("outer"), None);
    }
}
