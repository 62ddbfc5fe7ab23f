use super::{RResult, RollError};
use crate::common::*;
use std::collections::HashMap;

/// Named dice maps registered during a parsing session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiceMaps {
    maps: HashMap<String, DiceMap>,
}

impl DiceMaps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `map` under `name`, replacing and returning any previous map
    /// of that name.
    pub fn register(&mut self, name: impl Into<String>, map: DiceMap) -> Option<DiceMap> {
        let name = name.into();
        log::debug!("registering dice map {:?} with {} entries", name, map.len());
        self.maps.insert(name, map)
    }

    pub fn get(&self, name: &str) -> Option<&DiceMap> {
        self.maps.get(name)
    }

    pub fn lookup(&self, name: &str, outcome: Int) -> RResult<&str> {
        let map = self
            .get(name)
            .ok_or_else(|| RollError::UnknownMap(name.to_owned()))?;
        map.get(&outcome)
            .map(String::as_str)
            .ok_or_else(|| RollError::UnknownOutcome {
                map: name.to_owned(),
                outcome,
            })
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}
