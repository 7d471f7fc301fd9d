use serde::{Deserialize, Serialize};

/// The treasure record attached to a generated maze.
///
/// The entry cell is tracked on the maze itself (`contains_donjon`); this
/// record carries the content handed to consuming layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donjon {
    pub name: String,
    pub treasure: u32,
}

impl Default for Donjon {
    fn default() -> Self {
        Self {
            name: "Donjon".to_string(),
            treasure: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record() {
        let donjon = Donjon::default();
        assert_eq!(donjon.name, "Donjon");
        assert_eq!(donjon.treasure, 100);
    }
}
