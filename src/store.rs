use crate::record::GameRecord;

/// Append-only, insertion-ordered collection of recorded games.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    records: Vec<GameRecord>,
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<GameRecord>) -> Self {
        Self { records }
    }

    pub fn append(&mut self, record: GameRecord) {
        self.records.push(record);
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
