//! The paired notation history shown to the player.
//!
//! One record per full move: a White half-move opens a record, the Black
//! reply fills it. A Black move with no open record (the first replayed
//! move of a load, for instance) opens a record with an empty White slot.

use crate::board::piece::PieceColor;

/// One full-move line of the history table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotationRecord {
    /// 1-based full-move number.
    pub move_number: u32,
    /// White's SAN text; empty when the record was opened by a Black move.
    pub white: String,
    /// Black's SAN text; absent until Black moves.
    pub black: Option<String>,
}

/// Ordered notation records with the pairing rules applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    records: Vec<NotationRecord>,
}

impl MoveLog {
    pub fn new() -> Self {
        MoveLog::default()
    }

    pub fn records(&self) -> &[NotationRecord] {
        &self.records
    }

    /// Append one half-move's SAN text under the pairing rules.
    pub fn add(&mut self, color: PieceColor, san: String) {
        match color {
            PieceColor::White => {
                self.records.push(NotationRecord {
                    move_number: self.records.len() as u32 + 1,
                    white: san,
                    black: None,
                });
            }
            PieceColor::Black => {
                if let Some(open) = self
                    .records
                    .last_mut()
                    .filter(|record| record.black.is_none())
                {
                    open.black = Some(san);
                } else {
                    self.records.push(NotationRecord {
                        move_number: self.records.len() as u32 + 1,
                        white: String::new(),
                        black: Some(san),
                    });
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Replace the whole log, used by undo and load restoration.
    pub fn restore(&mut self, records: Vec<NotationRecord>) {
        self.records = records;
    }
}

#[cfg(test)]
mod tests {
    use super::MoveLog;
    use crate::board::piece::PieceColor;

    #[test]
    fn white_opens_and_black_fills() {
        let mut log = MoveLog::new();
        log.add(PieceColor::White, "e4".to_owned());
        log.add(PieceColor::Black, "e5".to_owned());
        log.add(PieceColor::White, "Nf3".to_owned());

        let records = log.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].move_number, 1);
        assert_eq!(records[0].white, "e4");
        assert_eq!(records[0].black.as_deref(), Some("e5"));
        assert_eq!(records[1].white, "Nf3");
        assert_eq!(records[1].black, None);
    }

    #[test]
    fn black_without_an_open_record_opens_one() {
        let mut log = MoveLog::new();
        log.add(PieceColor::Black, "e5".to_owned());

        let records = log.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].white, "");
        assert_eq!(records[0].black.as_deref(), Some("e5"));
    }
}
