// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layout of a team's gift grid

use crate::{GiftNumber, TakenSet, Team};

/// Cells per grid row. The 5x5 source grid loses its fifth column to the
/// skipped multiples of 5.
pub const GRID_COLUMNS: usize = 4;

/// Label shown on a box once it has been taken
pub const TAKEN_MARKER: &str = "✓";

/// One clickable box in a team grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub team: Team,
    pub number: GiftNumber,
    pub taken: bool,
}

impl GridCell {
    /// The number while available, the check mark once taken
    pub fn label(&self) -> String {
        if self.taken {
            TAKEN_MARKER.to_string()
        } else {
            self.number.to_string()
        }
    }
}

/// Cells for `team`, in reading order, with multiples of 5 left out entirely
pub fn grid_cells(team: Team, taken: &TakenSet) -> Vec<GridCell> {
    GiftNumber::all()
        .map(|number| GridCell {
            team,
            number,
            taken: taken.contains(number),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_skips_multiples_of_five() {
        let cells = grid_cells(Team::Bleu, &TakenSet::new());
        assert_eq!(cells.len(), 20);
        assert!(cells.iter().all(|c| c.number.get() % 5 != 0));
        assert!(cells.iter().all(|c| c.team == Team::Bleu && !c.taken));
    }

    #[test]
    fn test_rows_follow_source_grid() {
        let cells = grid_cells(Team::Vert, &TakenSet::new());
        let rows: Vec<Vec<u8>> = cells
            .chunks(GRID_COLUMNS)
            .map(|row| row.iter().map(|c| c.number.get()).collect())
            .collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], vec![1, 2, 3, 4]);
        assert_eq!(rows[4], vec![21, 22, 23, 24]);
    }

    #[test]
    fn test_taken_cells_show_marker() {
        let seven = GiftNumber::new(7).unwrap();
        let taken: TakenSet = std::iter::once(seven).collect();
        let cells = grid_cells(Team::Orange, &taken);

        let cell = cells.iter().find(|c| c.number == seven).unwrap();
        assert!(cell.taken);
        assert_eq!(cell.label(), TAKEN_MARKER);

        let other = cells.iter().find(|c| c.number.get() == 8).unwrap();
        assert_eq!(other.label(), "8");
    }
}
