//! Front-end state that isn't part of the wizard itself

/// Cards per row in the skip grid
pub const CARD_COLUMNS: usize = 3;

/// Keyboard focus within the skip grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardCursor {
    index: usize,
}

impl CardCursor {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn left(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn right(&mut self, count: usize) {
        if self.index + 1 < count {
            self.index += 1;
        }
    }

    pub fn up(&mut self) {
        if self.index >= CARD_COLUMNS {
            self.index -= CARD_COLUMNS;
        }
    }

    pub fn down(&mut self, count: usize) {
        if self.index + CARD_COLUMNS < count {
            self.index += CARD_COLUMNS;
        }
    }

    /// Keep the cursor on an existing card after the catalog changes
    pub fn clamp(&mut self, count: usize) {
        self.index = self.index.min(count.saturating_sub(1));
    }

    pub fn set(&mut self, index: usize, count: usize) {
        self.index = index;
        self.clamp(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_moves_stay_in_range() {
        let mut cursor = CardCursor::default();
        cursor.left();
        assert_eq!(cursor.index(), 0);

        cursor.right(2);
        cursor.right(2);
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_vertical_moves_by_row() {
        let mut cursor = CardCursor::default();
        cursor.down(8);
        assert_eq!(cursor.index(), 3);
        cursor.down(8);
        assert_eq!(cursor.index(), 6);
        // Row below would be past the last card
        cursor.down(8);
        assert_eq!(cursor.index(), 6);
        cursor.up();
        assert_eq!(cursor.index(), 3);
    }

    #[test]
    fn test_clamp_on_empty_catalog() {
        let mut cursor = CardCursor::default();
        cursor.set(5, 0);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_set_clamps() {
        let mut cursor = CardCursor::default();
        cursor.set(5, 3);
        assert_eq!(cursor.index(), 2);
    }
}
