use std::collections::BTreeMap;

use super::{Grid, Token, TokenId};

/// Read-only zone data consumed by vision strategies.
///
/// Implementations are queried, never mutated, while a region is built.
pub trait ZoneOracle {
    fn grid(&self) -> &Grid;

    /// Distance units (feet, meters, ...) covered by one cell.
    fn units_per_cell(&self) -> u32;

    /// Resolves a token by id. `None` when it is not (or no longer) in the zone.
    fn token(&self, id: TokenId) -> Option<Token>;

    /// Zone points per distance unit: grid size divided by units per cell,
    /// rounded down.
    fn points_per_cell(&self) -> u32 {
        self.grid().size() / self.units_per_cell().max(1)
    }
}

/// In-memory zone, the scene representation used by loaders and tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneSnapshot {
    pub grid: Grid,
    pub units_per_cell: u32,
    tokens: BTreeMap<TokenId, Token>,
}

impl ZoneSnapshot {
    pub const DEFAULT_UNITS_PER_CELL: u32 = 5;

    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            units_per_cell: Self::DEFAULT_UNITS_PER_CELL,
            tokens: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_units_per_cell(mut self, units_per_cell: u32) -> Self {
        self.units_per_cell = units_per_cell;
        self
    }

    #[must_use]
    pub fn with_token(mut self, token: Token) -> Self {
        self.insert_token(token);
        self
    }

    /// Adds or replaces a token.
    pub fn insert_token(&mut self, token: Token) {
        self.tokens.insert(token.id, token);
    }

    pub fn remove_token(&mut self, id: TokenId) -> Option<Token> {
        self.tokens.remove(&id)
    }

    /// Updates a token's facing. Returns `false` when the token is unknown.
    pub fn set_facing(&mut self, id: TokenId, facing: Option<i32>) -> bool {
        match self.tokens.get_mut(&id) {
            Some(token) => {
                token.facing = facing;
                true
            }
            None => false,
        }
    }

    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.values()
    }
}

impl Default for ZoneSnapshot {
    fn default() -> Self {
        Self::new(Grid::default())
    }
}

impl ZoneOracle for ZoneSnapshot {
    fn grid(&self) -> &Grid {
        &self.grid
    }

    fn units_per_cell(&self) -> u32 {
        self.units_per_cell
    }

    fn token(&self, id: TokenId) -> Option<Token> {
        self.tokens.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_per_cell_rounds_down() {
        let zone = ZoneSnapshot::new(Grid::square(50)).with_units_per_cell(3);
        assert_eq!(zone.points_per_cell(), 16);
    }

    #[test]
    fn zero_units_per_cell_is_treated_as_one() {
        let zone = ZoneSnapshot::new(Grid::square(50)).with_units_per_cell(0);
        assert_eq!(zone.points_per_cell(), 50);
    }

    #[test]
    fn facing_updates_only_known_tokens() {
        let id = TokenId(7);
        let mut zone = ZoneSnapshot::default().with_token(Token::new(id));
        assert!(zone.set_facing(id, Some(90)));
        assert_eq!(zone.token(id).and_then(|t| t.facing), Some(90));
        assert!(!zone.set_facing(TokenId(8), Some(0)));

        assert!(zone.remove_token(id).is_some());
        assert_eq!(zone.token(id), None);
    }
}
