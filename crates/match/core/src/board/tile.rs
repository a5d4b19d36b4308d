use core::fmt;

/// Index into the host-defined symbol alphabet.
///
/// The engine never interprets symbols beyond equality; display glyphs and
/// names live in content definitions on the host side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol(pub u8);

impl Symbol {
    /// Returns the alphabet index of this symbol.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// Bonus effect carried by a special tile, fired once when the tile clears.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileModifier {
    /// Plain tile, no effect.
    #[default]
    None,
    /// Clears a square block centered on the tile.
    Area,
    /// Clears the tile's entire row and column.
    Cross,
    /// Clears every tile sharing the tile's symbol.
    Wild,
}

impl TileModifier {
    /// Creation precedence when multiple qualifying runs target one cell.
    ///
    /// Higher ranks override lower ones: a Cross earned at a row/column
    /// intersection beats the Wild or Area the same cell would otherwise get.
    #[inline]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Area => 1,
            Self::Wild => 2,
            Self::Cross => 3,
        }
    }

    /// Returns true if clearing a tile with this modifier fires an effect.
    #[inline]
    pub const fn is_effect(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// A single board cell.
///
/// Vacancy is a transient mid-round state, only observable between the clear
/// and refill steps. A vacant cell carries no symbol and no modifier by
/// construction, so the "vacant tiles have no modifier" invariant cannot be
/// violated. Tiles are value-like: copied, never aliased.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// No tile.
    #[default]
    Vacant,
    /// An occupied cell.
    Filled {
        symbol: Symbol,
        modifier: TileModifier,
    },
}

impl Tile {
    /// A plain tile with no modifier.
    pub const fn plain(symbol: Symbol) -> Self {
        Self::Filled {
            symbol,
            modifier: TileModifier::None,
        }
    }

    /// A tile carrying a bonus effect.
    pub const fn special(symbol: Symbol, modifier: TileModifier) -> Self {
        Self::Filled { symbol, modifier }
    }

    /// Returns true for an unoccupied cell.
    #[inline]
    pub const fn is_vacant(self) -> bool {
        matches!(self, Self::Vacant)
    }

    /// Returns the symbol of an occupied cell.
    #[inline]
    pub const fn symbol(self) -> Option<Symbol> {
        match self {
            Self::Vacant => None,
            Self::Filled { symbol, .. } => Some(symbol),
        }
    }

    /// Returns the cell's modifier; vacant cells report no modifier.
    #[inline]
    pub const fn modifier(self) -> TileModifier {
        match self {
            Self::Vacant => TileModifier::None,
            Self::Filled { modifier, .. } => modifier,
        }
    }
}
