//! Display-side symbol definitions.
//!
//! The engine deals in bare [`Symbol`] indices; hosts map them to names and
//! glyphs through a [`SymbolSet`]. The default set is the classic five-fruit
//! alphabet with the apple as the healing symbol.

use match_core::Symbol;

/// One displayable symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolSpec {
    pub name: String,
    pub glyph: String,
}

impl SymbolSpec {
    pub fn new(name: impl Into<String>, glyph: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            glyph: glyph.into(),
        }
    }
}

/// Ordered symbol alphabet plus the healing designation.
///
/// Index order defines the [`Symbol`] mapping the engine sees; `healing`
/// names the index that restores health under the `heal-on-symbol` modifier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolSet {
    pub symbols: Vec<SymbolSpec>,
    pub healing: Option<u8>,
}

impl SymbolSet {
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Alphabet size in the form balance tables carry it.
    pub fn count(&self) -> u8 {
        self.symbols.len().min(u8::MAX as usize) as u8
    }

    /// Display glyph for a symbol, if the index is in range.
    pub fn glyph(&self, symbol: Symbol) -> Option<&str> {
        self.symbols
            .get(symbol.index())
            .map(|spec| spec.glyph.as_str())
    }

    /// Display name for a symbol, if the index is in range.
    pub fn name(&self, symbol: Symbol) -> Option<&str> {
        self.symbols
            .get(symbol.index())
            .map(|spec| spec.name.as_str())
    }

    /// The symbol that heals under `heal-on-symbol`, if any.
    pub fn healing_symbol(&self) -> Option<Symbol> {
        self.healing.map(Symbol)
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        Self {
            symbols: vec![
                SymbolSpec::new("apple", "🍎"),
                SymbolSpec::new("orange", "🍊"),
                SymbolSpec::new("lemon", "🍋"),
                SymbolSpec::new("grape", "🍇"),
                SymbolSpec::new("kiwi", "🥝"),
            ],
            healing: Some(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_is_the_five_fruit_alphabet() {
        let set = SymbolSet::default();
        assert_eq!(set.count(), 5);
        assert_eq!(set.name(Symbol(0)), Some("apple"));
        assert_eq!(set.glyph(Symbol(4)), Some("🥝"));
        assert_eq!(set.healing_symbol(), Some(Symbol(0)));
    }

    #[test]
    fn out_of_range_symbols_have_no_glyph() {
        let set = SymbolSet::default();
        assert_eq!(set.glyph(Symbol(9)), None);
        assert_eq!(set.name(Symbol(9)), None);
    }
}
