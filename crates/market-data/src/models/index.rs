use crate::errors::MarketDataError;

/// Hang Seng indexes whose constituents can be served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HangSengIndex {
    /// Hang Seng Composite SmallCap Index
    Hcs,
}

impl HangSengIndex {
    pub const ALL: &'static [HangSengIndex] = &[HangSengIndex::Hcs];

    /// Look up an index by symbol, ignoring case.
    pub fn from_symbol(symbol: &str) -> Result<Self, MarketDataError> {
        let symbol = symbol.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|index| index.symbol() == symbol)
            .ok_or_else(|| MarketDataError::UnknownIndex {
                symbol,
                supported: Self::supported_symbols(),
            })
    }

    pub fn supported_symbols() -> Vec<&'static str> {
        Self::ALL.iter().map(|index| index.symbol()).collect()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Hcs => "HCS",
        }
    }

    /// Display name as published by Hang Seng Indexes.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hcs => "Hang Seng Compositie SmallCap Index",
        }
    }

    /// Workbook listing the current constituents.
    pub fn source_url(&self) -> &'static str {
        match self {
            Self::Hcs => "https://www.hsi.com.hk/static/uploads/contents/en/dl_centre/other_materials/HSSI_LISTe.xls",
        }
    }
}
