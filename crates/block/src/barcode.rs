//! Code 128 (subset B) encoding into bar runs.
//!
//! The result is geometry in modules, not an image; the block layout scales
//! it to points and the canvas paints each bar as a filled rectangle.

use crate::error::BlockError;

/// Width of the blank margin on each side, in modules.
pub const QUIET_ZONE_MODULES: u32 = 10;

const START_B: usize = 104;
const STOP: usize = 106;

/// Bar/space widths for symbol values 0..=106. Each symbol starts with a bar
/// and alternates; all symbols are 11 modules wide except STOP (13).
#[rustfmt::skip]
const PATTERNS: [&str; 107] = [
    "212222", "222122", "222221", "121223", "121322", "131222", "122213", "122312", "132212", "221213",
    "221312", "231212", "112232", "122132", "122231", "113222", "123122", "123221", "223211", "221132",
    "221231", "213212", "223112", "312131", "311222", "321122", "321221", "312212", "322112", "322211",
    "212123", "212321", "232121", "111323", "131123", "131321", "112313", "132113", "132311", "211313",
    "231113", "231311", "112133", "112331", "132131", "113123", "113321", "133121", "313121", "211331",
    "231131", "213113", "213311", "213131", "311123", "311321", "331121", "312113", "312311", "332111",
    "314111", "221411", "431111", "111224", "111422", "121124", "121421", "141122", "141221", "112214",
    "112412", "122114", "122411", "142112", "142211", "241211", "221114", "413111", "241112", "134111",
    "111242", "121142", "121241", "114212", "124112", "124211", "411212", "421112", "421211", "212141",
    "214121", "412121", "111143", "111341", "131141", "114113", "114311", "411113", "411311", "113141",
    "114131", "311141", "411131", "211412", "211214", "211232", "2331112",
];

/// One dark bar, positioned in modules from the left edge of the symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub start: u32,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarPattern {
    pub bars: Vec<Bar>,
    /// Total width including both quiet zones.
    pub total_modules: u32,
}

/// Maps text to subset B symbol values.
fn symbol_values(text: &str) -> Result<Vec<usize>, BlockError> {
    if text.is_empty() {
        return Err(BlockError::EmptyBarcode);
    }
    text.char_indices()
        .map(|(offset, ch)| match ch as u32 {
            code @ 32..=126 => Ok((code - 32) as usize),
            _ => Err(BlockError::UnencodableBarcode { ch, offset }),
        })
        .collect()
}

/// Modulo-103 check symbol for subset B data values.
pub fn checksum(values: &[usize]) -> usize {
    let weighted: usize = values
        .iter()
        .enumerate()
        .map(|(i, v)| (i + 1) * v)
        .sum();
    (START_B + weighted) % 103
}

/// Encodes `text` as Code 128 subset B.
pub fn encode_code128(text: &str) -> Result<BarPattern, BlockError> {
    let values = symbol_values(text)?;
    let check = checksum(&values);

    let mut symbols = Vec::with_capacity(values.len() + 3);
    symbols.push(START_B);
    symbols.extend_from_slice(&values);
    symbols.push(check);
    symbols.push(STOP);

    let mut bars = Vec::new();
    let mut cursor = QUIET_ZONE_MODULES;
    for symbol in symbols {
        for (i, digit) in PATTERNS[symbol].bytes().enumerate() {
            let width = (digit - b'0') as u32;
            if i % 2 == 0 {
                bars.push(Bar { start: cursor, width });
            }
            cursor += width;
        }
    }

    Ok(BarPattern {
        bars,
        total_modules: cursor + QUIET_ZONE_MODULES,
    })
}
