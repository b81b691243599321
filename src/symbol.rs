/*!
Conversion between nucleotide characters and the 1-based symbol indices used throughout the search.
```
use motif_bnb::symbol::{char_of, complement, index_of};
assert_eq!(index_of(b'G').unwrap(), 3);
assert_eq!(char_of(4), b'T');
assert_eq!(complement(index_of(b'A').unwrap()), index_of(b'T').unwrap());
```
*/

use simple_error::{bail, SimpleError};

/// A nucleotide symbol index in `1..=4`; see `ALPHABET` for the mapping.
pub type Symbol = u8;

/// The valid characters, symbol index `i` maps to `ALPHABET[i - 1]`
pub const ALPHABET: [u8; 4] = [b'A', b'C', b'G', b'T'];

/// Placeholder returned by `char_of` for anything outside the alphabet
pub const BLANK: u8 = b' ';

/// Returns the symbol index of a character. This is case-sensitive.
/// # Arguments
/// * `ch` - the character to convert
/// # Errors
/// * if `ch` is not one of `A`, `C`, `G`, `T`
pub fn index_of(ch: u8) -> Result<Symbol, SimpleError> {
    match ALPHABET.iter().position(|&a| a == ch) {
        Some(i) => Ok(i as Symbol + 1),
        None => bail!("Invalid character in sequence: {}", ch as char)
    }
}

/// Returns the character for a symbol index, or `BLANK` if the index is out of range.
/// # Arguments
/// * `symbol` - the symbol index to convert
pub fn char_of(symbol: Symbol) -> u8 {
    if (1..=ALPHABET.len() as Symbol).contains(&symbol) {
        ALPHABET[symbol as usize - 1]
    } else {
        BLANK
    }
}

/// Watson-Crick complement of a symbol index (A<->T, C<->G).
pub fn complement(symbol: Symbol) -> Symbol {
    ALPHABET.len() as Symbol + 1 - symbol
}
