use log::{error, info};

use crate::error::TransformError;

/// Ordered symbol list shared by the encoder and the decoder. Both directions find a symbol,
/// report it, and promote it to the front, so the two lists stay in lockstep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveToFront {
    symbols: Vec<u8>,
}

impl MoveToFront {
    /// Identity order over all 256 byte values.
    pub fn new() -> Self {
        Self {
            symbols: (0..=255).collect(),
        }
    }

    /// Start from a caller supplied order. Symbols must be distinct.
    pub fn with_alphabet(alphabet: &[u8]) -> Result<Self, TransformError> {
        let mut seen = [false; 256];
        if let Some(&dup) = alphabet
            .iter()
            .find(|&&s| std::mem::replace(&mut seen[s as usize], true))
        {
            error!("Alphabet repeats the symbol {:#04x}.", dup);
            return Err(TransformError::DuplicateSymbol(dup));
        }
        Ok(Self {
            symbols: alphabet.to_vec(),
        })
    }

    /// Current order, front first.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Report the rank of `byte` and move it to the front.
    pub fn encode_byte(&mut self, byte: u8) -> Option<u8> {
        let idx = self.symbols.iter().position(|&s| s == byte)?;
        self.promote(idx);
        Some(idx as u8)
    }

    /// Report the symbol at `rank` and move it to the front.
    pub fn decode_rank(&mut self, rank: u8) -> Option<u8> {
        let idx = rank as usize;
        let byte = *self.symbols.get(idx)?;
        self.promote(idx);
        Some(byte)
    }

    /// Shift everything in front of idx back one slot and put the symbol at idx first.
    fn promote(&mut self, idx: usize) {
        self.symbols[..=idx].rotate_right(1);
    }
}

impl Default for MoveToFront {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode data using Move To Front transform over all 256 byte values.
pub fn mtf_encode(text: &[u8]) -> Vec<u8> {
    info!("Move-to-front encoding {} bytes.", text.len());
    let mut mtf = MoveToFront::new();
    // Every byte value is in the full alphabet, so nothing is ever filtered out.
    text.iter().filter_map(|&byte| mtf.encode_byte(byte)).collect()
}

/// Decode Move To Front ranks back to bytes over all 256 byte values.
pub fn mtf_decode(codes: &[u8]) -> Vec<u8> {
    info!("Move-to-front decoding {} ranks.", codes.len());
    let mut mtf = MoveToFront::new();
    // Every rank is below 256, so nothing is ever filtered out.
    codes.iter().filter_map(|&rank| mtf.decode_rank(rank)).collect()
}

/// Encode data using Move To Front transform, starting from the given symbol order.
pub fn mtf_encode_with_alphabet(text: &[u8], alphabet: &[u8]) -> Result<Vec<u8>, TransformError> {
    let mut mtf = MoveToFront::with_alphabet(alphabet)?;
    text.iter()
        .map(|&byte| {
            mtf.encode_byte(byte)
                .ok_or(TransformError::UnknownSymbol(byte))
        })
        .collect()
}

/// Decode Move To Front ranks, starting from the given symbol order.
pub fn mtf_decode_with_alphabet(codes: &[u8], alphabet: &[u8]) -> Result<Vec<u8>, TransformError> {
    let mut mtf = MoveToFront::with_alphabet(alphabet)?;
    codes
        .iter()
        .map(|&rank| {
            mtf.decode_rank(rank).ok_or(TransformError::RankOutOfRange {
                rank,
                len: alphabet.len(),
            })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck::QuickCheck;

    #[test]
    fn six_symbol_test() {
        let codes = mtf_encode_with_alphabet(b"CAAABCCCACCF", b"ABCDEF").unwrap();
        assert_eq!(codes, vec![2, 1, 0, 0, 2, 2, 0, 0, 2, 1, 0, 5]);
        let text = mtf_decode_with_alphabet(&codes, b"ABCDEF").unwrap();
        assert_eq!(text, b"CAAABCCCACCF".to_vec());
    }

    #[test]
    fn state_test() {
        let mut mtf = MoveToFront::new();
        assert_eq!(mtf.decode_rank(0), Some(0));
        assert_eq!(mtf.symbols()[..6], [0, 1, 2, 3, 4, 5]);

        assert_eq!(mtf.decode_rank(5), Some(5));
        assert_eq!(mtf.symbols()[..7], [5, 0, 1, 2, 3, 4, 6]);
        assert_eq!(mtf.symbols()[255], 255);

        assert_eq!(mtf.encode_byte(4), Some(5));
        assert_eq!(mtf.symbols()[..7], [4, 5, 0, 1, 2, 3, 6]);
    }

    #[test]
    fn full_alphabet_test() {
        assert_eq!(mtf_encode(b"a"), vec![b'a']);
        assert_eq!(mtf_encode(b"aaaa"), vec![b'a', 0, 0, 0]);
        assert_eq!(mtf_encode(&[255, 255, 0]), vec![255, 0, 1]);
        assert_eq!(mtf_decode(&[255, 0, 1]), vec![255, 255, 0]);
    }

    #[test]
    fn empty_test() {
        assert!(mtf_encode(b"").is_empty());
        assert!(mtf_decode(b"").is_empty());
    }

    #[test]
    fn bad_alphabet_test() {
        assert!(matches!(
            MoveToFront::with_alphabet(b"ABCA"),
            Err(TransformError::DuplicateSymbol(b'A'))
        ));
        assert!(matches!(
            mtf_encode_with_alphabet(b"ABZ", b"AB"),
            Err(TransformError::UnknownSymbol(b'Z'))
        ));
        assert!(matches!(
            mtf_decode_with_alphabet(&[0, 2], b"AB"),
            Err(TransformError::RankOutOfRange { rank: 2, len: 2 })
        ));
    }

    #[test]
    fn runs_become_zeros_test() {
        let codes = mtf_encode(b"bbbbbaaaacccc");
        let zeros = codes.iter().filter(|&&c| c == 0).count();
        assert_eq!(zeros, 10);
    }

    #[test]
    fn roundtrip_quickcheck() {
        fn prop(text: Vec<u8>) -> bool {
            mtf_decode(&mtf_encode(&text)) == text
        }
        QuickCheck::new()
            .tests(1_000)
            .quickcheck(prop as fn(Vec<u8>) -> bool);
    }

    #[test]
    fn inverse_roundtrip_quickcheck() {
        fn prop(codes: Vec<u8>) -> bool {
            mtf_encode(&mtf_decode(&codes)) == codes
        }
        QuickCheck::new()
            .tests(1_000)
            .quickcheck(prop as fn(Vec<u8>) -> bool);
    }
}
