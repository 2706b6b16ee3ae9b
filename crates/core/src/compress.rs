//! SHA-1 compression function
//!
//! Folds one block's 80-word schedule into the running five-register state.
//! Rounds come in four groups of 20, each with its own boolean function and
//! additive constant (FIPS 180-4, 4.1.1 and 4.2.1).

use crate::block::Block;
use crate::params::{INITIAL_STATE, ROUND_CONSTANTS, ROUNDS_PER_GROUP, STATE_WORDS};
use crate::schedule::{Schedule, expand};

/// Running hash state: registers A..E
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct State {
    h: [u32; STATE_WORDS],
}

impl State {
    /// Fresh state holding the public initial value H(0)
    pub const fn new() -> Self {
        Self { h: INITIAL_STATE }
    }

    pub const fn from_words(h: [u32; STATE_WORDS]) -> Self {
        Self { h }
    }

    #[inline]
    pub fn words(&self) -> [u32; STATE_WORDS] {
        self.h
    }

    /// Schedule and compress one block into this state
    #[inline]
    pub fn absorb(&mut self, block: &Block) {
        *self = compress(*self, &expand(block));
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

/// Ch: bits of `c` where `b` is set, bits of `d` elsewhere
#[inline(always)]
fn ch(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (!b & d)
}

#[inline(always)]
fn parity(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

/// Maj: bitwise majority vote
#[inline(always)]
fn maj(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (b & d) | (c & d)
}

/// Boolean function output and additive constant for `round`
#[inline(always)]
fn round_terms(round: usize, b: u32, c: u32, d: u32) -> (u32, u32) {
    let group = round / ROUNDS_PER_GROUP;
    let f = match group {
        0 => ch(b, c, d),
        2 => maj(b, c, d),
        _ => parity(b, c, d),
    };
    (f, ROUND_CONSTANTS[group])
}

/// Run 80 rounds over `schedule` and add the result into `state`.
#[inline(always)]
pub fn compress(state: State, schedule: &Schedule) -> State {
    let [mut a, mut b, mut c, mut d, mut e] = state.h;

    for (round, &w) in schedule.words().iter().enumerate() {
        let (f, k) = round_terms(round, b, c, d);
        let t = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(w);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = t;
    }

    let [h0, h1, h2, h3, h4] = state.h;
    State {
        h: [
            h0.wrapping_add(a),
            h1.wrapping_add(b),
            h2.wrapping_add(c),
            h3.wrapping_add(d),
            h4.wrapping_add(e),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{BLOCK_WORDS, ROUNDS};

    #[test]
    fn test_boolean_functions() {
        let (b, c, d) = (0xF0F0F0F0, 0xFF00FF00, 0x0F0F0F0F);
        assert_eq!(ch(b, c, d), 0xFF0FFF0F);
        assert_eq!(parity(b, c, d), 0x00FF00FF);
        assert_eq!(maj(b, c, d), 0xFF00FF00);
    }

    #[test]
    fn test_round_groups() {
        let (b, c, d) = (0x12345678, 0x9ABCDEF0, 0x0F1E2D3C);
        let expected = [
            (0, ch(b, c, d), 0x5A827999),
            (19, ch(b, c, d), 0x5A827999),
            (20, parity(b, c, d), 0x6ED9EBA1),
            (39, parity(b, c, d), 0x6ED9EBA1),
            (40, maj(b, c, d), 0x8F1BBCDC),
            (59, maj(b, c, d), 0x8F1BBCDC),
            (60, parity(b, c, d), 0xCA62C1D6),
            (ROUNDS - 1, parity(b, c, d), 0xCA62C1D6),
        ];
        for (round, f, k) in expected {
            assert_eq!(round_terms(round, b, c, d), (f, k), "round {round}");
        }
    }

    #[test]
    fn test_compress_abc_block() {
        let mut words = [0u32; BLOCK_WORDS];
        words[0] = 0x61626380;
        words[15] = 0x18;

        let mut state = State::new();
        state.absorb(&Block::from_words(words));

        assert_eq!(
            state.words(),
            [0xA9993E36, 0x4706816A, 0xBA3E2571, 0x7850C26C, 0x9CD0D89D]
        );
    }

    #[test]
    fn test_compress_is_pure() {
        let block = Block::from_words([0xDEADBEEF; BLOCK_WORDS]);
        let schedule = expand(&block);
        let state = State::new();

        let first = compress(state, &schedule);
        let second = compress(state, &schedule);
        assert_eq!(first, second);
        assert_ne!(first, state);
        assert_eq!(state, State::new());
    }
}
