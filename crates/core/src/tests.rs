//! Tests for the SHA-1 pipeline

use crate::{
    BitBuffer, DIGEST_SIZE, Digest, DigestError, HEX_DIGEST_LEN, Sha1, encode, hash, hash_bits,
    hash_many, pad, split, try_hash,
};

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec, vec::Vec};

use sha1::{Digest as _, Sha1 as Reference};

fn reference(input: &[u8]) -> [u8; DIGEST_SIZE] {
    let out = Reference::digest(input);
    let mut arr = [0u8; DIGEST_SIZE];
    arr.copy_from_slice(&out);
    arr
}

fn hex_digest(input: &[u8]) -> String {
    hash(input).to_hex()
}

/// Published vectors (FIPS 180 examples and common references)
#[test]
fn test_known_vectors() {
    let vectors: [(&[u8], &str); 6] = [
        (b"", "da39a3ee5e6b4b0d3255bfef95601890afd80709"),
        (b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d"),
        (
            b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
            "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
        ),
        (
            b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
            "a49b2446a02c645bf419f995b67091253a04a259",
        ),
        (
            b"The quick brown fox jumps over the lazy dog",
            "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
        ),
        (
            b"The quick brown fox jumps over the lazy cog",
            "de9f2c7fd25e1b3afad3e85a0bd17d9b100db4b3",
        ),
    ];

    for (input, expected) in vectors {
        assert_eq!(
            hex_digest(input),
            expected,
            "Digest mismatch for input {:?}",
            String::from_utf8_lossy(input)
        );
    }
}

#[test]
fn test_one_million_a() {
    let input = vec![b'a'; 1_000_000];
    assert_eq!(
        hex_digest(&input),
        "34aa973cd4c4daa4f61eeb2bdbad27316534016f"
    );
}

/// 55 bytes still fit one block with the length field; 56 do not.
#[test]
fn test_padding_boundary_lengths() {
    let cases = [
        (0usize, 1u64),
        (55, 1),
        (56, 2),
        (63, 2),
        (64, 2),
        (119, 2),
        (120, 3),
        (128, 3),
    ];

    let mut hasher = Sha1::new();
    for (len, blocks) in cases {
        let input: Vec<u8> = (0..len).map(|i| (i as u8).wrapping_mul(31)).collect();
        let digest = hasher.hash(&input);

        assert_eq!(
            digest.as_bytes(),
            &reference(&input),
            "Digest mismatch at {len} bytes"
        );
        assert_eq!(hasher.blocks_processed(), blocks, "Block count at {len} bytes");
    }
}

#[test]
fn test_matches_reference_for_all_short_lengths() {
    let mut buf = Vec::with_capacity(200);
    for i in 0..200u32 {
        let ours = hash(&buf);
        assert_eq!(ours.as_bytes(), &reference(&buf), "length {}", buf.len());
        buf.push((i * 7 + 3) as u8);
    }
}

#[test]
fn test_digest_length_is_fixed() {
    for len in 0..200 {
        let digest = hash(&vec![0x5Au8; len]);
        assert_eq!(digest.as_bytes().len(), DIGEST_SIZE);

        let hex = digest.to_hex();
        assert_eq!(hex.len(), HEX_DIGEST_LEN);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}

#[test]
fn test_hash_is_deterministic() {
    let input = b"test input data";
    assert_eq!(hash(input), hash(input));
    assert_ne!(hash(b"input 1"), hash(b"input 2"));
}

#[test]
fn test_hasher_reusability() {
    let mut hasher = Sha1::new();

    let first = hasher.hash(b"first input");
    let second = hasher.hash(&[0xAB; 1000]);
    let first_again = hasher.hash(b"first input");

    assert_eq!(first, first_again);
    assert_eq!(first, hash(b"first input"));
    assert_eq!(second, hash(&[0xAB; 1000]));
    assert_eq!(hasher.blocks_processed(), 1);
}

#[test]
fn test_hasher_state_matches_digest() {
    let mut hasher = Sha1::new();
    let digest = hasher.hash(b"abc");
    assert_eq!(crate::assemble(hasher.state()), digest);
}

#[test]
fn test_avalanche_effect() {
    // Flipping one input bit should flip about half of the 160 output bits
    let samples = 64;
    let mut total = 0u32;

    for i in 0..samples {
        let input: Vec<u8> = (0..(i + 8)).map(|j| (j * 13 + i) as u8).collect();
        let mut flipped = input.clone();
        let bit = (i * 5) % (input.len() * 8);
        flipped[bit / 8] ^= 0x80 >> (bit % 8);

        total += hash(&input).bit_distance(&hash(&flipped));
    }

    let mean = total / samples as u32;
    assert!(
        (60..=100).contains(&mean),
        "Avalanche effect: {} bits differ on average (expected ~80)",
        mean
    );
}

#[test]
fn test_hash_bits_matches_byte_hash_when_aligned() {
    let bits = BitBuffer::from_bits(b"abc", 24).unwrap();
    assert_eq!(hash_bits(bits).unwrap(), hash(b"abc"));
    assert_eq!(hash_bits(BitBuffer::new()).unwrap(), hash(b""));
}

#[test]
fn test_bit_message_boundaries() {
    let bytes = [0xA5u8; 64];
    let mut hasher = Sha1::new();

    // 447 bits + the 1 bit land exactly on 448: no zero fill, one block
    hasher.hash_bits(BitBuffer::from_bits(&bytes, 447).unwrap()).unwrap();
    assert_eq!(hasher.blocks_processed(), 1);

    hasher.hash_bits(BitBuffer::from_bits(&bytes, 448).unwrap()).unwrap();
    assert_eq!(hasher.blocks_processed(), 2);

    // Bits past the message length must not influence the digest
    let a = hash_bits(BitBuffer::from_bits(&[0b1010_0000], 3).unwrap()).unwrap();
    let b = hash_bits(BitBuffer::from_bits(&[0b1011_1111], 3).unwrap()).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, hash_bits(BitBuffer::from_bits(&[0b1010_0000], 4).unwrap()).unwrap());
}

#[test]
fn test_pipeline_stages_compose() {
    let padded = pad(encode(b"abc").unwrap()).unwrap();
    let mut state = crate::State::new();
    for block in split(&padded).unwrap() {
        state.absorb(&block);
    }
    assert_eq!(crate::assemble(state), hash(b"abc"));
}

#[test]
fn test_try_hash_and_errors() {
    assert_eq!(try_hash(b"abc").unwrap(), hash(b"abc"));
    assert!(matches!(
        split(&encode(&[0u8; 10]).unwrap()),
        Err(DigestError::InternalInvariantViolation { bit_len: 80 })
    ));
}

#[test]
fn test_hash_many_preserves_order() {
    let messages: Vec<Vec<u8>> = (0..50).map(|i| vec![i as u8; i * 3]).collect();
    let digests = hash_many(&messages);

    assert_eq!(digests.len(), messages.len());
    for (message, digest) in messages.iter().zip(&digests) {
        assert_eq!(*digest, hash(message));
    }

    let borrowed: [&[u8]; 2] = [b"abc", b""];
    let digests = hash_many(&borrowed);
    assert_eq!(digests[0].to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
    assert_eq!(digests[1].to_hex(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
}

#[cfg(feature = "serde")]
#[test]
fn test_digest_serde_as_hex_string() {
    let digest = hash(b"abc");
    let json = serde_json::to_string(&digest).unwrap();
    assert_eq!(json, "\"a9993e364706816aba3e25717850c26c9cd0d89d\"");

    let back: Digest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, digest);
    assert!(serde_json::from_str::<Digest>("\"abc\"").is_err());
}

#[test]
fn test_digest_conversions() {
    let digest = hash(b"abc");
    let raw: [u8; DIGEST_SIZE] = digest.into();
    assert_eq!(Digest::from(raw), digest);
    assert_eq!(digest.as_ref(), &raw[..]);
}

#[cfg(feature = "std")]
mod properties {
    use super::*;
    use proptest::collection::vec as bytes;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_padding_tiles_blocks(message in bytes(any::<u8>(), 0..300)) {
            let bits = encode(&message).unwrap();
            prop_assert_eq!(bits.bit_len(), 8 * message.len() as u64);

            let padded = pad(bits).unwrap();
            prop_assert_eq!(padded.bit_len() % 512, 0);
            prop_assert!(padded.bit_len() > 0);

            let out = padded.as_bytes();
            prop_assert_eq!(&out[..message.len()], &message[..]);
            prop_assert_eq!(out[message.len()], 0x80);

            let mut tail = [0u8; 8];
            tail.copy_from_slice(&out[out.len() - 8..]);
            prop_assert_eq!(u64::from_be_bytes(tail), 8 * message.len() as u64);
        }

        #[test]
        fn prop_matches_reference(message in bytes(any::<u8>(), 0..300)) {
            let ours = hash(&message);
            prop_assert_eq!(ours.as_bytes(), &reference(&message));
        }

        #[test]
        fn prop_bit_messages_tile_blocks(message in bytes(any::<u8>(), 1..100), cut in 0u64..8) {
            let bit_len = 8 * message.len() as u64 - cut;
            let padded = pad(BitBuffer::from_bits(&message, bit_len).unwrap()).unwrap();
            prop_assert_eq!(padded.bit_len() % 512, 0);
            prop_assert_eq!(padded.bit(bit_len), Some(true));
        }
    }
}
