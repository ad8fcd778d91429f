//! Bob Jenkins' lookup3 mixer (public domain).
//!
//! Only the two-output variants are needed here: [`hash_bytes2`] (`hashlittle2`) for raw token
//! bytes and [`hash_words2`] (`hashword2`) for super-token windows.
//! Original C implementation: <http://burtleburtle.net/bob/c/lookup3.c>
//!
//! Input bytes are always read little-endian, so results do not depend on the host.

const INIT: u32 = 0xdeadbeef;

#[inline(always)]
fn mix(a: &mut u32, b: &mut u32, c: &mut u32) {
    *a = a.wrapping_sub(*c) ^ c.rotate_left(4);
    *c = c.wrapping_add(*b);
    *b = b.wrapping_sub(*a) ^ a.rotate_left(6);
    *a = a.wrapping_add(*c);
    *c = c.wrapping_sub(*b) ^ b.rotate_left(8);
    *b = b.wrapping_add(*a);
    *a = a.wrapping_sub(*c) ^ c.rotate_left(16);
    *c = c.wrapping_add(*b);
    *b = b.wrapping_sub(*a) ^ a.rotate_left(19);
    *a = a.wrapping_add(*c);
    *c = c.wrapping_sub(*b) ^ b.rotate_left(4);
    *b = b.wrapping_add(*a);
}

#[inline(always)]
fn final_mix(a: &mut u32, b: &mut u32, c: &mut u32) {
    *c = (*c ^ *b).wrapping_sub(b.rotate_left(14));
    *a = (*a ^ *c).wrapping_sub(c.rotate_left(11));
    *b = (*b ^ *a).wrapping_sub(a.rotate_left(25));
    *c = (*c ^ *b).wrapping_sub(b.rotate_left(16));
    *a = (*a ^ *c).wrapping_sub(c.rotate_left(4));
    *b = (*b ^ *a).wrapping_sub(a.rotate_left(14));
    *c = (*c ^ *b).wrapping_sub(b.rotate_left(24));
}

#[inline(always)]
fn read_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// `hashlittle2`: hash a byte slice into two 32-bit values.
///
/// `pc` and `pb` seed the state; the result is `(c, b)`, where `c` alone equals
/// `hashlittle(data, pc)` when `pb == 0`.
pub fn hash_bytes2(data: &[u8], pc: u32, pb: u32) -> (u32, u32) {
    // Lengths above u32::MAX wrap, exactly as the C code's (uint32_t) cast.
    let init = INIT.wrapping_add(data.len() as u32).wrapping_add(pc);
    let (mut a, mut b, mut c) = (init, init, init.wrapping_add(pb));

    let mut rest = data;
    while rest.len() > 12 {
        a = a.wrapping_add(read_le(&rest[0..4]));
        b = b.wrapping_add(read_le(&rest[4..8]));
        c = c.wrapping_add(read_le(&rest[8..12]));
        mix(&mut a, &mut b, &mut c);
        rest = &rest[12..];
    }

    if rest.is_empty() {
        return (c, b);
    }

    // Tail of 1..=12 bytes, zero padded.
    let mut tail = [0u8; 12];
    tail[..rest.len()].copy_from_slice(rest);
    a = a.wrapping_add(read_le(&tail[0..4]));
    b = b.wrapping_add(read_le(&tail[4..8]));
    c = c.wrapping_add(read_le(&tail[8..12]));
    final_mix(&mut a, &mut b, &mut c);
    (c, b)
}

/// `hashword2`: hash a slice of 32-bit words into two 32-bit values.
///
/// Same seeding and output convention as [`hash_bytes2`]. For any `words`,
/// the result equals `hash_bytes2` over the little-endian encoding of `words`.
pub fn hash_words2(words: &[u32], pc: u32, pb: u32) -> (u32, u32) {
    let init = INIT
        .wrapping_add((words.len() as u32).wrapping_mul(4))
        .wrapping_add(pc);
    let (mut a, mut b, mut c) = (init, init, init.wrapping_add(pb));

    let mut rest = words;
    while rest.len() > 3 {
        a = a.wrapping_add(rest[0]);
        b = b.wrapping_add(rest[1]);
        c = c.wrapping_add(rest[2]);
        mix(&mut a, &mut b, &mut c);
        rest = &rest[3..];
    }

    match *rest {
        [] => return (c, b),
        [k0] => a = a.wrapping_add(k0),
        [k0, k1] => {
            a = a.wrapping_add(k0);
            b = b.wrapping_add(k1);
        }
        [k0, k1, k2] => {
            a = a.wrapping_add(k0);
            b = b.wrapping_add(k1);
            c = c.wrapping_add(k2);
        }
        _ => unreachable!("loop leaves at most three words"),
    }
    final_mix(&mut a, &mut b, &mut c);
    (c, b)
}
