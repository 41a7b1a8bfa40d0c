//! SHA-256 round functions.

use super::K256;

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Runs all 64 rounds over `state` using a rolling 16-word message schedule.
///
/// `w` holds the first 16 schedule words on entry; later words are expanded
/// in place as `w[i & 15]`.
pub(crate) fn all_rounds(state: &mut [u32; 8], mut w: [u32; 16]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for (i, &ki) in K256.iter().enumerate() {
        if i >= 16 {
            let w16 = w[(i - 16) & 15];
            let w15 = w[(i - 15) & 15];
            let w7 = w[(i - 7) & 15];
            let w2 = w[(i - 2) & 15];

            w[i & 15] = w16
                .wrapping_add(small_sigma0(w15))
                .wrapping_add(w7)
                .wrapping_add(small_sigma1(w2));
        }

        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(w[i & 15])
            .wrapping_add(ki);

        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *s = s.wrapping_add(v);
    }
}
