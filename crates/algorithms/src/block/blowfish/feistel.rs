//! Blowfish round function and 16-round Feistel network

use bfcrypt_params::utils::symmetric::{BLOWFISH_P_ARRAY_LEN, BLOWFISH_ROUNDS};

use super::schedule::Schedule;

impl Schedule {
    /// Round function: `((S0[a] + S1[b]) ^ S2[c]) + S3[d]` mod 2^32
    #[inline(always)]
    fn f(&self, x: u32) -> u32 {
        let [a, b, c, d] = x.to_be_bytes();
        let h = self.s[0][a as usize].wrapping_add(self.s[1][b as usize]);
        (h ^ self.s[2][c as usize]).wrapping_add(self.s[3][d as usize])
    }

    /// Encrypts one block given as its left and right 32-bit halves
    pub fn encrypt_words(&self, mut l: u32, mut r: u32) -> (u32, u32) {
        for i in 0..BLOWFISH_ROUNDS {
            l ^= self.p[i];
            r ^= self.f(l);
            core::mem::swap(&mut l, &mut r);
        }
        // the last round does not swap
        core::mem::swap(&mut l, &mut r);
        r ^= self.p[BLOWFISH_ROUNDS];
        l ^= self.p[BLOWFISH_ROUNDS + 1];
        (l, r)
    }

    /// Decrypts one block; the P-array is consumed from the end
    pub fn decrypt_words(&self, mut l: u32, mut r: u32) -> (u32, u32) {
        for i in (2..BLOWFISH_P_ARRAY_LEN).rev() {
            l ^= self.p[i];
            r ^= self.f(l);
            core::mem::swap(&mut l, &mut r);
        }
        core::mem::swap(&mut l, &mut r);
        r ^= self.p[1];
        l ^= self.p[0];
        (l, r)
    }
}
