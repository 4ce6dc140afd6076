//! Salted PBKDF2 password hashing.
//!
//! Stored encoding: `pbkdf2-sha256$<iterations>$<salt b64>$<digest b64>`,
//! base64url without padding. Anything that doesn't parse back out of that
//! shape verifies as false rather than erroring: a malformed row should
//! read as "wrong password", not take the login endpoint down.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use ring::pbkdf2;
use ring::rand::{SecureRandom, SystemRandom};
use std::num::NonZeroU32;
use subtle::ConstantTimeEq;

const ALGORITHM_TAG: &str = "pbkdf2-sha256";
const PBKDF2_ITERATIONS: NonZeroU32 = NonZeroU32::new(100_000).unwrap();
const SALT_LENGTH: usize = 16;
const DIGEST_LENGTH: usize = 32;

/// Hash a plaintext password with a fresh random salt.
pub fn hash(password: &str) -> String {
    let mut salt = [0u8; SALT_LENGTH];
    SystemRandom::new()
        .fill(&mut salt)
        .expect("system RNG unavailable");

    let digest = derive(password, &salt, PBKDF2_ITERATIONS);
    format!(
        "{ALGORITHM_TAG}${PBKDF2_ITERATIONS}${}${}",
        URL_SAFE_NO_PAD.encode(salt),
        URL_SAFE_NO_PAD.encode(digest)
    )
}

/// Check a plaintext password against a stored hash in constant time.
pub fn verify(password: &str, stored: &str) -> bool {
    let Some((salt, expected, iterations)) = decode(stored) else {
        return false;
    };
    let derived = derive(password, &salt, iterations);
    bool::from(derived.as_slice().ct_eq(expected.as_slice()))
}

fn derive(password: &str, salt: &[u8], iterations: NonZeroU32) -> [u8; DIGEST_LENGTH] {
    let mut digest = [0u8; DIGEST_LENGTH];
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA256,
        iterations,
        salt,
        password.as_bytes(),
        &mut digest,
    );
    digest
}

fn decode(stored: &str) -> Option<(Vec<u8>, Vec<u8>, NonZeroU32)> {
    let mut parts = stored.split('$');
    if parts.next()? != ALGORITHM_TAG {
        return None;
    }
    let iterations = NonZeroU32::new(parts.next()?.parse().ok()?)?;
    let salt = URL_SAFE_NO_PAD.decode(parts.next()?).ok()?;
    let digest = URL_SAFE_NO_PAD.decode(parts.next()?).ok()?;
    if parts.next().is_some() || digest.len() != DIGEST_LENGTH {
        return None;
    }
    Some((salt, digest, iterations))
}
