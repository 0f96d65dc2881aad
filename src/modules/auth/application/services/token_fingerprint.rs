use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of a refresh token. The blacklist only ever sees
/// fingerprints, so a leaked Redis dump cannot be replayed.
pub fn fingerprint(token: &str) -> String {
    Sha256::digest(token.as_bytes())
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_sha256_test_vector() {
        assert_eq!(
            fingerprint("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn distinct_tokens_get_distinct_fingerprints() {
        let a = fingerprint("eyJ.refresh.one");
        assert_ne!(a, fingerprint("eyJ.refresh.two"));
        assert_eq!(a, fingerprint("eyJ.refresh.one"));
    }
}
