/// Salted one-way digest of a secret, stored as hex alongside the hex salt
/// that produced it so verification can recompute the digest.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SecretHash {
    hash_hex: String,
    salt_hex: String,
}

impl SecretHash {
    pub fn new(hash_hex: String, salt_hex: String) -> Self {
        Self { hash_hex, salt_hex }
    }

    pub fn hash_hex(&self) -> &str {
        &self.hash_hex
    }

    pub fn salt_hex(&self) -> &str {
        &self.salt_hex
    }
}
