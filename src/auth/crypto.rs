use super::*;
use crate::Error;
use crate::ID;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

const ACCESS_TOKEN_DURATION: std::time::Duration = std::time::Duration::from_secs(60 * 60);

/// HS256 signer and verifier, built once from the configured secret.
pub struct Crypto {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl Crypto {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
    }
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
    }
    /// Mints a fresh token for `user`.
    pub fn issue(&self, user: ID<Member>) -> Result<String, Error> {
        Ok(self.encode(&Claims::new(user))?)
    }
    /// Signature, shape, and expiry failures are indistinguishable here.
    pub fn verify(&self, token: &str) -> Result<Claims, Error> {
        self.decode(token)
            .ok()
            .filter(|claims| !claims.expired())
            .ok_or(Error::Unauthenticated)
    }
    pub const fn duration() -> std::time::Duration {
        ACCESS_TOKEN_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use std::time::SystemTime;

    const MINUTE: Duration = Duration::from_secs(60);

    fn aged(crypto: &Crypto, age: Duration) -> String {
        let claims = Claims::issued(ID::default(), SystemTime::now() - age);
        crypto.encode(&claims).unwrap()
    }

    #[test]
    fn round_trips_subject() {
        let crypto = Crypto::new(b"test-secret");
        let user = ID::<Member>::default();
        let token = crypto.issue(user).unwrap();
        assert!(crypto.verify(&token).unwrap().user() == user);
    }

    #[test]
    fn accepts_before_expiry() {
        let crypto = Crypto::new(b"test-secret");
        assert!(crypto.verify(&aged(&crypto, 59 * MINUTE)).is_ok());
    }

    #[test]
    fn rejects_after_expiry() {
        let crypto = Crypto::new(b"test-secret");
        assert!(matches!(
            crypto.verify(&aged(&crypto, 61 * MINUTE)),
            Err(Error::Unauthenticated)
        ));
    }

    #[test]
    fn rejects_foreign_signature() {
        let ours = Crypto::new(b"test-secret");
        let theirs = Crypto::new(b"other-secret");
        let token = theirs.issue(ID::default()).unwrap();
        assert!(matches!(ours.verify(&token), Err(Error::Unauthenticated)));
    }

    #[test]
    fn rejects_garbage() {
        let crypto = Crypto::new(b"test-secret");
        assert!(matches!(crypto.verify("a.b.c"), Err(Error::Unauthenticated)));
        assert!(matches!(crypto.verify(""), Err(Error::Unauthenticated)));
    }
}
