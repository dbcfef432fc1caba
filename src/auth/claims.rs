use super::*;
use crate::ID;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

/// JWT payload. Stateless: nothing about a token is stored server-side.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: uuid::Uuid,
    pub iat: i64,
    pub exp: i64,
}

fn seconds(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    }
}

impl Claims {
    pub fn new(user: ID<Member>) -> Self {
        Self::issued(user, SystemTime::now())
    }
    pub fn issued(user: ID<Member>, at: SystemTime) -> Self {
        let iat = seconds(at);
        Self {
            sub: user.uuid(),
            iat,
            exp: iat + Crypto::duration().as_secs() as i64,
        }
    }
    pub fn expired(&self) -> bool {
        self.expired_at(SystemTime::now())
    }
    pub fn expired_at(&self, now: SystemTime) -> bool {
        self.exp <= seconds(now)
    }
    pub fn user(&self) -> ID<Member> {
        ID::from(self.sub)
    }
}
