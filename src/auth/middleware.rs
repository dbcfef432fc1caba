use super::*;
use crate::Error;
use crate::ID;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::web;
use std::future::Ready;
use std::future::ready;

/// Extractor for authenticated requests.
///
/// Verifies the bearer token against the shared [`Crypto`] and nothing
/// else: no store round-trip happens here. Declare it as the first
/// handler argument so rejection precedes every other extractor.
#[derive(Debug)]
pub struct Auth(pub Claims);

impl Auth {
    pub fn claims(&self) -> &Claims {
        &self.0
    }
    pub fn user(&self) -> ID<Member> {
        self.0.user()
    }
}

/// Scheme names are case-insensitive (RFC 7235).
fn bearer(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
        .map(|(_, token)| token.trim())
        .filter(|t| !t.is_empty())
}

impl FromRequest for Auth {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(match req.app_data::<web::Data<Crypto>>() {
            None => Err(Error::internal("token service not configured")),
            Some(crypto) => bearer(req)
                .ok_or(Error::Unauthenticated)
                .and_then(|token| crypto.verify(token))
                .map(Auth),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn extract(req: TestRequest, crypto: &web::Data<Crypto>) -> Result<Auth, Error> {
        let req = req.app_data(crypto.clone()).to_http_request();
        Auth::from_request(&req, &mut Payload::None).into_inner()
    }

    #[test]
    fn accepts_bearer() {
        let crypto = web::Data::new(Crypto::new(b"test-secret"));
        let user = ID::<Member>::default();
        let token = crypto.issue(user).unwrap();
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, format!("Bearer {}", token)));
        assert!(extract(req, &crypto).unwrap().user() == user);
    }

    #[test]
    fn scheme_ignores_case() {
        let crypto = web::Data::new(Crypto::new(b"test-secret"));
        let user = ID::<Member>::default();
        let token = crypto.issue(user).unwrap();
        for scheme in ["bearer", "BEARER", "bEaReR"] {
            let req = TestRequest::default()
                .insert_header((AUTHORIZATION, format!("{} {}", scheme, token)));
            assert!(extract(req, &crypto).unwrap().user() == user);
        }
    }

    #[test]
    fn rejects_missing_header() {
        let crypto = web::Data::new(Crypto::new(b"test-secret"));
        let req = TestRequest::default();
        assert!(matches!(extract(req, &crypto), Err(Error::Unauthenticated)));
    }

    #[test]
    fn rejects_other_schemes() {
        let crypto = web::Data::new(Crypto::new(b"test-secret"));
        let token = crypto.issue(ID::default()).unwrap();
        for header in [
            format!("Basic {}", token),
            format!("Bearers {}", token),
            token.clone(),
            "Bearer ".to_string(),
        ] {
            let req = TestRequest::default().insert_header((AUTHORIZATION, header));
            assert!(matches!(extract(req, &crypto), Err(Error::Unauthenticated)));
        }
    }
}
