use super::*;
use crate::Error;
use crate::ID;
use crate::Unique;
use actix_web::HttpResponse;
use actix_web::web;

/// Input checks and the duplicate check all run before hashing, so a
/// rejected registration never pays for Argon2.
pub async fn register<R: AuthRepository + 'static>(
    db: web::Data<R>,
    crypto: web::Data<Crypto>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, Error> {
    let req = req.into_inner();
    if !email::well_formed(&req.email) {
        return Err(Error::validation("Invalid email"));
    }
    if !password::long_enough(&req.password) {
        return Err(Error::validation("Password too short"));
    }
    if db.exists(&req.email).await? {
        return Err(Error::Conflict);
    }
    let plaintext = req.password;
    let hashword = web::block(move || password::hash(&plaintext)).await??;
    let member = Member::new(ID::default(), req.email, req.name);
    db.create(&member, &hashword).await?;
    log::info!("registered member {}", member.id());
    let token = crypto.issue(member.id())?;
    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        user: UserInfo::from(&member),
    }))
}

/// Unknown email and wrong password fail identically, and both pay for
/// one Argon2 verification.
pub async fn login<R: AuthRepository + 'static>(
    db: web::Data<R>,
    crypto: web::Data<Crypto>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, Error> {
    let req = req.into_inner();
    let plaintext = req.password;
    let Some((member, hashword)) = db.lookup(&req.email).await? else {
        web::block(move || password::decoy(&plaintext)).await?;
        return Err(Error::Credentials);
    };
    if !web::block(move || password::verify(&plaintext, &hashword)).await? {
        log::debug!("rejected password for member {}", member.id());
        return Err(Error::Credentials);
    }
    let token = crypto.issue(member.id())?;
    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        user: UserInfo::from(&member),
    }))
}

pub async fn profile<R: AuthRepository + 'static>(
    auth: Auth,
    db: web::Data<R>,
) -> Result<HttpResponse, Error> {
    db.fetch(auth.user())
        .await?
        .map(|member| HttpResponse::Ok().json(UserInfo::from(&member)))
        .ok_or(Error::NotFound("User"))
}

pub async fn update_profile<R: AuthRepository + 'static>(
    auth: Auth,
    db: web::Data<R>,
    req: web::Json<ProfileRequest>,
) -> Result<HttpResponse, Error> {
    db.rename(auth.user(), &req.name)
        .await?
        .map(|member| HttpResponse::Ok().json(UserInfo::from(&member)))
        .ok_or(Error::NotFound("User"))
}
