// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::UserId;
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let mut ctx = ClaimsContext::default();
    for fact in facts {
        ctx.apply_predicate(&fact.predicate);
    }
    ctx.into_user()
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    username: Option<String>,
    session_id: Option<String>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
}

fn missing(claim: &str) -> ApplicationError {
    ApplicationError::unauthorized(format!("missing {claim}"))
}

fn as_date(term: Option<&Term>) -> Option<SystemTime> {
    match term {
        Some(Term::Date(seconds)) => Some(UNIX_EPOCH + Duration::from_secs(*seconds)),
        _ => None,
    }
}

impl ClaimsContext {
    fn apply_predicate(&mut self, predicate: &Predicate) {
        match predicate.name.as_str() {
            "user" => {
                if let [Term::Integer(id), Term::Str(name)] = predicate.terms.as_slice() {
                    self.user_id = Some(*id);
                    self.username = Some(name.clone());
                }
            }
            "session" => {
                if let Some(Term::Str(sid)) = predicate.terms.first() {
                    self.session_id = Some(sid.clone());
                }
            }
            "issued_at" => self.issued_at = as_date(predicate.terms.first()),
            "expires_at" => self.expires_at = as_date(predicate.terms.first()),
            _ => {}
        }
    }

    fn into_user(self) -> ApplicationResult<AuthenticatedUser> {
        let id = UserId::new(self.user_id.ok_or_else(|| missing("user id"))?)?;

        Ok(AuthenticatedUser {
            id,
            username: self.username.ok_or_else(|| missing("username"))?,
            issued_at: DateTime::<Utc>::from(self.issued_at.ok_or_else(|| missing("issued_at"))?),
            expires_at: DateTime::<Utc>::from(
                self.expires_at.ok_or_else(|| missing("expires_at"))?,
            ),
            session_id: self.session_id.ok_or_else(|| missing("session id"))?,
        })
    }
}
