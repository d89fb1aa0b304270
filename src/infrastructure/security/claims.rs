// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Capability, Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use std::collections::HashSet;

/// Rebuilds the session user from the facts of an authorized token.
pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<AuthenticatedUser> {
    let mut claims = Claims::default();
    for fact in facts {
        claims.apply(&fact.predicate);
    }
    claims.into_user()
}

#[derive(Default)]
struct Claims {
    user: Option<(i64, String)>,
    role: Option<Role>,
    rights: HashSet<Capability>,
}

impl Claims {
    fn apply(&mut self, predicate: &Predicate) {
        let terms = predicate.terms.as_slice();
        match (predicate.name.as_str(), terms) {
            ("user", [Term::Integer(id), Term::Str(name)]) => {
                self.user = Some((*id, name.clone()));
            }
            ("role", [Term::Str(role)]) => self.role = role.parse().ok(),
            ("right", [Term::Str(resource), Term::Str(action)]) => {
                self.rights
                    .insert(Capability::new(resource.clone(), action.clone()));
            }
            _ => {}
        }
    }

    fn into_user(self) -> ApplicationResult<AuthenticatedUser> {
        let missing = |what: &str| ApplicationError::unauthorized(format!("token is missing {what}"));

        let (id, username) = self.user.ok_or_else(|| missing("user"))?;
        let role = self.role.ok_or_else(|| missing("role"))?;

        let mut capabilities = role.default_capabilities();
        capabilities.extend(self.rights);

        Ok(AuthenticatedUser {
            id: UserId::new(id)?,
            username,
            role,
            capabilities,
        })
    }
}
