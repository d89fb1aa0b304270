// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthenticatedUser, SessionTokenDto, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Signs session tokens as biscuits carrying the user, role and capability facts.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    /// `private_key_hex` is a 64-hex Ed25519 key. Without one a throwaway key is
    /// generated and every session dies with the process.
    pub fn new(private_key_hex: Option<&str>, ttl: Duration) -> ApplicationResult<Self> {
        let keypair = match private_key_hex {
            Some(hex) => {
                let private = PrivateKey::from_bytes_hex(hex, Algorithm::Ed25519)
                    .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
                KeyPair::from(&private)
            }
            None => KeyPair::new(),
        };
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }
}

fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn build_code_and_params(
    subject: &TokenSubject,
    expires_at: SystemTime,
) -> (String, HashMap<String, Term>) {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("uid".to_string(), i64::from(subject.user_id).into());
    params.insert("uname".to_string(), subject.username.clone().into());
    params.insert("urole".to_string(), subject.role.as_str().into());
    params.insert("exp".to_string(), expires_at.into());

    let mut code = String::from(
        r#"
        user({uid}, {uname});
        role({urole});
        check if time($now), $now <= {exp};
        "#,
    );

    for cap in &subject.capabilities {
        code.push_str(&format!(
            "right(\"{}\", \"{}\");\n",
            escape_literal(&cap.resource),
            escape_literal(&cap.action)
        ));
    }

    (code, params)
}

fn build_and_serialize_biscuit(
    code: &str,
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> ApplicationResult<String> {
    let token = Biscuit::builder()
        .code_with_params(code, params, HashMap::new())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .build(root)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    token
        .seal()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .to_base64()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<SessionTokenDto> {
        let expires_at = SystemTime::now()
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let (code, params) = build_code_and_params(&subject, expires_at);

        let token = build_and_serialize_biscuit(&code, params, self.root.as_ref())?;

        Ok(SessionTokenDto {
            token,
            expires_in: i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if true")
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let (facts, _, _, _) = authorizer.dump();
        super::claims::parse_claims(facts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{Role, UserId};

    const KEY: &str = "1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f1f";

    fn subject(role: Role) -> TokenSubject {
        TokenSubject {
            user_id: UserId::new(7).unwrap(),
            username: "critic".into(),
            role,
            capabilities: role.default_capabilities(),
        }
    }

    #[tokio::test]
    async fn issued_token_authenticates() {
        let manager = BiscuitTokenManager::new(Some(KEY), Duration::from_secs(60)).unwrap();
        let issued = manager.issue(subject(Role::Staff)).await.unwrap();
        assert_eq!(issued.expires_in, 60);

        let user = manager.authenticate(&issued.token).await.unwrap();
        assert_eq!(user.id, UserId::new(7).unwrap());
        assert_eq!(user.username, "critic");
        assert_eq!(user.role, Role::Staff);
        assert!(user.is_staff());
    }

    #[tokio::test]
    async fn token_from_another_key_is_rejected() {
        let issuer = BiscuitTokenManager::new(None, Duration::from_secs(60)).unwrap();
        let verifier = BiscuitTokenManager::new(Some(KEY), Duration::from_secs(60)).unwrap();
        let issued = issuer.issue(subject(Role::Contributor)).await.unwrap();

        let err = verifier.authenticate(&issued.token).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn garbage_is_rejected() {
        let manager = BiscuitTokenManager::new(Some(KEY), Duration::from_secs(60)).unwrap();
        assert!(manager.authenticate("not-a-token").await.is_err());
    }
}
