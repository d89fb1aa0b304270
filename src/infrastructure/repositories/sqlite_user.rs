use super::map_sqlx;
use crate::domain::article::fold_case;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    EmailAddress, NewUser, PasswordHash, PersonalDetails, ProfileDetails, ProfileListing,
    ProfileRepository, Role, User, UserId, UserProfile, UserRepository, Username,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const USER_COLUMNS: &str =
    "id, username, password_hash, role, is_active, first_name, last_name, email, created_at";

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    role: String,
    is_active: bool,
    first_name: String,
    last_name: String,
    email: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = match row.email {
            Some(email) => EmailAddress::parse(&email)?,
            None => None,
        };
        Ok(User {
            id: UserId::new(row.id)?,
            username: Username::new(row.username)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            role: row.role.parse::<Role>()?,
            is_active: row.is_active,
            details: PersonalDetails::new(row.first_name, row.last_name, email)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM users")
            .fetch_one(&*self.pool)
            .await
            .map(|count| count.max(0) as u64)
            .map_err(map_sqlx)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            username,
            password_hash,
            role,
            is_active,
            created_at,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (username, password_hash, role, is_active, created_at, username_folded) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {USER_COLUMNS}"
        ))
        .bind(username.as_str())
        .bind(password_hash.as_str())
        .bind(role.as_str())
        .bind(is_active)
        .bind(created_at)
        .bind(fold_case(username.as_str()))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = ?"
        ))
        .bind(username.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(id.0)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn update_details(&self, id: UserId, details: &PersonalDetails) -> DomainResult<User> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "UPDATE users SET first_name = ?, last_name = ?, email = ? WHERE id = ? RETURNING {USER_COLUMNS}"
        ))
        .bind(details.first_name.as_str())
        .bind(details.last_name.as_str())
        .bind(details.email.as_ref().map(EmailAddress::as_str))
        .bind(id.0)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }
}

#[derive(Clone)]
pub struct SqliteProfileRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteProfileRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    user_id: i64,
    bio: String,
    year_of_study: String,
    university: String,
    avatar: Option<String>,
}

impl TryFrom<ProfileRow> for UserProfile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(UserProfile {
            user_id: UserId::new(row.user_id)?,
            details: ProfileDetails::new(row.bio, row.year_of_study, row.university)?,
            avatar: row.avatar.filter(|path| !path.is_empty()),
        })
    }
}

#[derive(Debug, FromRow)]
struct ProfileListingRow {
    username: String,
    #[sqlx(flatten)]
    profile: ProfileRow,
}

#[async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<UserProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT user_id, bio, year_of_study, university, avatar FROM user_profiles WHERE user_id = ?",
        )
        .bind(user_id.0)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(UserProfile::try_from).transpose()
    }

    async fn get_or_create(&self, user_id: UserId) -> DomainResult<UserProfile> {
        sqlx::query("INSERT INTO user_profiles (user_id) VALUES (?) ON CONFLICT (user_id) DO NOTHING")
            .bind(user_id.0)
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        self.find_by_user(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }

    async fn save(&self, profile: &UserProfile) -> DomainResult<UserProfile> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "INSERT INTO user_profiles (user_id, bio, year_of_study, university, avatar) \
             VALUES (?, ?, ?, ?, ?) \
             ON CONFLICT (user_id) DO UPDATE SET bio = excluded.bio, \
             year_of_study = excluded.year_of_study, university = excluded.university, \
             avatar = excluded.avatar \
             RETURNING user_id, bio, year_of_study, university, avatar",
        )
        .bind(profile.user_id.0)
        .bind(profile.details.bio.as_str())
        .bind(profile.details.year_of_study.as_str())
        .bind(profile.details.university.as_str())
        .bind(profile.avatar.as_deref())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        UserProfile::try_from(row)
    }

    async fn list(&self) -> DomainResult<Vec<ProfileListing>> {
        let rows = sqlx::query_as::<_, ProfileListingRow>(
            "SELECT u.username, p.user_id, p.bio, p.year_of_study, p.university, p.avatar \
             FROM user_profiles p JOIN users u ON u.id = p.user_id ORDER BY u.username",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter()
            .map(|row| -> DomainResult<ProfileListing> {
                Ok(ProfileListing {
                    username: row.username,
                    profile: UserProfile::try_from(row.profile)?,
                })
            })
            .collect()
    }
}
