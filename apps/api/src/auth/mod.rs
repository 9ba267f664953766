// Registration and login over the user store.
// Credentials are compared as stored; hashing is left to a later layer.

pub mod handlers;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::user::User;
use crate::store::{StoreError, UserStore};

/// Creates a user. Taken usernames are a `Conflict`, including the case where a
/// concurrent registration wins the race between lookup and insert.
pub async fn register(
    store: &dyn UserStore,
    username: Option<&str>,
    credential: Option<&str>,
) -> Result<User, AppError> {
    let username = username.filter(|u| !u.is_empty());
    let credential = credential.filter(|c| !c.is_empty());
    let (Some(username), Some(credential)) = (username, credential) else {
        return Err(AppError::Validation(
            "username and password are required".to_string(),
        ));
    };

    if store.find_user_by_username(username).await?.is_some() {
        return Err(username_taken());
    }

    let user = match store.insert_user(username, credential).await {
        Ok(user) => user,
        Err(StoreError::UniqueViolation(_)) => return Err(username_taken()),
        Err(e) => return Err(e.into()),
    };

    info!("Registered user {} ({})", user.username, user.id);
    Ok(user)
}

/// Returns the user whose username and credential both match.
/// Every other outcome is the same `Unauthorized`.
pub async fn login(
    store: &dyn UserStore,
    username: Option<&str>,
    credential: Option<&str>,
) -> Result<User, AppError> {
    let (Some(username), Some(credential)) = (username, credential) else {
        return Err(AppError::Unauthorized);
    };

    match store.find_user_by_username(username).await? {
        Some(user) if user.credential == credential => Ok(user),
        _ => {
            warn!("Failed login attempt");
            Err(AppError::Unauthorized)
        }
    }
}

fn username_taken() -> AppError {
    AppError::Conflict("This username already exists".to_string())
}
