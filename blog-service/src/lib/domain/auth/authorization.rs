use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthenticatedUser;
use crate::domain::user::models::UserId;

const BEARER_PREFIX: &str = "Bearer ";

/// Pull the token out of a `Bearer <token>` header value.
pub fn bearer_token(authorization: &str) -> Result<&str, AuthError> {
    match authorization.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(AuthError::MalformedHeader),
    }
}

/// Only the owner of a resource may mutate it.
pub fn ensure_owner(caller: &AuthenticatedUser, owner: UserId) -> Result<(), AuthError> {
    if caller.user_id == owner {
        Ok(())
    } else {
        Err(AuthError::NotOwner {
            caller: caller.user_id,
            owner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_owner_same_user() {
        let caller = AuthenticatedUser::new(UserId(5));
        assert_eq!(ensure_owner(&caller, UserId(5)), Ok(()));
    }

    #[test]
    fn test_ensure_owner_other_user() {
        let caller = AuthenticatedUser::new(UserId(5));
        assert_eq!(
            ensure_owner(&caller, UserId(7)),
            Err(AuthError::NotOwner {
                caller: UserId(5),
                owner: UserId(7),
            })
        );
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Ok("abc.def.ghi"));
        assert_eq!(bearer_token("abc.def.ghi"), Err(AuthError::MalformedHeader));
        assert_eq!(bearer_token("Basic dXNlcjpwYXNz"), Err(AuthError::MalformedHeader));
        assert_eq!(bearer_token("Bearer "), Err(AuthError::MalformedHeader));
    }
}
