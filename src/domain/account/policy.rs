use uuid::Uuid;

use super::entities::User;

/// Decides whether the requester may read or mutate resources owned by
/// `target_user_id`: admins may act on anyone, everyone else only on
/// themselves. Pure, no failure mode.
pub fn is_authorized(requester: &User, target_user_id: Uuid) -> bool {
  requester.is_admin || requester.id == target_user_id
}

#[cfg(test)]
mod tests {
  use super::*;

  fn user(is_admin: bool) -> User {
    User::new(
      "alice".to_string(),
      "a@x.com".to_string(),
      "secret".to_string(),
      "Alice".to_string(),
      "Archer".to_string(),
      is_admin,
    )
  }

  #[test]
  fn test_user_is_authorized_over_own_account() {
    let requester = user(false);
    assert!(is_authorized(&requester, requester.id));
  }

  #[test]
  fn test_non_admin_is_not_authorized_over_other_account() {
    let requester = user(false);
    assert!(!is_authorized(&requester, Uuid::new_v4()));
  }

  #[test]
  fn test_admin_is_authorized_over_any_account() {
    let requester = user(true);
    assert!(is_authorized(&requester, Uuid::new_v4()));
    assert!(is_authorized(&requester, requester.id));
  }
}
