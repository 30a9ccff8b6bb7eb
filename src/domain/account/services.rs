use std::sync::Arc;
use uuid::Uuid;

use super::entities::User;
use super::policy;
use super::ports::UserRepository;
use crate::domain::catalog::entities::Beer;
use crate::domain::errors::{DomainError, RepositoryError};

/// Account service enforcing identity uniqueness and ownership rules on
/// top of raw storage. Every operation re-fetches current state before
/// validating; nothing is cached across calls.
pub struct UserService {
  user_repo: Arc<dyn UserRepository>,
}

impl UserService {
  /// Creates a new instance of UserService
  pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
    Self { user_repo }
  }

  /// Lists every user
  pub async fn list(&self) -> Result<Vec<User>, DomainError> {
    self.user_repo.list_all().await
  }

  /// Fetches a user by id
  ///
  /// # Errors
  /// Returns `DomainError::NotFound` if no such user exists
  pub async fn get_by_id(&self, id: Uuid) -> Result<User, DomainError> {
    self
      .user_repo
      .find_by_id(id)
      .await?
      .ok_or_else(|| DomainError::not_found("User", "id", id.to_string()))
  }

  /// Fetches a user by username
  pub async fn get_by_username(&self, username: &str) -> Result<User, DomainError> {
    self
      .user_repo
      .find_by_username(username)
      .await?
      .ok_or_else(|| DomainError::not_found("User", "username", username))
  }

  /// Creates a new account.
  ///
  /// Email and username uniqueness are validated as two independent
  /// lookups before the write; a hit on either is the duplicate signal.
  /// The unique indexes in storage remain the authoritative check, so a
  /// concurrent create losing the race still comes back as `Duplicate`.
  pub async fn create(&self, user: User) -> Result<User, DomainError> {
    if self.user_repo.find_by_email(&user.email).await?.is_some() {
      return Err(DomainError::duplicate("User", "email", user.email));
    }
    if self
      .user_repo
      .find_by_username(&user.username)
      .await?
      .is_some()
    {
      return Err(DomainError::duplicate("User", "username", user.username));
    }

    let email = user.email.clone();
    let username = user.username.clone();
    match self.user_repo.create(user).await {
      Ok(created) => Ok(created),
      Err(DomainError::Repository(RepositoryError::DuplicateKey(field))) => {
        let (field, value) = if field == "username" {
          ("username", username)
        } else {
          ("email", email)
        };
        Err(DomainError::duplicate("User", field, value))
      }
      Err(e) => Err(e),
    }
  }

  /// Persists a full replacement record for an existing account.
  ///
  /// The email uniqueness check is re-resolved: only a DIFFERENT user
  /// already holding the target email is a conflict, so updating to one's
  /// own unchanged email passes.
  pub async fn update(&self, user: User) -> Result<User, DomainError> {
    if let Some(existing) = self.user_repo.find_by_email(&user.email).await? {
      if existing.id != user.id {
        return Err(DomainError::duplicate("User", "email", user.email));
      }
    }

    let id = user.id;
    let email = user.email.clone();
    match self.user_repo.update(user).await {
      Ok(updated) => Ok(updated),
      Err(DomainError::Repository(RepositoryError::NotFound)) => {
        Err(DomainError::not_found("User", "id", id.to_string()))
      }
      Err(DomainError::Repository(RepositoryError::DuplicateKey(_))) => {
        Err(DomainError::duplicate("User", "email", email))
      }
      Err(e) => Err(e),
    }
  }

  /// Deletes an account. The requester must be an admin or the account
  /// owner; the authorization check runs before the existence check.
  pub async fn delete(&self, id: Uuid, requester: &User) -> Result<(), DomainError> {
    if !policy::is_authorized(requester, id) {
      return Err(DomainError::Unauthorized(
        "You are not authorized to complete this operation.".to_string(),
      ));
    }

    match self.user_repo.delete(id).await {
      Ok(()) => Ok(()),
      Err(DomainError::Repository(RepositoryError::NotFound)) => {
        Err(DomainError::not_found("User", "id", id.to_string()))
      }
      Err(e) => Err(e),
    }
  }
}

/// Wishlist service: membership mutations on a user's wishlist, gated by
/// the authorization policy against the TARGET account.
pub struct WishlistService {
  user_repo: Arc<dyn UserRepository>,
}

impl WishlistService {
  /// Creates a new instance of WishlistService
  pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
    Self { user_repo }
  }

  /// Returns the target user's wishlist
  pub async fn get_wishlist(
    &self,
    requester: &User,
    target_user_id: Uuid,
  ) -> Result<Vec<Beer>, DomainError> {
    if !policy::is_authorized(requester, target_user_id) {
      return Err(DomainError::Unauthorized(
        "You are not authorized to browse user information.".to_string(),
      ));
    }
    self.ensure_target_exists(target_user_id).await?;
    self.user_repo.get_wishlist(target_user_id).await
  }

  /// Adds a beer to the target user's wishlist. Adding a beer that is
  /// already a member succeeds as a no-op.
  pub async fn add_to_wishlist(
    &self,
    requester: &User,
    beer: &Beer,
    target_user_id: Uuid,
  ) -> Result<(), DomainError> {
    if !policy::is_authorized(requester, target_user_id) {
      return Err(DomainError::Unauthorized(
        "You are not authorized to add to this wishlist".to_string(),
      ));
    }
    self.ensure_target_exists(target_user_id).await?;

    let wishlist = self.user_repo.get_wishlist(target_user_id).await?;
    if wishlist.iter().any(|b| b.id == beer.id) {
      return Ok(());
    }
    self.user_repo.add_to_wishlist(target_user_id, beer.id).await
  }

  /// Removes a beer from the target user's wishlist. Removing a beer that
  /// is not a member fails with `NotFound`.
  pub async fn remove_from_wishlist(
    &self,
    requester: &User,
    beer: &Beer,
    target_user_id: Uuid,
  ) -> Result<(), DomainError> {
    if !policy::is_authorized(requester, target_user_id) {
      return Err(DomainError::Unauthorized(
        "You are not authorized to remove from this wishlist.".to_string(),
      ));
    }
    self.ensure_target_exists(target_user_id).await?;

    let wishlist = self.user_repo.get_wishlist(target_user_id).await?;
    if !wishlist.iter().any(|b| b.id == beer.id) {
      return Err(DomainError::not_found("Beer", "id", beer.id.to_string()));
    }
    self
      .user_repo
      .remove_from_wishlist(target_user_id, beer.id)
      .await
  }

  async fn ensure_target_exists(&self, target_user_id: Uuid) -> Result<(), DomainError> {
    self
      .user_repo
      .find_by_id(target_user_id)
      .await?
      .ok_or_else(|| DomainError::not_found("User", "id", target_user_id.to_string()))?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::catalog::entities::Style;
  use async_trait::async_trait;
  use std::collections::HashMap;
  use std::sync::Mutex;

  #[derive(Default)]
  struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    beers: Mutex<Vec<Beer>>,
    wishlists: Mutex<HashMap<Uuid, Vec<Uuid>>>,
  }

  impl InMemoryUserRepository {
    fn with_users(users: Vec<User>) -> Self {
      Self {
        users: Mutex::new(users),
        ..Default::default()
      }
    }

    fn stock_beer(&self, beer: Beer) {
      self.beers.lock().unwrap().push(beer);
    }
  }

  #[async_trait]
  impl UserRepository for InMemoryUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
      Ok(self.users.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
      Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
      Ok(
        self
          .users
          .lock()
          .unwrap()
          .iter()
          .find(|u| u.username == username)
          .cloned(),
      )
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
      Ok(
        self
          .users
          .lock()
          .unwrap()
          .iter()
          .find(|u| u.email == email)
          .cloned(),
      )
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
      self.users.lock().unwrap().push(user.clone());
      Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
      let mut users = self.users.lock().unwrap();
      let slot = users
        .iter_mut()
        .find(|u| u.id == user.id)
        .ok_or(DomainError::Repository(RepositoryError::NotFound))?;
      *slot = user.clone();
      Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
      let mut users = self.users.lock().unwrap();
      let before = users.len();
      users.retain(|u| u.id != id);
      if users.len() == before {
        return Err(DomainError::Repository(RepositoryError::NotFound));
      }
      Ok(())
    }

    async fn get_wishlist(&self, user_id: Uuid) -> Result<Vec<Beer>, DomainError> {
      let wishlists = self.wishlists.lock().unwrap();
      let beers = self.beers.lock().unwrap();
      let ids = wishlists.get(&user_id).cloned().unwrap_or_default();
      Ok(
        ids
          .iter()
          .filter_map(|id| beers.iter().find(|b| b.id == *id).cloned())
          .collect(),
      )
    }

    async fn add_to_wishlist(&self, user_id: Uuid, beer_id: Uuid) -> Result<(), DomainError> {
      let mut wishlists = self.wishlists.lock().unwrap();
      let entry = wishlists.entry(user_id).or_default();
      if !entry.contains(&beer_id) {
        entry.push(beer_id);
      }
      Ok(())
    }

    async fn remove_from_wishlist(&self, user_id: Uuid, beer_id: Uuid) -> Result<(), DomainError> {
      let mut wishlists = self.wishlists.lock().unwrap();
      let entry = wishlists.entry(user_id).or_default();
      entry.retain(|id| *id != beer_id);
      Ok(())
    }
  }

  fn user(username: &str, email: &str, is_admin: bool) -> User {
    User::new(
      username.to_string(),
      email.to_string(),
      "secret".to_string(),
      "Test".to_string(),
      "User".to_string(),
      is_admin,
    )
  }

  fn beer(name: &str) -> Beer {
    let style = Style::from_db(Uuid::new_v4(), "Ale".to_string());
    Beer::new(name.to_string(), 5.0, style, Uuid::new_v4())
  }

  #[tokio::test]
  async fn test_create_then_get_round_trips() {
    let repo = Arc::new(InMemoryUserRepository::default());
    let service = UserService::new(repo);

    let created = service.create(user("alice", "a@x.com", false)).await.unwrap();
    let fetched = service.get_by_id(created.id).await.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.username, "alice");
    assert_eq!(fetched.email, "a@x.com");
  }

  #[tokio::test]
  async fn test_create_rejects_duplicate_email() {
    let repo = Arc::new(InMemoryUserRepository::default());
    let service = UserService::new(repo);

    service.create(user("alice", "a@x.com", false)).await.unwrap();
    let result = service.create(user("bob", "a@x.com", false)).await;

    match result.unwrap_err() {
      DomainError::Duplicate { entity, field, value } => {
        assert_eq!(entity, "User");
        assert_eq!(field, "email");
        assert_eq!(value, "a@x.com");
      }
      other => panic!("Expected Duplicate, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_create_rejects_duplicate_username() {
    let repo = Arc::new(InMemoryUserRepository::default());
    let service = UserService::new(repo);

    service.create(user("alice", "a@x.com", false)).await.unwrap();
    let result = service.create(user("alice", "b@x.com", false)).await;

    match result.unwrap_err() {
      DomainError::Duplicate { field, value, .. } => {
        assert_eq!(field, "username");
        assert_eq!(value, "alice");
      }
      other => panic!("Expected Duplicate, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_update_to_own_email_is_not_a_conflict() {
    let repo = Arc::new(InMemoryUserRepository::default());
    let service = UserService::new(repo);

    let mut alice = service.create(user("alice", "a@x.com", false)).await.unwrap();
    alice.replace(
      "a@x.com".to_string(),
      "secret".to_string(),
      "Alice".to_string(),
      "Brewer".to_string(),
    );

    let updated = service.update(alice).await.unwrap();
    assert_eq!(updated.last_name, "Brewer");
  }

  #[tokio::test]
  async fn test_update_to_taken_email_fails_duplicate() {
    let repo = Arc::new(InMemoryUserRepository::default());
    let service = UserService::new(repo);

    service.create(user("alice", "a@x.com", false)).await.unwrap();
    let mut bob = service.create(user("bob", "b@x.com", false)).await.unwrap();
    bob.replace(
      "a@x.com".to_string(),
      "secret".to_string(),
      "Bob".to_string(),
      "User".to_string(),
    );

    let result = service.update(bob).await;
    match result.unwrap_err() {
      DomainError::Duplicate { field, value, .. } => {
        assert_eq!(field, "email");
        assert_eq!(value, "a@x.com");
      }
      other => panic!("Expected Duplicate, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_update_missing_user_fails_not_found() {
    let repo = Arc::new(InMemoryUserRepository::default());
    let service = UserService::new(repo);

    let result = service.update(user("ghost", "g@x.com", false)).await;
    assert!(matches!(result.unwrap_err(), DomainError::NotFound { .. }));
  }

  #[tokio::test]
  async fn test_delete_requires_authorization_before_existence() {
    let alice = user("alice", "a@x.com", false);
    let repo = Arc::new(InMemoryUserRepository::with_users(vec![alice.clone()]));
    let service = UserService::new(repo);

    // A non-admin acting on another account is rejected even when the
    // target does not exist.
    let missing = Uuid::new_v4();
    let result = service.delete(missing, &alice).await;
    assert!(matches!(result.unwrap_err(), DomainError::Unauthorized(_)));
  }

  #[tokio::test]
  async fn test_delete_by_owner_and_admin() {
    let alice = user("alice", "a@x.com", false);
    let bob = user("bob", "b@x.com", false);
    let admin = user("root", "root@x.com", true);
    let repo = Arc::new(InMemoryUserRepository::with_users(vec![
      alice.clone(),
      bob.clone(),
    ]));
    let service = UserService::new(repo);

    service.delete(alice.id, &alice).await.unwrap();
    service.delete(bob.id, &admin).await.unwrap();

    assert!(service.list().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_delete_missing_user_fails_not_found_for_admin() {
    let admin = user("root", "root@x.com", true);
    let repo = Arc::new(InMemoryUserRepository::with_users(vec![admin.clone()]));
    let service = UserService::new(repo);

    let result = service.delete(Uuid::new_v4(), &admin).await;
    assert!(matches!(result.unwrap_err(), DomainError::NotFound { .. }));
  }

  #[tokio::test]
  async fn test_get_wishlist_requires_authorization() {
    let alice = user("alice", "a@x.com", false);
    let bob = user("bob", "b@x.com", false);
    let repo = Arc::new(InMemoryUserRepository::with_users(vec![
      alice.clone(),
      bob.clone(),
    ]));
    let service = WishlistService::new(repo);

    let result = service.get_wishlist(&alice, bob.id).await;
    assert!(matches!(result.unwrap_err(), DomainError::Unauthorized(_)));
  }

  #[tokio::test]
  async fn test_add_to_wishlist_is_idempotent() {
    let alice = user("alice", "a@x.com", false);
    let ipa = beer("IPA");
    let repo = Arc::new(InMemoryUserRepository::with_users(vec![alice.clone()]));
    repo.stock_beer(ipa.clone());
    let service = WishlistService::new(repo);

    service.add_to_wishlist(&alice, &ipa, alice.id).await.unwrap();
    service.add_to_wishlist(&alice, &ipa, alice.id).await.unwrap();

    let wishlist = service.get_wishlist(&alice, alice.id).await.unwrap();
    assert_eq!(wishlist.len(), 1);
    assert_eq!(wishlist[0].id, ipa.id);
  }

  #[tokio::test]
  async fn test_remove_absent_beer_fails_not_found() {
    let alice = user("alice", "a@x.com", false);
    let ipa = beer("IPA");
    let repo = Arc::new(InMemoryUserRepository::with_users(vec![alice.clone()]));
    repo.stock_beer(ipa.clone());
    let service = WishlistService::new(repo);

    let result = service.remove_from_wishlist(&alice, &ipa, alice.id).await;
    match result.unwrap_err() {
      DomainError::NotFound { entity, field, value } => {
        assert_eq!(entity, "Beer");
        assert_eq!(field, "id");
        assert_eq!(value, ipa.id.to_string());
      }
      other => panic!("Expected NotFound, got {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_remove_present_beer_empties_wishlist() {
    let alice = user("alice", "a@x.com", false);
    let ipa = beer("IPA");
    let repo = Arc::new(InMemoryUserRepository::with_users(vec![alice.clone()]));
    repo.stock_beer(ipa.clone());
    let service = WishlistService::new(repo);

    service.add_to_wishlist(&alice, &ipa, alice.id).await.unwrap();
    service.remove_from_wishlist(&alice, &ipa, alice.id).await.unwrap();

    let wishlist = service.get_wishlist(&alice, alice.id).await.unwrap();
    assert!(wishlist.is_empty());
  }

  #[tokio::test]
  async fn test_admin_may_manage_another_users_wishlist() {
    let alice = user("alice", "a@x.com", false);
    let admin = user("root", "root@x.com", true);
    let ipa = beer("IPA");
    let repo = Arc::new(InMemoryUserRepository::with_users(vec![
      alice.clone(),
      admin.clone(),
    ]));
    repo.stock_beer(ipa.clone());
    let service = WishlistService::new(repo);

    service.add_to_wishlist(&admin, &ipa, alice.id).await.unwrap();
    let wishlist = service.get_wishlist(&admin, alice.id).await.unwrap();
    assert_eq!(wishlist.len(), 1);

    service
      .remove_from_wishlist(&admin, &ipa, alice.id)
      .await
      .unwrap();
  }
}
