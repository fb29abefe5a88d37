//! The `UserStore` trait — the data-access contract the seed and benchmark
//! routines are written against.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! Cascade semantics are a property of the backend: deleting a user must
//! transitively remove every related row for that user without the caller
//! issuing per-collection deletes.

use std::future::Future;

use uuid::Uuid;

use crate::{
  related::{NewRelatedRecords, RelatedCounts},
  user::{NewUser, User, UserRole},
};

/// Abstraction over a roster user store backend.
///
/// All methods return `Send` futures so the trait can be used from
/// multi-threaded async runtimes.
pub trait UserStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Return any single user, or `None` if the store is empty.
  fn first_user(
    &self,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  /// Look a user up by their unique handle.
  fn find_user_by_pseudo<'a>(
    &'a self,
    pseudo: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  /// Return the first user with the given role, or `None`.
  fn find_user_by_role(
    &self,
    role: UserRole,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  /// Create and persist a new user with no related records.
  fn create_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// Create a user together with all of `related` in one transaction.
  ///
  /// Either every row is persisted or none is: any failing child insert
  /// rolls the parent back too.
  fn create_user_with_related(
    &self,
    input: NewUser,
    related: NewRelatedRecords,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// Count the related rows in all five collections for one user.
  fn related_counts(
    &self,
    user_id: Uuid,
  ) -> impl Future<Output = Result<RelatedCounts, Self::Error>> + Send + '_;

  /// Delete a user by primary key. Related rows are removed by the
  /// backend's cascade rule. Errors if no such user exists.
  fn delete_user(
    &self,
    user_id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
