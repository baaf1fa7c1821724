//! The `BlogStore` trait — the data-access contract of the blog.
//!
//! Implemented by storage backends (e.g. `quire-store-sqlite`). The web layer
//! depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  category::CategoryId,
  post::{ListedPost, PostId, PostText},
  profile::{Credential, Profile},
};

/// Abstraction over a blog store backend.
///
/// Every call is independent: implementations acquire whatever resources
/// they need for the one operation and release them before returning. There
/// is no transaction spanning two calls.
///
/// All methods return `Send` futures so the trait can be used from axum
/// handlers on a multi-threaded runtime.
pub trait BlogStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// The first profile row, if any.
  fn profile(
    &self,
  ) -> impl Future<Output = Result<Option<Profile>, Self::Error>> + Send + '_;

  /// The first credential row, if any.
  fn credential(
    &self,
  ) -> impl Future<Output = Result<Option<Credential>, Self::Error>> + Send + '_;

  /// Look up a category by exact name. `None` if no category has that name.
  fn category_id<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<Option<CategoryId>, Self::Error>> + Send + 'a;

  /// Posts of the named category, newest (highest id) first.
  ///
  /// An unknown category yields an empty list, not an error.
  fn posts_in_category<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<Vec<ListedPost>, Self::Error>> + Send + 'a;

  /// Every post across all categories, newest (highest id) first.
  fn all_posts(
    &self,
  ) -> impl Future<Output = Result<Vec<ListedPost>, Self::Error>> + Send + '_;

  /// Append a post to a category and return its id.
  ///
  /// `category_id` must reference an existing category; callers resolve it
  /// with [`BlogStore::category_id`] first. A dangling id is a store error.
  fn create_post<'a>(
    &'a self,
    category_id: CategoryId,
    text: &'a PostText,
  ) -> impl Future<Output = Result<PostId, Self::Error>> + Send + 'a;
}
