//! Pure domain logic shared by every surface that renders or mutates the
//! board: the derived list view, the upvote toggle, and the authorization
//! policy. Nothing here touches the database or the HTTP layer.

pub mod list_view;
pub mod policy;
pub mod upvote;
