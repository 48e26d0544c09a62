use crate::errors::AppError;
use crate::models::user::Role;

/// Privileged actions on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move a request through its status lifecycle.
    ChangeStatus,
    /// Edit a request's title, description, or category.
    EditFields,
    AddChangelog,
    CreateBoard,
}

/// The identity a permission decision is made for.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub id: i64,
    pub role: Role,
}

/// Decide whether `actor` may perform `action`. `request_author` is the
/// request's author id where the action targets a request, None otherwise.
///
/// Status changes are open to the admin and to the request's own author;
/// everything else is admin-only.
pub fn permitted(actor: Actor, request_author: Option<i64>, action: Action) -> bool {
    match action {
        Action::ChangeStatus => {
            actor.role == Role::Admin || request_author == Some(actor.id)
        }
        Action::EditFields | Action::AddChangelog | Action::CreateBoard => {
            actor.role == Role::Admin
        }
    }
}

/// Check permission before mutating; denial is an explicit Forbidden, never a
/// silent no-op.
pub fn require(actor: Actor, request_author: Option<i64>, action: Action) -> Result<(), AppError> {
    if permitted(actor, request_author, action) {
        Ok(())
    } else {
        let msg = match action {
            Action::ChangeStatus => "Not authorized",
            Action::EditFields => "Admin access required",
            Action::AddChangelog => "Admin access required",
            Action::CreateBoard => "Admin access required",
        };
        Err(AppError::Forbidden(msg.to_string()))
    }
}
