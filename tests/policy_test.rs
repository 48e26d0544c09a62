//! Authorization rule matrix: admin, author, and stranger against each action.

use reqboard::domain::policy::{Action, Actor, permitted, require};
use reqboard::errors::AppError;
use reqboard::models::user::Role;

const ADMIN: Actor = Actor { id: 1, role: Role::Admin };
const AUTHOR: Actor = Actor { id: 2, role: Role::User };
const STRANGER: Actor = Actor { id: 3, role: Role::User };

const AUTHOR_ID: Option<i64> = Some(2);

#[test]
fn change_status_allows_admin_and_author_only() {
    assert!(permitted(ADMIN, AUTHOR_ID, Action::ChangeStatus));
    assert!(permitted(AUTHOR, AUTHOR_ID, Action::ChangeStatus));
    assert!(!permitted(STRANGER, AUTHOR_ID, Action::ChangeStatus));
}

#[test]
fn change_status_allows_admin_on_own_and_foreign_requests() {
    // Admin needs no ownership
    assert!(permitted(ADMIN, Some(99), Action::ChangeStatus));
    assert!(permitted(ADMIN, Some(ADMIN.id), Action::ChangeStatus));
}

#[test]
fn author_permission_is_ownership_not_role() {
    // The author keeps the right even though their role is plain user
    assert!(permitted(AUTHOR, AUTHOR_ID, Action::ChangeStatus));
    // The same user loses it on someone else's request
    assert!(!permitted(AUTHOR, Some(99), Action::ChangeStatus));
}

#[test]
fn edit_fields_is_admin_only() {
    assert!(permitted(ADMIN, AUTHOR_ID, Action::EditFields));
    assert!(!permitted(AUTHOR, AUTHOR_ID, Action::EditFields));
    assert!(!permitted(STRANGER, AUTHOR_ID, Action::EditFields));
}

#[test]
fn add_changelog_is_admin_only() {
    assert!(permitted(ADMIN, None, Action::AddChangelog));
    assert!(!permitted(AUTHOR, None, Action::AddChangelog));
}

#[test]
fn create_board_is_admin_only() {
    assert!(permitted(ADMIN, None, Action::CreateBoard));
    assert!(!permitted(STRANGER, None, Action::CreateBoard));
}

#[test]
fn require_surfaces_denial_as_forbidden() {
    assert!(require(ADMIN, AUTHOR_ID, Action::ChangeStatus).is_ok());

    let err = require(STRANGER, AUTHOR_ID, Action::ChangeStatus).unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));

    let err = require(AUTHOR, AUTHOR_ID, Action::EditFields).unwrap_err();
    assert!(matches!(err, AppError::Forbidden(_)));
}
