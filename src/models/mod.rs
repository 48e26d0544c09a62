pub mod board;
pub mod changelog;
pub mod comment;
pub mod request;
pub mod upvote;
pub mod user;
