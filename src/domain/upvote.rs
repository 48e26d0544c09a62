/// Toggle a user's membership in an upvote set: remove when present, append
/// when absent. Self-inverse; order of the remaining ids is preserved.
///
/// This is the in-memory statement of the rule; `models::upvote::toggle` is
/// the persisted equivalent driven by the uniqueness constraint.
pub fn toggle(upvotes: &[i64], user_id: i64) -> Vec<i64> {
    if upvotes.contains(&user_id) {
        upvotes.iter().copied().filter(|&id| id != user_id).collect()
    } else {
        let mut out = upvotes.to_vec();
        out.push(user_id);
        out
    }
}
