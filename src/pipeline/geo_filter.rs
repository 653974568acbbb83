use crate::domain::{Bounds, User};

/// Users whose coordinates fall inside `bounds`, in input order.
///
/// Unparsable coordinates exclude the user rather than failing.
pub fn select_by_region(users: &[User], bounds: &Bounds) -> Vec<User> {
    users
        .iter()
        .filter(|user| {
            let (lat, lng) = user.coordinates();
            bounds.contains(lat, lng)
        })
        .cloned()
        .collect()
}
