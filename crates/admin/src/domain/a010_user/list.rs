use contracts::domain::a010_user::{User, UserStatus};
use contracts::shared::stats::StatValue;

use crate::shared::filter_state::Dimension;
use crate::shared::format::{format_datetime, or_dash};
use crate::shared::list_pipeline::ListResource;
use crate::shared::stats::count_where;

fn status(u: &User) -> Option<String> {
    Some(u.status.code().to_string())
}

/// `verified` / `unverified`
fn email_verified(u: &User) -> Option<String> {
    Some(if u.email_verified { "verified" } else { "unverified" }.to_string())
}

static DIMENSIONS: [Dimension<User>; 2] = [
    Dimension {
        key: "status",
        label: "Status",
        extract: status,
    },
    Dimension {
        key: "email_verified",
        label: "Email",
        extract: email_verified,
    },
];

pub struct UserList;

impl ListResource for UserList {
    type Entity = User;

    const KEY: &'static str = "users";
    const LOAD_ERROR: &'static str = "Failed to load users";
    const ROUTE: &'static str = "/users";

    fn dimensions() -> &'static [Dimension<User>] {
        &DIMENSIONS
    }

    fn statistics(items: &[User], total_count: usize) -> Vec<StatValue> {
        let by_status = |s: UserStatus| count_where(items, |u| u.status == s);
        vec![
            StatValue::integer("total", "Total", total_count),
            StatValue::integer("active", "Active", by_status(UserStatus::Active)),
            StatValue::integer("inactive", "Inactive", by_status(UserStatus::Inactive)),
            StatValue::integer("suspended", "Suspended", by_status(UserStatus::Suspended)),
            StatValue::integer("verified", "Verified", count_where(items, |u| u.email_verified)),
        ]
    }

    fn columns() -> &'static [&'static str] {
        &["Name", "Email", "Phone", "Status", "Verified", "Joined"]
    }

    fn row(u: &User) -> Vec<String> {
        vec![
            u.full_name(),
            u.email.clone(),
            or_dash(u.phone.as_deref()),
            u.status.label().to_string(),
            if u.email_verified { "yes" } else { "no" }.to_string(),
            format_datetime(&u.created_at),
        ]
    }
}
