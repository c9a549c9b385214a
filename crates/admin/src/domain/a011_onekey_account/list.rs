use contracts::domain::a011_onekey_account::{OneKeyAccount, Tier};
use contracts::shared::stats::{StatValue, ValueFormat};

use crate::shared::filter_state::Dimension;
use crate::shared::format::{format_number_with_decimals, or_dash};
use crate::shared::list_pipeline::ListResource;
use crate::shared::stats::{count_where, sum_of};

fn tier(a: &OneKeyAccount) -> Option<String> {
    Some(a.tier.code().to_string())
}

static DIMENSIONS: [Dimension<OneKeyAccount>; 1] = [Dimension {
    key: "tier",
    label: "Tier",
    extract: tier,
}];

pub struct OneKeyAccountList;

impl ListResource for OneKeyAccountList {
    type Entity = OneKeyAccount;

    const KEY: &'static str = "onekey-accounts";
    const LOAD_ERROR: &'static str = "Failed to load OneKey accounts";
    const ROUTE: &'static str = "/loyalty/accounts";

    fn dimensions() -> &'static [Dimension<OneKeyAccount>] {
        &DIMENSIONS
    }

    fn statistics(items: &[OneKeyAccount], total_count: usize) -> Vec<StatValue> {
        let mut stats = vec![StatValue::integer("total", "Total", total_count)];
        stats.extend(Tier::all().into_iter().map(|t| {
            StatValue::integer(t.code(), t.label(), count_where(items, |a| a.tier == t))
        }));
        stats.push(StatValue::new(
            "total_points",
            "Total points",
            Some(sum_of(items, |a| Some(a.total_points as f64))),
            ValueFormat::Integer,
        ));
        stats
    }

    fn columns() -> &'static [&'static str] {
        &["Number", "User", "Tier", "Points"]
    }

    fn row(a: &OneKeyAccount) -> Vec<String> {
        vec![
            or_dash(a.onekey_number.as_deref()),
            or_dash(a.user_email.as_deref()),
            a.tier.label().to_string(),
            format_number_with_decimals(a.total_points as f64, 0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::ResourceId;

    fn account(tier: Tier, points: i64) -> OneKeyAccount {
        OneKeyAccount {
            id: ResourceId::new_v4(),
            user: ResourceId::new_v4(),
            user_email: None,
            onekey_number: Some("OK-1".to_string()),
            tier,
            total_points: points,
            created_at: chrono::Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_tier_statistics() {
        let items = vec![
            account(Tier::Gold, 1200),
            account(Tier::Gold, 300),
            account(Tier::Diamond, 25000),
        ];
        let stats = OneKeyAccountList::statistics(&items, 3);
        let ids: Vec<_> = stats.iter().map(|s| s.id.as_str().to_string()).collect();
        assert_eq!(ids, vec!["total", "silver", "gold", "platinum", "diamond", "total_points"]);
        assert_eq!(stats[2].value, Some(2.0));
        assert_eq!(stats[5].value, Some(26500.0));
        assert_eq!(OneKeyAccountList::row(&items[2])[3], "25 000");
    }
}
