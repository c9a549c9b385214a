use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiResource, ResourceId};

/// Уровень программы лояльности OneKey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl Tier {
    pub fn code(&self) -> &'static str {
        match self {
            Tier::Silver => "silver",
            Tier::Gold => "gold",
            Tier::Platinum => "platinum",
            Tier::Diamond => "diamond",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
            Tier::Diamond => "Diamond",
        }
    }

    pub fn all() -> Vec<Tier> {
        vec![Tier::Silver, Tier::Gold, Tier::Platinum, Tier::Diamond]
    }
}

/// Счет OneKey (один на пользователя)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneKeyAccount {
    pub id: ResourceId,
    pub user: ResourceId,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub onekey_number: Option<String>,
    pub tier: Tier,
    #[serde(default)]
    pub total_points: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ApiResource for OneKeyAccount {
    fn id(&self) -> ResourceId {
        self.id
    }

    fn display_name(&self) -> String {
        self.onekey_number
            .clone()
            .or_else(|| self.user_email.clone())
            .unwrap_or_else(|| self.id.as_string())
    }

    fn resource_index() -> &'static str {
        "a011"
    }

    fn collection_name() -> &'static str {
        "onekey_account"
    }

    fn endpoint() -> &'static str {
        "/api/onekey/accounts/"
    }

    fn element_name() -> &'static str {
        "OneKey account"
    }

    fn list_name() -> &'static str {
        "OneKey accounts"
    }
}
