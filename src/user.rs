//! User-object filter — reduces the raw `/me` profile to permitted fields.
//!
//! The remote API returns far more than downstream rendering is allowed to
//! see. [`filter_user_object`] is pure and total: unlisted fields are
//! dropped by construction, missing fields become `None`/empty, and it
//! never fails regardless of body shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The subset of the remote user profile callers are permitted to see.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilteredUser {
    #[serde(rename = "ID")]
    pub id: Option<u64>,
    pub display_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    #[serde(rename = "avatar_URL")]
    pub avatar_url: Option<String>,
    /// Account creation date, as returned by the API (ISO 8601).
    pub date: Option<String>,
    pub site_count: Option<u64>,
    pub visible_site_count: Option<u64>,
    pub has_unseen_notes: Option<bool>,
    pub phone_account: Option<bool>,
    /// Feature flag names lifted from the nested `meta.data.flags` block.
    #[serde(default)]
    pub active_flags: Vec<String>,
}

/// Filter a raw profile body down to a [`FilteredUser`].
#[must_use]
pub fn filter_user_object(raw: &Value) -> FilteredUser {
    let obj = raw.as_object();
    let field = |key: &str| obj.and_then(|o| o.get(key));
    let string_field = |key: &str| field(key).and_then(Value::as_str).map(str::to_owned);

    FilteredUser {
        id: field("ID").and_then(Value::as_u64),
        display_name: string_field("display_name"),
        username: string_field("username"),
        email: string_field("email"),
        email_verified: field("email_verified").and_then(Value::as_bool),
        avatar_url: string_field("avatar_URL"),
        date: string_field("date"),
        site_count: field("site_count").and_then(Value::as_u64),
        visible_site_count: field("visible_site_count").and_then(Value::as_u64),
        has_unseen_notes: field("has_unseen_notes").and_then(Value::as_bool),
        phone_account: field("phone_account").and_then(Value::as_bool),
        active_flags: active_flags(raw),
    }
}

fn active_flags(raw: &Value) -> Vec<String> {
    raw.pointer("/meta/data/flags/active_flags")
        .and_then(Value::as_array)
        .map(|flags| {
            flags
                .iter()
                .filter_map(|v| v.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;
