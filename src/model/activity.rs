use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

/// Catalog id reserved for the placeholder entry synthesized from a URL
/// parameter. Entries with this id exist only in client memory.
pub const SYNTHETIC_ACTIVITY_ID: u64 = 0;

/// Label of the always-available catch-all catalog option.
pub const FALLBACK_ACTIVITY_NAME: &str = "Lainnya";

/// One catalog entry from `GET /api/daily-activities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    pub id: u64,
    pub activity_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_date: Option<String>,
}

impl DailyActivity {
    /// Placeholder for a URL-supplied name the backend does not know.
    pub fn synthetic(activity_name: &str) -> Self {
        Self {
            id: SYNTHETIC_ACTIVITY_ID,
            activity_name: activity_name.to_string(),
            activity_date: None,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.id == SYNTHETIC_ACTIVITY_ID
    }
}

/// Body for `POST /api/daily-activities`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDailyActivity {
    pub activity_name: String,
    /// `YYYY-MM-DD`.
    pub activity_date: String,
}

/// Query parameters carried by a QR pre-fill link
/// (`?activityName=...&activityId=...&activityDate=...`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefillParams {
    pub activity_name: Option<String>,
    pub activity_id: Option<u64>,
    pub activity_date: Option<NaiveDate>,
}

impl PrefillParams {
    /// Extracts the pre-fill parameters from a visited form URL. Unknown
    /// parameters are ignored; malformed id/date values are dropped rather
    /// than failing the whole link.
    pub fn from_url(url: &Url) -> Self {
        let mut params = Self::default();
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "activityName" => params.activity_name = Some(value.into_owned()),
                "activityId" => params.activity_id = value.parse().ok(),
                "activityDate" => {
                    params.activity_date = NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok()
                }
                _ => {}
            }
        }
        params
    }

    pub fn is_empty(&self) -> bool {
        self.activity_name.is_none() && self.activity_id.is_none() && self.activity_date.is_none()
    }
}

/// Builds the form URL a generated QR code points at for `activity`.
/// Only the link is produced here; rendering the QR image is the caller's
/// concern.
pub fn prefill_link(form_base: &Url, activity: &DailyActivity) -> Url {
    let mut link = form_base.clone();
    {
        let mut qs = link.query_pairs_mut();
        qs.append_pair("activityName", &activity.activity_name);
        qs.append_pair("activityId", &activity.id.to_string());
        if let Some(date) = &activity.activity_date {
            qs.append_pair("activityDate", date);
        }
    }
    link
}
