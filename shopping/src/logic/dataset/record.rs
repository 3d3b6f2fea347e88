use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::logic::features::{month_index, FeatureVector};

/// Binary purchase label: 1 = purchase, 0 = no purchase
pub type Label = u8;

pub const POSITIVE: Label = 1;
pub const NEGATIVE: Label = 0;

/// Exact spellings mapped to 1; anything else maps to 0
pub const RETURNING_VISITOR: &str = "Returning_Visitor";
pub const TRUE_FLAG: &str = "TRUE";

/// One browsing session, as read from a CSV row by header name
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionRecord {
    // ✅ Page counts and durations
    #[serde(rename = "Administrative")]
    pub administrative: i64,
    #[serde(rename = "Administrative_Duration")]
    pub administrative_duration: f64,
    #[serde(rename = "Informational")]
    pub informational: i64,
    #[serde(rename = "Informational_Duration")]
    pub informational_duration: f64,
    #[serde(rename = "ProductRelated")]
    pub product_related: i64,
    #[serde(rename = "ProductRelated_Duration")]
    pub product_related_duration: f64,

    // ✅ Rates
    #[serde(rename = "BounceRates")]
    pub bounce_rates: f64,
    #[serde(rename = "ExitRates")]
    pub exit_rates: f64,
    #[serde(rename = "PageValues")]
    pub page_values: f64,
    #[serde(rename = "SpecialDay")]
    pub special_day: f64,

    // ✅ Categorical
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "OperatingSystems")]
    pub operating_systems: i64,
    #[serde(rename = "Browser")]
    pub browser: i64,
    #[serde(rename = "Region")]
    pub region: i64,
    #[serde(rename = "TrafficType")]
    pub traffic_type: i64,
    #[serde(rename = "VisitorType")]
    pub visitor_type: String,

    // ✅ Flags
    #[serde(rename = "Weekend")]
    pub weekend: String,
    #[serde(rename = "Revenue")]
    pub revenue: String,
}

impl SessionRecord {
    /// Encode as an evidence vector. `row` is the 1-based data row, for errors.
    pub fn to_evidence(&self, row: usize) -> AppResult<FeatureVector> {
        let month = month_index(&self.month).ok_or_else(|| AppError::UnknownMonth {
            row,
            value: self.month.clone(),
        })?;

        Ok(FeatureVector::from_values([
            self.administrative as f64,
            self.administrative_duration,
            self.informational as f64,
            self.informational_duration,
            self.product_related as f64,
            self.product_related_duration,
            self.bounce_rates,
            self.exit_rates,
            self.page_values,
            self.special_day,
            f64::from(month),
            self.operating_systems as f64,
            self.browser as f64,
            self.region as f64,
            self.traffic_type as f64,
            flag(self.visitor_type == RETURNING_VISITOR),
            flag(self.weekend == TRUE_FLAG),
        ]))
    }

    pub fn label(&self) -> Label {
        if self.revenue == TRUE_FLAG {
            POSITIVE
        } else {
            NEGATIVE
        }
    }
}

fn flag(set: bool) -> f64 {
    if set {
        1.0
    } else {
        0.0
    }
}
