use serde::{Deserialize, Serialize};

/// Schedule as exposed over the dispatch boundary.
///
/// Dates are Unix-epoch seconds, matching the stored representation. The id
/// is `None` only for an aggregate that has never been persisted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDto {
    pub id: Option<i32>,
    pub start_date: i64,
    pub end_date: i64,
    pub delivery_dates: Vec<DeliveryDateDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryDateDto {
    pub id: Option<i32>,
    pub delivery_date: i64,
}
