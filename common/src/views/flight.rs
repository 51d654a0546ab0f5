use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct Schedule {
    /// Scheduled time of departure.
    pub std: String,

    /// Scheduled time of arrival.
    pub sta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    /// Unique flight ID.
    #[schema(example = "65a9c9f0e5b5c8b5bfb3d7f1")]
    pub id: String,

    pub aircraft: String,
    pub flight_number: String,
    pub schedule: Schedule,
    pub departure: String,
    pub destination: String,
}
