use chrono::DateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Validate, ValidationError, check_length};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ScheduleParams {
    /// The scheduled time of departure, ISO 8601 format.
    #[schema(format = DateTime, example = "2025-02-15T14:30:00Z")]
    pub std: String,

    /// The scheduled time of arrival, ISO 8601 format.
    #[schema(format = DateTime, example = "2025-02-15T17:30:00Z")]
    pub sta: String,
}

/// Body of a flight creation request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlightParams {
    /// A code describing the aircraft assigned to the flight.
    #[schema(min_length = 1, max_length = 10, example = "CSTRC")]
    pub aircraft: String,

    /// A code that identifies the flight.
    #[schema(min_length = 1, max_length = 10, example = "AVIO201")]
    pub flight_number: String,

    pub schedule: ScheduleParams,

    /// Identifier for the departure airport.
    #[schema(min_length = 4, max_length = 4, example = "LPPD")]
    pub departure: String,

    /// Identifier for the destination airport.
    #[schema(min_length = 4, max_length = 4, example = "LPLA")]
    pub destination: String,
}

/// Body of a flight update request. Only the fields present are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFlightParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(min_length = 1, max_length = 10)]
    pub aircraft: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(min_length = 1, max_length = 10)]
    pub flight_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleParams>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(min_length = 4, max_length = 4)]
    pub departure: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(min_length = 4, max_length = 4)]
    pub destination: Option<String>,
}

fn check_timestamp(field: &'static str, value: &str) -> Result<(), ValidationError> {
    DateTime::parse_from_rfc3339(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new(field, "must be an ISO 8601 date-time"))
}

impl Validate for ScheduleParams {
    fn validate(&self) -> Result<(), ValidationError> {
        check_timestamp("schedule.std", &self.std)?;
        check_timestamp("schedule.sta", &self.sta)
    }
}

impl Validate for CreateFlightParams {
    fn validate(&self) -> Result<(), ValidationError> {
        check_length("aircraft", &self.aircraft, 1, 10)?;
        check_length("flightNumber", &self.flight_number, 1, 10)?;
        self.schedule.validate()?;
        check_length("departure", &self.departure, 4, 4)?;
        check_length("destination", &self.destination, 4, 4)
    }
}

impl Validate for UpdateFlightParams {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(aircraft) = &self.aircraft {
            check_length("aircraft", aircraft, 1, 10)?;
        }
        if let Some(flight_number) = &self.flight_number {
            check_length("flightNumber", flight_number, 1, 10)?;
        }
        if let Some(schedule) = &self.schedule {
            schedule.validate()?;
        }
        if let Some(departure) = &self.departure {
            check_length("departure", departure, 4, 4)?;
        }
        if let Some(destination) = &self.destination {
            check_length("destination", destination, 4, 4)?;
        }
        Ok(())
    }
}
