use flightdeck_common::{
    params::{CreateFlightParams, ScheduleParams, UpdateFlightParams},
    views::{Flight, Schedule},
};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbSchedule {
    pub std: String,
    pub sta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbFlight {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Code of the aircraft assigned to the flight
    pub aircraft: String,

    pub flight_number: String,
    pub schedule: DbSchedule,

    /// Departure airport identifier
    pub departure: String,

    /// Destination airport identifier
    pub destination: String,
}

impl DbFlight {
    /// External identifier of this flight: the hex form of its document `_id`.
    pub fn external_id(&self) -> String {
        self.id.map(|oid| oid.to_hex()).unwrap_or_default()
    }
}

impl From<ScheduleParams> for DbSchedule {
    fn from(value: ScheduleParams) -> Self {
        Self {
            std: value.std,
            sta: value.sta,
        }
    }
}

impl From<CreateFlightParams> for DbFlight {
    fn from(value: CreateFlightParams) -> Self {
        Self {
            id: None,
            aircraft: value.aircraft,
            flight_number: value.flight_number,
            schedule: value.schedule.into(),
            departure: value.departure,
            destination: value.destination,
        }
    }
}

impl From<DbFlight> for Flight {
    fn from(value: DbFlight) -> Self {
        Self {
            id: value.external_id(),
            aircraft: value.aircraft,
            flight_number: value.flight_number,
            schedule: Schedule {
                std: value.schedule.std,
                sta: value.schedule.sta,
            },
            departure: value.departure,
            destination: value.destination,
        }
    }
}

/// A partial update to a stored flight. Serializes to the `$set` document,
/// so absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircraft: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<DbSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

impl FlightChanges {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Apply these changes to an in-process copy of a flight.
    pub fn apply(self, flight: &mut DbFlight) {
        if let Some(aircraft) = self.aircraft {
            flight.aircraft = aircraft;
        }
        if let Some(flight_number) = self.flight_number {
            flight.flight_number = flight_number;
        }
        if let Some(schedule) = self.schedule {
            flight.schedule = schedule;
        }
        if let Some(departure) = self.departure {
            flight.departure = departure;
        }
        if let Some(destination) = self.destination {
            flight.destination = destination;
        }
    }
}

impl From<UpdateFlightParams> for FlightChanges {
    fn from(value: UpdateFlightParams) -> Self {
        Self {
            aircraft: value.aircraft,
            flight_number: value.flight_number,
            schedule: value.schedule.map(Into::into),
            departure: value.departure,
            destination: value.destination,
        }
    }
}
