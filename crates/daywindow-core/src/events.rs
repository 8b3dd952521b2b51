use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::complication::ComplicationType;

/// Every host callback handled by a data source produces an Event.
/// Events are informational; nothing downstream is required to consume them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ComplicationActivated {
        instance_id: i32,
        complication_type: ComplicationType,
        at: DateTime<Utc>,
    },
    ComplicationDeactivated {
        instance_id: i32,
        at: DateTime<Utc>,
    },
    /// A data request was answered; `served` is false for "no data".
    DataRequested {
        instance_id: i32,
        complication_type: ComplicationType,
        served: bool,
        at: DateTime<Utc>,
    },
}

impl Event {
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Event::ComplicationActivated { at, .. }
            | Event::ComplicationDeactivated { at, .. }
            | Event::DataRequested { at, .. } => *at,
        }
    }

    pub fn instance_id(&self) -> i32 {
        match self {
            Event::ComplicationActivated { instance_id, .. }
            | Event::ComplicationDeactivated { instance_id, .. }
            | Event::DataRequested { instance_id, .. } => *instance_id,
        }
    }
}
