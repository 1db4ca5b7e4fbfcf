use serde::{Serialize, Deserialize};
use super::Flow;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub flow: Flow,
    pub src:  Meta,
    pub dst:  Meta,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo:  Option<Geo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// Every field is independently optional: a value missing from the
// database stays None, it never collapses to an empty default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub city_name:        Option<String>,
    pub continent_code:   Option<String>,
    pub continent_name:   Option<String>,
    pub country_iso_code: Option<String>,
    pub country_name:     Option<String>,
    pub country_in_eu:    Option<bool>,
    pub subdivisions:     Option<Vec<Subdivision>>,
    pub latitude:         Option<f64>,
    pub longitude:        Option<f64>,
    pub metro_code:       Option<u16>,
    pub time_zone:        Option<String>,
    pub postal_code:      Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Subdivision {
    pub iso_code: Option<String>,
    pub name:     Option<String>,
}

impl Record {
    pub fn new(flow: Flow) -> Self {
        Self {
            flow: flow,
            src:  Meta::default(),
            dst:  Meta::default(),
        }
    }
}

impl From<Flow> for Record {
    fn from(flow: Flow) -> Self {
        Record::new(flow)
    }
}
