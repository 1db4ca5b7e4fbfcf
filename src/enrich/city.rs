use std::collections::BTreeMap;

pub type Names = BTreeMap<String, String>;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct City {
    pub city:         Option<Locality>,
    pub continent:    Option<Continent>,
    pub country:      Option<Country>,
    pub location:     Option<Location>,
    pub postal:       Option<Postal>,
    pub subdivisions: Option<Vec<Division>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Locality {
    pub names: Option<Names>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Continent {
    pub code:  Option<String>,
    pub names: Option<Names>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Country {
    pub iso_code: Option<String>,
    pub in_eu:    Option<bool>,
    pub names:    Option<Names>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Location {
    pub latitude:   Option<f64>,
    pub longitude:  Option<f64>,
    pub metro_code: Option<u16>,
    pub time_zone:  Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Postal {
    pub code: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Division {
    pub iso_code: Option<String>,
    pub names:    Option<Names>,
}
