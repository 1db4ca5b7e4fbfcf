use std::collections::BTreeMap;
use std::net::IpAddr;
use std::path::Path;
use anyhow::Result;
use log::info;
use maxminddb::{Reader, geoip2};
use super::city::*;
use super::geo::Database;

pub struct Maxmind {
    reader: Reader<Vec<u8>>,
}

impl Maxmind {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = Reader::open_readfile(path.as_ref())?;
        let meta   = &reader.metadata;
        info!("loaded {} database built {}", meta.database_type, meta.build_epoch);
        Ok(Self { reader })
    }
}

impl Database for Maxmind {
    fn city(&self, addr: IpAddr) -> Result<City> {
        let city = self.reader.lookup::<geoip2::City>(addr)?;
        Ok(convert(city))
    }
}

fn convert(city: geoip2::City<'_>) -> City {
    City {
        city: city.city.map(|c| Locality {
            names: names(c.names),
        }),
        continent: city.continent.map(|c| Continent {
            code:  owned(c.code),
            names: names(c.names),
        }),
        country: city.country.map(|c| Country {
            iso_code: owned(c.iso_code),
            in_eu:    c.is_in_european_union,
            names:    names(c.names),
        }),
        location: city.location.map(|l| Location {
            latitude:   l.latitude,
            longitude:  l.longitude,
            metro_code: l.metro_code,
            time_zone:  owned(l.time_zone),
        }),
        postal: city.postal.map(|p| Postal {
            code: owned(p.code),
        }),
        subdivisions: city.subdivisions.map(|subs| {
            subs.into_iter().map(|s| Division {
                iso_code: owned(s.iso_code),
                names:    names(s.names),
            }).collect()
        }),
    }
}

fn names(names: Option<BTreeMap<&str, &str>>) -> Option<Names> {
    names.map(|map| {
        map.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect()
    })
}

fn owned(s: Option<&str>) -> Option<String> {
    s.map(str::to_owned)
}
