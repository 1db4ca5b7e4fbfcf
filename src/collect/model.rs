use std::convert::TryFrom;
use std::net::IpAddr;
use anyhow::{Error, Result, anyhow};
use serde::{Serialize, Deserialize};
use crate::flow::{Addr, Flow, Protocol};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub source_ip:                 String,
    pub destination_ip:            String,
    pub source_port:               u16,
    pub destination_port:          u16,
    pub protocol:                  u8,
    pub flow_start_milliseconds:   u64,
    pub flow_end_milliseconds:     u64,
    pub flow_octet_count:          u64,
    pub flow_packet_count:         u64,
    #[serde(default)]
    pub reverse_flow_octet_count:  u64,
    #[serde(default)]
    pub reverse_flow_packet_count: u64,
}

impl TryFrom<Model> for Flow {
    type Error = Error;

    fn try_from(m: Model) -> Result<Self> {
        let src = parse("source_ip", &m.source_ip)?;
        let dst = parse("destination_ip", &m.destination_ip)?;

        Ok(Flow {
            protocol:        Protocol::from(m.protocol),
            src:             Addr { addr: src, port: m.source_port },
            dst:             Addr { addr: dst, port: m.destination_port },
            start:           m.flow_start_milliseconds,
            end:             m.flow_end_milliseconds,
            octets:          m.flow_octet_count,
            packets:         m.flow_packet_count,
            reverse_octets:  m.reverse_flow_octet_count,
            reverse_packets: m.reverse_flow_packet_count,
        })
    }
}

fn parse(field: &str, value: &str) -> Result<IpAddr> {
    value.parse().map_err(|_| {
        anyhow!("{} is an invalid IP address: {:?}", field, value)
    })
}
