use std::fmt;
use std::net::{IpAddr, SocketAddr};
use log::warn;
use serde::{Serialize, Deserialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    pub protocol:        Protocol,
    pub src:             Addr,
    pub dst:             Addr,
    pub start:           u64,
    pub end:             u64,
    pub octets:          u64,
    pub packets:         u64,
    pub reverse_octets:  u64,
    pub reverse_packets: u64,
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, Eq, PartialEq, Hash)]
#[serde(from = "u8", into = "u8")]
pub enum Protocol {
    ICMP,
    TCP,
    UDP,
    Other(u8),
}

#[derive(Copy, Clone, Debug, Serialize, Deserialize, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Addr {
    pub addr: IpAddr,
    pub port: u16,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Key(pub Protocol, pub Addr, pub Addr);

impl Flow {
    pub fn key(&self) -> Key {
        Key(self.protocol, self.src, self.dst)
    }

    pub fn duration(&self) -> u64 {
        match self.end.checked_sub(self.start) {
            Some(n) => n,
            None    => {
                warn!("flow {} -> {} ended before it started", self.src, self.dst);
                0
            }
        }
    }
}

impl Key {
    pub fn partition(&self) -> String {
        let Key(proto, src, dst) = self;
        format!("{}-{}-{}", src, dst, proto.number())
    }
}

impl Protocol {
    pub fn number(&self) -> u8 {
        match self {
            Protocol::ICMP     => 1,
            Protocol::TCP      => 6,
            Protocol::UDP      => 17,
            Protocol::Other(n) => *n,
        }
    }
}

impl From<u8> for Protocol {
    fn from(n: u8) -> Self {
        match n {
            1  => Protocol::ICMP,
            6  => Protocol::TCP,
            17 => Protocol::UDP,
            n  => Protocol::Other(n),
        }
    }
}

impl From<Protocol> for u8 {
    fn from(p: Protocol) -> Self {
        p.number()
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.addr {
            IpAddr::V4(ip) => write!(f, "{}:{}",   ip, self.port),
            IpAddr::V6(ip) => write!(f, "[{}]:{}", ip, self.port),
        }
    }
}

impl From<SocketAddr> for Addr {
    fn from(sa: SocketAddr) -> Self {
        Self {
            addr: sa.ip(),
            port: sa.port(),
        }
    }
}
