use std::net::IpAddr;
use super::{Addr, Flow, Meta, Protocol, Record};

pub fn flow(src: &str, sport: u16, dst: &str, dport: u16, proto: u8) -> Flow {
    Flow {
        protocol:        Protocol::from(proto),
        src:             addr(src, sport),
        dst:             addr(dst, dport),
        start:           1_600_000_000_000,
        end:             1_600_000_005_000,
        octets:          1500,
        packets:         3,
        reverse_octets:  800,
        reverse_packets: 2,
    }
}

fn addr(ip: &str, port: u16) -> Addr {
    Addr {
        addr: ip.parse::<IpAddr>().unwrap(),
        port: port,
    }
}

#[test]
fn duration() {
    let mut f = flow("10.0.0.1", 1234, "10.0.0.2", 80, 6);
    assert_eq!(5000, f.duration());

    f.end = f.start;
    assert_eq!(0, f.duration());

    f.end = f.start - 1;
    assert_eq!(0, f.duration());
}

#[test]
fn partition_key_deterministic() {
    let a = flow("10.0.0.1", 1234, "10.0.0.2", 80, 6);
    let mut b = a.clone();
    b.octets  = 99;
    b.start  += 10;

    assert_eq!(a.key().partition(), b.key().partition());
    assert_eq!("10.0.0.1:1234-10.0.0.2:80-6", a.key().partition());
}

#[test]
fn partition_key_fields() {
    let base = flow("10.0.0.1", 1234, "10.0.0.2", 80, 6).key().partition();

    let changed = vec![
        flow("10.0.0.3", 1234, "10.0.0.2", 80, 6),
        flow("10.0.0.1", 1235, "10.0.0.2", 80, 6),
        flow("10.0.0.1", 1234, "10.0.0.4", 80, 6),
        flow("10.0.0.1", 1234, "10.0.0.2", 81, 6),
        flow("10.0.0.1", 1234, "10.0.0.2", 80, 17),
    ];

    for f in changed {
        assert_ne!(base, f.key().partition(), "{:?}", f.key());
    }
}

#[test]
fn partition_key_ipv6() {
    let f = flow("2001:db8::1", 443, "2001:db8::2", 51000, 17);
    assert_eq!("[2001:db8::1]:443-[2001:db8::2]:51000-17", f.key().partition());
}

#[test]
fn protocol_numbers() {
    assert_eq!(Protocol::ICMP,      Protocol::from(1));
    assert_eq!(Protocol::TCP,       Protocol::from(6));
    assert_eq!(Protocol::UDP,       Protocol::from(17));
    assert_eq!(Protocol::Other(47), Protocol::from(47));
    assert_eq!(47, Protocol::Other(47).number());
}

#[test]
fn absent_meta_not_serialized() {
    let rec  = Record::new(flow("10.0.0.1", 1234, "10.0.0.2", 80, 6));
    let json = serde_json::to_value(&rec).unwrap();

    assert_eq!(6, json["flow"]["protocol"]);
    assert_eq!(serde_json::json!({}), json["src"]);
    assert_eq!(serde_json::json!({}), json["dst"]);

    let back: Record = serde_json::from_value(json).unwrap();
    assert_eq!(Meta::default(), back.src);
    assert_eq!(rec, back);
}
