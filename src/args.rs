use std::time::Duration;
use anyhow::Result;
use clap::{ArgMatches, value_t};
use crate::enrich::dns;
use crate::export;

pub fn export(args: &ArgMatches) -> Result<export::Config> {
    Ok(export::Config {
        max_size:  value_t!(args, "max-upload-size",    usize)?,
        max_count: value_t!(args, "max-upload-count",   usize)?,
        rate:      value_t!(args, "uploads-per-second", u32)?,
    })
}

pub fn dns(args: &ArgMatches) -> Result<Option<dns::Config>> {
    if !args.is_present("dns") {
        return Ok(None);
    }

    let timeout = value_t!(args, "dns-timeout", u64)?;
    let ttl     = value_t!(args, "dns-ttl",     u64)?;

    Ok(Some(dns::Config {
        timeout: Duration::from_secs(timeout),
        ttl:     Duration::from_secs(ttl * 60),
    }))
}
