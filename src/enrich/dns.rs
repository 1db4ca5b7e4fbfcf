use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use async_trait::async_trait;
use dns_lookup::lookup_addr;
use log::{debug, warn};
use tokio::runtime::Handle;
use tokio::task::spawn_blocking;
use tokio::time::timeout;
use crate::flow::Record;
use super::cache::{reap, Cache};
use super::enrich::Enrich;

#[async_trait]
pub trait Resolve: Send + Sync {
    async fn reverse(&self, addr: IpAddr) -> Result<Vec<String>>;
}

#[derive(Clone, Debug)]
pub struct Config {
    pub timeout: Duration,
    pub ttl:     Duration,
}

pub struct Dns<R> {
    resolver: R,
    timeout:  Duration,
    cache:    Arc<Cache<String, String>>,
}

pub struct System;

impl<R: Resolve> Dns<R> {
    pub fn new(resolver: R, cfg: Config) -> Self {
        Self {
            resolver: resolver,
            timeout:  cfg.timeout,
            cache:    Arc::new(Cache::new(cfg.ttl)),
        }
    }

    pub fn exec(&self, handle: &Handle, period: Duration) {
        handle.spawn(reap(self.cache.clone(), period));
    }

    pub async fn lookup(&self, addr: IpAddr) -> Option<String> {
        let key = addr.to_string();

        if let Some(name) = self.cache.get(&key) {
            debug!("reverse name {} -> {} (cached)", key, name);
            return Some(name);
        }

        let names = match timeout(self.timeout, self.resolver.reverse(addr)).await {
            Ok(Ok(names)) => names,
            Ok(Err(e))    => {
                debug!("reverse lookup {} failed: {}", key, e);
                return None;
            },
            Err(_)        => {
                warn!("reverse lookup {} timed out after {:?}", key, self.timeout);
                return None;
            },
        };

        match names.into_iter().next() {
            Some(name) => {
                debug!("reverse name {} -> {}", key, name);
                self.cache.insert(key, name.clone());
                Some(name)
            },
            None => {
                debug!("reverse lookup {} found no names", key);
                None
            },
        }
    }

    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: Resolve + 'static> Enrich for Dns<R> {
    async fn enrich(&self, rec: &mut Record) {
        let (src, dst) = futures::join!(
            self.lookup(rec.flow.src.addr),
            self.lookup(rec.flow.dst.addr)
        );

        if let Some(name) = src {
            rec.src.name = Some(name);
        }

        if let Some(name) = dst {
            rec.dst.name = Some(name);
        }
    }

    fn name(&self) -> &str {
        "dns"
    }
}

#[async_trait]
impl Resolve for System {
    async fn reverse(&self, addr: IpAddr) -> Result<Vec<String>> {
        let name = spawn_blocking(move || lookup_addr(&addr)).await??;

        // getnameinfo falls back to the numeric form when no PTR exists
        match name.parse::<IpAddr>() {
            Ok(_)  => Ok(Vec::new()),
            Err(_) => Ok(vec![name]),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(2),
            ttl:     Duration::from_secs(30 * 60),
        }
    }
}
