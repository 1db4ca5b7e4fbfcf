use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use clap::{App, load_yaml, value_t};
use env_logger::Builder;
use jemallocator::Jemalloc;
use log::{info, warn};
use log::LevelFilter::*;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use tokio::runtime::Runtime;
use stream_api::Client;
use flowsys::args;
use flowsys::collect::{Collect, Sink};
use flowsys::enrich::{Database, Dns, Enrich, GeoIP, Maxmind, Pipeline, System};
use flowsys::export::{Buffer, Uploader};

#[global_allocator]
static ALLOC: Jemalloc = Jemalloc;

fn main() -> Result<()> {
    let yaml = load_yaml!("args.yml");
    let ver  = env!("CARGO_PKG_VERSION");
    let args = App::from_yaml(&yaml).version(ver).get_matches();

    let listen   = value_t!(args, "listen",   String)?;
    let endpoint = value_t!(args, "endpoint", String)?;
    let stream   = value_t!(args, "stream",   String)?;
    let language = value_t!(args, "language", String)?;
    let geoip    = args.value_of("geoip");

    let export = args::export(&args)?;
    let dns    = args::dns(&args)?;

    let (module, level) = match args.occurrences_of("verbose") {
        0 => (Some(module_path!()), Info),
        1 => (Some(module_path!()), Debug),
        2 => (Some(module_path!()), Trace),
        _ => (None,                 Trace),
    };
    Builder::from_default_env().filter(module, level).init();

    info!("initializing flowsys {}", ver);

    let rt     = Runtime::new()?;
    let client = Client::new(&endpoint, &stream, Some(Duration::from_secs(30)))?;

    let db = geoip.and_then(|path| match Maxmind::open(path) {
        Ok(db) => Some(Box::new(db) as Box<dyn Database>),
        Err(e) => {
            warn!("failed to open geoip database {}: {}", path, e);
            None
        }
    });

    let mut enrichers = vec![Box::new(GeoIP::new(db, &language)) as Box<dyn Enrich>];

    if let Some(cfg) = dns {
        let period = cfg.ttl;
        let dns    = Dns::new(System, cfg);
        dns.exec(rt.handle(), period);
        enrichers.push(Box::new(dns));
    }

    let pipeline = Arc::new(Pipeline::new(enrichers));
    let buffer   = Arc::new(Buffer::new(Arc::new(client), export));
    let uploader = Uploader::start(buffer.clone(), rt.handle());

    info!("enrichers: {:?}", pipeline.names());

    let sink    = Sink::new(pipeline, buffer.clone());
    let collect = rt.block_on(Collect::bind(&listen, sink))?;

    rt.spawn(collect.execute());

    let mut signals = Signals::new(&[SIGINT, SIGTERM])?;
    if let Some(signal) = signals.forever().next() {
        info!("received signal {}, shutting down", signal);
    }

    match rt.block_on(uploader.stop()) {
        Ok(n)  => info!("final upload sent {} records", n),
        Err(e) => warn!("final upload failed: {}", e),
    }

    let lost = buffer.len();
    if lost > 0 {
        warn!("dropping {} undelivered records", lost);
    }

    Ok(())
}
