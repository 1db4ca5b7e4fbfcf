use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::ops::AddAssign;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use futures::prelude::*;
use log::{debug, error, info, warn};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::sleep;
use tokio_serde::{SymmetricallyFramed, formats::SymmetricalJson};
use tokio_util::codec::{FramedRead, LengthDelimitedCodec};
use super::{Model, Sink};

const MAX_FRAME: usize = 32 * 1024 * 1024;
const RETRY:     Duration = Duration::from_millis(100);

pub struct Collect {
    listener: TcpListener,
    sink:     Sink,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    pub accepted: usize,
    pub rejected: usize,
}

impl Collect {
    pub async fn bind(addr: &str, sink: Sink) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!("collecting flows on {}", listener.local_addr()?);
        Ok(Self { listener, sink })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub async fn execute(self) {
        let listener = Arc::new(self.listener);
        let accept   = move || {
            let listener = listener.clone();
            async move { listener.accept().await }
        };
        serve(accept, self.sink).await
    }
}

pub(super) async fn serve<F, A>(mut accept: F, sink: Sink)
    where F: FnMut() -> A, A: Future<Output = io::Result<(TcpStream, SocketAddr)>>
{
    loop {
        let (sock, addr) = match accept().await {
            Ok(conn) => conn,
            Err(e)   => {
                warn!("accept failed: {}", e);
                sleep(RETRY).await;
                continue;
            }
        };

        debug!("connection from {}", addr);
        let sink = sink.clone();
        tokio::spawn(async move {
            match collector(sock, sink).await {
                Ok(stats) => debug!("collector {} finished: {:?}", addr, stats),
                Err(e)    => error!("collector {} error: {}", addr, e),
            }
        });
    }
}

async fn collector(sock: TcpStream, sink: Sink) -> Result<Stats> {
    let mut length = LengthDelimitedCodec::new();
    length.set_max_frame_length(MAX_FRAME);
    let framed = FramedRead::new(sock, length);
    let format = SymmetricalJson::<Vec<Model>>::default();

    let mut codec = SymmetricallyFramed::new(framed, format);
    let mut stats = Stats::default();

    while let Some(models) = codec.try_next().await? {
        stats += sink.collect(models).await;
    }

    Ok(stats)
}

impl AddAssign for Stats {
    fn add_assign(&mut self, other: Self) {
        self.accepted += other.accepted;
        self.rejected += other.rejected;
    }
}
