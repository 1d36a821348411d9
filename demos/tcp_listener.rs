use std::net::{SocketAddr, TcpListener};

use async_io::Async;
use h1_head::{server, RequestHead};

type Exception = Box<dyn std::error::Error + Send + Sync + 'static>;

type Decoded = (SocketAddr, h1_head::Result<RequestHead>);

fn main() -> Result<(), Exception> {
    env_logger::init();
    async_global_executor::block_on(listen())
}

async fn listen() -> Result<(), Exception> {
    let listener = Async::<TcpListener>::bind(([127, 0, 0, 1], 42069))?;
    println!("listening on {}", listener.get_ref().local_addr()?);

    let (sender, receiver) = async_channel::unbounded::<Decoded>();

    async_global_executor::spawn(async move {
        while let Ok((peer, res)) = receiver.recv().await {
            match res {
                Ok(head) => print_head(peer, &head),
                Err(err) => log::error!("{}: {}", peer, err),
            }
        }
    })
    .detach();

    loop {
        let (stream, peer) = listener.accept().await?;
        let sender = sender.clone();
        async_global_executor::spawn(async move {
            let res = server::accept(stream).await;
            sender.send((peer, res)).await.ok();
        })
        .detach();
    }
}

fn print_head(peer: SocketAddr, head: &RequestHead) {
    println!("Connection from {}", peer);
    println!("Request line:");
    println!("- Method: {}", head.request_line.method());
    println!("- Target: {}", String::from_utf8_lossy(head.request_line.target()));
    println!("- Version: {}", head.request_line.http_version());
    println!("Headers:");
    let mut headers: Vec<_> = head.headers.iter().collect();
    headers.sort();
    for (name, value) in headers {
        println!("- {}: {}", name, String::from_utf8_lossy(value));
    }
}
