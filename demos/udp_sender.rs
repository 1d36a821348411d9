use std::io::{self, BufRead, Write};
use std::net::UdpSocket;

use async_io::Async;

type Exception = Box<dyn std::error::Error + Send + Sync + 'static>;

fn main() -> Result<(), Exception> {
    env_logger::init();

    async_global_executor::block_on(send_lines())
}

async fn send_lines() -> Result<(), Exception> {
    let socket = Async::<UdpSocket>::bind(([127, 0, 0, 1], 0))?;
    socket.get_ref().connect(("localhost", 42069))?;
    log::info!("sending to {}", socket.get_ref().peer_addr()?);

    let stdin = io::stdin();
    let mut lines = stdin.lock();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if lines.read_line(&mut line)? == 0 {
            break;
        }
        socket.send(line.as_bytes()).await?;
    }

    Ok(())
}
