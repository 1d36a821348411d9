#![no_main]
use libfuzzer_sys::fuzz_target;

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_lite::io::AsyncRead;

/// Hands out the input a few bytes at a time, the count driven by the input.
#[derive(Debug)]
struct Splitter<'a> {
    data: &'a [u8],
    step: usize,
}

impl AsyncRead for Splitter<'_> {
    fn poll_read(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<std::io::Result<usize>> {
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Poll::Ready(Ok(n))
    }
}

fuzz_target!(|request: &[u8]| {
    let (step, data) = match request.split_first() {
        Some((&step, data)) => (usize::from(step).max(1), data),
        None => return,
    };

    let whole = futures_lite::future::block_on(h1_head::server::decode(Splitter {
        data,
        step: data.len().max(1),
    }));
    let split = futures_lite::future::block_on(h1_head::server::decode(Splitter { data, step }));

    // The outcome never depends on how the input was chunked.
    match (whole, split) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
        (a, b) => panic!("chunking changed the outcome: {:?} vs {:?}", a, b),
    }
});
