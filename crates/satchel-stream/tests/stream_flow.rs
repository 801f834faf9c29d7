#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! End-to-end stream lifecycle scenarios over an in-memory container.
//!
//! Walks the full open→read→seek→tell→size→close flow the way a caller
//! ported from a file-system API would, including the host-triggered
//! teardown path and the interleaving of independent streams.

use std::io::SeekFrom;

use pretty_assertions::assert_eq;
use satchel_stream::test_utils::MemorySource;
use satchel_stream::{
    AssetStreams, HandleMint, OpenMode, ResourceId, StreamError, STREAM_EOF,
};

fn logo_bytes() -> Vec<u8> {
    (0u8..=255).cycle().take(1000).collect()
}

fn fixture() -> AssetStreams<MemorySource, HandleMint> {
    let mut source = MemorySource::new();
    source.insert("images/logo.png", logo_bytes());
    source.insert("sounds/click.ogg", vec![0xAB; 30]);
    source.insert("empty.dat", Vec::new());
    AssetStreams::new(source, HandleMint::new())
}

#[test]
fn full_lifecycle_of_a_single_stream() {
    let mut streams = fixture();

    let h1 = streams
        .open("images/logo.png", "r".parse::<OpenMode>().expect("mode"))
        .expect("open");

    let mut buf = [0u8; 100];
    let read = streams.read(h1, &mut buf);
    assert!(read <= 100);
    assert_eq!(streams.tell(h1), i64::try_from(read).expect("fits"));
    assert_eq!(&buf[..read], &logo_bytes()[..read]);

    streams.seek(h1, SeekFrom::End(0)).expect("seek to end");
    assert_eq!(streams.tell(h1), 1000);
    assert_eq!(streams.size(h1).expect("size"), 1000);

    streams.close(h1).expect("close");
    assert_eq!(streams.tell(h1), STREAM_EOF);
}

#[test]
fn leading_separator_resolves_to_the_same_resource() {
    let mut streams = fixture();

    let slashed = streams.open("/images/logo.png", OpenMode::Read).expect("open");
    let plain = streams.open("images/logo.png", OpenMode::Read).expect("open");

    assert_eq!(streams.size(slashed).expect("size"), streams.size(plain).expect("size"));
    streams.close(slashed).expect("close");
    streams.close(plain).expect("close");
}

#[test]
fn unknown_path_leaves_the_registry_untouched() {
    let mut streams = fixture();
    assert_eq!(streams.open_streams(), 0);
    assert!(matches!(
        streams.open("images/missing.png", OpenMode::Read),
        Err(StreamError::NotFound(_))
    ));
    assert_eq!(streams.open_streams(), 0);
}

#[test]
fn independent_streams_keep_independent_cursors() {
    let mut streams = fixture();

    let logo = streams.open("images/logo.png", OpenMode::Read).expect("open");
    let click = streams.open("sounds/click.ogg", OpenMode::Read).expect("open");

    let mut buf = [0u8; 64];
    assert_eq!(streams.read(logo, &mut buf), 64);
    assert_eq!(streams.read(click, &mut buf[..10]), 10);
    assert_eq!(streams.read(logo, &mut buf[..6]), 6);

    assert_eq!(streams.tell(logo), 70);
    assert_eq!(streams.tell(click), 10);

    streams.seek(click, SeekFrom::Start(25)).expect("seek");
    assert_eq!(streams.tell(click), 25);
    assert_eq!(streams.tell(logo), 70);

    // Short read on the smaller resource
    assert_eq!(streams.read(click, &mut buf), 5);
    assert_eq!(streams.tell(click), 30);

    streams.close(logo).expect("close");
    streams.close(click).expect("close");
    assert_eq!(streams.source().releases(), 2);
}

#[test]
fn empty_resource_reads_nothing_and_sizes_zero() {
    let mut streams = fixture();
    let h = streams.open("empty.dat", OpenMode::Read).expect("open");

    let mut buf = [0u8; 16];
    assert_eq!(streams.read(h, &mut buf), 0);
    assert_eq!(streams.tell(h), 0);
    assert_eq!(streams.size(h).expect("size"), 0);
    streams.close(h).expect("close");
}

#[test]
fn host_triggered_release_beats_explicit_close() {
    let mut streams = fixture();
    let h = streams.open("sounds/click.ogg", OpenMode::Read).expect("open");

    // The host runtime tears the stream object down itself, presenting
    // the cookie it was handed at creation time.
    streams.release(ResourceId::from_raw(1)).expect("release");
    assert_eq!(streams.source().releases(), 1);

    assert!(matches!(streams.close(h), Err(StreamError::UnknownStream(_))));
    assert_eq!(streams.source().releases(), 1);
}

#[test]
fn release_on_an_empty_registry_reports_not_found() {
    let mut streams = fixture();
    assert!(matches!(
        streams.release(ResourceId::from_raw(1)),
        Err(StreamError::UnknownResource(_))
    ));
}

#[test]
fn size_query_between_reads_is_invisible() {
    let mut streams = fixture();
    let h = streams.open("images/logo.png", OpenMode::Read).expect("open");

    let mut first = vec![0u8; 300];
    assert_eq!(streams.read(h, &mut first), 300);

    assert_eq!(streams.size(h).expect("size"), 1000);
    assert_eq!(streams.tell(h), 300);

    let mut rest = vec![0u8; 700];
    assert_eq!(streams.read(h, &mut rest), 700);

    let mut whole = first;
    whole.extend_from_slice(&rest);
    assert_eq!(whole, logo_bytes());
    streams.close(h).expect("close");
}
