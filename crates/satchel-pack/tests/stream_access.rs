#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! End-to-end stream access over a real on-disk pack.
//!
//! Builds a container in a temp directory, opens it through the
//! satchel-stream adapter, and walks the caller-facing lifecycle the way
//! application code ported from plain file I/O would.

use std::io::SeekFrom;

use pretty_assertions::assert_eq;
use satchel_pack::{Pack, PackBuilder};
use satchel_stream::{
    AssetStreams, HandleMint, OpenMode, StreamError, StreamReader, STREAM_EOF,
};
use tempfile::tempdir;

fn logo_bytes() -> Vec<u8> {
    (0u8..=255).cycle().take(4096).collect()
}

fn pack_streams(dir: &tempfile::TempDir) -> AssetStreams<Pack, HandleMint> {
    let path = dir.path().join("assets.pack");

    let mut builder = PackBuilder::new();
    builder.add("images/logo.png", logo_bytes()).expect("add");
    builder.add("config/app.json", b"{\"fps\": 60}".to_vec()).expect("add");
    builder.add("empty.bin", Vec::new()).expect("add");
    builder.write_path(&path).expect("write pack");

    let pack = Pack::open(&path).expect("open pack");
    AssetStreams::new(pack, HandleMint::new())
}

#[test]
fn lifecycle_over_a_packed_asset() {
    let dir = tempdir().expect("tempdir");
    let mut streams = pack_streams(&dir);

    let h1 = streams.open("images/logo.png", OpenMode::Read).expect("open");

    let mut buf = [0u8; 100];
    let read = streams.read(h1, &mut buf);
    assert!(read <= 100);
    assert_eq!(streams.tell(h1), i64::try_from(read).expect("fits"));

    streams.seek(h1, SeekFrom::End(0)).expect("seek");
    assert_eq!(streams.tell(h1), 4096);
    assert_eq!(streams.size(h1).expect("size"), 4096);

    streams.close(h1).expect("close");
    assert_eq!(streams.tell(h1), STREAM_EOF);
    assert!(matches!(streams.close(h1), Err(StreamError::UnknownStream(_))));
}

#[test]
fn leading_separator_is_equivalent() {
    let dir = tempdir().expect("tempdir");
    let mut streams = pack_streams(&dir);

    let slashed = streams.open("/config/app.json", OpenMode::Read).expect("open");
    let plain = streams.open("config/app.json", OpenMode::Read).expect("open");

    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    let read_a = streams.read(slashed, &mut a);
    let read_b = streams.read(plain, &mut b);
    assert_eq!(read_a, read_b);
    assert_eq!(a[..read_a], b[..read_b]);

    streams.close(slashed).expect("close");
    streams.close(plain).expect("close");
}

#[test]
fn write_modes_never_reach_the_pack() {
    let dir = tempdir().expect("tempdir");
    let mut streams = pack_streams(&dir);

    for mode in ["w", "wb", "a", "r+"] {
        let mode = mode.parse::<OpenMode>().expect("mode");
        assert!(matches!(
            streams.open("config/app.json", mode),
            Err(StreamError::WriteAccess)
        ));
    }
    assert_eq!(streams.open_streams(), 0);
}

#[test]
fn missing_asset_fails_and_registry_stays_empty() {
    let dir = tempdir().expect("tempdir");
    let mut streams = pack_streams(&dir);

    assert!(matches!(
        streams.open("images/absent.png", OpenMode::Read),
        Err(StreamError::NotFound(_))
    ));
    assert_eq!(streams.open_streams(), 0);
}

#[test]
fn reads_past_the_end_come_back_short() {
    let dir = tempdir().expect("tempdir");
    let mut streams = pack_streams(&dir);

    let h = streams.open("config/app.json", OpenMode::Read).expect("open");
    let total = streams.size(h).expect("size");

    let mut oversized = vec![0u8; 1024];
    let read = streams.read(h, &mut oversized);
    assert!((read as u64) < 1024);
    assert_eq!(read as u64, total);
    assert_eq!(streams.tell(h), i64::try_from(total).expect("fits"));
    streams.close(h).expect("close");
}

#[test]
fn size_does_not_perturb_interleaved_readers() {
    let dir = tempdir().expect("tempdir");
    let mut streams = pack_streams(&dir);

    let logo = streams.open("images/logo.png", OpenMode::Read).expect("open");
    let json = streams.open("config/app.json", OpenMode::Read).expect("open");

    let mut buf = [0u8; 64];
    assert_eq!(streams.read(logo, &mut buf), 64);
    assert_eq!(streams.read(json, &mut buf[..4]), 4);

    assert_eq!(streams.size(logo).expect("size"), 4096);
    assert_eq!(streams.size(json).expect("size"), 11);

    assert_eq!(streams.tell(logo), 64);
    assert_eq!(streams.tell(json), 4);

    streams.close(logo).expect("close");
    streams.close(json).expect("close");
}

#[test]
fn stream_reader_feeds_generic_io_consumers() {
    let dir = tempdir().expect("tempdir");
    let mut streams = pack_streams(&dir);

    let h = streams.open("images/logo.png", OpenMode::Read).expect("open");
    let mut out = Vec::new();
    std::io::copy(&mut StreamReader::new(&mut streams, h), &mut out).expect("copy");
    assert_eq!(out, logo_bytes());

    streams.close(h).expect("close");
}

#[test]
fn empty_entry_streams_as_empty() {
    let dir = tempdir().expect("tempdir");
    let mut streams = pack_streams(&dir);

    let h = streams.open("empty.bin", OpenMode::Read).expect("open");
    let mut buf = [0u8; 8];
    assert_eq!(streams.read(h, &mut buf), 0);
    assert_eq!(streams.size(h).expect("size"), 0);
    assert_eq!(streams.tell(h), 0);
    streams.close(h).expect("close");
}
