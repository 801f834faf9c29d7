//! Stream one asset out of a pack container to stdout.
//!
//! Usage: `cargo run --example cat_asset -- <assets.pack> <path/in/pack>`

use std::io::Write;

use satchel_pack::Pack;
use satchel_stream::{AssetStreams, HandleMint, OpenMode, StreamReader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(pack_path), Some(asset_path)) = (args.next(), args.next()) else {
        return Err("usage: cat_asset <assets.pack> <path/in/pack>".into());
    };

    let pack = Pack::open(&pack_path)?;
    let mut streams = AssetStreams::new(pack, HandleMint::new());

    let handle = streams.open(&asset_path, OpenMode::Read)?;
    let total = streams.size(handle)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    std::io::copy(&mut StreamReader::new(&mut streams, handle), &mut out)?;
    out.flush()?;
    streams.close(handle)?;

    eprintln!("{asset_path}: {total} bytes");
    Ok(())
}
