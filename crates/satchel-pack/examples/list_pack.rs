//! List the entries of a pack container.
//!
//! Usage: `cargo run --example list_pack -- <assets.pack>`

use satchel_pack::Pack;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: list_pack <assets.pack>")?;

    let pack = Pack::open(&path)?;
    println!("{}: {} entries", path, pack.len());
    for entry in pack.entries() {
        println!("{:>10}  {}", entry.length, entry.path);
    }
    Ok(())
}
