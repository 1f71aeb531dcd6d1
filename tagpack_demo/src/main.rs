use anyhow::{anyhow, Result};
use std::env;
use std::str::FromStr;
use tagpack_types::codec::{BufEncoder, SliceDecoder};
use tagpack_types::walk::{deserialize, serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod color;
mod console;
mod constant;

use console::ConsoleEncoder;
use constant::ConstDecoder;

const ENV_VAR_LOG: &str = "TAGPACK_LOG";
const ENV_VAR_SINK: &str = "TAGPACK_SINK";

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum Sink {
    Console,
    Buffer,
    Both,
}
impl FromStr for Sink {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "console" => Ok(Self::Console),
            "buffer" => Ok(Self::Buffer),
            "both" => Ok(Self::Both),
            _ => Err(anyhow!("{} must be console, buffer or both; got {:?}", ENV_VAR_SINK, s)),
        }
    }
}

fn main() -> Result<()> {
    let filter = env::var(ENV_VAR_LOG).map_or_else(|_| EnvFilter::new("info"), EnvFilter::new);
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let sink = env::var(ENV_VAR_SINK).map_or(Ok(Sink::Both), |s| s.parse())?;

    let (schema, color) = color::example()?;
    info!(%schema, ?sink, "Built example color.");

    if sink != Sink::Buffer {
        serialize(&schema, &color, &mut ConsoleEncoder)?;
    }

    if sink != Sink::Console {
        let mut enc = BufEncoder::new();
        serialize(&schema, &color, &mut enc)?;
        info!(len = enc.len(), "Encoded color.");

        let mut dec = SliceDecoder::new(enc.as_bytes());
        let round_tripped = deserialize(&schema, &mut dec)?;
        println!("{}", color::describe(&round_tripped)?);
    }

    let constant = deserialize(&schema, &mut ConstDecoder)?;
    println!("{}", color::describe(&constant)?);

    Ok(())
}
