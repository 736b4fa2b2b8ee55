use anyhow::Result;
use clap::Parser;
use instapump_icons::icon_gen;

/// Zero-argument invocation: the size list, colors, and output location
/// are all fixed by the packaging contract. Clap only provides the
/// conventional --help / --version surface.
#[derive(Debug, Parser)]
#[clap(
    name = "instapump-icons",
    version,
    about = "Generate the InstaPump extension icon set"
)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    let out_dir = icon_gen::default_output_dir()?;
    icon_gen::generate_icons(&out_dir)
}
