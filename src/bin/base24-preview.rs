//! Render a scheme's palette as a tiled SVG swatch image.

use std::{env, fs, path::PathBuf, str::FromStr};

use anyhow::{anyhow, bail, Context, Result};

use base24::{swatch_svg, Scheme, SwatchLayout};

const USAGE: &str = "\
Generate an SVG image from a scheme YAML file.

Usage: base24-preview [options] <inputfile>

Options:
  -o, --output <FILE>   output file [default: ./output.svg]
  -r, --rows <N>        number of rows in the output image [default: 3]
  -b, --bordersize <N>  size of border padding [default: 15]
  -t, --tilesize <N>    size of the individual color tiles [default: 45]
  -g, --gapsize <N>     size of the padding between tiles [default: 15]
  -h, --help            show this help
";

struct Args {
    input: PathBuf,
    output: PathBuf,
    layout: SwatchLayout,
}

fn value(argv: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    argv.next().with_context(|| format!("{flag} needs a value"))
}

fn parse<T: FromStr>(argv: &mut impl Iterator<Item = String>, flag: &str) -> Result<T> {
    let v = value(argv, flag)?;
    v.parse().map_err(|_| anyhow!("invalid value {v:?} for {flag}"))
}

/// Parse the command line; `None` means help was requested.
fn parse_args() -> Result<Option<Args>> {
    let mut layout = SwatchLayout::default();
    let mut input = None;
    let mut output = PathBuf::from("./output.svg");
    let mut argv = env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "-o" | "--output" => output = value(&mut argv, &arg)?.into(),
            "-r" | "--rows" => layout.rows = parse(&mut argv, &arg)?,
            "-b" | "--bordersize" => layout.border_size = parse(&mut argv, &arg)?,
            "-t" | "--tilesize" => layout.tile_size = parse(&mut argv, &arg)?,
            "-g" | "--gapsize" => layout.gap_size = parse(&mut argv, &arg)?,
            "-h" | "--help" => return Ok(None),
            other if !other.starts_with('-') && input.is_none() => {
                input = Some(PathBuf::from(other));
            }
            other => bail!("unknown argument {other:?} (try --help)"),
        }
    }
    let input = input.context("missing input scheme file (try --help)")?;
    Ok(Some(Args { input, output, layout }))
}

fn main() -> Result<()> {
    let Some(args) = parse_args()? else {
        print!("{USAGE}");
        return Ok(());
    };
    if args.layout.rows == 0 {
        bail!("--rows must be at least 1");
    }

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {:?}", args.input))?;
    let scheme = Scheme::from_yaml(&text)?;
    let colors: Vec<_> = scheme.palette.colors().collect();

    let svg = swatch_svg(&colors, &args.layout);
    fs::write(&args.output, svg)
        .with_context(|| format!("writing {:?}", args.output))?;
    Ok(())
}
