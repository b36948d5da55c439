//! Batch converter: derive base24 schemes from a directory of base16
//! YAML files.

use std::{env, fs,
          path::{Path, PathBuf}};

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use base24::{derive_base24, Scheme, DEFAULT_CONTRAST};

const USAGE: &str = "\
Convert base16 color schemes to base24.

Fills in missing colors with brightened/darkened colors from the
base16 scheme.

Usage: base24 [options]

Options:
  -c, --contrast <N>      how much to brighten/darken the base16
                          colors [default: 0.5]
      --input-dir <DIR>   directory holding the base16 yaml files
                          [default: schemes/base16]
      --output-dir <DIR>  directory to write the converted schemes
                          [default: output]
  -q, --quiet             only log warnings
  -h, --help              show this help
";

struct Args {
    contrast: f64,
    input_dir: PathBuf,
    output_dir: PathBuf,
    quiet: bool,
}

/// Parse the command line; `None` means help was requested.
fn parse_args() -> Result<Option<Args>> {
    let mut args = Args { contrast: DEFAULT_CONTRAST,
                          input_dir: "schemes/base16".into(),
                          output_dir: "output".into(),
                          quiet: false };
    let mut argv = env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "-c" | "--contrast" => {
                let value = argv.next().context("--contrast needs a value")?;
                args.contrast = value.parse()
                    .with_context(|| format!("invalid contrast {value:?}"))?;
            }
            "--input-dir" => {
                args.input_dir =
                    argv.next().context("--input-dir needs a value")?.into();
            }
            "--output-dir" => {
                args.output_dir =
                    argv.next().context("--output-dir needs a value")?.into();
            }
            "-q" | "--quiet" => args.quiet = true,
            "-h" | "--help" => return Ok(None),
            other => bail!("unknown argument {other:?} (try --help)"),
        }
    }
    Ok(Some(args))
}

fn init_tracing(quiet: bool) {
    let default = if quiet { "warn" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default.into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// The `*.yaml` files of `dir`, sorted for stable runs.
fn scheme_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("reading {dir:?}"))? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "yaml") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn convert_file(file: &Path, output_dir: &Path, contrast: f64) -> Result<PathBuf> {
    let text = fs::read_to_string(file)?;
    let scheme = Scheme::from_yaml(&text)?;
    let derived = derive_base24(&scheme, contrast)?;
    let name = file.file_name().context("scheme file has no name")?;
    let out = output_dir.join(name);
    fs::write(&out, derived.to_yaml()?)?;
    Ok(out)
}

fn main() -> Result<()> {
    let Some(args) = parse_args()? else {
        print!("{USAGE}");
        return Ok(());
    };
    init_tracing(args.quiet);

    if !args.input_dir.is_dir() {
        bail!("path {:?} is not a directory", args.input_dir);
    }
    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating {:?}", args.output_dir))?;

    let files = scheme_files(&args.input_dir)?;
    let mut converted = 0usize;
    for file in &files {
        // One bad scheme must not take the batch down: report and
        // move on to the next file.
        match convert_file(file, &args.output_dir, args.contrast) {
            Ok(out) => {
                converted += 1;
                info!(file = %file.display(), out = %out.display(), "converted");
            }
            Err(err) => {
                let err = format!("{err:#}");
                warn!(file = %file.display(), error = %err, "skipped");
            }
        }
    }
    info!(converted, total = files.len(), "done");
    Ok(())
}
