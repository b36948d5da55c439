//! Derive base24 color schemes from base16 palettes.
//!
//! A base16 scheme names 16 colors, `base00`–`base0F`; the base24
//! format adds 8 more, `base10`–`base17`.  [`derive_base24`] fills
//! those extra slots by brightening or darkening specific base16
//! colors in a perceptually uniform color space (CIE L\*C\*h): two
//! extra background shades from `base00` (darkened on dark schemes,
//! brightened on light ones) and a bright twin for each of the six
//! accent colors.
//!
//! ```
//! use base24::{derive_base24, Scheme, DEFAULT_CONTRAST};
//!
//! let scheme = Scheme::from_yaml(
//!     "system: base16\n\
//!      variant: dark\n\
//!      palette:\n  \
//!        base00: \"#181818\"\n  \
//!        base08: \"#ab4642\"\n  \
//!        base0A: \"#f7ca88\"\n  \
//!        base0B: \"#a1b56c\"\n  \
//!        base0C: \"#86c1b9\"\n  \
//!        base0D: \"#7cafc2\"\n  \
//!        base0E: \"#ba8baf\"\n",
//! )?;
//! let derived = derive_base24(&scheme, DEFAULT_CONTRAST)?;
//! assert_eq!(derived.system, "base24");
//! # Ok::<(), base24::Error>(())
//! ```
//!
//! [`swatch_svg`] renders any palette as a tiled SVG image for visual
//! inspection.

mod color;
mod derive;
mod error;
mod scheme;
mod svg;

pub use color::HexColor;
pub use derive::{derive_base24, DEFAULT_CONTRAST};
pub use error::Error;
pub use scheme::{Palette, Scheme, Variant, BASE16_SLOTS, BASE24_EXTRA_SLOTS};
pub use svg::{swatch_svg, SwatchLayout};
