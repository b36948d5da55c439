//! Hex colors and the perceptual lightness transform.

use std::fmt;
use std::str::FromStr;

use rgb::RGB;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// A 24-bit RGB color.
///
/// Parses from a 6-hex-digit string with an optional `#` prefix,
/// case-insensitively.  Displays as lowercase `#rrggbb`.  Channels are
/// held as `f64` in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexColor(RGB<f64>);

impl HexColor {
    /// Perceptual lightness of the color, in \[0, 100\].
    pub fn lightness(&self) -> f64 { Lch::from_rgb(self.0).l }

    /// Scale the perceptual lightness by `factor` and return the
    /// adjusted color.  Values above 1 brighten, values in (0, 1)
    /// darken; a factor ≤ 0 clamps to minimum lightness.
    ///
    /// The color goes through a lightness–chroma–hue round trip: the
    /// scaled lightness is clamped to \[0, 100\] before converting
    /// back, and each RGB channel is clamped to \[0, 1\] afterwards
    /// (the round trip can leave individual channels slightly out of
    /// gamut even when the lightness is valid).
    pub fn scale_lightness(&self, factor: f64) -> HexColor {
        // Snap to the 8-bit grid: a HexColor is a 24-bit value, and a
        // chained derivation must read exactly what was written.
        let quantize = |c: f64| (c.clamp(0., 1.) * 255.).round() / 255.;
        let mut lch = Lch::from_rgb(self.0);
        lch.l = (lch.l * factor).clamp(0., 100.);
        let c = lch.to_rgb();
        HexColor(RGB { r: quantize(c.r),
                       g: quantize(c.g),
                       b: quantize(c.b) })
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        // `from_str_radix` also accepts a sign, so check the digits.
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::MalformedHexColor { value: s.to_string() });
        }
        let bits = u32::from_str_radix(hex, 16)
            .map_err(|_| Error::MalformedHexColor { value: s.to_string() })?;
        Ok(HexColor(RGB { r: (bits >> 16 & 0xff) as f64 / 255.,
                          g: (bits >> 8 & 0xff) as f64 / 255.,
                          b: (bits & 0xff) as f64 / 255. }))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = |c: f64| (c.clamp(0., 1.) * 255.).round() as u8;
        write!(f, "#{:02x}{:02x}{:02x}",
               byte(self.0.r), byte(self.0.g), byte(self.0.b))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The type for colors in the CIE L*C*h*_ab color space with a D50
/// reference white point.  This color space is CIE L*a*b* with polar
/// coordinates.
#[derive(Clone, Copy)]
struct Lch {
    /// The lightness in the range 0. to 100.
    l: f64,
    /// The chroma, in the range 0. to 181.02, but less in practice.
    c: f64,
    /// The hue in radians in the range 0. to 2π.
    h: f64,
}

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0;
const TWO_PI: f64 = 2. * std::f64::consts::PI;

impl Lch {
    fn from_rgb(c: RGB<f64>) -> Lch {
        // See https://github.com/dbuenzli/gg/blob/b8704687d669d139bb4ac7a54115afc7e5caaa55/src/gg.ml#L2926
        const C0: f64 = 1. / 3.;
        const C1: f64 = 841. / 108.;
        const C2: f64 = 4. / 29.;
        let xr = 0.4522795 * c.r + 0.3993744 * c.g + 0.1483460 * c.b;
        let yr = 0.2225105 * c.r + 0.7168863 * c.g + 0.0606032 * c.b;
        let zr = 0.0168820 * c.r + 0.1176865 * c.g + 0.8654315 * c.b;
        let fx = if xr > EPS { xr.powf(C0) } else { C1 * xr + C2 };
        let fy = if yr > EPS { yr.powf(C0) } else { C1 * yr + C2 };
        let fz = if zr > EPS { zr.powf(C0) } else { C1 * zr + C2 };
        let l = 116. * fy - 16.;
        let a = 500. * (fx - fy);
        let b = 200. * (fy - fz);
        let h = { let h = b.atan2(a);
                  if h < 0. { h + TWO_PI } else { h } };
        Lch { l, c: a.hypot(b), h }
    }

    fn to_rgb(&self) -> RGB<f64> {
        const C0: f64 = 108. / 841.;
        const C1: f64 = 4. / 29.;
        let a = self.c * self.h.cos();
        let b = self.c * self.h.sin();
        let fy = (self.l + 16.) / 116.;
        let fx = a / 500. + fy;
        let fz = fy - b / 200.;
        let fx1 = if fx > EPS0 { fx * fx * fx } else { C0 * (fx - C1) };
        let fy1 = if fy > EPS0 { fy * fy * fy } else { C0 * (fy - C1) };
        let fz1 = if fz > EPS0 { fz * fz * fz } else { C0 * (fz - C1) };
        let r = 3.0215932  * fx1 - 1.6168777 * fy1 - 0.4047152 * fz1;
        let g = -0.9437222 * fx1 + 1.9161365 * fy1 + 0.0275856 * fz1;
        let b = 0.0693906  * fx1 - 0.2290271 * fy1 + 1.1596365 * fz1;
        RGB { r, g, b }
    }
}
