use thiserror::Error;

/// Errors surfaced while decoding colors or deriving a base24 scheme.
///
/// The derivation never recovers locally: the first failure aborts the
/// whole scheme and propagates to the caller, who decides whether to skip
/// it or abort the batch.
#[derive(Debug, Error)]
pub enum Error {
    /// A slot the derivation table reads is absent from the palette.
    #[error("missing source color {slot:?} in palette")]
    MissingSourceColor { slot: &'static str },
    /// The scheme's variant is neither `light` nor `dark`.
    #[error("invalid variant {value:?} (expected \"light\" or \"dark\")")]
    InvalidVariant { value: String },
    /// A color string is not a 6-hex-digit RGB value.
    #[error("malformed hex color {value:?}")]
    MalformedHexColor { value: String },
    /// A scheme document could not be read or written as YAML.
    #[error("scheme document error")]
    Yaml(#[from] serde_yml::Error),
}
