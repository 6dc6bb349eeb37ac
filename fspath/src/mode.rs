//! Permission modes for [`Path::chmod`](crate::Path::chmod).

use crate::error::{Error, Result};

/// A permission mode, either as octal text or as raw bits.
///
/// # Examples
///
/// ```
/// use fspath::Mode;
///
/// assert_eq!(Mode::from("0775").bits().unwrap(), 0o775);
/// assert_eq!(Mode::from("644").bits().unwrap(), 0o644);
/// assert_eq!(Mode::from(0o600_u32).bits().unwrap(), 0o600);
/// assert!(Mode::from("0789").bits().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Octal digits such as `"0775"`; an `0o` prefix is accepted.
    Octal(String),
    /// Raw permission bits.
    Bits(u32),
}

impl Mode {
    /// Resolve the mode to permission bits.
    ///
    /// Octal text is read right to left, each digit weighted by the next
    /// power of eight. Leading zeros carry no weight.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMode`] for empty text, a non-octal digit, or a
    /// value that does not fit in 32 bits.
    pub fn bits(&self) -> Result<u32> {
        match self {
            Self::Bits(bits) => Ok(*bits),
            Self::Octal(text) => parse_octal(text),
        }
    }
}

fn parse_octal(text: &str) -> Result<u32> {
    let invalid = |reason: String| Error::InvalidMode {
        value: text.to_string(),
        reason,
    };

    let digits = text
        .strip_prefix("0o")
        .or_else(|| text.strip_prefix("0O"))
        .unwrap_or(text);
    if digits.is_empty() {
        return Err(invalid("no digits".to_string()));
    }

    let mut bits: u32 = 0;
    let mut weight: u32 = 1;
    for (position, ch) in digits.trim_start_matches('0').chars().rev().enumerate() {
        let digit = ch
            .to_digit(8)
            .ok_or_else(|| invalid(format!("'{ch}' is not an octal digit")))?;
        if position > 0 {
            weight = weight
                .checked_mul(8)
                .ok_or_else(|| invalid("too many digits".to_string()))?;
        }
        bits = digit
            .checked_mul(weight)
            .and_then(|value| bits.checked_add(value))
            .ok_or_else(|| invalid("value does not fit in 32 bits".to_string()))?;
    }
    Ok(bits)
}

/// Render permission bits the way `stat` listings show them: `0755`.
pub(crate) fn format_octal(bits: u32) -> String {
    if bits == 0 {
        "0".to_string()
    } else {
        format!("0{bits:o}")
    }
}

impl From<&str> for Mode {
    fn from(text: &str) -> Self {
        Self::Octal(text.to_string())
    }
}

impl From<String> for Mode {
    fn from(text: String) -> Self {
        Self::Octal(text)
    }
}

impl From<u32> for Mode {
    fn from(bits: u32) -> Self {
        Self::Bits(bits)
    }
}
