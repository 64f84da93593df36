//! Text rendering shared by the value types.

use core::fmt::{Display, Formatter, Write};

/// How a vector is rendered as text.
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorStyle {
    /// Elements separated by `, `: `[1, 2, 3]`.
    #[default]
    Normalized,
    /// Elements separated by a space with `, ` after the last one:
    /// `[1 2 3, ]`.
    Legacy,
}

impl Display for VectorStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            VectorStyle::Normalized => "normalized",
            VectorStyle::Legacy => "legacy",
        })
    }
}

/// Helper returned by `display` on the vector types, rendering the elements
/// with an explicit [`VectorStyle`].
#[derive(Debug, Clone, Copy)]
pub struct VectorDisplay<'a> {
    data: &'a [f64],
    style: VectorStyle,
}

impl<'a> VectorDisplay<'a> {
    pub(crate) fn new(data: &'a [f64], style: VectorStyle) -> Self { Self { data, style } }
}

impl Display for VectorDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        print_slice(f, self.data, self.style)
    }
}

/// Writes a single element, forwarding the precision of the outer formatter.
pub(crate) fn print_elem<A: Display>(f: &mut Formatter<'_>, x: &A) -> core::fmt::Result {
    match f.precision() {
        Some(precision) => write!(f, "{:.*}", precision, x),
        None => write!(f, "{}", x),
    }
}

/// Writes a bracketed sequence in the given style.
pub(crate) fn print_slice<A>(f: &mut Formatter<'_>, seq: &[A], style: VectorStyle) -> core::fmt::Result
where
    A: Display,
{
    f.write_char('[')?;
    match style {
        VectorStyle::Normalized => {
            for (i, x) in seq.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                print_elem(f, x)?;
            }
        },
        VectorStyle::Legacy => {
            let last = seq.len().saturating_sub(1);
            for (i, x) in seq.iter().enumerate() {
                print_elem(f, x)?;
                f.write_str(if i == last { ", " } else { " " })?;
            }
        },
    }
    f.write_char(']')
}
