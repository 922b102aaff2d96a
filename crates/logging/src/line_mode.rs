/// Whether a rendered trace line ends with a newline terminator.
///
/// `print` renders without one; `println` and `attention` append one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum LineMode {
    WithNewline,
    WithoutNewline,
}

impl LineMode {
    pub(crate) const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }
}
