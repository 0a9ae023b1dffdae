/// CSS border style, with the stable integer code the GPU side switches on.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum BorderStyle {
    None = 0,
    #[default]
    Solid = 1,
    Double = 2,
    Dotted = 3,
    Dashed = 4,
    Groove = 5,
    Ridge = 6,
    Outset = 7,
    Inset = 8,
}

impl BorderStyle {
    /// Decodes a raw style code.
    ///
    /// Unknown codes decode to `Solid`, so styles added upstream later render
    /// as plain borders instead of being dropped.
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => BorderStyle::None,
            1 => BorderStyle::Solid,
            2 => BorderStyle::Double,
            3 => BorderStyle::Dotted,
            4 => BorderStyle::Dashed,
            5 => BorderStyle::Groove,
            6 => BorderStyle::Ridge,
            7 => BorderStyle::Outset,
            8 => BorderStyle::Inset,
            other => {
                log::debug!("unknown border style code {other}; treating as solid");
                BorderStyle::Solid
            }
        }
    }

    #[inline]
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Dotted and dashed corners are masked by an external clip mask.
    #[inline]
    pub fn is_dotted_or_dashed(self) -> bool {
        matches!(self, BorderStyle::Dotted | BorderStyle::Dashed)
    }

    /// Groove and ridge split each side into a shaded outer and inner half.
    #[inline]
    pub fn is_beveled(self) -> bool {
        matches!(self, BorderStyle::Groove | BorderStyle::Ridge)
    }
}

/// Which side(s) of a corner an instance covers.
///
/// A corner whose two sides can share one draw uses `Both`; otherwise the
/// corner is emitted twice, once per side.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum SideSelect {
    #[default]
    Both = 0,
    First = 1,
    Second = 2,
}

impl SideSelect {
    /// Decodes a raw selector; unknown codes decode to `Both`.
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => SideSelect::Both,
            1 => SideSelect::First,
            2 => SideSelect::Second,
            other => {
                log::debug!("unknown side select code {other}; treating as both");
                SideSelect::Both
            }
        }
    }
}

/// Resolves the style a corner instance is drawn with.
///
/// `styles` is the corner's `(first, second)` side pair. Corners that mix a
/// dotted or dashed side with any other style are drawn solid; that
/// combination has no corner rendering.
pub fn select_style(select: SideSelect, styles: [BorderStyle; 2]) -> BorderStyle {
    let [first, second] = styles;
    match select {
        SideSelect::First => first,
        SideSelect::Second => second,
        SideSelect::Both => {
            if first != second && (first.is_dotted_or_dashed() || second.is_dotted_or_dashed()) {
                BorderStyle::Solid
            } else {
                first
            }
        }
    }
}
