/// Visual style applied to a timeline entry, one per known service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    BtsSukhumvit,
    BtsSilom,
    BtsGold,
    MrtBlue,
    MrtPurple,
    MrtYellow,
    MrtPink,
    AirportRailLink,
    SrtDarkRed,
    Walk,
}

impl LineStyle {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::BtsSukhumvit => "line-bts-green",
            Self::BtsSilom => "line-bts-silom",
            Self::BtsGold => "line-bts-gold",
            Self::MrtBlue => "line-mrt-blue",
            Self::MrtPurple => "line-mrt-purple",
            Self::MrtYellow => "line-mrt-yellow",
            Self::MrtPink => "line-mrt-pink",
            Self::AirportRailLink => "line-arl",
            Self::SrtDarkRed => "line-srt-red",
            Self::Walk => "line-walk",
        }
    }
}

/// How a backend line code is presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDisplayInfo<'a> {
    pub display_name: &'a str,
    pub style: LineStyle,
}

const LINE_TABLE: &[(&str, &str, LineStyle)] = &[
    ("BTS Sukhumvit Line", "BTS สายสุขุมวิท", LineStyle::BtsSukhumvit),
    ("BTS Silom Line", "BTS สายสีลม", LineStyle::BtsSilom),
    ("MRT Blue Line", "MRT สายสีน้ำเงิน", LineStyle::MrtBlue),
    ("MRT Purple Line", "MRT สายสีม่วง", LineStyle::MrtPurple),
    ("MRT Yellow Line", "MRT สายสีเหลือง", LineStyle::MrtYellow),
    ("MRT Pink Line", "MRT สายสีชมพู", LineStyle::MrtPink),
    ("Gold Line", "BTS สายสีทอง", LineStyle::BtsGold),
    ("Airport Rail Link", "Airport Rail Link", LineStyle::AirportRailLink),
    ("SRT Dark Red Line", "SRT สายสีแดงเข้ม", LineStyle::SrtDarkRed),
    (crate::constants::INTERCHANGE_LINE, "เดินเปลี่ยนสาย", LineStyle::Walk),
];

/// Look up display metadata for a line code
///
/// Codes missing from the table are shown verbatim with walk styling.
#[must_use]
pub fn line_display(line: &str) -> LineDisplayInfo<'_> {
    LINE_TABLE
        .iter()
        .find(|(code, _, _)| *code == line)
        .map_or(
            LineDisplayInfo { display_name: line, style: LineStyle::Walk },
            |&(_, display_name, style)| LineDisplayInfo { display_name, style },
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_line() {
        let info = line_display("BTS Sukhumvit Line");
        assert_eq!(info.display_name, "BTS สายสุขุมวิท");
        assert_eq!(info.style, LineStyle::BtsSukhumvit);
        assert_eq!(info.style.css_class(), "line-bts-green");
    }

    #[test]
    fn test_interchange_uses_walk_style() {
        let info = line_display("Interchange");
        assert_eq!(info.display_name, "เดินเปลี่ยนสาย");
        assert_eq!(info.style, LineStyle::Walk);
    }

    #[test]
    fn test_unknown_line_falls_back_to_raw_name() {
        let info = line_display("MRT Orange Line");
        assert_eq!(info.display_name, "MRT Orange Line");
        assert_eq!(info.style.css_class(), "line-walk");
    }
}
