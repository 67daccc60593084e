//! Class vocabulary of the CSS framework.

use std::str::FromStr;

use semantic_markup::{MarkupError, Token};
use serde::de::{self, Deserialize, Deserializer};

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $token:literal,)+
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $(#[$meta])*
        pub enum $name {
            $($(#[$variant_meta])* $variant,)+
        }

        impl $name {
            /// Every accepted value, in framework order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];
        }

        impl Token for $name {
            fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = MarkupError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($token => Ok(Self::$variant),)+
                    _ => Err(MarkupError::UnknownToken {
                        kind: stringify!($name),
                        value: value.to_string(),
                    }),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                String::deserialize(deserializer)?
                    .parse()
                    .map_err(de::Error::custom)
            }
        }
    };
}

vocabulary! {
    /// Component sizes.
    Size {
        /// Mini.
        Mini => "mini",
        /// Tiny.
        Tiny => "tiny",
        /// Small.
        Small => "small",
        /// Medium (the framework default).
        Medium => "medium",
        /// Large.
        Large => "large",
        /// Big.
        Big => "big",
        /// Huge.
        Huge => "huge",
        /// Massive.
        Massive => "massive",
    }
}

vocabulary! {
    /// Named colors.
    Color {
        /// Red.
        Red => "red",
        /// Orange.
        Orange => "orange",
        /// Yellow.
        Yellow => "yellow",
        /// Olive.
        Olive => "olive",
        /// Green.
        Green => "green",
        /// Teal.
        Teal => "teal",
        /// Blue.
        Blue => "blue",
        /// Violet.
        Violet => "violet",
        /// Purple.
        Purple => "purple",
        /// Pink.
        Pink => "pink",
        /// Brown.
        Brown => "brown",
        /// Grey.
        Grey => "grey",
        /// Black.
        Black => "black",
    }
}

vocabulary! {
    /// Float direction.
    Floated {
        /// Float left.
        Left => "left",
        /// Float right.
        Right => "right",
    }
}

vocabulary! {
    /// Vertical alignment.
    VerticalAlign {
        /// Bottom.
        Bottom => "bottom",
        /// Middle.
        Middle => "middle",
        /// Top.
        Top => "top",
    }
}

vocabulary! {
    /// Text alignment.
    TextAlign {
        /// Left.
        Left => "left",
        /// Center.
        Center => "center",
        /// Right.
        Right => "right",
        /// Justified.
        Justified => "justified",
    }
}

vocabulary! {
    /// Horizontal side, for spacing, corners, and ribbons.
    Side {
        /// Left.
        Left => "left",
        /// Right.
        Right => "right",
    }
}

vocabulary! {
    /// Where a label attaches to its container.
    LabelAttachment {
        /// Top edge.
        Top => "top",
        /// Bottom edge.
        Bottom => "bottom",
        /// Top right corner.
        TopRight => "top right",
        /// Top left corner.
        TopLeft => "top left",
        /// Bottom left corner.
        BottomLeft => "bottom left",
        /// Bottom right corner.
        BottomRight => "bottom right",
    }
}

vocabulary! {
    /// Direction a pointing label points to.
    PointingDirection {
        /// Above the label.
        Above => "above",
        /// Below the label.
        Below => "below",
        /// Left of the label.
        Left => "left",
        /// Right of the label.
        Right => "right",
    }
}

vocabulary! {
    /// Corner an icon can sit in.
    IconCorner {
        /// Top left.
        TopLeft => "top left",
        /// Top right.
        TopRight => "top right",
        /// Bottom left.
        BottomLeft => "bottom left",
        /// Bottom right.
        BottomRight => "bottom right",
    }
}

vocabulary! {
    /// Icon mirroring.
    Flip {
        /// Mirror horizontally.
        Horizontally => "horizontally",
        /// Mirror vertically.
        Vertically => "vertically",
    }
}

vocabulary! {
    /// Icon rotation.
    Rotation {
        /// Quarter turn clockwise.
        Clockwise => "clockwise",
        /// Quarter turn counterclockwise.
        Counterclockwise => "counterclockwise",
    }
}

vocabulary! {
    /// Standard advertisement units.
    AdUnit {
        /// 300x250.
        MediumRectangle => "medium rectangle",
        /// 336x280.
        LargeRectangle => "large rectangle",
        /// 240x400.
        VerticalRectangle => "vertical rectangle",
        /// 180x150.
        SmallRectangle => "small rectangle",
        /// 320x50.
        MobileBanner => "mobile banner",
        /// 468x60.
        Banner => "banner",
        /// 120x240.
        VerticalBanner => "vertical banner",
        /// 930x180.
        TopBanner => "top banner",
        /// 234x60.
        HalfBanner => "half banner",
        /// 120x90.
        Button => "button",
        /// 125x125.
        SquareButton => "square button",
        /// 120x60.
        SmallButton => "small button",
        /// 120x600.
        Skyscraper => "skyscraper",
        /// 160x600.
        WideSkyscraper => "wide skyscraper",
        /// 728x90.
        Leaderboard => "leaderboard",
        /// 970x90.
        LargeLeaderboard => "large leaderboard",
        /// 320x100.
        MobileLeaderboard => "mobile leaderboard",
        /// 970x250.
        Billboard => "billboard",
        /// 980x120.
        Panorama => "panorama",
        /// 580x400.
        Netboard => "netboard",
        /// 300x600.
        HalfPage => "half page",
        /// 250x250.
        Square => "square",
        /// 200x200.
        SmallSquare => "small square",
    }
}

vocabulary! {
    /// Placeholder line lengths.
    LineLength {
        /// Full width.
        Full => "full",
        /// Very long.
        VeryLong => "very long",
        /// Long.
        Long => "long",
        /// Medium.
        Medium => "medium",
        /// Short.
        Short => "short",
        /// Very short.
        VeryShort => "very short",
    }
}

vocabulary! {
    /// Vertical edge a segment attaches to.
    VerticalEdge {
        /// Top.
        Top => "top",
        /// Bottom.
        Bottom => "bottom",
    }
}

vocabulary! {
    /// Intensified form of a flag (`very padded`).
    Intensity {
        /// Very.
        Very => "very",
    }
}
