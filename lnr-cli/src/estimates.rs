// ABOUTME: Estimate scales and their explicitly ordered point options
// ABOUTME: Display order is user-observable, so every table is a fixed slice

/// One selectable estimate, pairing the rendered label with the point code
/// sent to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimateOption {
    pub label: &'static str,
    pub code: &'static str,
}

const fn option(label: &'static str, code: &'static str) -> EstimateOption {
    EstimateOption { label, code }
}

const NO_ESTIMATES: &[EstimateOption] = &[option("No estimate", "0")];

const T_SHIRT: &[EstimateOption] = &[
    option("XS - Extra Small", "1"),
    option("S - Small", "2"),
    option("M - Medium", "3"),
    option("L - Large", "5"),
    option("XL - Extra Large", "8"),
];

const FIBONACCI: &[EstimateOption] = &[
    option("1", "1"),
    option("2", "2"),
    option("3", "3"),
    option("5", "5"),
    option("8", "8"),
    option("13", "13"),
    option("21", "21"),
];

const POINTS: &[EstimateOption] = &[
    option("0 - No estimate", "0"),
    option("1 - Small (< 1 day)", "1"),
    option("2 - Medium (1-2 days)", "2"),
    option("3 - Large (3-5 days)", "3"),
    option("5 - Extra Large (1+ weeks)", "5"),
    option("8 - Epic (2+ weeks)", "8"),
];

/// The estimate scheme a team uses. Selected through the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EstimateScale {
    NoEstimates,
    #[default]
    TShirt,
    Fibonacci,
    Points,
}

impl EstimateScale {
    pub const NAMES: &'static [&'static str] = &["none", "tshirt", "fibonacci", "points"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Self::NoEstimates),
            "tshirt" => Some(Self::TShirt),
            "fibonacci" => Some(Self::Fibonacci),
            "points" => Some(Self::Points),
            _ => None,
        }
    }

    pub fn options(&self) -> &'static [EstimateOption] {
        match self {
            Self::NoEstimates => NO_ESTIMATES,
            Self::TShirt => T_SHIRT,
            Self::Fibonacci => FIBONACCI,
            Self::Points => POINTS,
        }
    }

    /// Rendered label for a point code, used by the submission summary.
    pub fn label_for(&self, code: &str) -> Option<&'static str> {
        self.options()
            .iter()
            .find(|opt| opt.code == code)
            .map(|opt| opt.label)
    }
}
