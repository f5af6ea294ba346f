//! Reference data shared with hosting applications

/// Standard GST rate percentages
pub const TAX_RATES: [u8; 5] = [0, 5, 12, 18, 28];

/// Common unit-of-measure labels
pub const UNITS: [&str; 8] = ["KGS", "LTR", "NOS", "PCS", "TON", "BOX", "MTR", "BAG"];

/// GST state codes and names
pub const INDIAN_STATES: [(&str, &str); 12] = [
    ("21", "Odisha"),
    ("19", "West Bengal"),
    ("20", "Jharkhand"),
    ("22", "Chhattisgarh"),
    ("28", "Andhra Pradesh"),
    ("27", "Maharashtra"),
    ("07", "Delhi"),
    ("29", "Karnataka"),
    ("33", "Tamil Nadu"),
    ("09", "Uttar Pradesh"),
    ("24", "Gujarat"),
    ("08", "Rajasthan"),
];

/// Look up a state name by its GST code
pub fn state_name(code: &str) -> Option<&'static str> {
    INDIAN_STATES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}
