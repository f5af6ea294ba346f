//! Amount-in-words conversion using the Indian numbering system
//!
//! Document grand totals are printed in words on invoices and quotations.
//! The grouping is ones/tens/hundreds, then thousand, lakh (10^5), and
//! crore (10^7); larger amounts recurse through the crore component, so
//! 10^10 reads "One Thousand Crore".

const BELOW_TWENTY: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Convert a whole-rupee amount to its word form.
///
/// Zero is the bare word "Zero"; any other amount is wrapped as
/// "Rupees ... Only". The input is the already-rounded integer grand
/// total, so there is no paise component.
///
/// ```rust
/// use khata_core::rupees_in_words;
///
/// assert_eq!(rupees_in_words(0), "Zero");
/// assert_eq!(rupees_in_words(100_000), "Rupees One Lakh Only");
/// ```
pub fn rupees_in_words(amount: u64) -> String {
    if amount == 0 {
        return "Zero".to_string();
    }
    let mut parts = Vec::new();
    push_words(amount, &mut parts);
    format!("Rupees {} Only", parts.join(" "))
}

fn push_words(n: u64, parts: &mut Vec<&'static str>) {
    if n == 0 {
        return;
    }
    if n < 20 {
        parts.push(BELOW_TWENTY[n as usize]);
    } else if n < 100 {
        parts.push(TENS[(n / 10) as usize]);
        push_words(n % 10, parts);
    } else if n < 1_000 {
        parts.push(BELOW_TWENTY[(n / 100) as usize]);
        parts.push("Hundred");
        push_words(n % 100, parts);
    } else if n < 100_000 {
        push_words(n / 1_000, parts);
        parts.push("Thousand");
        push_words(n % 1_000, parts);
    } else if n < 10_000_000 {
        push_words(n / 100_000, parts);
        parts.push("Lakh");
        push_words(n % 100_000, parts);
    } else {
        push_words(n / 10_000_000, parts);
        parts.push("Crore");
        push_words(n % 10_000_000, parts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(rupees_in_words(0), "Zero");
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(rupees_in_words(7), "Rupees Seven Only");
        assert_eq!(rupees_in_words(14), "Rupees Fourteen Only");
        assert_eq!(rupees_in_words(20), "Rupees Twenty Only");
        assert_eq!(rupees_in_words(42), "Rupees Forty Two Only");
        assert_eq!(rupees_in_words(236), "Rupees Two Hundred Thirty Six Only");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(rupees_in_words(1_000), "Rupees One Thousand Only");
        assert_eq!(rupees_in_words(100_000), "Rupees One Lakh Only");
        assert_eq!(rupees_in_words(10_000_000), "Rupees One Crore Only");
        assert_eq!(
            rupees_in_words(1_234_567),
            "Rupees Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Only"
        );
    }

    #[test]
    fn test_large_amounts() {
        assert_eq!(
            rupees_in_words(10_000_000_000),
            "Rupees One Thousand Crore Only"
        );
        assert_eq!(
            rupees_in_words(12_00_05_00_023),
            "Rupees One Thousand Two Hundred Crore Five Lakh Twenty Three Only"
        );
    }
}
