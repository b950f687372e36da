use crate::models::transaction::TransactionType;

/// Currency symbol used in front of amounts: `$` for USD, otherwise the
/// code followed by a space (e.g., "EUR ").
pub fn currency_prefix(currency: &str) -> String {
    if currency.eq_ignore_ascii_case("USD") {
        "$".to_string()
    } else {
        format!("{} ", currency.to_uppercase())
    }
}

/// Two decimals with comma thousands separators, no sign (e.g., "4,250.50").
pub fn format_magnitude(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{grouped}.{frac_part}")
}

/// "$4,250.50", "-$1,240.20", "EUR 12.00".
pub fn format_currency(amount: f64, currency: &str) -> String {
    // Rounds to zero cents: print without a sign.
    let sign = if amount < 0.0 && format_magnitude(amount) != "0.00" {
        "-"
    } else {
        ""
    };
    format!("{sign}{}{}", currency_prefix(currency), format_magnitude(amount))
}

/// Transaction amount with the sign implied by its type:
/// Income `+$4,200.00`, Expense `-$145.20`, Transfer `$1,000.00`.
pub fn format_signed_amount(amount: f64, transaction_type: TransactionType) -> String {
    let prefix = match transaction_type {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
        TransactionType::Transfer => "",
    };
    format!("{prefix}${}", format_magnitude(amount))
}

/// Percentage with two decimals and an explicit `+` for gains (e.g., "+22.99%").
pub fn format_percent_change(percent: f64) -> String {
    if percent > 0.0 {
        format!("+{percent:.2}%")
    } else {
        format!("{percent:.2}%")
    }
}
