/// Format a float as a euro amount in Dutch notation: € 1.234,56
pub fn money(val: f64) -> String {
    let negative = val < 0.0;
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let parts: Vec<&str> = cents.split('.').collect();
    let int_part = parts[0];
    let dec_part = parts[1];

    let mut with_seps = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_seps.push('.');
        }
        with_seps.push(c);
    }
    let with_seps: String = with_seps.chars().rev().collect();

    if negative {
        format!("-€ {with_seps},{dec_part}")
    } else {
        format!("€ {with_seps},{dec_part}")
    }
}

/// Confidence score as a whole percentage: 0.95 -> "95%"
pub fn percent(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}
