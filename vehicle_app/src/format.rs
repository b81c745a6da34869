/// `12995` -> `£12,995`
pub fn price(value: i64) -> String {
    format!("£{}", grouped(value))
}

/// `45210` -> `45,210 miles`
pub fn mileage(value: i64) -> String {
    format!("{} miles", grouped(value))
}

pub fn result_count(count: usize) -> String {
    match count {
        1 => "1 vehicle found".to_string(),
        n => format!("{n} vehicles found"),
    }
}

fn grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
