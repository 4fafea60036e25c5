/// Format a coin amount with thousands separators (e.g. `1234567` -> `1,234,567`).
pub fn format_coins(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if amount < 0 {
        out.push('-');
    }

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Format a countdown as whole hours and minutes, e.g. `5h 12m`.
pub fn format_hours_minutes(total_seconds: u64) -> String {
    let hours = total_seconds / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    format!("{}h {}m", hours, minutes)
}

/// Progress line for a quest, e.g. `3/10` or `✅ Completed`.
pub fn format_progress(progress: u64, target: u64, completed: bool) -> String {
    if completed {
        "✅ Completed".to_owned()
    } else {
        format!("📊 Progress: {}/{}", progress.min(target), target)
    }
}
