//! Verdict records and the elapsed-time column format.

/// One row of the printed report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictRecord {
    pub test_name: String,
    pub passed: bool,
    pub elapsed_ms: u64,
    /// Description printed under a failing row.
    pub message: Option<String>,
}

impl VerdictRecord {
    pub fn pass(test_name: impl Into<String>, elapsed_ms: u64) -> Self {
        Self {
            test_name: test_name.into(),
            passed: true,
            elapsed_ms,
            message: None,
        }
    }

    pub fn fail(test_name: impl Into<String>, elapsed_ms: u64, message: impl Into<String>) -> Self {
        Self {
            test_name: test_name.into(),
            passed: false,
            elapsed_ms,
            message: Some(message.into()),
        }
    }

    /// `[PASS]` or `[FAIL]`.
    pub fn tag(&self) -> &'static str {
        if self.passed { "[PASS]" } else { "[FAIL]" }
    }
}

/// Group digits in threes with an apostrophe: `1234567` → `1'234'567`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\'');
        }
        out.push(ch);
    }
    out
}

/// Milliseconds right-aligned to `width` followed by `ms`.
///
/// ## Examples
/// ```rust
/// use raycheck_core::format_elapsed;
/// assert_eq!(format_elapsed(1234, 6), " 1'234ms");
/// assert_eq!(format_elapsed(7, 6), "     7ms");
/// ```
pub fn format_elapsed(ms: u64, width: usize) -> String {
    format!("{:>width$}ms", group_thousands(ms))
}
