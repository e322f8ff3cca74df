use regex::Regex;

/// Forward-looking year tokens that suggest a contract period.
const YEAR_PATTERN: &str = r"202[3-9]";
/// Period tokens: month abbreviations, quarters, whole-year markers
/// (Dutch "kwartaal"/"jaar" included alongside the English forms).
const PERIOD_PATTERN: &str =
    r"(?i)(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec|q[1-4]|quarter|kwartaal|year|jaar|annual)";

/// True when a line description looks like a cost that should be
/// spread across future periods: it must name both a year in the
/// 2023–2029 range and a period token. Either alone is not enough.
pub fn is_spread_candidate(description: &str) -> bool {
    let year = Regex::new(YEAR_PATTERN)
        .map(|re| re.is_match(description))
        .unwrap_or(false);
    let period = Regex::new(PERIOD_PATTERN)
        .map(|re| re.is_match(description))
        .unwrap_or(false);
    year && period
}
