//! Fixed option lists offered when submitting a deduction.

/// Motives a detective may choose from.
pub const MOTIVE_OPTIONS: &[&str] = &[
    "Financial Gain",
    "Revenge",
    "Jealousy",
    "Self-Defense",
    "Accident",
    "Cover-up",
    "Mental Illness",
    "Unknown",
];

/// Methods a detective may choose from.
pub const METHOD_OPTIONS: &[&str] = &[
    "Poisoning",
    "Shooting",
    "Stabbing",
    "Strangulation",
    "Blunt Force",
    "Drowning",
    "Fire",
    "Other",
];

/// Build an option list from `base`, appending `label` if it is not already there.
///
/// Cases store their solution labels as free text, so a case whose answer is
/// outside the fixed list still gets a list that contains it.
pub fn options_including(base: &[&str], label: &str) -> Vec<String> {
    let mut options: Vec<String> = base.iter().map(|s| s.to_string()).collect();
    if !label.is_empty() && !options.iter().any(|o| o == label) {
        options.push(label.to_string());
    }
    options
}
