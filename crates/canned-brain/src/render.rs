//! Placeholder substitution for canned replies.

use case_core::ReplyContext;

/// Fill the `{...}` placeholders of a reply from the reply context.
///
/// Supported placeholders: `{title}`, `{victim}`, `{time}`,
/// `{suspect_count}`, `{evidence_count}`, and for suspect replies `{name}`
/// and `{alibi}`. Unknown placeholders are left as they are.
pub fn render(template: &str, context: &ReplyContext<'_>) -> String {
    if !template.contains('{') {
        return template.to_string();
    }

    let case = context.case;
    let mut text = template
        .replace("{title}", case.title())
        .replace("{victim}", case.victim())
        .replace("{time}", case.time())
        .replace("{suspect_count}", &case.suspects().len().to_string())
        .replace("{evidence_count}", &case.evidence().len().to_string());

    if let Some(suspect) = context.suspect {
        text = text
            .replace("{name}", &suspect.name)
            .replace("{alibi}", &suspect.alibi);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_core::RandomSource;
    use case_repository::CaseRepository;

    #[test]
    fn test_case_placeholders() {
        let case = CaseRepository::builtin(RandomSource::seeded(1)).generate();
        let context = ReplyContext::for_case(&case);

        let text = render("{suspect_count} suspects, {evidence_count} items at {time}", &context);
        assert_eq!(text, format!("3 suspects, 3 items at {}", case.time()));
    }

    #[test]
    fn test_suspect_placeholders() {
        let case = CaseRepository::builtin(RandomSource::seeded(1)).generate();
        let suspect = &case.suspects()[0];
        let context = ReplyContext::for_suspect(&case, suspect);

        let text = render("{name}: {alibi}.", &context);
        assert_eq!(text, format!("{}: {}.", suspect.name, suspect.alibi));
    }

    #[test]
    fn test_plain_text_untouched() {
        let case = CaseRepository::builtin(RandomSource::seeded(1)).generate();
        let context = ReplyContext::for_case(&case);
        assert_eq!(render("No placeholders here.", &context), "No placeholders here.");
        assert_eq!(render("{unknown}", &context), "{unknown}");
    }
}
