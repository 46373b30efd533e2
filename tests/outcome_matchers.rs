//! Integration coverage for the outcome matchers: verdicts, diagnostic
//! precedence, and exact failure-message text.

use verdict::matchers::{
    be_pending_with, be_skipped_with, be_skipped_with_regexp, fail_with, fail_with_regexp,
    have_failed_with, have_passed, pass,
};
use verdict::{Example, Exception, ExceptionKind, ExecutionResult, Matcher, MessagePattern};

#[derive(Debug)]
struct Boom;

#[derive(Debug)]
struct Fizzle;

fn failed_with(message: &str) -> Example {
    Example::failed(Some(Exception::of::<Boom>(message)))
}

mod pass_matcher {
    use super::*;

    #[test]
    fn matches_a_passed_example() {
        assert!(pass().matches(&Example::passed()));
    }

    #[test]
    fn rejects_a_pending_example_and_reports_its_message() {
        let example = Example::pending_with("wire up the fixture");
        let mut matcher = pass();
        assert!(!matcher.matches(&example));
        assert_eq!(
            matcher.failure_message(&example),
            "expected example to pass, but was pending with message: wire up the fixture"
        );
    }

    #[test]
    fn reports_the_exception_behind_a_failure() {
        let example = failed_with("boom");
        let mut matcher = pass();
        assert!(!matcher.matches(&example));
        assert_eq!(
            matcher.failure_message(&example),
            "expected example to pass, but failed: boom"
        );
    }

    #[test]
    fn reports_a_bare_status_when_there_is_no_exception() {
        let example = Example::new(ExecutionResult::not_run());
        let mut matcher = pass();
        assert!(!matcher.matches(&example));
        assert_eq!(
            matcher.failure_message(&example),
            "expected example to pass, but not run"
        );
    }

    #[test]
    fn verdict_is_idempotent() {
        let example = Example::pending_with("later");
        let mut matcher = pass();
        assert_eq!(matcher.matches(&example), matcher.matches(&example));
    }
}

mod fail_with_message {
    use super::*;

    #[test]
    fn matches_a_failure_whose_message_contains_the_text() {
        assert!(fail_with_regexp("boom").matches(&failed_with("big boom today")));
    }

    #[test]
    fn string_arguments_are_literal_text_not_patterns() {
        let mut matcher = fail_with_regexp("a.b");
        assert!(!matcher.matches(&failed_with("axb")));
        assert!(matcher.matches(&failed_with("a.b")));
    }

    #[test]
    fn compiled_patterns_keep_their_regex_semantics() {
        let pattern = MessagePattern::pattern("deli[cs]ious").unwrap();
        assert!(fail_with_regexp(pattern).matches(&failed_with("delisious cake")));
    }

    #[test]
    fn pending_disqualifies_before_status() {
        let example = Example::pending_with("later");
        let mut matcher = fail_with_regexp("later");
        assert!(!matcher.matches(&example));
        assert_eq!(
            matcher.failure_message(&example),
            "expected example to fail with exception message \"later\"\n    but was pending with message: later"
        );
    }

    #[test]
    fn a_wrong_status_is_reported_as_the_status() {
        let example = Example::passed();
        let mut matcher = fail_with_regexp("boom");
        assert!(!matcher.matches(&example));
        assert_eq!(
            matcher.failure_message(&example),
            "expected example to fail with exception message \"boom\"\n    but passed"
        );
    }

    #[test]
    fn a_mismatched_message_is_reported_verbatim() {
        let example = failed_with("fizzle");
        let mut matcher = fail_with_regexp("boom");
        assert!(!matcher.matches(&example));
        assert_eq!(
            matcher.failure_message(&example),
            "expected example to fail with exception message \"boom\"\n    but got: fizzle"
        );
    }

    #[test]
    fn a_failure_without_an_exception_reads_as_an_empty_message() {
        let example = Example::failed(None);
        let mut matcher = fail_with_regexp("boom");
        assert!(!matcher.matches(&example));
        assert_eq!(
            matcher.failure_message(&example),
            "expected example to fail with exception message \"boom\"\n    but got: "
        );
    }
}

mod skipped_with_message {
    use super::*;

    #[test]
    fn matches_a_skipped_example_with_a_matching_reason() {
        assert!(be_skipped_with_regexp("flaky").matches(&Example::skipped_with("flaky on CI")));
    }

    #[test]
    fn a_passed_example_reports_passed() {
        let example = Example::passed();
        let mut matcher = be_skipped_with_regexp("flaky");
        assert!(!matcher.matches(&example));
        assert_eq!(
            matcher.failure_message(&example),
            "expected: example skipped with \"flaky\"\n     got: passed"
        );
    }

    #[test]
    fn a_failed_example_reports_its_exception_message() {
        let example = failed_with("boom");
        let mut matcher = be_skipped_with_regexp("flaky");
        assert!(!matcher.matches(&example));
        assert_eq!(
            matcher.failure_message(&example),
            "expected: example skipped with \"flaky\"\n     got: boom"
        );
    }

    #[test]
    fn pending_but_not_skipped_reports_the_raw_status() {
        let example = Example::pending_with("flaky");
        let mut matcher = be_skipped_with_regexp("flaky");
        assert!(!matcher.matches(&example));
        assert_eq!(
            matcher.failure_message(&example),
            "expected: example skipped with \"flaky\"\n     got: pending"
        );
    }

    #[test]
    fn a_mismatched_reason_is_reported_verbatim() {
        let example = Example::skipped_with("slow");
        let mut matcher = be_skipped_with_regexp("flaky");
        assert!(!matcher.matches(&example));
        assert_eq!(
            matcher.failure_message(&example),
            "expected: example skipped with \"flaky\"\n     got: slow"
        );
    }
}

mod fail_with_kind {
    use super::*;

    #[test]
    fn matches_on_exact_exception_kind() {
        assert!(fail_with(ExceptionKind::of::<Boom>()).matches(&failed_with("boom")));
    }

    #[test]
    fn a_different_kind_is_a_mismatch() {
        let example = Example::failed(Some(Exception::of::<Fizzle>("boom")));
        let mut matcher = fail_with(ExceptionKind::of::<Boom>());
        assert!(!matcher.matches(&example));
        let message = matcher.failure_message(&example);
        assert!(message.contains("failed with a"));
        assert!(message.contains("Fizzle"));
    }

    #[test]
    fn pending_reports_without_a_message_suffix() {
        let example = Example::pending_with("later");
        let mut matcher = fail_with(ExceptionKind::of::<Boom>());
        assert!(!matcher.matches(&example));
        assert!(matcher.failure_message(&example).ends_with("but was pending"));
    }

    #[test]
    fn a_passed_example_reports_its_status() {
        let example = Example::passed();
        let mut matcher = fail_with(ExceptionKind::of::<Boom>());
        assert!(!matcher.matches(&example));
        assert!(matcher.failure_message(&example).ends_with("but passed"));
    }

    #[test]
    fn a_failure_without_an_exception_is_a_mismatch() {
        let example = Example::failed(None);
        let mut matcher = fail_with(ExceptionKind::of::<Boom>());
        assert!(!matcher.matches(&example));
        assert!(matcher
            .failure_message(&example)
            .ends_with("but failed with no exception"));
    }
}

mod exact_pending_and_skip {
    use super::*;

    #[test]
    fn be_pending_with_requires_an_exact_message() {
        assert!(be_pending_with("later").matches(&Example::pending_with("later")));
        assert!(!be_pending_with("later").matches(&Example::pending_with("much later")));
    }

    #[test]
    fn be_pending_with_rejects_a_skipped_but_not_pending_example() {
        // Both flags built explicitly: skipped set, pending cleared.
        let example = Example {
            execution_result: ExecutionResult::pending("later"),
            pending: false,
            skipped: true,
        };
        assert!(!be_pending_with("later").matches(&example));
    }

    #[test]
    fn be_pending_with_requires_pending_status() {
        let mut example = Example::failed(None);
        example.pending = true;
        example.execution_result.pending_message = Some("later".to_string());
        assert!(!be_pending_with("later").matches(&example));
    }

    #[test]
    fn pending_failure_message_shows_expected_and_actual() {
        let example = Example::pending_with("much later");
        let mut matcher = be_pending_with("later");
        assert!(!matcher.matches(&example));
        assert_eq!(
            matcher.failure_message(&example),
            "expected: example pending with \"later\"\n     got: Some(\"much later\")"
        );
    }

    #[test]
    fn be_skipped_with_requires_both_flags() {
        assert!(be_skipped_with("flaky").matches(&Example::skipped_with("flaky")));
        assert!(!be_skipped_with("flaky").matches(&Example::pending_with("flaky")));
    }

    #[test]
    fn skip_failure_message_shows_expected_and_actual() {
        let example = Example::skipped_with("slow");
        let mut matcher = be_skipped_with("flaky");
        assert!(!matcher.matches(&example));
        assert_eq!(
            matcher.failure_message(&example),
            "expected: example skipped with \"flaky\"\n     got: Some(\"slow\")"
        );
    }
}

mod aliases {
    use super::*;

    #[test]
    fn have_passed_is_pass() {
        let examples = [
            Example::passed(),
            Example::pending_with("later"),
            failed_with("boom"),
        ];
        for example in &examples {
            assert_eq!(pass().matches(example), have_passed().matches(example));
            assert_eq!(
                pass().failure_message(example),
                have_passed().failure_message(example)
            );
        }
    }

    #[test]
    fn have_failed_with_is_fail_with() {
        let kind = ExceptionKind::of::<Boom>();
        let examples = [
            Example::passed(),
            failed_with("boom"),
            Example::failed(Some(Exception::of::<Fizzle>("boom"))),
        ];
        for example in &examples {
            assert_eq!(
                fail_with(kind.clone()).matches(example),
                have_failed_with(kind.clone()).matches(example)
            );
            assert_eq!(
                fail_with(kind.clone()).failure_message(example),
                have_failed_with(kind.clone()).failure_message(example)
            );
        }
    }
}
