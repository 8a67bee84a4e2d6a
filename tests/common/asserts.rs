#![allow(dead_code)]

use origin_cors::{Evaluation, Headers};

pub fn assert_simple(evaluation: Evaluation) -> Headers {
    match evaluation {
        Evaluation::Simple(result) => result.headers,
        other => panic!("expected simple evaluation, got {:?}", other),
    }
}

pub fn assert_preflight(evaluation: Evaluation) -> (Headers, u16, bool) {
    match evaluation {
        Evaluation::Preflight(result) => (
            result.headers,
            result.status.expect("preflight carries a status"),
            result.end_response,
        ),
        other => panic!("expected preflight evaluation, got {:?}", other),
    }
}

pub fn assert_not_applicable(evaluation: Evaluation) {
    assert!(
        matches!(evaluation, Evaluation::NotApplicable),
        "expected not applicable, got {:?}",
        evaluation
    );
}
