use std::cell::Cell;

use ambit_search::{choice, Deferred, Fail, Outcome, SearchError, Session};

fn is_even(v: &u32) -> bool {
    v % 2 == 0
}

#[test]
fn backtrack_through_single_choice() {
    let mut session = Session::new();
    assert_eq!(session.evaluate(|b| b.choose([1, 2, 3])), Ok(Outcome::Value(1)));
    assert_eq!(session.backtrack(), Ok(Outcome::Value(2)));
    assert_eq!(session.backtrack(), Ok(Outcome::Value(3)));
    assert!(session.backtrack().unwrap().is_exhausted());
    assert!(session.backtrack().unwrap().is_exhausted());
}

#[test]
fn inner_choice_varies_fastest() {
    let mut session = Session::new();
    let mut seen = vec![];

    let mut outcome = session
        .evaluate(|b| Ok(b.choose([1, 2])? + b.choose([10, 20])?))
        .unwrap();
    while let Outcome::Value(v) = outcome {
        seen.push(v);
        outcome = session.backtrack().unwrap();
    }

    assert_eq!(seen, vec![11, 21, 12, 22]);
}

#[test]
fn all_single_choice() {
    let mut session = Session::new();
    let all = session.all(|b| b.choose([1, 2, 3, 4]));
    assert_eq!(all, Ok(vec![1, 2, 3, 4]));
}

#[test]
fn all_query_keeps_discovery_order() {
    let mut session = Session::new();
    let evens = session.all_query(is_even, |b| Ok(b.choose([4, 5])? + b.choose([11, 14])?));
    assert_eq!(evens, Ok(vec![18, 16]));
}

#[test]
fn stack_empty_around_enumeration() {
    let mut session = Session::new();
    assert_eq!(session.pending(), 0);

    let all = session.all(|b| {
        let x = b.choose(0..4)?;
        let y = b.choose(0..4)?;
        b.guard(x < y)?;
        Ok((x, y))
    });

    assert_eq!(all.map(|v| v.len()), Ok(6));
    assert_eq!(session.pending(), 0);
    assert!(session.is_idle());
}

#[test]
fn all_on_busy_stack_does_not_enumerate() {
    let called = Cell::new(false);
    let mut session = Session::new();
    assert_eq!(session.evaluate(|b| b.choose([1, 2, 3])), Ok(Outcome::Value(1)));

    let result = session.all(|b| {
        called.set(true);
        b.choose([4, 5])
    });
    assert_eq!(result, Err(SearchError::PreconditionViolation { pending: 1 }));

    let result = session.all_query(|_| true, |b| {
        called.set(true);
        b.choose([4, 5])
    });
    assert_eq!(result, Err(SearchError::PreconditionViolation { pending: 1 }));

    let result = session
        .solutions(|b| {
            called.set(true);
            b.choose([4, 5])
        })
        .map(|solutions| solutions.count());
    assert_eq!(result, Err(SearchError::PreconditionViolation { pending: 1 }));
    assert!(!called.get());

    // The earlier search is still intact
    assert_eq!(session.backtrack(), Ok(Outcome::Value(2)));
}

#[test]
fn assert_on_exhausted_backtracks() {
    let called = Cell::new(0);
    let mut session = Session::new();

    let all = session.all(|b| {
        let v = b.choose([1u32, 2, 3])?;
        let upstream = if v == 2 {
            Outcome::Exhausted
        } else {
            Outcome::Value(v)
        };

        b.assert(
            |_: &u32| {
                called.set(called.get() + 1);
                true
            },
            upstream,
        )
    });

    assert_eq!(all, Ok(vec![1, 3]));
    assert_eq!(called.get(), 2);
}

#[test]
fn query_prunes_inside_candidate() {
    let mut session = Session::new();
    let all = session.all(|b| {
        let a = b.choose(1..=4u32)?;
        let c = b.choose(1..=4u32)?;
        b.query(is_even, a * c)
    });

    assert_eq!(all, Ok(vec![2, 4, 2, 4, 6, 8, 6, 12, 4, 8, 12, 16]));
}

#[test]
fn empty_choice_is_failure() {
    let mut session = Session::new();
    let all = session.all(|b| {
        let v = b.choose([1, 2, 3])?;
        if v == 2 {
            let none: Vec<i32> = vec![];
            return b.choose(none);
        }
        Ok(v)
    });

    assert_eq!(all, Ok(vec![1, 3]));
}

#[test]
fn alternatives_forced_once() {
    let forced = Cell::new(0);
    let count = |v: u32| {
        forced.set(forced.get() + 1);
        v
    };

    let mut session = Session::new();
    let all = session.all(|b| {
        let x = choice!(b; count(1), count(2), count(3))?;
        let y = choice!(b; count(10), count(20))?;
        Ok(x + y)
    });

    assert_eq!(all, Ok(vec![11, 21, 12, 22, 13, 23]));
    // 3 outer alternatives, 2 inner ones under each outer one
    assert_eq!(forced.get(), 3 + 3 * 2);
}

#[test]
fn unneeded_alternatives_stay_unforced() {
    let forced = Cell::new(false);
    let mut session = Session::new();

    let first = session.evaluate(|b| {
        b.choice([
            Deferred::new(|| 1),
            Deferred::new(|| {
                forced.set(true);
                2
            }),
        ])
    });

    assert_eq!(first, Ok(Outcome::Value(1)));
    assert!(!forced.get());
}

#[test]
fn mixed_ready_and_deferred_alternatives() {
    let forced = Cell::new(0);
    let mut session = Session::new();
    let all = session.all(|b| {
        b.choice([
            Deferred::ready(1),
            Deferred::new(|| {
                forced.set(forced.get() + 1);
                2
            }),
        ])
    });

    assert_eq!(all, Ok(vec![1, 2]));
    assert_eq!(forced.get(), 1);
}

#[test]
fn session_usable_after_divergence() {
    let calls = Cell::new(0);
    let mut session = Session::new();
    let result = session.all(|b| {
        calls.set(calls.get() + 1);
        let x = b.choose([1, 2])?;
        // Second run asks for a different number of alternatives
        let y = if calls.get() == 2 {
            b.choose([10, 20, 30])?
        } else {
            b.choose([10, 20])?
        };
        Ok(x + y)
    });

    assert!(matches!(result, Err(SearchError::Diverged(_))));
    assert!(session.is_idle());
    assert_eq!(session.all(|b| b.choose([7, 8])), Ok(vec![7, 8]));
}

#[test]
fn choices_of_different_types() {
    let mut session = Session::new();
    let all = session.all(|b| {
        let n = b.choose([1, 2])?;
        let s = b.choose(["a", "b"])?;
        Ok(format!("{s}{n}"))
    });

    assert_eq!(
        all,
        Ok(vec![
            "a1".to_string(),
            "b1".to_string(),
            "a2".to_string(),
            "b2".to_string()
        ])
    );
}

#[test]
fn independent_sessions() {
    let mut first = Session::new();
    let mut second = Session::new();

    assert_eq!(first.evaluate(|b| b.choose([1, 2])), Ok(Outcome::Value(1)));
    assert_eq!(second.all(|b| b.choose([7, 8])), Ok(vec![7, 8]));
    assert_eq!(first.backtrack(), Ok(Outcome::Value(2)));
}

#[test]
fn consecutive_evaluations_share_stack() {
    let mut session = Session::new();
    assert_eq!(session.evaluate(|b| b.choose([1, 2])), Ok(Outcome::Value(1)));
    assert_eq!(session.evaluate(|b| b.choose([10, 20])), Ok(Outcome::Value(10)));
    assert_eq!(session.pending(), 2);

    assert_eq!(session.backtrack(), Ok(Outcome::Value(20)));
    assert_eq!(session.backtrack(), Ok(Outcome::Value(2)));
    assert_eq!(session.backtrack(), Ok(Outcome::Exhausted));
}

#[test]
fn fail_propagates_with_question_mark() {
    fn pick_odd(b: &mut ambit_search::Branch) -> Result<u32, Fail> {
        let v = b.choose(1..=6u32)?;
        if v % 2 == 0 {
            return b.fail();
        }
        Ok(v)
    }

    let mut session = Session::new();
    assert_eq!(session.all(pick_odd), Ok(vec![1, 3, 5]));
}
