use crate::domain::event::DomainEvent;
use crate::domain::ordered_set::OrderedSet;
use crate::domain::outcome::Outcome;

/// Combines outcomes into a single outcome over all their entities.
///
/// When every input succeeded, the result is a success whose entity lists the
/// present entities in input order (successes without an entity are skipped)
/// and whose events are the deduplicated union of all emitted events. When any
/// input failed, the result is a failure with the union of their error
/// messages, and events from the successful inputs are dropped.
///
/// Any failed input fails the combination, including a failure that carries
/// no messages; the result is then a failure with an empty error set.
///
/// An empty input yields a success with an empty list.
pub fn combine<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    E: DomainEvent,
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut entities = Vec::new();
    let mut events = OrderedSet::default();
    let mut errors = OrderedSet::default();
    let mut inputs = 0usize;
    let mut failed = false;

    for outcome in outcomes {
        inputs += 1;
        match outcome {
            Outcome::Success {
                entity,
                events: emitted,
            } => {
                entities.extend(entity);
                events.merge(emitted);
            }
            Outcome::Failure { errors: reasons } => {
                failed = true;
                errors.merge(reasons);
            }
        }
    }

    tracing::debug!(
        inputs,
        entities = entities.len(),
        events = events.len(),
        errors = errors.len(),
        failed,
        "combined outcomes"
    );

    if failed {
        return Outcome::Failure { errors };
    }

    Outcome::Success {
        entity: Some(entities),
        events,
    }
}

impl<T, E: DomainEvent> FromIterator<Outcome<T, E>> for Outcome<Vec<T>, E> {
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        combine(iter)
    }
}

/// Combines a fixed list of outcomes, e.g. `combine!(first, second, third)`.
#[macro_export]
macro_rules! combine {
    ($($outcome:expr),* $(,)?) => {
        $crate::domain::outcomes::combine([$($outcome),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestEvent(&'static str);

    impl DomainEvent for TestEvent {}

    #[test]
    fn test_failure_without_messages_still_fails_the_combination() {
        let combined = combine(vec![
            Outcome::success_with("fine", [TestEvent("1")]),
            Outcome::failure(Vec::<String>::new()),
        ]);

        assert!(combined.is_failure());
        assert!(combined.errors().is_empty());
        assert!(combined.events().is_empty());
    }

    #[test]
    fn test_collect_into_outcome() {
        let combined: Outcome<Vec<usize>, TestEvent> = ["a", "bb", "ccc"]
            .iter()
            .map(|s| Outcome::success_with(s.len(), [TestEvent("measured")]))
            .collect();

        assert_eq!(combined.entity(), Some(&vec![1, 2, 3]));
        assert_eq!(combined.events(), &[TestEvent("measured")]);
    }

    #[test]
    fn test_duplicate_errors_are_merged() {
        let combined: Outcome<Vec<i32>> = crate::combine!(
            Outcome::failure(["Missing name", "Too long"]),
            Outcome::success(1),
            Outcome::failure_msg("Missing name"),
        );

        assert_eq!(
            combined.errors(),
            &["Missing name".to_string(), "Too long".to_string()]
        );
    }
}
