//! Integration tests for domain_eligibility

use chrono::Days;
use proptest::prelude::*;

use core_kernel::RandomFakeDataProvider;
use domain_eligibility::{
    CoveragePhase, EligibilityHistoryBuilder, EligibilityType, HistoryAccumulator,
    HistoryTermination, StepOutcome, StopReason,
};
use test_utils::{
    assert_grace_rule_holds, assert_history_ordered, assert_retiree_qualified,
    assert_types_consistent, birth_date_strategy, init_test_tracing, seed_strategy, DatePick,
    RecordFixtures, ScriptedProvider, TemporalFixtures,
};

fn builder() -> EligibilityHistoryBuilder {
    EligibilityHistoryBuilder::new().unwrap()
}

// ============================================================================
// Scripted scenarios
// ============================================================================

mod scripted_tests {
    use super::*;

    #[test]
    fn test_sole_open_record_stops_generation() {
        init_test_tracing();
        let today = TemporalFixtures::today();
        let born = TemporalFixtures::years_ago(10);
        // cap 2, dependent, 15-year tenure ending past today
        let mut provider = ScriptedProvider::new()
            .with_units([0.5, 0.9, 0.99])
            .with_dates([DatePick::Start, DatePick::End]);

        let history = builder().build_with_outcome(born, today, &mut provider).unwrap();

        assert_eq!(history.record_cap, 2);
        assert_eq!(history.termination, HistoryTermination::Stopped(StopReason::ActiveRecord));
        assert_eq!(history.records.len(), 1);

        let record = &history.records[0];
        assert_eq!(record.phase(), CoveragePhase::ActiveDependent);
        assert_eq!(record.elig_start_date(), born);
        assert!(provider.is_exhausted());
    }

    #[test]
    fn test_long_employee_tenure_earns_retiree_period() {
        let today = TemporalFixtures::today();
        let born = TemporalFixtures::years_ago(40);
        // cap 2, employee, 8-year tenure starting twenty years ago
        let mut provider = ScriptedProvider::new()
            .with_units([0.5, 0.0, 0.9])
            .with_dates([DatePick::OffsetDays(20 * 365), DatePick::End]);

        let history = builder().build_with_outcome(born, today, &mut provider).unwrap();

        assert_eq!(history.termination, HistoryTermination::Stopped(StopReason::RetireeAppended));
        assert_eq!(history.records.len(), 2);

        let employee = &history.records[0];
        let termed = TemporalFixtures::years_ago(12);
        assert_eq!(employee.eligibility_type(), EligibilityType::Employee);
        assert_eq!(employee.elig_start_date(), TemporalFixtures::years_ago(20));
        assert_eq!(employee.start_date(), Some(TemporalFixtures::years_ago(20) - Days::new(7)));
        assert_eq!(employee.termed_date(), Some(termed));
        assert_eq!(employee.elig_term_date(), Some(termed + Days::new(7)));

        let retiree = &history.records[1];
        assert_eq!(retiree.eligibility_type(), EligibilityType::Retiree);
        assert_eq!(retiree.elig_start_date(), termed + Days::new(8));
        // (8 * 365 + 7) / 3 days of retiree coverage
        assert_eq!(retiree.elig_term_date(), Some(termed + Days::new(8 + 975)));

        assert_retiree_qualified(&history.records);
        assert_grace_rule_holds(&history.records, today);
    }

    #[test]
    fn test_recent_termination_stops_generation() {
        let today = TemporalFixtures::today();
        let born = TemporalFixtures::years_ago(30);
        let mut provider = ScriptedProvider::new()
            .with_units([0.5, 0.9, 0.0])
            .with_dates([DatePick::OffsetDays(29 * 365 - 100), DatePick::End]);

        let history = builder().build_with_outcome(born, today, &mut provider).unwrap();

        assert_eq!(history.termination, HistoryTermination::Stopped(StopReason::RecentTermination));
        assert_eq!(history.records.len(), 1);
        assert_eq!(history.records[0].elig_term_date(), Some(today - Days::new(100)));
    }

    #[test]
    fn test_termination_drawn_on_today_ends_period() {
        let today = TemporalFixtures::today();
        let born = TemporalFixtures::years_ago(30);
        // cap 2, dependent, 1-year tenure ending exactly today
        let mut provider = ScriptedProvider::new()
            .with_units([0.5, 0.9, 0.0])
            .with_dates([DatePick::OffsetDays(29 * 365), DatePick::End]);

        let history = builder().build_with_outcome(born, today, &mut provider).unwrap();

        assert_eq!(history.termination, HistoryTermination::Stopped(StopReason::RecentTermination));
        assert_eq!(history.records.len(), 1);
        assert_eq!(history.records[0].elig_term_date(), Some(today));
    }

    #[test]
    fn test_cap_bounds_old_closed_periods() {
        let today = TemporalFixtures::today();
        let born = TemporalFixtures::years_ago(30);
        // cap 3, three dependent one-year periods
        let mut provider = ScriptedProvider::new()
            .with_units([0.9, 0.9, 0.0, 0.9, 0.0, 0.9, 0.0])
            .with_dates([
                DatePick::Start,
                DatePick::End,
                DatePick::OffsetDays(365),
                DatePick::End,
                DatePick::Start,
                DatePick::End,
            ]);

        let history = builder().build_with_outcome(born, today, &mut provider).unwrap();

        assert_eq!(history.record_cap, 3);
        assert_eq!(history.termination, HistoryTermination::CapReached);
        let starts: Vec<_> = history.records.iter().map(|r| r.elig_start_date()).collect();
        assert_eq!(
            starts,
            vec![
                TemporalFixtures::years_ago(30),
                TemporalFixtures::years_ago(28),
                TemporalFixtures::years_ago(27),
            ]
        );
        assert_history_ordered(&history.records, born);
    }

    #[test]
    fn test_birth_date_tomorrow_is_invalid_input() {
        let mut provider = ScriptedProvider::new();
        let err = builder()
            .build(TemporalFixtures::tomorrow(), TemporalFixtures::today(), &mut provider)
            .unwrap_err();

        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("is after"));
    }
}

// ============================================================================
// Retiree derivation through advance
// ============================================================================

mod retiree_tests {
    use super::*;

    #[test]
    fn test_six_years_ending_yesterday_opens_retiree_today() {
        let today = TemporalFixtures::today();
        let acc = HistoryAccumulator::new(TemporalFixtures::years_ago(40));

        let outcome = builder()
            .advance(acc, RecordFixtures::six_year_dependent(), today)
            .unwrap();

        let acc = match outcome {
            StepOutcome::Stop(acc, StopReason::RetireeAppended) => acc,
            other => panic!("expected retiree stop, got {:?}", other),
        };
        let retiree = &acc.records[1];
        assert_eq!(retiree.elig_start_date(), today);
        assert!(retiree.is_active());
        assert_eq!(retiree.phase(), CoveragePhase::Retiree);
    }

    #[test]
    fn test_pending_grace_record_is_active() {
        let today = TemporalFixtures::today();
        let acc = HistoryAccumulator::new(TemporalFixtures::years_ago(40));

        let outcome = builder()
            .advance(acc, RecordFixtures::employee_pending_grace(), today)
            .unwrap();

        assert!(matches!(outcome, StepOutcome::Stop(_, StopReason::ActiveRecord)));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod property_tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_histories_hold_invariants(seed in seed_strategy(), born in birth_date_strategy()) {
            let today = TemporalFixtures::today();
            let mut provider = RandomFakeDataProvider::seeded(seed);

            let history = builder().build_with_outcome(born, today, &mut provider).unwrap();
            let records = &history.records;

            assert_history_ordered(records, born);
            assert_types_consistent(records);
            assert_grace_rule_holds(records, today);
            assert_retiree_qualified(records);

            prop_assert!(records.len() <= history.record_cap as usize + 1);
            prop_assert!(records.len() <= 4);
            prop_assert!(records.iter().rev().skip(1).all(|r| !r.is_active()));

            match history.termination {
                HistoryTermination::CapReached => {
                    prop_assert_eq!(records.len(), history.record_cap as usize);
                }
                HistoryTermination::Stopped(StopReason::ActiveRecord) => {
                    prop_assert!(records.last().unwrap().is_active());
                }
                HistoryTermination::Stopped(StopReason::RetireeAppended) => {
                    prop_assert_eq!(records.last().unwrap().eligibility_type(), EligibilityType::Retiree);
                }
                HistoryTermination::Stopped(StopReason::RecentTermination) => {
                    let end = records.last().unwrap().elig_term_date().unwrap();
                    prop_assert!((today - end).num_days() < 365);
                }
            }
        }

        #[test]
        fn same_seed_same_history(seed in seed_strategy(), born in birth_date_strategy()) {
            let today = TemporalFixtures::today();
            let first = builder().build(born, today, &mut RandomFakeDataProvider::seeded(seed)).unwrap();
            let second = builder().build(born, today, &mut RandomFakeDataProvider::seeded(seed)).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
