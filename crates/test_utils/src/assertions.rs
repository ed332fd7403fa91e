//! Custom Test Assertions
//!
//! Invariant checks over generated histories and claims, with failure
//! messages that name the offending record.

use chrono::{Days, NaiveDate};
use core_kernel::Money;
use domain_claims::Claim;
use domain_eligibility::{EligibilityRecord, EligibilityType, GRACE_PERIOD_DAYS, RETIREE_MIN_COVERAGE_YEARS};
use rust_decimal::Decimal;

/// Asserts periods start on or after birth and never overlap a predecessor
pub fn assert_history_ordered(history: &[EligibilityRecord], date_of_birth: NaiveDate) {
    assert!(!history.is_empty(), "Expected at least one eligibility record");
    assert!(
        history[0].elig_start_date() >= date_of_birth,
        "First period starts {} before birth {}",
        history[0].elig_start_date(),
        date_of_birth
    );

    for (i, pair) in history.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        let prev_end = prev
            .elig_term_date()
            .unwrap_or_else(|| panic!("Record {} is open but is followed by another period", i));
        assert!(
            next.elig_start_date() >= prev_end,
            "Record {} starts {} before record {} ended {}",
            i + 1,
            next.elig_start_date(),
            i,
            prev_end
        );
    }
}

/// Asserts each record carries exactly the dates its type allows
pub fn assert_types_consistent(history: &[EligibilityRecord]) {
    for (i, record) in history.iter().enumerate() {
        match record.eligibility_type() {
            EligibilityType::Employee => {
                let start = record
                    .start_date()
                    .unwrap_or_else(|| panic!("Employee record {} has no start_date", i));
                assert_eq!(
                    start + Days::new(7),
                    record.elig_start_date(),
                    "Employee record {} should enroll seven days after employment",
                    i
                );
            }
            other => {
                assert_eq!(record.start_date(), None, "{:?} record {} has a start_date", other, i);
                assert_eq!(record.termed_date(), None, "{:?} record {} has a termed_date", other, i);
            }
        }
    }
}

/// Asserts employee terminations end eligibility exactly when the grace
/// period ends on or before `today`
pub fn assert_grace_rule_holds(history: &[EligibilityRecord], today: NaiveDate) {
    for (i, record) in history.iter().enumerate() {
        let Some(termed) = record.termed_date() else {
            continue;
        };
        assert!(termed <= today, "Record {} termed on {} after today", i, termed);

        let grace_end = termed + Days::new(GRACE_PERIOD_DAYS as u64);
        let expected = (grace_end <= today).then_some(grace_end);
        assert_eq!(
            record.elig_term_date(),
            expected,
            "Record {} termed {} has the wrong effective end",
            i,
            termed
        );
    }
}

/// Asserts any retiree record is last and earned by prior coverage
pub fn assert_retiree_qualified(history: &[EligibilityRecord]) {
    let Some(position) = history
        .iter()
        .position(|r| r.eligibility_type() == EligibilityType::Retiree)
    else {
        return;
    };
    assert_eq!(position + 1, history.len(), "Retiree record must be the last period");
    assert!(position > 0, "Retiree record needs a preceding period");

    let prior = &history[..position];
    let total: i64 = prior.iter().filter_map(EligibilityRecord::coverage_days).sum();
    assert!(
        total >= RETIREE_MIN_COVERAGE_YEARS * 365,
        "Retiree coverage granted after only {} days",
        total
    );

    let retiree = &history[position];
    let last_end = prior[position - 1]
        .elig_term_date()
        .unwrap_or_else(|| panic!("Retiree follows an open period"));
    assert_eq!(retiree.elig_start_date(), last_end + Days::new(1));
    if let Some(end) = retiree.elig_term_date() {
        assert_eq!(end, retiree.elig_start_date() + Days::new((total / 3) as u64));
    }
}

/// Asserts claims follow history order, each dated inside its period's
/// window, with every period claimed at least once
pub fn assert_claims_within_windows(claims: &[Claim], history: &[EligibilityRecord]) {
    let mut index = 0;

    for claim in claims {
        while index < history.len() && !history[index].claim_window().contains(claim.claim_date) {
            index += 1;
        }
        assert!(
            index < history.len(),
            "Claim {} dated {} falls outside every remaining period",
            claim.claim_id,
            claim.claim_date
        );
    }

    // Greedy assignment can shift claims onto an earlier overlapping day,
    // so only the total is bounded below.
    assert!(
        claims.len() >= history.len(),
        "{} claims for {} periods",
        claims.len(),
        history.len()
    );
}

/// Asserts every claim amount lies in `[min, max]` whole units
pub fn assert_claim_amounts_within(claims: &[Claim], min: i64, max: i64) {
    for claim in claims {
        assert_money_in_range(&claim.claim_amount, min, max);
    }
}

/// Asserts that a Money value lies in `[min, max]` whole units
pub fn assert_money_in_range(money: &Money, min: i64, max: i64) {
    let amount = money.amount();
    assert!(
        amount >= Decimal::from(min) && amount <= Decimal::from(max),
        "Expected amount within {}..={}, got {}",
        min,
        max,
        money
    );
}
