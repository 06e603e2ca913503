//! Property tests for the rate engine and both simulators.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use labor_cost_engine::calculation::{aggregate_employee_month, hourly_rate, resolve_base_hours};
use labor_cost_engine::config::{BaseHoursSchedule, SimulationConfig};
use labor_cost_engine::models::{CategoryHours, Employee, HourCategory, Month};
use labor_cost_engine::simulation::{run_employee_simulation, run_fleet_simulation};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..5000).prop_map(|offset| date(2020, 1, 1) + Duration::days(offset))
}

fn arb_category() -> impl Strategy<Value = HourCategory> {
    (0usize..6).prop_map(|i| HourCategory::ALL[i])
}

fn arb_hours() -> impl Strategy<Value = CategoryHours> {
    prop::array::uniform6(0u32..250).prop_map(|h| CategoryHours {
        ordinary: Decimal::from(h[0]),
        extra_daytime: Decimal::from(h[1] / 10),
        night: Decimal::from(h[2] / 5),
        extra_night: Decimal::from(h[3] / 10),
        sunday_holiday: Decimal::from(h[4] / 5),
        extra_sunday_holiday: Decimal::from(h[5] / 10),
    })
}

fn arb_salary() -> impl Strategy<Value = Decimal> {
    (1i64..20_000_000).prop_map(Decimal::from)
}

proptest! {
    #[test]
    fn base_hours_follow_the_statutory_tiers(day in arb_date()) {
        let hours = resolve_base_hours(day, &BaseHoursSchedule::statutory());
        let expected = if day < date(2025, 7, 16) {
            230
        } else if day < date(2026, 7, 1) {
            220
        } else {
            210
        };
        prop_assert_eq!(hours, expected);
    }

    #[test]
    fn base_hours_never_increase_over_time(a in arb_date(), b in arb_date()) {
        let schedule = BaseHoursSchedule::statutory();
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(resolve_base_hours(earlier, &schedule) >= resolve_base_hours(later, &schedule));
    }

    #[test]
    fn hourly_rate_times_base_hours_recovers_salary(salary in arb_salary(), base in 1u32..400) {
        let rate = hourly_rate(salary, base).unwrap();
        let recovered = rate * Decimal::from(base);
        prop_assert!((recovered - salary).abs() < Decimal::new(1, 6));
    }

    #[test]
    fn more_hours_never_cost_less(
        salary in arb_salary(),
        hours in arb_hours(),
        category in arb_category(),
        extra in 1u32..50,
    ) {
        let rate = hourly_rate(salary, 220).unwrap();
        let surcharge = Decimal::new(52, 2);
        let more = hours.clone().with(category, hours.get(category) + Decimal::from(extra));

        let base_cost = aggregate_employee_month(rate, &hours, Decimal::ZERO, surcharge).unwrap();
        let more_cost = aggregate_employee_month(rate, &more, Decimal::ZERO, surcharge).unwrap();

        prop_assert!(more_cost.subtotal > base_cost.subtotal);
        prop_assert!(more_cost.total > base_cost.total);
    }

    #[test]
    fn total_is_subtotal_plus_surcharge_plus_allowance(
        salary in arb_salary(),
        hours in arb_hours(),
        allowance in 0i64..500_000,
    ) {
        let rate = hourly_rate(salary, 230).unwrap();
        let allowance = Decimal::from(allowance);
        let cost = aggregate_employee_month(rate, &hours, allowance, Decimal::new(52, 2)).unwrap();

        prop_assert_eq!(cost.costs.len(), 6);
        prop_assert_eq!(cost.surcharge, cost.subtotal * Decimal::new(52, 2));
        prop_assert_eq!(cost.total, cost.subtotal + cost.surcharge + allowance);
    }

    #[test]
    fn employee_runs_are_deterministic(
        salary in arb_salary(),
        hours in arb_hours(),
        year in 2024i32..2029,
    ) {
        let config = SimulationConfig::default();
        let roster = vec![Employee::with_uniform_hours("Empleado 1", salary, Decimal::ZERO, year, hours)];

        let first = run_employee_simulation(year, &roster, &config).unwrap();
        let second = run_employee_simulation(year, &roster, &config).unwrap();

        prop_assert_eq!(first.len(), 12);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn uniform_hours_cost_never_falls_within_a_year(
        salary in arb_salary(),
        hours in arb_hours(),
        year in 2024i32..2029,
    ) {
        let config = SimulationConfig::default();
        let roster = vec![Employee::with_uniform_hours("Empleado 1", salary, Decimal::ZERO, year, hours)];
        let records = run_employee_simulation(year, &roster, &config).unwrap();

        prop_assert!(records.windows(2).all(|w| w[0].total <= w[1].total));
    }

    #[test]
    fn fleet_projection_covers_the_horizon(
        salary in arb_salary(),
        headcount in 1u32..500,
        weekly in arb_hours(),
    ) {
        let config = SimulationConfig::default();
        let records = run_fleet_simulation(salary, headcount, &weekly, &config).unwrap();

        prop_assert_eq!(records.len(), 36);
        prop_assert_eq!(records[0].month, Month::new(2025, 1).unwrap());
        prop_assert_eq!(records[35].month, Month::new(2027, 12).unwrap());
        prop_assert!(records.iter().all(|r| r.headcount == headcount));
        prop_assert!(records.iter().all(|r| r.costs.len() == 6));
    }
}
