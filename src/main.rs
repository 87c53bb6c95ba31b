//! Financial math kernel demo
//!
//! Prints a handful of worked examples: compounding, annuity valuation,
//! rate/period solving and SAC/SAF amortization schedules.

use finmath_kernel::{
    amortization::{sac, saf},
    future_from_present, present_from_annuity,
    rates::{effective_from_nominal, to_percent},
    AmortizationSchedule, CashFlowInputs, FinanceResult, PaymentTiming, SolverConfig,
};

fn main() {
    env_logger::init();

    println!("Financial Math Kernel v0.1.0");
    println!("============================\n");

    if let Err(err) = run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> FinanceResult<()> {
    let config = SolverConfig::from_env()?;

    // 1000 at 10% per period for 5 periods
    let fp = future_from_present(0.10, 5.0)?;
    println!("F/P(10%, 5)          = {:.6}  ->  F = {:.2}", fp, 1000.0 * fp);

    // Five payments of 100 at 8%
    let pa = present_from_annuity(0.08, 5.0, PaymentTiming::Ordinary)?;
    println!("P/A(8%, 5)           = {:.6}  ->  P = {:.2}", pa, 100.0 * pa);

    let effective = effective_from_nominal(0.10, 12.0)?;
    println!("10% nominal monthly  = {:.4}% effective", to_percent(effective));

    let rate = CashFlowInputs::single_sum(1000.0, 5000.0).solve_rate(10.0, &config)?;
    println!("1000 -> 5000 in 10   = {:.4}% per period", to_percent(rate));

    let periods = CashFlowInputs::annuity_to_future(10_000.0, 500.0, PaymentTiming::Ordinary)
        .solve_periods(0.12, &config)?;
    println!("500/yr to 10000 @12% = {:.4} periods", periods);

    print_schedule("SAC", &sac::schedule(900.0, 0.02, 10)?);
    print_schedule("SAF", &saf::schedule(900.0, 0.02, 10)?);

    Ok(())
}

fn print_schedule(label: &str, schedule: &AmortizationSchedule) {
    println!(
        "\n{} schedule: principal {:.2} at {:.2}% over {} installments",
        label,
        schedule.principal,
        to_percent(schedule.rate),
        schedule.periods()
    );
    println!("{:>3} {:>12} {:>12} {:>12} {:>12}", "k", "Installment", "Interest", "Amort", "Balance");
    println!("{}", "-".repeat(55));

    for row in &schedule.rows {
        println!(
            "{:>3} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
            row.period, row.installment, row.interest, row.amortization, row.balance
        );
    }

    let summary = schedule.summary();
    println!("{}", "-".repeat(55));
    println!(
        "{:>3} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
        "", summary.total_paid, summary.total_interest, summary.total_amortization, summary.final_balance
    );
}
