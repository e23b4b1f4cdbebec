//! Prints the progress of the drivers.
use colored::Colorize;

use std::time::Duration;

const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 40;


#[inline(always)]
pub(super) fn print_header(name: &str, horizon: usize) {
    println!(
        "\n{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
        "",
        name.bold().green(),
        format!("{horizon} iterations").yellow(),
        "",
    );
    println!(
        "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
        "ITER".bold().red(),
        "OBJ.".bold().blue(),
        "TIME".bold().cyan(),
    );
}


#[inline(always)]
pub(super) fn print_row(iteration: usize, objective: f64, elapsed: Duration) {
    println!(
        "      {:>WIDTH$}\t{:>WIDTH$.PREC_WIDTH$}\t{:>WIDTH$}",
        iteration.to_string().red(),
        objective,
        time_format(elapsed).cyan(),
    );
}


#[inline(always)]
pub(super) fn print_footer() {
    println!("{:=>FULL_WIDTH$}\n", "");
}


/// Formats `elapsed` as `ss.mmm s` or `mm m ss s`.
fn time_format(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    if millis < 60_000 {
        format!("{}.{:03}s", millis / 1_000, millis % 1_000)
    } else {
        let secs = millis / 1_000;
        format!("{}m{:02}s", secs / 60, secs % 60)
    }
}
