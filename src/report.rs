//! Console report: the fixed text sections printed after analysis, before
//! the chart viewer opens.

use std::collections::BTreeMap;

use crate::data::model::{IrisTable, Measure, Species};
use crate::stats::Analysis;

const RULE_WIDTH: usize = 50;
const HEAD_ROWS: usize = 5;
const VALUE_WIDTH: usize = 14;

/// Print every report section to stdout, in fixed order.
pub fn print_report(table: &IrisTable, analysis: &Analysis) {
    print_overview(table, analysis);
    print_summary(analysis);
    print_group_means(analysis);
    print_findings(analysis);
}

fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
}

fn print_overview(table: &IrisTable, analysis: &Analysis) {
    section("Dataset overview");
    println!(
        "{} rows x {} columns",
        table.len(),
        IrisTable::COLUMN_COUNT
    );

    println!("\nFirst {HEAD_ROWS} rows:");
    for &measure in &Measure::ALL {
        print!("{:>width$}", measure.column_name(), width = VALUE_WIDTH);
    }
    println!("{:>width$}", "species", width = VALUE_WIDTH);
    for obs in table.rows().iter().take(HEAD_ROWS) {
        for &measure in &Measure::ALL {
            print!("{:>width$.1}", measure.of(obs), width = VALUE_WIDTH);
        }
        println!("{:>width$}", obs.species, width = VALUE_WIDTH);
    }

    println!("\nMissing values per column:");
    for (name, count) in &analysis.missing {
        println!("  {name:<14} {count}");
    }
}

fn print_summary(analysis: &Analysis) {
    section("Summary statistics");
    print!("{:>8}", "");
    for &measure in &Measure::ALL {
        print!("{:>width$}", measure.column_name(), width = VALUE_WIDTH);
    }
    println!();

    let stat_rows: [(&str, fn(&crate::stats::summary::SummaryStats) -> f64); 7] = [
        ("mean", |s| s.mean),
        ("std", |s| s.std),
        ("min", |s| s.min),
        ("25%", |s| s.q1),
        ("50%", |s| s.median),
        ("75%", |s| s.q3),
        ("max", |s| s.max),
    ];

    print!("{:>8}", "count");
    for &measure in &Measure::ALL {
        print!(
            "{:>width$}",
            analysis.summary(measure).count,
            width = VALUE_WIDTH
        );
    }
    println!();

    for (label, extract) in stat_rows {
        print!("{label:>8}");
        for &measure in &Measure::ALL {
            print!(
                "{:>width$.3}",
                extract(&analysis.summary(measure)),
                width = VALUE_WIDTH
            );
        }
        println!();
    }
}

fn print_group_means(analysis: &Analysis) {
    section("Group means");
    println!("Mean sepal length by species:");
    for (species, mean) in &analysis.sepal_length_means {
        println!("  {species:<12} {mean:.3}");
    }
    println!("\nMean petal length by species:");
    for (species, mean) in &analysis.petal_length_means {
        println!("  {species:<12} {mean:.3}");
    }
}

/// Species ranked by a grouped mean, ascending.
fn ranked_by_mean(means: &BTreeMap<Species, f64>) -> Vec<Species> {
    let mut ranked: Vec<(Species, f64)> = means.iter().map(|(&s, &m)| (s, m)).collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked.into_iter().map(|(s, _)| s).collect()
}

fn print_findings(analysis: &Analysis) {
    let by_petal = ranked_by_mean(&analysis.petal_length_means);
    let by_sepal = ranked_by_mean(&analysis.sepal_length_means);
    if by_petal.len() < 3 || by_petal != by_sepal {
        return;
    }

    section("Findings");
    println!(
        "- {} has the shortest petals and sepals on average",
        by_petal[0]
    );
    println!(
        "- {} has the longest petals and sepals on average",
        by_petal[2]
    );
    println!("- {} falls in between for both measurements", by_petal[1]);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data::model::sample_table;

    #[test]
    fn ranking_orders_species_by_mean() {
        let analysis = Analysis::compute(&sample_table());
        let ranked = ranked_by_mean(&analysis.petal_length_means);
        assert_eq!(
            ranked,
            vec![Species::Setosa, Species::Versicolor, Species::Virginica]
        );
    }

    // Smoke test: printing must not panic on a small table or an empty one.
    #[test]
    fn report_prints_without_panic() {
        let table = sample_table();
        print_report(&table, &Analysis::compute(&table));

        let empty = IrisTable::default();
        print_report(&empty, &Analysis::compute(&empty));
    }
}
