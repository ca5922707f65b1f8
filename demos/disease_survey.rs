//! Example walking through a stratified-heterogeneity analysis of a small
//! synthetic disease-incidence survey.
//!
//! Three categorical covariates (disease type, region, risk level) are scored
//! against the incidence rate, first one at a time, then pairwise with
//! interaction classification.

use geodetector::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("GeoDetector Disease Survey Example");
    println!("==================================");

    // Twelve observation units; categories are numeric codes.
    let data = Dataset::from_columns([
        (
            "type",
            vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0],
        ),
        (
            "region",
            vec![1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0],
        ),
        (
            "level",
            vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 1.0, 2.0, 3.0],
        ),
        (
            "incidence",
            vec![2.1, 2.3, 2.2, 4.0, 4.2, 4.1, 3.0, 3.1, 2.9, 8.5, 8.8, 8.6],
        ),
    ])?;

    let detector = GeoDetector::new(&data, &["type", "region", "level"], "incidence")?
        .with_independence_tolerance(1e-9);

    println!("\nSingle-covariate q values:");
    for (name, q) in detector.single_q_values()? {
        println!("  {:<8} {:.4}", name, q);
    }

    println!("\nPairwise q values:");
    for ((first, second), q) in detector.pairwise_q_values()? {
        println!("  {:<8} x {:<8} {:.4}", first, second, q);
    }

    let (matrix, types) = detector.interaction_matrix_with_types()?;

    println!("\nq matrix:");
    print!("{:>10}", "");
    for name in matrix.names() {
        print!("{:>10}", name);
    }
    println!();
    for (i, row_name) in matrix.names().iter().enumerate() {
        print!("{:>10}", row_name);
        for j in 0..matrix.names().len() {
            print!("{:>10.4}", matrix.values()[[i, j]]);
        }
        println!();
    }

    println!("\nInteraction types:");
    let names = types.names();
    for (i, first) in names.iter().enumerate() {
        for second in &names[i + 1..] {
            let label = types
                .get(first, second)
                .expect("every off-diagonal pair is classified");
            println!("  {:<8} x {:<8} {}", first, second, label);
        }
    }

    println!("\nExported q matrix JSON:\n{}", matrix.to_json()?);

    Ok(())
}
