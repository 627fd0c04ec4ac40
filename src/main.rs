use crsmat::{determinant_with, DeterminantMethod, EngineConfig, Result, SparseMatrix};

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn main() -> Result<()> {
    println!("crsmat {}: compressed-row sparse matrices", crsmat::VERSION);

    // A = [1 0 2]
    //     [0 0 3]
    //     [4 5 6]
    let mut a = SparseMatrix::<i64>::new(3, 3)?;
    a.insert(1, 1, 1)?;
    a.insert(1, 3, 2)?;
    a.insert(2, 3, 3)?;
    a.insert(3, 1, 4)?;
    a.insert(3, 2, 5)?;
    a.insert(3, 3, 6)?;
    a.finalize()?;

    let b = SparseMatrix::<i64>::identity(3)?;

    println!("\nMatrix A:");
    print!("{}", a);
    println!("{:?}", a);

    println!("\nMatrix B:");
    print!("{}", b);

    println!("\nTrace of A: {}", a.trace()?);

    println!("\nA + B:");
    print!("{}", a.sum(&b)?);

    println!("\n3 * A:");
    print!("{}", a.scale(3)?);

    println!("\nA × B:");
    print!("{}", a.multiply(&b)?);

    let config = EngineConfig::default();
    println!("\nDefault configuration:");
    println!("  Determinant method: {:?}", config.determinant_method);
    println!("  Threads: {}", config.parallel.n_threads);
    println!("  Parallel row threshold: {}", config.parallel.min_rows_for_parallel);

    let det = a.determinant()?;
    let bareiss = determinant_with(
        &a,
        &config.with_determinant_method(DeterminantMethod::Bareiss),
    )?;
    println!("\ndet(A) = {} (elimination: {})", det, bareiss);
    println!("A invertible: {}", yes_no(a.is_invertible()?));

    Ok(())
}
