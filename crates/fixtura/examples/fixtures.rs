//! Generates a handful of fixtures of every supported kind and prints them.
//!
//! Run with: `cargo run -p fixtura --example fixtures`

use chrono::{Duration, Utc};

use fixtura::{between, length, modifier, short, temporal};

fn main() -> fixtura::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("fixtura=debug")
        .init();

    println!("integer in [1, 6]:    {}", short::integer_between(1, 6)?);
    println!("alphanumeric(12):     {}", short::alphanumeric(12)?);
    println!("unicode(10):          {}", short::unicode(10)?);

    let code = length(10)
        .with(modifier::prefix("ID-"))
        .with(modifier::special_symbol())
        .alphanumeric()?;
    println!("modified code:        {code}");

    let last_year = temporal::between(Utc::now() - Duration::days(365), Utc::now());
    println!("instant in last year: {}", last_year.instant()?);

    let batch = between(5, 8).alphanumerics(3)?;
    println!("batch of 3:           {batch:?}");

    let weekday = short::sample(&["mon", "tue", "wed", "thu", "fri"])?;
    println!("sampled weekday:      {weekday}");

    Ok(())
}
