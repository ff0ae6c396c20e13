//! Interactive demo: sum a counted list of numbers, then echo valid dates
//!
//! Run with: cargo run --example read_from_console

use chrono::NaiveDate;
use text_scanner::Scanner;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let mut scanner = Scanner::from_reader(stdin.lock());

    // Strict input: a malformed count aborts the program
    println!("Enter the count of numbers: ");
    let count: usize = scanner.read()?;

    println!("Enter the values: ");
    let values = scanner
        .read_values::<i64>(false)
        .take(count)
        .collect::<text_scanner::Result<Vec<_>>>()?;
    println!("Sum of values is {}", values.iter().sum::<i64>());

    // Forgiving input: retry the count, skip malformed dates
    println!("Enter the count of dates: ");
    let count = loop {
        if let Some(count) = scanner.try_read::<usize>()? {
            break count;
        }
        println!("Invalid input. Try again");
    };

    let parse_date = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d");
    for date in scanner
        .read_values_with(text_scanner::Malformed::Skip, parse_date)
        .take(count)
    {
        println!("Accepted {}", date?);
    }

    Ok(())
}
