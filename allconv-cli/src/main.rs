//! allconv - all-in-one converter, terminal edition
//!
//! Thin presentation layer over the `allconv` crates: parses arguments into
//! typed values, calls the engine, prints the result or the structured error.
//! The rate-provider endpoint can be overridden with `ALLCONV_ENDPOINT`.

use std::env;
use std::sync::Arc;

use allconv::currency::{is_supported, HttpRateFetcher, DEFAULT_ENDPOINT};
use allconv::formula::{
    age_in_years, bmi, bmr_tdee, cgpa, date_difference, dec_to_hex, discount, rgb_to_hex, tip,
    ActivityLevel, HeightUnit, LetterGrade, Sex, WeightUnit,
};
use allconv::units::{convert, convert_fuel, convert_temperature, FuelUnit, TempScale, REGISTRY};
use allconv::{Category, ConvertError, ConverterKind, CurrencyConverter, Group};
use chrono::NaiveDate;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: allconv <command> [args]

Commands:
  list                                        converters by tab
  units <category>                            unit names for a category
  convert <category> <value> <from> <to>      linear unit conversion
  temp <value> <from> <to>                    temperature (C/F/K)
  fuel <value> <from> <to>                    'MPG (US)' or 'L/100km'
  bmi <weight> <kg|lb> <height> <m|cm|in>
  bmr <weight-kg> <height-cm> <age> <male|female> <activity>
  cgpa <grade> [grade ...]                    grades in [0, 4.0]
  grade <letter>                              letter grade to GPA
  age <YYYY-MM-DD>                            age from birth date
  datediff <YYYY-MM-DD> <YYYY-MM-DD>          days between dates
  tip <bill> <percent>
  discount <price> <percent>
  hex <decimal>                               decimal to hexadecimal
  rgb <r> <g> <b>                             RGB bytes to hex
  currency <amount> <FROM> <TO> [--refresh]   live exchange rates
";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(&args).await {
        eprintln!("error: {}", err);
        if let Some(suggestion) = &err.suggestion {
            eprintln!("hint: {}", suggestion);
        }
        std::process::exit(1);
    }
}

async fn run(args: &[String]) -> Result<(), ConvertError> {
    let Some((command, rest)) = args.split_first() else {
        print!("{}", USAGE);
        return Ok(());
    };

    match command.as_str() {
        "list" => cmd_list(),
        "units" => cmd_units(rest),
        "convert" => cmd_convert(rest),
        "temp" => cmd_temp(rest),
        "fuel" => cmd_fuel(rest),
        "bmi" => cmd_bmi(rest),
        "bmr" => cmd_bmr(rest),
        "cgpa" => cmd_cgpa(rest),
        "grade" => cmd_grade(rest),
        "age" => cmd_age(rest),
        "datediff" => cmd_datediff(rest),
        "tip" => cmd_tip(rest),
        "discount" => cmd_discount(rest),
        "hex" => cmd_hex(rest),
        "rgb" => cmd_rgb(rest),
        "currency" => cmd_currency(rest).await,
        "help" | "--help" | "-h" => {
            print!("{}", USAGE);
            Ok(())
        }
        other => Err(ConvertError::parse_error(format!("unknown command '{}'", other))
            .with_suggestion("Run `allconv help` for the command list")),
    }
}

// ============ argument helpers ============

fn expect<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str, ConvertError> {
    args.get(index)
        .map(|s| s.as_str())
        .ok_or_else(|| ConvertError::parse_error(format!("missing argument <{}>", name)))
}

fn parse_number(text: &str, name: &str) -> Result<f64, ConvertError> {
    text.parse::<f64>()
        .map_err(|_| ConvertError::parse_error(format!("{} '{}' is not a number", name, text)))
}

fn parse_date(text: &str, name: &str) -> Result<NaiveDate, ConvertError> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| ConvertError::parse_error(format!("{} '{}' is not a YYYY-MM-DD date", name, text)))
}

// ============ commands ============

fn cmd_list() -> Result<(), ConvertError> {
    for group in Group::ALL {
        println!("{}:", group.label());
        for kind in ConverterKind::ALL.iter().filter(|k| k.group() == group) {
            println!("  {}", kind.label());
        }
    }
    Ok(())
}

fn cmd_units(args: &[String]) -> Result<(), ConvertError> {
    let category: Category = expect(args, 0, "category")?.parse()?;
    for unit in REGISTRY.units(category) {
        println!("{}", unit);
    }
    Ok(())
}

fn cmd_convert(args: &[String]) -> Result<(), ConvertError> {
    let category: Category = expect(args, 0, "category")?.parse()?;
    let value = parse_number(expect(args, 1, "value")?, "value")?;
    let from = expect(args, 2, "from")?;
    let to = expect(args, 3, "to")?;
    let result = convert(value, from, to, category)?;
    println!("{} {} = {} {}", value, from, result, to);
    Ok(())
}

fn cmd_temp(args: &[String]) -> Result<(), ConvertError> {
    let value = parse_number(expect(args, 0, "value")?, "value")?;
    let from: TempScale = expect(args, 1, "from")?.parse()?;
    let to: TempScale = expect(args, 2, "to")?.parse()?;
    let result = convert_temperature(value, from, to)?;
    println!("{} {} = {} {}", value, from, result, to);
    Ok(())
}

fn cmd_fuel(args: &[String]) -> Result<(), ConvertError> {
    let value = parse_number(expect(args, 0, "value")?, "value")?;
    let from: FuelUnit = expect(args, 1, "from")?.parse()?;
    let to: FuelUnit = expect(args, 2, "to")?.parse()?;
    let result = convert_fuel(value, from, to)?;
    println!("{} {} = {} {}", value, from, result, to);
    Ok(())
}

fn cmd_bmi(args: &[String]) -> Result<(), ConvertError> {
    let weight = parse_number(expect(args, 0, "weight")?, "weight")?;
    let weight_unit: WeightUnit = expect(args, 1, "weight unit")?.parse()?;
    let height = parse_number(expect(args, 2, "height")?, "height")?;
    let height_unit: HeightUnit = expect(args, 3, "height unit")?.parse()?;
    let reading = bmi(weight, weight_unit, height, height_unit)?;
    println!("BMI: {:.2} ({})", reading.bmi, reading.category);
    Ok(())
}

fn cmd_bmr(args: &[String]) -> Result<(), ConvertError> {
    let weight = parse_number(expect(args, 0, "weight-kg")?, "weight")?;
    let height = parse_number(expect(args, 1, "height-cm")?, "height")?;
    let age = parse_number(expect(args, 2, "age")?, "age")?;
    let sex: Sex = expect(args, 3, "sex")?.parse()?;
    let activity: ActivityLevel = expect(args, 4, "activity")?.parse()?;
    let needs = bmr_tdee(weight, height, age, sex, activity)?;
    println!("BMR: {:.0} kcal/day", needs.bmr);
    println!("TDEE ({}): {:.0} kcal/day", activity.label(), needs.tdee);
    Ok(())
}

fn cmd_cgpa(args: &[String]) -> Result<(), ConvertError> {
    let grades = args
        .iter()
        .map(|g| parse_number(g, "grade"))
        .collect::<Result<Vec<f64>, _>>()?;
    let result = cgpa(&grades)?;
    println!("CGPA: {:.2}", result);
    Ok(())
}

fn cmd_grade(args: &[String]) -> Result<(), ConvertError> {
    let grade: LetterGrade = expect(args, 0, "letter")?.parse()?;
    println!("{} = {:.1} GPA", grade, grade.gpa());
    Ok(())
}

fn cmd_age(args: &[String]) -> Result<(), ConvertError> {
    let birth = parse_date(expect(args, 0, "birth date")?, "birth date")?;
    let today = chrono::Local::now().date_naive();
    println!("{} years", age_in_years(birth, today));
    Ok(())
}

fn cmd_datediff(args: &[String]) -> Result<(), ConvertError> {
    let start = parse_date(expect(args, 0, "start")?, "start")?;
    let end = parse_date(expect(args, 1, "end")?, "end")?;
    println!("{} days", date_difference(start, end));
    Ok(())
}

fn cmd_tip(args: &[String]) -> Result<(), ConvertError> {
    let bill = parse_number(expect(args, 0, "bill")?, "bill")?;
    let percent = parse_number(expect(args, 1, "percent")?, "percent")?;
    let result = tip(bill, percent)?;
    println!("Tip: {:.2}", result.tip);
    println!("Total: {:.2}", result.total);
    Ok(())
}

fn cmd_discount(args: &[String]) -> Result<(), ConvertError> {
    let price = parse_number(expect(args, 0, "price")?, "price")?;
    let percent = parse_number(expect(args, 1, "percent")?, "percent")?;
    let result = discount(price, percent)?;
    println!("Discount: {:.2}", result.discount);
    println!("Final price: {:.2}", result.final_price);
    Ok(())
}

fn cmd_hex(args: &[String]) -> Result<(), ConvertError> {
    let value = parse_number(expect(args, 0, "decimal")?, "decimal")?;
    println!("{}", dec_to_hex(value)?);
    Ok(())
}

fn cmd_rgb(args: &[String]) -> Result<(), ConvertError> {
    let byte = |i: usize, name: &str| -> Result<u8, ConvertError> {
        expect(args, i, name)?
            .parse::<u8>()
            .map_err(|_| ConvertError::parse_error(format!("{} must be 0-255", name)))
    };
    let (r, g, b) = (byte(0, "r")?, byte(1, "g")?, byte(2, "b")?);
    println!("#{}", rgb_to_hex(r, g, b));
    Ok(())
}

async fn cmd_currency(args: &[String]) -> Result<(), ConvertError> {
    let amount = parse_number(expect(args, 0, "amount")?, "amount")?;
    let from = expect(args, 1, "FROM")?.to_uppercase();
    let to = expect(args, 2, "TO")?.to_uppercase();
    let refresh = args.iter().any(|a| a == "--refresh");

    for code in [&from, &to] {
        if !is_supported(code) {
            return Err(ConvertError::unknown_unit(code)
                .with_suggestion("Use a three-letter code like USD, EUR, or BTC"));
        }
    }

    let endpoint = env::var("ALLCONV_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    debug!(%endpoint, "rate provider");
    let fetcher = HttpRateFetcher::with_endpoint(endpoint)?;
    let converter = CurrencyConverter::new(Arc::new(fetcher));

    let conversion = converter.convert(amount, &from, &to, refresh).await?;
    println!("{} {} = {:.4} {}", amount, from, conversion.result, to);
    println!("Rate: 1 {} = {:.6} {}", from, conversion.rate, to);
    Ok(())
}
