use colored::Colorize;
use gurps_mechanics::DiceExpression;

pub fn run(expression: &str, times: u32, seed: Option<u64>) -> Result<(), String> {
    let dice: DiceExpression = expression
        .parse()
        .map_err(|e| format!("cannot roll '{expression}': {e}"))?;
    let mut source = super::random_source(seed);

    if times == 1 {
        println!("{}", dice.roll(&mut *source));
        return Ok(());
    }

    println!(
        "  {} {}",
        dice.to_string().bold(),
        format!("({}..{}, {times} rolls)", dice.min(), dice.max()).dimmed()
    );
    let mut total: i64 = 0;
    for _ in 0..times {
        let value = dice.roll(&mut *source);
        total += i64::from(value);
        println!("  {value}");
    }
    if times > 0 {
        println!("  {} {}", "total:".dimmed(), total);
    }
    Ok(())
}
