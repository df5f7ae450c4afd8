use walltime::{ClockField, ClockUnit, TimeOfDay};

fn main() -> walltime::Result<()> {
    let now = TimeOfDay::now();
    let lunch: TimeOfDay = "12:30".parse()?;

    println!("now: {now}");
    println!("minute of day: {}", now.get(ClockField::MinuteOfDay)?);
    println!("truncated to the hour: {}", now.truncated_to(ClockUnit::Hours)?);
    println!("minutes until lunch: {}", now.until(lunch, ClockUnit::Minutes)?);
    println!("in 90 minutes: {}", now.plus(90, ClockUnit::Minutes)?);
    println!("binary: {:02x?}", now.encode());
    Ok(())
}
